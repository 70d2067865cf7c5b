//! # Node Configuration
//!
//! Read from environment variables at startup.

use shared_types::Hash;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("G48_EXPECTED_STATE_ROOT must be 32 bytes of hex, got '{0}'")]
    InvalidStateRoot(String),

    #[error("{name} must be true/false/1/0, got '{value}'")]
    InvalidFlag { name: &'static str, value: String },
}

/// Replay node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// JSON-lines call log; stdin when `None`.
    pub call_log: Option<PathBuf>,
    /// Reject calls whose signature does not verify.
    pub verify_signatures: bool,
    /// Root the replay must end at.
    pub expected_state_root: Option<Hash>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            call_log: None,
            verify_signatures: true,
            expected_state_root: None,
        }
    }
}

impl NodeConfig {
    /// Load from `G48_CALL_LOG`, `G48_VERIFY_SIGNATURES` and
    /// `G48_EXPECTED_STATE_ROOT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`NodeConfig::from_env`] over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("G48_CALL_LOG").filter(|p| !p.is_empty()) {
            config.call_log = Some(PathBuf::from(path));
        }

        if let Some(value) = lookup("G48_VERIFY_SIGNATURES") {
            config.verify_signatures = parse_flag("G48_VERIFY_SIGNATURES", &value)?;
        }

        if let Some(value) = lookup("G48_EXPECTED_STATE_ROOT") {
            config.expected_state_root = Some(parse_root(&value)?);
        }

        Ok(config)
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

fn parse_root(value: &str) -> Result<Hash, ConfigError> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes = hex::decode(digits).map_err(|_| ConfigError::InvalidStateRoot(value.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| ConfigError::InvalidStateRoot(value.to_string()))
}
