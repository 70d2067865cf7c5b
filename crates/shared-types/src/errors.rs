//! # Error Types
//!
//! Errors raised while decoding or verifying call envelopes.

use crate::entities::Identity;
use thiserror::Error;

/// Errors related to call envelope verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// Signer bytes are not a valid Ed25519 point.
    #[error("Malformed public key: {0}")]
    MalformedPublicKey(Identity),

    /// Signature does not verify against the signer and call.
    #[error("Invalid signature from {signer}")]
    BadSignature { signer: Identity },

    /// Hex or length error while decoding an identity.
    #[error("Encoding error: {0}")]
    Encoding(String),
}
