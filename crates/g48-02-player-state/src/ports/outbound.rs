//! # Outbound Ports
//!
//! Persistence of player records keyed by owner.

use crate::domain::{PlayerRecord, StoreError};
use shared_types::Identity;

/// Keyed record store with a delegate index.
///
/// Records are never deleted. `commit` replaces the owner's record and
/// updates the delegate index in the same step: the session key of the
/// committed record maps to its owner, and the previous session key (if
/// different) no longer does.
pub trait PlayerStore: Send + Sync {
    /// Stored record for `owner`, if one was ever committed.
    fn load(&self, owner: &Identity) -> Result<Option<PlayerRecord>, StoreError>;

    /// Writes `record` under its owner key.
    fn commit(&self, record: PlayerRecord) -> Result<(), StoreError>;

    /// Owner whose current session key is `delegate`, excluding owners that
    /// delegate to themselves. When several owners share a delegate, the most
    /// recent delegation wins.
    fn owner_for_delegate(&self, delegate: &Identity) -> Result<Option<Identity>, StoreError>;

    /// Every stored record, sorted by owner.
    fn snapshot(&self) -> Result<Vec<PlayerRecord>, StoreError>;
}
