use crate::domain::{PlayerRecord, StoreError};
use crate::ports::PlayerStore;
use parking_lot::RwLock;
use shared_types::Identity;
use std::collections::HashMap;

#[derive(Default)]
struct Tables {
    records: HashMap<Identity, PlayerRecord>,
    /// session key -> owners currently delegating to it, oldest first
    delegates: HashMap<Identity, Vec<Identity>>,
}

impl Tables {
    fn unlink(&mut self, delegate: &Identity, owner: &Identity) {
        if let Some(owners) = self.delegates.get_mut(delegate) {
            owners.retain(|o| o != owner);
            if owners.is_empty() {
                self.delegates.remove(delegate);
            }
        }
    }

    fn link(&mut self, delegate: Identity, owner: Identity) {
        self.unlink(&delegate, &owner);
        self.delegates.entry(delegate).or_default().push(owner);
    }
}

/// In-memory implementation of `PlayerStore`.
///
/// Records and the delegate index sit behind one lock so a commit updates
/// both atomically.
#[derive(Default)]
pub struct InMemoryPlayerStore {
    tables: RwLock<Tables>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.tables.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn load(&self, owner: &Identity) -> Result<Option<PlayerRecord>, StoreError> {
        Ok(self.tables.read().records.get(owner).copied())
    }

    fn commit(&self, record: PlayerRecord) -> Result<(), StoreError> {
        let mut tables = self.tables.write();
        let owner = record.owner_key;

        if let Some(previous) = tables.records.get(&owner).copied() {
            if previous.is_delegated() && previous.session_key != record.session_key {
                tables.unlink(&previous.session_key, &owner);
            }
        }

        if record.is_delegated() {
            tables.link(record.session_key, owner);
        }

        tables.records.insert(owner, record);
        Ok(())
    }

    fn owner_for_delegate(&self, delegate: &Identity) -> Result<Option<Identity>, StoreError> {
        // the most recent live delegation of an identity wins
        Ok(self
            .tables
            .read()
            .delegates
            .get(delegate)
            .and_then(|owners| owners.last())
            .copied())
    }

    fn snapshot(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        let mut records: Vec<_> = self.tables.read().records.values().copied().collect();
        records.sort_by_key(|r| r.owner_key);
        Ok(records)
    }
}
