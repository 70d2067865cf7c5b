//! # Authorization Gate
//!
//! The single access-control check, evaluated before every mutating
//! operation.

use super::entities::PlayerRecord;
use shared_types::Identity;

/// True iff `caller` is the record's owner or its current session delegate.
#[must_use]
pub fn authorize(record: &PlayerRecord, caller: &Identity) -> bool {
    *caller == record.owner_key || *caller == record.session_key
}
