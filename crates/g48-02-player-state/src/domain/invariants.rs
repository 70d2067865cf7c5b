//! # Record Invariants
//!
//! Checks over a record before and after one committed operation.

use super::entities::PlayerRecord;

/// `owner_key` never changes.
#[must_use]
pub fn invariant_owner_immutable(before: &PlayerRecord, after: &PlayerRecord) -> bool {
    before.owner_key == after.owner_key
}

/// `game_count` is unchanged or grows by exactly one; `max_score` never
/// decreases.
#[must_use]
pub fn invariant_counters_monotonic(before: &PlayerRecord, after: &PlayerRecord) -> bool {
    let count_ok = after.game_count == before.game_count
        || after.game_count == before.game_count.saturating_add(1);
    count_ok && after.max_score >= before.max_score
}

/// Only a reset may change the session key.
#[must_use]
pub fn invariant_session_changes_on_reset(before: &PlayerRecord, after: &PlayerRecord) -> bool {
    after.session_key == before.session_key || after.game_count != before.game_count
}
