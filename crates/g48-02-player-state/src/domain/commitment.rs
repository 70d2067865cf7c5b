//! # State Commitments
//!
//! Binary Keccak-256 Merkle tree over record commitments sorted by owner.
//! An odd node at any level is paired with itself.
//!
//! Leaves hash `LEAF_TAG ‖ commitment` and internal nodes hash
//! `NODE_TAG ‖ left ‖ right`, so an internal node never verifies as a leaf.

use super::entities::PlayerRecord;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use shared_types::{Hash, Identity, ZERO_HASH};

const LEAF_TAG: u8 = 0x00;
const NODE_TAG: u8 = 0x01;

/// Merkle path from one record commitment to the state root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionProof {
    /// Leaf position in owner order.
    pub index: usize,
    /// Siblings from the leaf level upward.
    pub siblings: Vec<Hash>,
}

/// Root over all `records`; [`ZERO_HASH`] when there are none.
#[must_use]
pub fn state_root(records: &[PlayerRecord]) -> Hash {
    let leaves = sorted_leaves(records);
    if leaves.is_empty() {
        return ZERO_HASH;
    }

    let mut level = leaves;
    while level.len() > 1 {
        level = next_level(&level);
    }
    level[0]
}

/// Proof that `owner`'s record is part of [`state_root`]`(records)`.
#[must_use]
pub fn inclusion_proof(records: &[PlayerRecord], owner: &Identity) -> Option<InclusionProof> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.owner_key);
    let index = sorted.iter().position(|r| r.owner_key == *owner)?;

    let mut level: Vec<Hash> = sorted.iter().map(|r| leaf_hash(&r.commitment())).collect();
    let mut siblings = Vec::new();
    let mut at = index;
    while level.len() > 1 {
        let sibling = level.get(at ^ 1).copied().unwrap_or(level[at]);
        siblings.push(sibling);
        level = next_level(&level);
        at /= 2;
    }

    Some(InclusionProof { index, siblings })
}

/// Recomputes the root from a record `commitment` and `proof` and compares it
/// with `root`.
#[must_use]
pub fn verify_inclusion(commitment: &Hash, proof: &InclusionProof, root: &Hash) -> bool {
    let mut current = leaf_hash(commitment);
    let mut at = proof.index;

    for sibling in &proof.siblings {
        current = if at % 2 == 0 {
            hash_concat(&current, sibling)
        } else {
            hash_concat(sibling, &current)
        };
        at /= 2;
    }

    current == *root
}

fn sorted_leaves(records: &[PlayerRecord]) -> Vec<Hash> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.owner_key);
    sorted.iter().map(|r| leaf_hash(&r.commitment())).collect()
}

fn next_level(level: &[Hash]) -> Vec<Hash> {
    let mut next = Vec::with_capacity((level.len() + 1) / 2);
    for chunk in level.chunks(2) {
        let left = &chunk[0];
        let right = chunk.get(1).unwrap_or(left);
        next.push(hash_concat(left, right));
    }
    next
}

fn leaf_hash(commitment: &Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update([LEAF_TAG]);
    hasher.update(commitment);
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

fn hash_concat(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update([NODE_TAG]);
    hasher.update(left);
    hasher.update(right);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}
