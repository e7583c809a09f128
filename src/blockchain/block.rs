use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::hash::hash_block;
use crate::transaction::Transaction;

/// Wire value of the genesis block's `previous_hash`. Same shape as a real
/// SHA-256 hex digest so every block carries a string link.
pub const GENESIS_MARKER: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Link from a block to its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PreviousLink {
    /// The block has no predecessor.
    Genesis,
    /// Hex digest of the predecessor block.
    Hash(String),
}

impl PreviousLink {
    pub fn is_genesis(&self) -> bool {
        matches!(self, PreviousLink::Genesis)
    }

    /// True if this link points at a block with the given digest.
    pub fn points_to(&self, digest: &str) -> bool {
        matches!(self, PreviousLink::Hash(h) if h == digest)
    }
}

impl From<String> for PreviousLink {
    fn from(s: String) -> Self {
        if s == GENESIS_MARKER {
            PreviousLink::Genesis
        } else {
            PreviousLink::Hash(s)
        }
    }
}

impl From<PreviousLink> for String {
    fn from(link: PreviousLink) -> Self {
        match link {
            PreviousLink::Genesis => GENESIS_MARKER.to_string(),
            PreviousLink::Hash(h) => h,
        }
    }
}

/// A sealed block. Never mutated once it is part of a chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// 1-based position in the chain.
    pub index: u64,
    /// Seconds since the Unix epoch (UTC), microsecond precision.
    pub timestamp: f64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: PreviousLink,
}

impl Block {
    /// Build a block stamped with the current time.
    pub fn new(
        index: u64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: PreviousLink,
    ) -> Self {
        Self {
            index,
            timestamp: now_secs(),
            transactions,
            proof,
            previous_hash,
        }
    }

    pub fn hash(&self) -> String {
        hash_block(self)
    }
}

fn now_secs() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
