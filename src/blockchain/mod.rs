pub mod block;
pub mod hash;
pub mod ledger;
pub mod pow;
pub mod validator;

pub use block::{Block, GENESIS_MARKER, PreviousLink};
pub use hash::hash_block;
pub use ledger::Ledger;
pub use pow::{CancelToken, find_proof, find_proof_cancellable, is_valid_proof};
pub use validator::{ChainValidationError, is_valid_chain, validate_chain};

/// Number of leading hex zeros a proof digest must have. Fixed, never adjusted.
pub const DIFFICULTY: usize = 4;

/// Proof stored in the genesis block; the first mined block builds on it.
pub const GENESIS_PROOF: u64 = 100;

/// Amount credited to the node for every mined block.
pub const MINING_REWARD: f64 = 1.0;

/// Sender recorded on the reward transaction (no real account).
pub const REWARD_SENDER: &str = "0";

/// How many proof candidates are tried between cancellation checks.
pub const CANCEL_CHECK_INTERVAL: u64 = 1024;
