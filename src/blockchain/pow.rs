use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::hash::sha256_hex;
use super::{CANCEL_CHECK_INTERVAL, DIFFICULTY};
use crate::error::{LedgerError, Result};

/// Shared flag that asks a running proof search to stop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Check whether `proof` solves the puzzle posed by `previous_proof`:
/// SHA-256 of the decimal concatenation must start with `DIFFICULTY` hex zeros.
pub fn is_valid_proof(previous_proof: u64, proof: u64) -> bool {
    let guess = format!("{previous_proof}{proof}");
    sha256_hex(guess.as_bytes())
        .bytes()
        .take(DIFFICULTY)
        .all(|c| c == b'0')
}

/// Smallest proof, counting up from 0, that solves the puzzle for `previous_proof`.
pub fn find_proof(previous_proof: u64) -> u64 {
    let mut proof = 0;
    while !is_valid_proof(previous_proof, proof) {
        proof += 1;
    }
    proof
}

/// Same search as `find_proof`, polling `cancel` every `CANCEL_CHECK_INTERVAL`
/// candidates.
pub fn find_proof_cancellable(previous_proof: u64, cancel: &CancelToken) -> Result<u64> {
    let mut proof = 0;
    loop {
        if proof % CANCEL_CHECK_INTERVAL == 0 && cancel.is_cancelled() {
            return Err(LedgerError::MiningCancelled);
        }
        if is_valid_proof(previous_proof, proof) {
            return Ok(proof);
        }
        proof += 1;
    }
}
