use thiserror::Error;

use super::{Block, is_valid_proof};

/// Why a chain was rejected. `index` is the 1-based index of the offending block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainValidationError {
    #[error("chain is empty")]
    Empty,

    #[error("block at position {position} has index {index}")]
    IndexMismatch { position: usize, index: u64 },

    #[error("block {index} does not link to the hash of its predecessor")]
    BrokenLink { index: u64 },

    #[error("block {index} carries a proof that does not solve the puzzle")]
    InvalidProof { index: u64 },
}

/// Check link and puzzle integrity of every block after genesis.
///
/// The genesis block is trusted as-is. Index continuity is also checked so an
/// adopted chain keeps the ledger's `chain[i].index == i + 1` shape.
pub fn validate_chain(chain: &[Block]) -> Result<(), ChainValidationError> {
    let first = chain.first().ok_or(ChainValidationError::Empty)?;
    if first.index != 1 {
        return Err(ChainValidationError::IndexMismatch {
            position: 0,
            index: first.index,
        });
    }

    for (position, pair) in chain.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);

        if current.index != position as u64 + 2 {
            return Err(ChainValidationError::IndexMismatch {
                position: position + 1,
                index: current.index,
            });
        }
        if !current.previous_hash.points_to(&previous.hash()) {
            return Err(ChainValidationError::BrokenLink {
                index: current.index,
            });
        }
        if !is_valid_proof(previous.proof, current.proof) {
            return Err(ChainValidationError::InvalidProof {
                index: current.index,
            });
        }
    }

    Ok(())
}

pub fn is_valid_chain(chain: &[Block]) -> bool {
    validate_chain(chain).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::{Ledger, PreviousLink, find_proof};

    fn mined_ledger(blocks: usize) -> Ledger {
        let mut ledger = Ledger::new();
        for i in 0..blocks {
            ledger.new_transaction("A", "B", i as f64 + 1.0);
            let last = ledger.last_block().unwrap().clone();
            let proof = find_proof(last.proof);
            ledger.new_block(proof, Some(PreviousLink::Hash(last.hash())));
        }
        ledger
    }

    #[test]
    fn mined_chain_is_valid() {
        let ledger = mined_ledger(3);
        assert_eq!(ledger.chain().len(), 4);
        assert_eq!(validate_chain(ledger.chain()), Ok(()));
    }

    #[test]
    fn genesis_only_chain_is_valid() {
        assert!(is_valid_chain(Ledger::new().chain()));
    }

    #[test]
    fn empty_chain_is_invalid() {
        assert_eq!(validate_chain(&[]), Err(ChainValidationError::Empty));
    }

    #[test]
    fn tampered_amount_breaks_the_next_link() {
        let mut chain = mined_ledger(3).chain().to_vec();
        chain[1].transactions[0].amount = 1_000.0;
        assert_eq!(
            validate_chain(&chain),
            Err(ChainValidationError::BrokenLink { index: 3 })
        );
    }

    #[test]
    fn tampered_proof_is_caught() {
        let mut chain = mined_ledger(2).chain().to_vec();
        // Keep the link intact so only the puzzle check can fail.
        chain[2].proof += 1;
        match validate_chain(&chain) {
            Err(ChainValidationError::InvalidProof { index: 3 }) => {}
            // The bumped value may, rarely, also solve the puzzle.
            Ok(()) => assert!(is_valid_proof(chain[1].proof, chain[2].proof)),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn unlinked_block_is_rejected() {
        let mut chain = mined_ledger(2).chain().to_vec();
        chain[2].previous_hash = PreviousLink::Genesis;
        assert_eq!(
            validate_chain(&chain),
            Err(ChainValidationError::BrokenLink { index: 3 })
        );
    }

    #[test]
    fn index_gap_is_rejected() {
        let mut chain = mined_ledger(1).chain().to_vec();
        chain[1].index = 5;
        assert_eq!(
            validate_chain(&chain),
            Err(ChainValidationError::IndexMismatch {
                position: 1,
                index: 5
            })
        );
    }
}
