use log::{debug, info, warn};

use super::ChainResponse;
use crate::blockchain::{Block, Ledger, validate_chain};
use crate::error::{LedgerError, Result};

/// Outcome of a resolution round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A peer's longer valid chain was adopted.
    Replaced { length: usize },
    /// No peer offered a better chain; the local one stays.
    Kept { length: usize },
}

impl Resolution {
    pub fn replaced(&self) -> bool {
        matches!(self, Resolution::Replaced { .. })
    }

    pub fn length(&self) -> usize {
        match *self {
            Resolution::Replaced { length } | Resolution::Kept { length } => length,
        }
    }
}

/// A validated peer chain that beat the local length it was compared against.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub peer: String,
    pub chain: Vec<Block>,
}

/// Longest-valid-chain rule.
///
/// Each response is considered in turn. A chain becomes the candidate only if
/// it is strictly longer than both `local_length` and the current candidate,
/// and validates. Failed or invalid peers are logged and skipped; they never
/// abort the round. Needs no access to the ledger, so it can run unlocked.
pub fn select_candidate<I>(local_length: usize, responses: I) -> Option<Candidate>
where
    I: IntoIterator<Item = (String, Result<ChainResponse>)>,
{
    let mut best_length = local_length;
    let mut best: Option<Candidate> = None;

    for (peer, response) in responses {
        let chain = match response.and_then(|r| checked_chain(&peer, r)) {
            Ok(chain) => chain,
            Err(e) => {
                warn!("RESOLVE - skipping peer: {e}");
                continue;
            }
        };

        if chain.len() <= best_length {
            debug!(
                "RESOLVE - peer {peer} chain length {} does not beat {best_length}",
                chain.len()
            );
            continue;
        }

        if let Err(e) = validate_chain(&chain) {
            let e = LedgerError::InvalidChain {
                peer: peer.clone(),
                reason: e.to_string(),
            };
            warn!("RESOLVE - skipping peer: {e}");
            continue;
        }

        best_length = chain.len();
        best = Some(Candidate { peer, chain });
    }

    best
}

/// Swap in `candidate` if it is still strictly longer than the ledger.
///
/// The ledger may have grown since the candidate was selected, so only the
/// length is checked again here; the chain itself was validated already.
pub fn adopt(ledger: &mut Ledger, candidate: Option<Candidate>) -> Resolution {
    match candidate {
        Some(Candidate { peer, chain }) if chain.len() > ledger.len() => {
            let length = chain.len();
            ledger.replace_chain(chain);
            info!("RESOLVE - adopted chain of length {length} from {peer}");
            Resolution::Replaced { length }
        }
        Some(Candidate { peer, chain }) => {
            debug!(
                "RESOLVE - chain of length {} from {peer} no longer beats local {}",
                chain.len(),
                ledger.len()
            );
            Resolution::Kept {
                length: ledger.len(),
            }
        }
        None => {
            debug!(
                "RESOLVE - local chain of length {} is authoritative",
                ledger.len()
            );
            Resolution::Kept {
                length: ledger.len(),
            }
        }
    }
}

/// Select and adopt in one step, against the ledger's current length.
pub fn resolve_conflicts<I>(ledger: &mut Ledger, responses: I) -> Resolution
where
    I: IntoIterator<Item = (String, Result<ChainResponse>)>,
{
    let candidate = select_candidate(ledger.len(), responses);
    adopt(ledger, candidate)
}

/// Reject a response whose advertised length disagrees with its chain.
fn checked_chain(peer: &str, response: ChainResponse) -> Result<Vec<Block>> {
    if response.length != response.chain.len() {
        return Err(LedgerError::InvalidChain {
            peer: peer.to_string(),
            reason: format!(
                "advertised length {} but sent {} blocks",
                response.length,
                response.chain.len()
            ),
        });
    }
    Ok(response.chain)
}
