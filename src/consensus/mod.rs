pub mod fetch;
pub mod peers;
pub mod resolver;

use serde::{Deserialize, Serialize};

use crate::blockchain::Block;

pub use fetch::{CHAIN_PATH, ChainFetcher, HttpChainFetcher};
pub use peers::PeerSet;
pub use resolver::{Candidate, Resolution, adopt, resolve_conflicts, select_candidate};

/// Full-chain snapshot as served to peers and read back from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainResponse {
    pub chain: Vec<Block>,
    pub length: usize,
}

impl ChainResponse {
    pub fn new(chain: Vec<Block>) -> Self {
        let length = chain.len();
        Self { chain, length }
    }
}
