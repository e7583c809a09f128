use serde::{Deserialize, Serialize};

use crate::blockchain::{Block, PreviousLink};
use crate::consensus::HttpChainFetcher;
use crate::node::Node;
use crate::transaction::Transaction;

/// Shared application state: the node and the client used to reach its peers.
pub struct AppState {
    pub node: Node,
    pub fetcher: HttpChainFetcher,
}

impl AppState {
    pub fn new(node: Node, fetcher: HttpChainFetcher) -> Self {
        Self { node, fetcher }
    }
}

/* ---------- Mining API Models ---------- */

#[derive(Serialize, Deserialize)]
pub struct MineResponse {
    pub message: String,
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: PreviousLink,
}

impl From<Block> for MineResponse {
    fn from(block: Block) -> Self {
        Self {
            message: "New Block Forged".to_string(),
            index: block.index,
            transactions: block.transactions,
            proof: block.proof,
            previous_hash: block.previous_hash,
        }
    }
}

/* ---------- TX API Models ---------- */

#[derive(Serialize, Deserialize)]
pub struct NewTxResponse {
    pub message: String,
}

/* ---------- Node API Models ---------- */

#[derive(Deserialize)]
pub struct RegisterNodesRequest {
    pub nodes: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct NodesResponse {
    pub message: String,
    pub total_nodes: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ResolveResponse {
    pub message: String,
    pub replaced: bool,
    pub chain: Vec<Block>,
}
