use std::sync::{Mutex, MutexGuard};

use futures::future::join_all;
use log::{debug, info, warn};

use crate::blockchain::{
    Block, CancelToken, Ledger, MINING_REWARD, PreviousLink, REWARD_SENDER, find_proof_cancellable,
};
use crate::consensus::{ChainFetcher, ChainResponse, PeerSet, Resolution, adopt, select_candidate};
use crate::error::Result;
use crate::transaction::TransactionRequest;

/// A ledger node: the chain, its pending pool and the peers it reconciles with.
///
/// All chain mutations (sealing, queuing, replacement) go through the single
/// ledger mutex. Proof search and peer requests run without holding it.
#[derive(Debug)]
pub struct Node {
    node_id: String,
    ledger: Mutex<Ledger>,
    peers: Mutex<PeerSet>,
    cancel: CancelToken,
}

impl Node {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            ledger: Mutex::new(Ledger::new()),
            peers: Mutex::new(PeerSet::new()),
            cancel: CancelToken::new(),
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Token that stops any in-flight `mine` call once cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Find a proof for the current tip, pay the mining reward and seal a block.
    ///
    /// If the tip changes while searching (another block was sealed or the
    /// chain was replaced) the search restarts against the new tip.
    pub fn mine(&self) -> Result<Block> {
        let (mut last_proof, mut last_hash) = {
            let ledger = self.ledger();
            let last = ledger.last_block()?;
            (last.proof, last.hash())
        };

        loop {
            let proof = find_proof_cancellable(last_proof, &self.cancel)?;
            debug!("MINER - found proof {proof} for previous proof {last_proof}");

            let mut ledger = self.ledger();
            let tip = ledger.last_block()?;
            let tip_hash = tip.hash();
            if tip_hash != last_hash {
                warn!(
                    "MINER - tip moved to block #{} while searching, retrying",
                    tip.index
                );
                last_proof = tip.proof;
                last_hash = tip_hash;
                continue;
            }

            ledger.new_transaction(REWARD_SENDER, self.node_id.as_str(), MINING_REWARD);
            let block = ledger
                .new_block(proof, Some(PreviousLink::Hash(last_hash)))
                .clone();
            info!(
                "MINER - sealed block #{} (proof={}, txs={})",
                block.index,
                block.proof,
                block.transactions.len()
            );
            return Ok(block);
        }
    }

    /// Queue a transaction. Fails if any field is missing.
    pub fn submit_transaction(&self, request: TransactionRequest) -> Result<u64> {
        let tx = request.into_transaction()?;
        let mut ledger = self.ledger();
        let index = ledger.push_transaction(tx);
        debug!(
            "TX - queued for block #{index} (pending={})",
            ledger.pending().len()
        );
        Ok(index)
    }

    pub fn get_chain(&self) -> ChainResponse {
        ChainResponse::new(self.ledger().chain().to_vec())
    }

    /// Register peer addresses and return the full peer list.
    pub fn register_peers<S: AsRef<str>>(&self, addresses: &[S]) -> Result<Vec<String>> {
        let mut peers = self.peers.lock().expect("peer mutex poisoned");
        peers.register(addresses)?;
        Ok(peers.to_vec())
    }

    pub fn peers(&self) -> Vec<String> {
        self.peers.lock().expect("peer mutex poisoned").to_vec()
    }

    /// Ask every peer for its chain and adopt the longest valid one, if it
    /// beats ours.
    ///
    /// Peer chains are validated without the ledger lock; the lock is taken
    /// only to re-check the length and swap.
    pub async fn resolve<F: ChainFetcher>(&self, fetcher: &F) -> Resolution {
        let peers = self.peers();
        let responses = join_all(peers.iter().map(|peer| fetcher.fetch_chain(peer))).await;

        let local_length = self.ledger().len();
        let candidate = select_candidate(local_length, peers.into_iter().zip(responses));

        let mut ledger = self.ledger();
        adopt(&mut ledger, candidate)
    }

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().expect("ledger mutex poisoned")
    }
}
