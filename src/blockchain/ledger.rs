use log::debug;

use super::{Block, GENESIS_PROOF, PreviousLink};
use crate::error::{LedgerError, Result};
use crate::transaction::Transaction;

/// In-memory chain plus the pool of transactions waiting for the next block.
///
/// The chain always starts with the genesis block and `chain[i].index == i + 1`.
#[derive(Debug)]
pub struct Ledger {
    chain: Vec<Block>,
    pending: Vec<Transaction>,
}

impl Ledger {
    /// Initialize a ledger holding only the genesis block.
    pub fn new() -> Self {
        let mut ledger = Self {
            chain: Vec::new(),
            pending: Vec::new(),
        };
        ledger.new_block(GENESIS_PROOF, Some(PreviousLink::Genesis));
        ledger
    }

    /// Seal the whole pending pool into a new block and append it.
    ///
    /// Without an explicit `previous_hash` the block links to the current tip.
    pub fn new_block(&mut self, proof: u64, previous_hash: Option<PreviousLink>) -> &Block {
        let previous_hash = previous_hash.unwrap_or_else(|| match self.chain.last() {
            Some(last) => PreviousLink::Hash(last.hash()),
            None => PreviousLink::Genesis,
        });
        let transactions = std::mem::take(&mut self.pending);
        let block = Block::new(self.next_index(), transactions, proof, previous_hash);

        debug!(
            "LEDGER - sealed block #{} with {} txs (proof={})",
            block.index,
            block.transactions.len(),
            block.proof
        );
        self.chain.push(block);
        &self.chain[self.chain.len() - 1]
    }

    /// Queue a transaction; returns the index of the block expected to hold it.
    pub fn new_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: f64,
    ) -> u64 {
        self.push_transaction(Transaction::new(sender, recipient, amount))
    }

    pub fn push_transaction(&mut self, tx: Transaction) -> u64 {
        self.pending.push(tx);
        self.next_index()
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> Result<&Block> {
        self.chain.last().ok_or(LedgerError::EmptyChain)
    }

    /// Swap in a chain that has already been validated.
    /// The pending pool is left untouched.
    pub fn replace_chain(&mut self, chain: Vec<Block>) {
        self.chain = chain;
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    fn next_index(&self) -> u64 {
        self.chain.len() as u64 + 1
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::{find_proof, is_valid_chain};

    #[test]
    fn starts_with_genesis() {
        let ledger = Ledger::new();
        assert_eq!(ledger.len(), 1);
        let genesis = ledger.last_block().unwrap();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.proof, GENESIS_PROOF);
        assert!(genesis.previous_hash.is_genesis());
        assert!(genesis.transactions.is_empty());
    }

    #[test]
    fn new_transaction_reports_next_index() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.new_transaction("A", "B", 10.0), 2);
        assert_eq!(ledger.new_transaction("B", "C", 5.0), 2);
        assert_eq!(ledger.pending().len(), 2);
    }

    #[test]
    fn new_block_flushes_pending_and_links_to_tip() {
        let mut ledger = Ledger::new();
        ledger.new_transaction("A", "B", 10.0);
        let genesis_hash = ledger.last_block().unwrap().hash();

        let block = ledger.new_block(7, None).clone();
        assert_eq!(block.index, 2);
        assert_eq!(block.transactions, vec![Transaction::new("A", "B", 10.0)]);
        assert!(block.previous_hash.points_to(&genesis_hash));
        assert!(ledger.pending().is_empty());
    }

    #[test]
    fn indices_and_links_hold_over_many_blocks() {
        let mut ledger = Ledger::new();
        for i in 0..5 {
            ledger.new_transaction("A", "B", i as f64);
            ledger.new_block(i, None);
        }
        let chain = ledger.chain();
        for (i, block) in chain.iter().enumerate() {
            assert_eq!(block.index, i as u64 + 1);
        }
        for pair in chain.windows(2) {
            assert!(pair[1].previous_hash.points_to(&pair[0].hash()));
        }
    }

    #[test]
    fn replace_chain_keeps_pending_pool() {
        let mut other = Ledger::new();
        let proof = find_proof(GENESIS_PROOF);
        other.new_block(proof, None);
        assert!(is_valid_chain(other.chain()));

        let mut ledger = Ledger::new();
        ledger.new_transaction("A", "B", 1.0);
        ledger.replace_chain(other.chain().to_vec());
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.pending().len(), 1);
    }

    #[test]
    fn empty_ledger_reports_error() {
        let mut ledger = Ledger::new();
        assert!(!ledger.is_empty());
        ledger.replace_chain(Vec::new());
        assert!(ledger.is_empty());
        assert!(matches!(ledger.last_block(), Err(LedgerError::EmptyChain)));
    }
}
