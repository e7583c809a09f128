//! A proof-of-work ledger node that reconciles with its peers by adopting the
//! longest valid chain.

pub mod api;
pub mod blockchain;
pub mod config;
pub mod consensus;
pub mod error;
pub mod node;
pub mod transaction;

pub use error::{LedgerError, Result};
