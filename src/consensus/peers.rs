use std::collections::BTreeSet;

use log::info;
use reqwest::Url;

use crate::error::{LedgerError, Result};

/// Known peers, stored as `host:port` identifiers without duplicates.
#[derive(Debug, Default, Clone)]
pub struct PeerSet {
    peers: BTreeSet<String>,
}

impl PeerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every address to the set. Nothing is added unless all of them parse.
    pub fn register<I, S>(&mut self, addresses: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = addresses
            .into_iter()
            .map(|a| normalize_address(a.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let before = self.peers.len();
        self.peers.extend(normalized);
        info!(
            "PEERS - registered {} new peer(s), {} known",
            self.peers.len() - before,
            self.peers.len()
        );
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.peers.iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

/// Reduce `http://host:port/path` or a bare `host:port` to `host:port`.
pub fn normalize_address(address: &str) -> Result<String> {
    let address = address.trim();
    let candidate = if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{address}")
    };

    let invalid = || LedgerError::Validation(format!("invalid peer address: {address:?}"));
    let url = Url::parse(&candidate).map_err(|_| invalid())?;
    let host = url.host_str().filter(|h| !h.is_empty()).ok_or_else(invalid)?;

    Ok(match url.port_or_known_default() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
