use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use super::ChainResponse;
use crate::error::{LedgerError, Result};

/// Path under which every node serves its full chain.
pub const CHAIN_PATH: &str = "/api/v1/chain/";

/// Source of peer chains used during resolution.
pub trait ChainFetcher {
    /// Ask `peer` (a `host:port` identifier) for its full chain.
    fn fetch_chain(&self, peer: &str) -> impl Future<Output = Result<ChainResponse>> + Send;
}

/// Fetches chains over plain HTTP.
#[derive(Debug, Clone)]
pub struct HttpChainFetcher {
    client: Client,
}

impl HttpChainFetcher {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl ChainFetcher for HttpChainFetcher {
    async fn fetch_chain(&self, peer: &str) -> Result<ChainResponse> {
        let url = format!("http://{peer}{CHAIN_PATH}");
        let unavailable = |reason: String| LedgerError::PeerUnavailable {
            peer: peer.to_string(),
            reason,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("GET {url} returned {status}")));
        }

        response
            .json::<ChainResponse>()
            .await
            .map_err(|e| LedgerError::InvalidChain {
                peer: peer.to_string(),
                reason: format!("malformed chain response: {e}"),
            })
    }
}
