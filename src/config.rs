use std::env;
use std::time::Duration;

use uuid::Uuid;

/// Node settings read from the environment (a `.env` file is loaded first).
#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub host: String,
    pub port: u16,
    /// Recipient of mining rewards.
    pub node_id: String,
    pub peer_timeout: Duration,
    /// Peers registered at startup.
    pub bootstrap_peers: Vec<String>,
}

impl NodeConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);
        let node_id = env::var("NODE_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(random_node_id);
        let peer_timeout_secs: u64 = env::var("PEER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);
        let bootstrap_peers = env::var("PEERS")
            .map(|v| parse_peer_list(&v))
            .unwrap_or_default();

        Self {
            host,
            port,
            node_id,
            peer_timeout: Duration::from_secs(peer_timeout_secs),
            bootstrap_peers,
        }
    }
}

/// UUID v4 without dashes.
pub fn random_node_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn parse_peer_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_has_no_dashes() {
        let id = random_node_id();
        assert_eq!(id.len(), 32);
        assert!(!id.contains('-'));
    }

    #[test]
    fn peer_list_skips_blanks() {
        assert_eq!(
            parse_peer_list(" a:1, ,b:2,"),
            vec!["a:1".to_string(), "b:2".to_string()]
        );
        assert!(parse_peer_list("").is_empty());
    }
}
