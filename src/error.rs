use thiserror::Error;

/// Errors produced by the ledger node.
///
/// Only `Validation` is meant to reach an external caller. Peer-related
/// variants are produced while resolving and are logged and skipped there.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{0}")]
    Validation(String),

    #[error("ledger has no blocks")]
    EmptyChain,

    #[error("peer {peer} unavailable: {reason}")]
    PeerUnavailable { peer: String, reason: String },

    #[error("peer {peer} offered an invalid chain: {reason}")]
    InvalidChain { peer: String, reason: String },

    #[error("mining was cancelled")]
    MiningCancelled,
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl actix_web::ResponseError for LedgerError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            LedgerError::Validation(_) => StatusCode::BAD_REQUEST,
            LedgerError::MiningCancelled => StatusCode::SERVICE_UNAVAILABLE,
            LedgerError::PeerUnavailable { .. } => StatusCode::BAD_GATEWAY,
            LedgerError::InvalidChain { .. } => StatusCode::BAD_GATEWAY,
            LedgerError::EmptyChain => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn validation_maps_to_bad_request() {
        let e = LedgerError::Validation("Missing values: amount".into());
        assert_eq!(e.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(e.to_string(), "Missing values: amount");
    }

    #[test]
    fn peer_errors_name_the_peer() {
        let e = LedgerError::PeerUnavailable {
            peer: "10.0.0.2:5000".into(),
            reason: "timed out".into(),
        };
        assert_eq!(e.to_string(), "peer 10.0.0.2:5000 unavailable: timed out");
    }
}
