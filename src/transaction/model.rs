use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

/// A value transfer queued in the pending pool and later sealed into a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    /// Any JSON number; sign and scale are not checked.
    pub amount: f64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: f64) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }
}

/// Caller-supplied transaction data. Every field is optional on the wire so a
/// missing one is reported as a validation error instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionRequest {
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<f64>,
}

impl TransactionRequest {
    /// Turn the request into a `Transaction`, naming every missing field.
    pub fn into_transaction(self) -> Result<Transaction> {
        let mut missing = Vec::new();
        if self.sender.is_none() {
            missing.push("sender");
        }
        if self.recipient.is_none() {
            missing.push("recipient");
        }
        if self.amount.is_none() {
            missing.push("amount");
        }

        match (self.sender, self.recipient, self.amount) {
            (Some(sender), Some(recipient), Some(amount)) => {
                Ok(Transaction::new(sender, recipient, amount))
            }
            _ => Err(LedgerError::Validation(format!(
                "Missing values: {}",
                missing.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_request_becomes_transaction() {
        let req = TransactionRequest {
            sender: Some("A".into()),
            recipient: Some("B".into()),
            amount: Some(10.0),
        };
        assert_eq!(req.into_transaction().unwrap(), Transaction::new("A", "B", 10.0));
    }

    #[test]
    fn missing_fields_are_named() {
        let req = TransactionRequest {
            sender: Some("A".into()),
            ..Default::default()
        };
        match req.into_transaction() {
            Err(LedgerError::Validation(msg)) => {
                assert!(msg.contains("recipient"));
                assert!(msg.contains("amount"));
                assert!(!msg.contains("sender"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn request_parses_with_absent_fields() {
        let req: TransactionRequest = serde_json::from_str(r#"{"sender":"A"}"#).unwrap();
        assert_eq!(req.sender.as_deref(), Some("A"));
        assert!(req.amount.is_none());
    }

    #[test]
    fn fractional_and_negative_amounts_are_accepted() {
        let req: TransactionRequest =
            serde_json::from_str(r#"{"sender":"A","recipient":"B","amount":2.5}"#).unwrap();
        assert_eq!(req.into_transaction().unwrap().amount, 2.5);

        let req: TransactionRequest =
            serde_json::from_str(r#"{"sender":"A","recipient":"B","amount":-3}"#).unwrap();
        assert_eq!(req.into_transaction().unwrap().amount, -3.0);
    }
}
