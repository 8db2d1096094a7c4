use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Looks up a transaction on the payment processor by its reference
#[async_trait]
pub trait TransactionVerifier: Send + Sync {
    /// Fetch the processor's view of the transaction.
    ///
    /// Never fails: transport and decoding problems come back as
    /// [`VerificationOutcome::Failed`].
    async fn verify_transaction(&self, reference: &str) -> VerificationOutcome;

    /// Get gateway name
    fn name(&self) -> &str;
}

/// Result of a verification call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum VerificationOutcome {
    /// Decoded response body, exactly as the processor sent it
    Transaction { body: serde_json::Value },

    /// The call did not produce a decodable body
    Failed { message: String },
}

impl VerificationOutcome {
    pub fn transaction(&self) -> Option<&serde_json::Value> {
        match self {
            VerificationOutcome::Transaction { body } => Some(body),
            VerificationOutcome::Failed { .. } => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            VerificationOutcome::Transaction { .. } => None,
            VerificationOutcome::Failed { message } => Some(message),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, VerificationOutcome::Failed { .. })
    }

    /// Whether the body reports a settled payment.
    ///
    /// LazerPay answers `{"status": "success", "data": {"status": "confirmed", ..}}`
    /// once the funds have arrived; anything else is treated as unpaid.
    pub fn is_confirmed(&self) -> bool {
        let Some(body) = self.transaction() else {
            return false;
        };

        body.get("status").and_then(|s| s.as_str()) == Some("success")
            && body.pointer("/data/status").and_then(|s| s.as_str()) == Some("confirmed")
    }
}
