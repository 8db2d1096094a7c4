use serde::{Deserialize, Serialize};

/// Query string the checkout widget redirects with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub invoice_id: u64,
    #[serde(default)]
    pub trxref: String,
    #[serde(default)]
    pub status: String,
}

impl CallbackQuery {
    /// The widget reports `success` only from its onSuccess handler
    pub fn reports_success(&self) -> bool {
        self.status == "success"
    }
}

/// How a callback was resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CallbackOutcome {
    /// LazerPay confirms the funds arrived
    Confirmed {
        reference: String,
        transaction: serde_json::Value,
    },
    /// LazerPay knows the transaction but has not confirmed it
    Unconfirmed {
        reference: String,
        transaction: serde_json::Value,
    },
    /// The customer left the widget without paying
    Cancelled { status: String },
    /// The reference was not issued for this invoice
    Mismatched { reference: String },
    /// LazerPay could not be asked
    VerificationFailed { reference: String, message: String },
}

impl CallbackOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, CallbackOutcome::Confirmed { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallbackOutcome::Confirmed { .. } => "confirmed",
            CallbackOutcome::Unconfirmed { .. } => "unconfirmed",
            CallbackOutcome::Cancelled { .. } => "cancelled",
            CallbackOutcome::Mismatched { .. } => "mismatched",
            CallbackOutcome::VerificationFailed { .. } => "verification_failed",
        }
    }
}
