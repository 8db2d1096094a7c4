use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice and customer details the host hands over when drawing the pay button
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub invoice_id: u64,
    pub amount: Decimal,
    /// Raw currency code from the invoice; checked when rendering
    pub currency: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default = "default_pay_now_label")]
    pub pay_now_label: String,
}

impl CheckoutRequest {
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

pub fn default_pay_now_label() -> String {
    "Pay Now".to_string()
}

/// What the invoice page should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutSnippet {
    /// Pay button wired to the hosted widget
    PayButton { reference: String, html: String },
    /// Inline notice; the invoice can't be paid through LazerPay
    Unpayable { reason: String, html: String },
}

impl CheckoutSnippet {
    pub fn html(&self) -> &str {
        match self {
            CheckoutSnippet::PayButton { html, .. } | CheckoutSnippet::Unpayable { html, .. } => {
                html
            }
        }
    }

    pub fn into_html(self) -> String {
        match self {
            CheckoutSnippet::PayButton { html, .. } | CheckoutSnippet::Unpayable { html, .. } => {
                html
            }
        }
    }

    pub fn reference(&self) -> Option<&str> {
        match self {
            CheckoutSnippet::PayButton { reference, .. } => Some(reference),
            CheckoutSnippet::Unpayable { .. } => None,
        }
    }

    pub fn is_payable(&self) -> bool {
        matches!(self, CheckoutSnippet::PayButton { .. })
    }
}
