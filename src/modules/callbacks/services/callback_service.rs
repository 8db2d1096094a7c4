use std::sync::Arc;

use tracing::{info, warn};

use crate::config::GatewayConfig;
use crate::modules::callbacks::models::{CallbackOutcome, CallbackQuery};
use crate::modules::checkout::services::TransactionReference;
use crate::modules::gateways::services::{TransactionVerifier, VerificationOutcome};

/// Resolves the widget's redirect against LazerPay
pub struct CallbackService {
    verifier: Arc<dyn TransactionVerifier>,
    config: GatewayConfig,
}

impl CallbackService {
    pub fn new(verifier: Arc<dyn TransactionVerifier>, config: GatewayConfig) -> Self {
        Self { verifier, config }
    }

    /// Page the customer lands on once the callback is handled
    pub fn invoice_url(&self, invoice_id: u64) -> String {
        self.config.invoice_url(invoice_id)
    }

    /// Decide what a callback means. LazerPay is only asked when the widget
    /// reported success and the reference belongs to the invoice.
    pub async fn handle(&self, query: &CallbackQuery) -> CallbackOutcome {
        if !query.reports_success() {
            info!(
                invoice_id = query.invoice_id,
                status = query.status.as_str(),
                "Checkout closed without payment"
            );
            return CallbackOutcome::Cancelled {
                status: query.status.clone(),
            };
        }

        let belongs_to_invoice = query
            .trxref
            .parse::<TransactionReference>()
            .is_ok_and(|r| r.invoice_id() == query.invoice_id);
        if !belongs_to_invoice {
            warn!(
                invoice_id = query.invoice_id,
                reference = query.trxref.as_str(),
                "Callback reference does not belong to invoice"
            );
            return CallbackOutcome::Mismatched {
                reference: query.trxref.clone(),
            };
        }

        let outcome = self.verifier.verify_transaction(&query.trxref).await;
        let confirmed = outcome.is_confirmed();

        let result = match outcome {
            VerificationOutcome::Failed { message } => CallbackOutcome::VerificationFailed {
                reference: query.trxref.clone(),
                message,
            },
            VerificationOutcome::Transaction { body } if confirmed => CallbackOutcome::Confirmed {
                reference: query.trxref.clone(),
                transaction: body,
            },
            VerificationOutcome::Transaction { body } => CallbackOutcome::Unconfirmed {
                reference: query.trxref.clone(),
                transaction: body,
            },
        };

        info!(
            invoice_id = query.invoice_id,
            reference = query.trxref.as_str(),
            gateway = self.verifier.name(),
            outcome = result.label(),
            "Payment callback resolved"
        );

        result
    }
}
