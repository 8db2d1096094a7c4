use super::gateway_trait::{TransactionVerifier, VerificationOutcome};
use crate::config::GatewayConfig;
use crate::core::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

/// Header LazerPay reads the merchant's public key from
pub const API_KEY_HEADER: &str = "x-api-key";

/// LazerPay API client
///
/// Only the verify-transaction endpoint is used; the checkout itself runs in
/// LazerPay's hosted widget.
/// API Documentation: https://docs.lazerpay.finance/home/payments/verify-payments
pub struct LazerPayClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl LazerPayClient {
    /// Create a new LazerPay client
    ///
    /// # Arguments
    /// * `api_key` - public key of the active network, sent as `x-api-key`
    /// * `base_url` - API host, e.g. `https://api.lazerpay.engineering`
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::configuration(format!("Invalid LazerPay base URL: {}", e)))?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "LazerPay base URL cannot carry a path: {}",
                base_url
            )));
        }

        Ok(Self {
            client: Client::new(),
            api_key: api_key.into().trim().to_string(),
            base_url,
        })
    }

    /// Build a client for the key pair selected by the configured network mode
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        Self::new(config.public_key(), &config.api_base_url)
    }

    /// `<base>/api/v1/transaction/verify/<reference>`, with the reference
    /// percent-encoded as a single path segment
    pub fn verify_url(&self, reference: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::internal("LazerPay base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["api", "v1", "transaction", "verify", reference]);
        Ok(url)
    }

    async fn fetch_transaction(&self, reference: &str) -> Result<serde_json::Value> {
        let url = self.verify_url(reference)?;

        debug!(url = %url, "Calling LazerPay verify endpoint");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::gateway(format!(
                "LazerPay API error - HTTP {} ({})",
                status.as_u16(),
                body.trim()
            )));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str::<serde_json::Value>(&text)?)
    }
}

#[async_trait]
impl TransactionVerifier for LazerPayClient {
    async fn verify_transaction(&self, reference: &str) -> VerificationOutcome {
        info!(reference = reference, "Verifying LazerPay transaction");

        match self.fetch_transaction(reference).await {
            Ok(body) => {
                debug!(reference = reference, "LazerPay returned transaction body");
                VerificationOutcome::Transaction { body }
            }
            Err(e) => {
                let message = match e {
                    AppError::HttpClient(inner) => inner.to_string(),
                    other => other.to_string(),
                };
                warn!(
                    reference = reference,
                    error = message.as_str(),
                    "LazerPay verification failed"
                );
                VerificationOutcome::Failed { message }
            }
        }
    }

    fn name(&self) -> &str {
        "lazerpay"
    }
}
