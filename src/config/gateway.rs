use crate::core::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Default LazerPay API host
pub const DEFAULT_API_BASE_URL: &str = "https://api.lazerpay.engineering";

/// Path of the payment callback, relative to the host platform's system URL
pub const CALLBACK_PATH: &str = "/modules/gateways/lazerpay/verify-payment.php";

/// Which LazerPay key pair is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    TestNet,
    MainNet,
}

impl NetworkMode {
    /// Resolve the host platform's test-mode flag.
    ///
    /// The admin UI stores a ticked checkbox as `on` (older installs used
    /// `yes`); an unticked one is stored as an empty string.
    pub fn from_flag(flag: &str) -> Result<Self> {
        match flag.trim().to_ascii_lowercase().as_str() {
            "on" | "yes" | "true" | "1" => Ok(NetworkMode::TestNet),
            "" | "off" | "no" | "false" | "0" => Ok(NetworkMode::MainNet),
            other => Err(AppError::configuration(format!(
                "Invalid test mode flag: {}",
                other
            ))),
        }
    }

    pub fn is_test_net(&self) -> bool {
        matches!(self, NetworkMode::TestNet)
    }
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkMode::TestNet => write!(f, "testnet"),
            NetworkMode::MainNet => write!(f, "mainnet"),
        }
    }
}

/// Merchant settings for the LazerPay gateway
#[derive(Clone, Deserialize)]
pub struct GatewayConfig {
    pub test_net_public_key: String,
    pub test_net_secret_key: String,
    pub main_net_public_key: String,
    pub main_net_secret_key: String,
    pub mode: NetworkMode,
    pub callback_url: String,
    pub system_url: String,
    pub api_base_url: String,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        let system_url = env::var("SYSTEM_URL")
            .map_err(|_| AppError::configuration("SYSTEM_URL not set"))?;
        let mode = NetworkMode::from_flag(&env::var("LAZERPAY_TEST_MODE").unwrap_or_default())?;

        let callback_url = env::var("LAZERPAY_CALLBACK_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| default_callback_url(&system_url));

        Ok(GatewayConfig {
            test_net_public_key: env::var("LAZERPAY_TESTNET_PUBLIC_KEY").unwrap_or_default(),
            test_net_secret_key: env::var("LAZERPAY_TESTNET_SECRET_KEY").unwrap_or_default(),
            main_net_public_key: env::var("LAZERPAY_MAINNET_PUBLIC_KEY").unwrap_or_default(),
            main_net_secret_key: env::var("LAZERPAY_MAINNET_SECRET_KEY").unwrap_or_default(),
            mode,
            callback_url,
            system_url,
            api_base_url: env::var("LAZERPAY_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        })
    }

    /// Public key for the active network, used by the widget and the verify call
    pub fn public_key(&self) -> &str {
        match self.mode {
            NetworkMode::TestNet => &self.test_net_public_key,
            NetworkMode::MainNet => &self.main_net_public_key,
        }
    }

    /// Secret key for the active network
    pub fn secret_key(&self) -> &str {
        match self.mode {
            NetworkMode::TestNet => &self.test_net_secret_key,
            NetworkMode::MainNet => &self.main_net_secret_key,
        }
    }

    /// Invoice page on the host platform
    pub fn invoice_url(&self, invoice_id: u64) -> String {
        format!(
            "{}/viewinvoice.php?id={}",
            self.system_url.trim_end_matches('/'),
            invoice_id
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.public_key().trim().is_empty() {
            return Err(AppError::configuration(format!(
                "Public key for {} is not configured",
                self.mode
            )));
        }

        for (name, url) in [
            ("SYSTEM_URL", &self.system_url),
            ("LAZERPAY_CALLBACK_URL", &self.callback_url),
            ("LAZERPAY_API_BASE_URL", &self.api_base_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(AppError::configuration(format!(
                    "{} must be an http(s) URL",
                    name
                )));
            }
        }

        Ok(())
    }
}

// Keys stay out of logs.
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("mode", &self.mode)
            .field("callback_url", &self.callback_url)
            .field("system_url", &self.system_url)
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}

pub fn default_callback_url(system_url: &str) -> String {
    format!("{}{}", system_url.trim_end_matches('/'), CALLBACK_PATH)
}
