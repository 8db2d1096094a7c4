// Test data builders

use lazerpay_gateway::checkout::CheckoutRequest;
use lazerpay_gateway::config::gateway::default_callback_url;
use lazerpay_gateway::config::{GatewayConfig, NetworkMode};
use rust_decimal::Decimal;

pub const SYSTEM_URL: &str = "https://billing.example.com";
pub const TEST_PUBLIC_KEY: &str = "pk_test_5CdxYq";
pub const MAIN_PUBLIC_KEY: &str = "pk_live_9QmWzr";

/// Gateway settings pointing at `api_base_url`
pub fn gateway_config(mode: NetworkMode, api_base_url: &str) -> GatewayConfig {
    GatewayConfig {
        test_net_public_key: TEST_PUBLIC_KEY.to_string(),
        test_net_secret_key: "sk_test_5CdxYq".to_string(),
        main_net_public_key: MAIN_PUBLIC_KEY.to_string(),
        main_net_secret_key: "sk_live_9QmWzr".to_string(),
        mode,
        callback_url: default_callback_url(SYSTEM_URL),
        system_url: SYSTEM_URL.to_string(),
        api_base_url: api_base_url.to_string(),
    }
}

pub fn checkout_request(invoice_id: u64, amount: Decimal, currency: &str) -> CheckoutRequest {
    CheckoutRequest {
        invoice_id,
        amount,
        currency: currency.to_string(),
        first_name: "Chioma".to_string(),
        last_name: "Eze".to_string(),
        email: "chioma@example.com".to_string(),
        pay_now_label: "Pay Now".to_string(),
    }
}
