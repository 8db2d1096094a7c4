//! LazerPay gateway for billing platforms
//!
//! Renders the LazerPay crypto checkout button on invoice pages and verifies
//! the resulting transactions against the LazerPay API.

use actix_web::web;

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::callbacks;
pub use modules::checkout;
pub use modules::gateways;

/// Mount every route the gateway serves.
///
/// Expects `web::Data` for `GatewayConfig`, `CheckoutRenderer`,
/// `CallbackService` and `dyn TransactionVerifier` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(modules::health::configure)
        .configure(modules::gateways::configure)
        .configure(modules::checkout::configure)
        .configure(modules::callbacks::configure);
}
