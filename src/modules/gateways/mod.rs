pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{config_fields, ConfigField, FieldType, GatewayMetadata};
pub use services::{LazerPayClient, TransactionVerifier, VerificationOutcome};
