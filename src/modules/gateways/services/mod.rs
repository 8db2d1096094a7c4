pub mod gateway_trait;
pub mod lazerpay;

pub use gateway_trait::{TransactionVerifier, VerificationOutcome};
pub use lazerpay::LazerPayClient;
