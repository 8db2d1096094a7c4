pub mod callbacks;
pub mod checkout;
pub mod gateways;
pub mod health;
