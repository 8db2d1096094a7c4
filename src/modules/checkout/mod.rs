pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{CheckoutRequest, CheckoutSnippet};
pub use services::{callback_url, CheckoutRenderer, TransactionReference};
