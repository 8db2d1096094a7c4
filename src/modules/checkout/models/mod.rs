pub mod checkout_request;

pub use checkout_request::{default_pay_now_label, CheckoutRequest, CheckoutSnippet};
