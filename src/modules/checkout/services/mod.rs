pub mod reference;
pub mod renderer;

pub use reference::{TransactionReference, REFERENCE_PREFIX};
pub use renderer::{callback_url, CheckoutRenderer, WIDGET_SCRIPT_URL};
