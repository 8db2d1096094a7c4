pub mod callback_service;

pub use callback_service::CallbackService;
