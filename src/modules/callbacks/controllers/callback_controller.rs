use actix_web::{http::header, web, HttpResponse};

use crate::config::gateway::CALLBACK_PATH;
use crate::core::error::AppError;
use crate::modules::callbacks::models::CallbackQuery;
use crate::modules::callbacks::services::CallbackService;

/// Handle the checkout widget's redirect
/// GET /verify-payment?invoice_id=&trxref=&status=
///
/// Verifies with LazerPay when the widget reported success, then sends the
/// customer back to the invoice page whatever the outcome.
///
/// # Returns
/// * `302 Found` - redirect to the invoice
/// * `400 Bad Request` - `invoice_id` missing or not a number
pub async fn verify_payment(
    query: web::Query<CallbackQuery>,
    service: web::Data<CallbackService>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let outcome = service.handle(&query).await;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, service.invoice_url(query.invoice_id)))
        .insert_header(("X-Payment-Outcome", outcome.label()))
        .finish())
}

/// Configure callback routes. The legacy module path is kept so callback
/// URLs saved by earlier installs keep working.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/verify-payment", web::get().to(verify_payment))
        .route(CALLBACK_PATH, web::get().to(verify_payment));
}
