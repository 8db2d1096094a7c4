use actix_web::{http::header::ContentType, web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::checkout::models::{default_pay_now_label, CheckoutRequest};
use crate::modules::checkout::services::CheckoutRenderer;

/// Invoice details passed on the query string
#[derive(Debug, Deserialize)]
pub struct CheckoutParams {
    pub amount: Decimal,
    pub currency: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default = "default_pay_now_label")]
    pub pay_now_label: String,
}

/// Render the LazerPay button for an invoice
/// GET /invoices/{invoice_id}/checkout
///
/// Always 200 with an HTML fragment; unsupported invoices get an inline notice
/// instead of the button.
pub async fn render_checkout(
    path: web::Path<u64>,
    params: web::Query<CheckoutParams>,
    renderer: web::Data<CheckoutRenderer>,
) -> Result<HttpResponse, AppError> {
    let params = params.into_inner();
    if params.email.trim().is_empty() {
        return Err(AppError::validation("Customer email is required"));
    }

    let request = CheckoutRequest {
        invoice_id: path.into_inner(),
        amount: params.amount,
        currency: params.currency,
        first_name: params.first_name,
        last_name: params.last_name,
        email: params.email,
        pay_now_label: params.pay_now_label,
    };

    let snippet = renderer.render(&request);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(snippet.into_html()))
}

/// Configure checkout routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invoices").route("/{invoice_id}/checkout", web::get().to(render_checkout)),
    );
}
