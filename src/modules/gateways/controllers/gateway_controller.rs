use actix_web::{web, HttpRequest, HttpResponse};
use percent_encoding::percent_decode_str;
use serde::Serialize;
use tracing::info;

use crate::config::GatewayConfig;
use crate::core::error::AppError;
use crate::modules::gateways::models::{config_fields, ConfigField, GatewayMetadata};
use crate::modules::gateways::services::TransactionVerifier;

#[derive(Debug, Serialize)]
pub struct MetadataResponse {
    pub metadata: GatewayMetadata,
    pub config_fields: Vec<ConfigField>,
    pub mode: String,
}

/// Gateway metadata and admin settings
/// GET /gateway/metadata
pub async fn get_metadata(config: web::Data<GatewayConfig>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(MetadataResponse {
        metadata: GatewayMetadata::lazerpay(),
        config_fields: config_fields(&config.callback_url),
        mode: config.mode.to_string(),
    }))
}

/// Ask LazerPay about a transaction
/// GET /transactions/{reference}/verify
/// Returns 200 with the processor's body, or 502 with the failure message
pub async fn verify_transaction(
    req: HttpRequest,
    verifier: web::Data<dyn TransactionVerifier>,
) -> Result<HttpResponse, AppError> {
    let reference = reference_from_path(&req)?;
    if reference.trim().is_empty() {
        return Err(AppError::validation("Transaction reference must not be empty"));
    }

    let outcome = verifier.verify_transaction(&reference).await;
    info!(
        reference = reference.as_str(),
        gateway = verifier.name(),
        failed = outcome.is_failed(),
        "Transaction lookup finished"
    );

    if outcome.is_failed() {
        Ok(HttpResponse::BadGateway().json(outcome))
    } else {
        Ok(HttpResponse::Ok().json(outcome))
    }
}

/// The router leaves `%2F`, `%25` and `%2B` encoded in matched segments, so
/// the raw value is decoded exactly once here before it is re-encoded for
/// LazerPay.
fn reference_from_path(req: &HttpRequest) -> Result<String, AppError> {
    let raw = req.match_info().query("reference");
    percent_decode_str(raw)
        .decode_utf8()
        .map(|reference| reference.into_owned())
        .map_err(|_| AppError::validation("Transaction reference is not valid UTF-8"))
}

/// Configure gateway routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/gateway").route("/metadata", web::get().to(get_metadata)))
        .service(
            web::scope("/transactions")
                .route("/{reference}/verify", web::get().to(verify_transaction)),
        );
}
