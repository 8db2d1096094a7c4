use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::config::GatewayConfig;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub gateway: String,
    pub application: String,
}

/// GET /health - Liveness probe
/// Returns 200 if the application is alive. LazerPay itself is not called.
pub async fn health_check(config: web::Data<GatewayConfig>) -> impl Responder {
    let gateway = match config.validate() {
        Ok(()) => format!("configured ({})", config.mode),
        Err(e) => {
            tracing::warn!("Gateway configuration check failed: {}", e);
            "misconfigured".to_string()
        }
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            gateway,
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
