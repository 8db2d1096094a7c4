// Fake LazerPay API
//
// Runs a real HTTP server on a random port (actix-test) that answers the
// verify-transaction endpoint and records what it was sent.

use actix_web::{web, App, HttpRequest, HttpResponse};
use serde_json::json;
use std::sync::Mutex;

pub use actix_test::TestServer;

/// One request as the processor saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Raw, still percent-encoded path
    pub path: String,
    pub api_key: Option<String>,
}

pub type Recorded = web::Data<Mutex<Vec<RecordedRequest>>>;

/// Start the fake processor.
///
/// The last path segment picks the answer:
/// - ends with `_404` - HTTP 404 with a JSON error body
/// - ends with `_garbage` - HTTP 200 with a body that is not JSON
/// - ends with `_pending` - success envelope, `data.status = "pending"`
/// - anything else - success envelope, `data.status = "confirmed"`
pub fn spawn_fake_processor() -> (TestServer, Recorded) {
    let recorded: Recorded = web::Data::new(Mutex::new(Vec::new()));
    let shared = recorded.clone();

    let srv = actix_test::start(move || {
        App::new()
            .app_data(shared.clone())
            .default_service(web::to(answer))
    });

    (srv, recorded)
}

/// Base URL to hand to `LazerPayClient`
pub fn base_url(srv: &TestServer) -> String {
    srv.url("/")
}

pub fn recorded_requests(recorded: &Recorded) -> Vec<RecordedRequest> {
    recorded.lock().map(|r| r.clone()).unwrap_or_default()
}

async fn answer(req: HttpRequest, recorded: Recorded) -> HttpResponse {
    let path = req.path().to_string();
    if let Ok(mut seen) = recorded.lock() {
        seen.push(RecordedRequest {
            method: req.method().to_string(),
            path: path.clone(),
            api_key: req
                .headers()
                .get("x-api-key")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string()),
        });
    }

    let reference = path.rsplit('/').next().unwrap_or_default().to_string();

    if reference.ends_with("_404") {
        return HttpResponse::NotFound().json(json!({
            "status": "error",
            "statusCode": 404,
            "message": "Transaction not found"
        }));
    }

    if reference.ends_with("_garbage") {
        return HttpResponse::Ok()
            .content_type("text/html")
            .body("<html>maintenance</html>");
    }

    let status = if reference.ends_with("_pending") {
        "pending"
    } else {
        "confirmed"
    };

    HttpResponse::Ok().json(json!({
        "status": "success",
        "statusCode": 200,
        "message": "Verification successful",
        "data": {
            "reference": reference,
            "status": status,
            "network": "testnet",
            "coin": "USDT"
        }
    }))
}
