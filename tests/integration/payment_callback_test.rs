// End-to-end payment flow through the gateway's HTTP surface
//
// 1. Render the checkout button for an invoice
// 2. Pull the issued reference out of the rendered script
// 3. Hit the callback the widget would redirect to
// 4. Check LazerPay was asked about that reference and the customer is sent
//    back to the invoice

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{http::header, test, web, App};
use helpers::*;
use lazerpay_gateway::callbacks::CallbackService;
use lazerpay_gateway::checkout::CheckoutRenderer;
use lazerpay_gateway::config::{GatewayConfig, NetworkMode};
use lazerpay_gateway::gateways::{LazerPayClient, TransactionVerifier};

fn app_data(
    config: &GatewayConfig,
) -> (
    web::Data<GatewayConfig>,
    web::Data<CheckoutRenderer>,
    web::Data<CallbackService>,
    web::Data<dyn TransactionVerifier>,
) {
    let verifier: Arc<dyn TransactionVerifier> =
        Arc::new(LazerPayClient::from_config(config).unwrap());

    (
        web::Data::new(config.clone()),
        web::Data::new(CheckoutRenderer::new(config.clone())),
        web::Data::new(CallbackService::new(verifier.clone(), config.clone())),
        web::Data::from(verifier),
    )
}

/// Reference between `trxref=` and the following `&`
fn extract_reference(html: &str) -> String {
    let start = html.find("trxref=").expect("callback url in script") + "trxref=".len();
    let rest = &html[start..];
    let end = rest.find('&').expect("status parameter after trxref");
    rest[..end].to_string()
}

#[actix_web::test]
async fn test_checkout_then_callback_confirms_payment() {
    let (srv, recorded) = spawn_fake_processor();
    let config = gateway_config(NetworkMode::TestNet, &base_url(&srv));
    let (gateway, renderer, callbacks, verifier) = app_data(&config);

    let app = test::init_service(
        App::new()
            .app_data(gateway)
            .app_data(renderer)
            .app_data(callbacks)
            .app_data(verifier)
            .configure(lazerpay_gateway::configure),
    )
    .await;

    // 1. Checkout button
    let req = test::TestRequest::get()
        .uri("/invoices/1207/checkout?amount=75.00&currency=USD&first_name=Chioma&last_name=Eze&email=chioma%40example.com")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap().to_string();

    assert!(html.contains(&format!(r#"key: "{}""#, TEST_PUBLIC_KEY)));

    // 2. Reference issued for this invoice
    let reference = extract_reference(&html);
    assert!(reference.starts_with("CLDLP_1207_"));
    assert!(html.contains(&format!(r#"reference: "{}""#, reference)));

    // 3. Widget redirect
    let req = test::TestRequest::get()
        .uri(&format!(
            "/verify-payment?invoice_id=1207&trxref={}&status=success",
            reference
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // 4. Verified and redirected
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "https://billing.example.com/viewinvoice.php?id=1207"
    );
    assert_eq!(resp.headers().get("X-Payment-Outcome").unwrap(), "confirmed");

    let requests = recorded_requests(&recorded);
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].path,
        format!("/api/v1/transaction/verify/{}", reference)
    );
    assert_eq!(requests[0].api_key.as_deref(), Some(TEST_PUBLIC_KEY));
}

#[actix_web::test]
async fn test_closed_widget_never_reaches_processor() {
    let (srv, recorded) = spawn_fake_processor();
    let config = gateway_config(NetworkMode::MainNet, &base_url(&srv));
    let (gateway, renderer, callbacks, verifier) = app_data(&config);

    let app = test::init_service(
        App::new()
            .app_data(gateway)
            .app_data(renderer)
            .app_data(callbacks)
            .app_data(verifier)
            .configure(lazerpay_gateway::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/verify-payment?invoice_id=9&trxref=CLDLP_9_1700000000000&status=error")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("X-Payment-Outcome").unwrap(), "cancelled");
    assert!(recorded_requests(&recorded).is_empty());
}

#[actix_web::test]
async fn test_processor_outage_still_redirects() {
    let config = gateway_config(NetworkMode::TestNet, "http://127.0.0.1:1");
    let (gateway, renderer, callbacks, verifier) = app_data(&config);

    let app = test::init_service(
        App::new()
            .app_data(gateway)
            .app_data(renderer)
            .app_data(callbacks)
            .app_data(verifier)
            .configure(lazerpay_gateway::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/verify-payment?invoice_id=9&trxref=CLDLP_9_1700000000000&status=success")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("X-Payment-Outcome").unwrap(),
        "verification_failed"
    );

    let req = test::TestRequest::get()
        .uri("/transactions/CLDLP_9_1700000000000/verify")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);
}
