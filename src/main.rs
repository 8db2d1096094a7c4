use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use lazerpay_gateway::callbacks::CallbackService;
use lazerpay_gateway::checkout::CheckoutRenderer;
use lazerpay_gateway::config::{AppConfig, Config, LogFormat};
use lazerpay_gateway::gateways::{LazerPayClient, TransactionVerifier};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(app: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("lazerpay_gateway={},actix_web=info", app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.app);
    config.validate()?;

    tracing::info!("Starting LazerPay gateway");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("LazerPay network: {}", config.gateway.mode);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let verifier: Arc<dyn TransactionVerifier> =
        Arc::new(LazerPayClient::from_config(&config.gateway)?);

    let gateway_config = web::Data::new(config.gateway.clone());
    let renderer = web::Data::new(CheckoutRenderer::new(config.gateway.clone()));
    let callbacks = web::Data::new(CallbackService::new(
        verifier.clone(),
        config.gateway.clone(),
    ));
    let verifier: web::Data<dyn TransactionVerifier> = web::Data::from(verifier);

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(gateway_config.clone())
            .app_data(renderer.clone())
            .app_data(callbacks.clone())
            .app_data(verifier.clone())
            .configure(lazerpay_gateway::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
