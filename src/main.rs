use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use abroadly::config::AppConfig;
use abroadly::handlers;
use abroadly::services::mail::mailgun::MailgunProvider;
use abroadly::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    anyhow::ensure!(
        !config.mail_from.is_empty(),
        "MAIL_FROM must be set"
    );

    let mailer = MailgunProvider::new(
        config.mailgun_api_key.clone(),
        config.mailgun_domain.clone(),
        config.mail_from.clone(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        mailer: Box::new(mailer),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/contact", post(handlers::contact::submit_contact))
        .route(
            "/api/book-consultation",
            post(handlers::booking::book_consultation),
        )
        .route(
            "/api/webhook/routes",
            post(handlers::webhook::payment_webhook),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
