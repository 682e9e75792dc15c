use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::DateTime;

use crate::errors::AppError;
use crate::models::PaymentEvent;
use crate::services::signature;
use crate::state::AppState;

// POST /api/webhook/routes
pub async fn payment_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    let sig_header = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    // An unverified event is never parsed or acted on.
    signature::verify(&body, sig_header, &state.config.webhook_secret).map_err(|e| {
        tracing::warn!(error = %e, "webhook signature verification failed");
        AppError::BadSignature
    })?;

    let event: PaymentEvent = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "verified webhook body did not parse as an event");
        AppError::BadSignature
    })?;

    let created = DateTime::from_timestamp(event.created, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| event.created.to_string());
    tracing::info!(event_type = %event.event_type, %created, "payment event received");

    // charge.pending intentionally takes the unhandled branch, matching the
    // site's historical behavior; no action is taken for pending charges.
    match event.event_type.as_str() {
        "charge.succeeded" => {
            tracing::info!("payment done");
        }
        "charge.failed" => {
            tracing::warn!("payment failed");
        }
        other => {
            tracing::info!(event_type = %other, "unhandled event type");
        }
    }

    Ok(Json(serde_json::json!({ "received": true })))
}
