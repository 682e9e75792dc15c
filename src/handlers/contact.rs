use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::ContactSubmission;
use crate::services::emails;
use crate::state::AppState;

// POST /api/contact
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !submission.has_required_fields() {
        return Err(AppError::MissingFields);
    }

    tracing::info!(email = %submission.email, subject = %submission.subject, "contact submission");

    let notification = emails::contact_business_email(&submission, &state.config.business_email);
    let auto_reply = emails::contact_auto_reply(&submission);

    tokio::try_join!(
        state.mailer.send(&notification),
        state.mailer.send(&auto_reply)
    )
    .map_err(|e| {
        tracing::error!(error = %e, "contact email dispatch failed");
        AppError::MailDelivery(e)
    })?;

    Ok(Json(serde_json::json!({ "message": "Emails sent successfully" })))
}
