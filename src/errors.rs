use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::mail::MailError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone number format")]
    InvalidPhone,

    #[error("Invalid date format")]
    InvalidDate,

    #[error("Invalid time format")]
    InvalidTime,

    #[error("Failed to send email")]
    MailDelivery(#[source] MailError),

    #[error(transparent)]
    Mail(#[from] MailError),

    #[error("Webhook signature verification failed")]
    BadSignature,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingFields
            | AppError::InvalidEmail
            | AppError::InvalidPhone
            | AppError::InvalidDate
            | AppError::InvalidTime => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "message": self.to_string() }),
            ),
            AppError::BadSignature => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": self.to_string() }),
            ),
            AppError::MailDelivery(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "message": "Failed to send email" }),
            ),
            AppError::Mail(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "message": e.user_message(), "error": e.code() }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
