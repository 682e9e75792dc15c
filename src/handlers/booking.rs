use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};

use crate::errors::AppError;
use crate::models::{BookingDetails, BookingResponse, BookingSubmission};
use crate::services::{emails, validation};
use crate::state::AppState;

// POST /api/book-consultation
pub async fn book_consultation(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<BookingSubmission>,
) -> Result<Json<BookingResponse>, AppError> {
    if !submission.has_required_fields() {
        return Err(AppError::MissingFields);
    }
    if !validation::is_valid_email(&submission.email) {
        return Err(AppError::InvalidEmail);
    }
    if !validation::is_valid_phone(&submission.phone) {
        return Err(AppError::InvalidPhone);
    }

    // No business-day or 9-5 check here; the booking UI constrains the
    // offered slots and any syntactically valid date/time is accepted.
    let date = NaiveDate::parse_from_str(&submission.selected_date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate)?;
    let time = NaiveTime::parse_from_str(&submission.selected_time, "%H:%M")
        .map_err(|_| AppError::InvalidTime)?;

    let formatted_date = emails::format_long_date(date);
    let formatted_time = emails::format_12_hour(time);

    tracing::info!(
        email = %submission.email,
        date = %formatted_date,
        time = %formatted_time,
        consultation_type = submission.consultation_label(),
        "consultation booking"
    );

    let notification = emails::booking_business_email(
        &submission,
        &formatted_date,
        &formatted_time,
        &state.config.business_email,
    );
    let confirmation =
        emails::booking_confirmation_email(&submission, &formatted_date, &formatted_time);

    tokio::try_join!(
        state.mailer.send(&notification),
        state.mailer.send(&confirmation)
    )
    .inspect_err(|e| tracing::error!(error = %e, "booking email dispatch failed"))?;

    Ok(Json(BookingResponse {
        message: "Consultation booked successfully! Check your email for confirmation."
            .to_string(),
        success: true,
        booking_details: BookingDetails {
            full_name: submission.full_name.clone(),
            email: submission.email.clone(),
            date: formatted_date,
            time: formatted_time,
            consultation_type: submission.consultation_label().to_string(),
        },
    }))
}
