use serde::{Deserialize, Serialize};

/// Consultation booking request. Date and time arrive as strings
/// (`YYYY-MM-DD` / `HH:MM`) and are parsed by the handler so malformed
/// values surface as a 400 rather than a rejection at the extractor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub selected_date: String,
    #[serde(default)]
    pub selected_time: String,
    #[serde(default)]
    pub consultation_type: Option<ConsultationType>,
    #[serde(default)]
    pub message: Option<String>,
}

impl BookingSubmission {
    pub fn has_required_fields(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.selected_date.trim().is_empty()
            && !self.selected_time.trim().is_empty()
    }

    pub fn consultation_label(&self) -> &'static str {
        self.consultation_type
            .map(|t| t.label())
            .unwrap_or("General Consultation")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationType {
    Video,
    Phone,
    #[serde(rename = "in-person")]
    InPerson,
}

impl ConsultationType {
    pub fn label(&self) -> &'static str {
        match self {
            ConsultationType::Video => "Video Call",
            ConsultationType::Phone => "Phone Call",
            ConsultationType::InPerson => "In-Person Meeting",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub message: String,
    pub success: bool,
    pub booking_details: BookingDetails,
}

/// Echoed back to the client so the UI can show what was requested.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub full_name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub consultation_type: String,
}
