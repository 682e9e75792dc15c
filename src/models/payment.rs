use serde::Deserialize;

/// Event payload delivered by the payment provider. The structure is owned
/// by the provider; we only rely on the type tag and creation timestamp and
/// keep the rest opaque.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub created: i64,
    #[serde(default)]
    pub data: serde_json::Value,
}
