pub mod mailgun;

use async_trait::async_trait;

/// A single outbound message for the transactional relay.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub reply_to: Option<String>,
}

/// Relay failures, classified so callers can distinguish a credentials
/// problem from a transient outage.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MailError {
    #[error("mail relay rejected credentials")]
    Auth,

    #[error("could not connect to mail relay")]
    Connection,

    #[error("mail send failed: {0}")]
    Other(String),
}

impl MailError {
    pub fn code(&self) -> &'static str {
        match self {
            MailError::Auth => "AUTH_ERROR",
            MailError::Connection => "CONNECTION_ERROR",
            MailError::Other(_) => "UNKNOWN_ERROR",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            MailError::Auth => "Email authentication failed. Please try again later.",
            MailError::Connection => "Unable to connect to email server. Please try again later.",
            MailError::Other(_) => "Something went wrong. Please try again or contact support.",
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}
