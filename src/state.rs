use crate::config::AppConfig;
use crate::services::mail::Mailer;

pub struct AppState {
    pub config: AppConfig,
    pub mailer: Box<dyn Mailer>,
}
