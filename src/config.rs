use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub mailgun_api_key: String,
    pub mailgun_domain: String,
    pub mail_from: String,
    pub business_email: String,
    pub webhook_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mail_from = env::var("MAIL_FROM").unwrap_or_default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            mailgun_api_key: env::var("MAILGUN_API_KEY").unwrap_or_default(),
            mailgun_domain: env::var("MAILGUN_DOMAIN").unwrap_or_default(),
            business_email: env::var("BUSINESS_EMAIL").unwrap_or_else(|_| mail_from.clone()),
            mail_from,
            webhook_secret: env::var("STRIPE_WEBHOOK_SECRET").unwrap_or_default(),
        }
    }
}
