use async_trait::async_trait;
use reqwest::StatusCode;

use super::{MailError, Mailer, OutboundEmail};

pub struct MailgunProvider {
    api_key: String,
    domain: String,
    from_address: String,
    client: reqwest::Client,
}

impl MailgunProvider {
    pub fn new(api_key: String, domain: String, from_address: String) -> Self {
        Self {
            api_key,
            domain,
            from_address,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for MailgunProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let url = format!("https://api.mailgun.net/v3/{}/messages", self.domain);

        let mut form = vec![
            ("from", self.from_address.as_str()),
            ("to", email.to.as_str()),
            ("subject", email.subject.as_str()),
            ("html", email.html.as_str()),
        ];
        if let Some(reply_to) = &email.reply_to {
            form.push(("h:Reply-To", reply_to.as_str()));
        }

        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.api_key))
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    MailError::Connection
                } else {
                    MailError::Other(e.to_string())
                }
            })?;

        match response.status() {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(MailError::Auth),
            s => Err(MailError::Other(format!("relay returned {s}"))),
        }
    }
}
