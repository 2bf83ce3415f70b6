use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::model::{Contact, SendOutcome};
use crate::domain::ports::Notifier;
use crate::utils::error::{DispatchError, Result};

/// Numbers are stored as bare 10-digit strings; the provider wants E.164, so
/// a fixed US country code is prepended on both ends.
const COUNTRY_CODE_PREFIX: &str = "+1";

/// A recipient number must be exactly this long to be usable.
pub const VALID_PHONE_LEN: usize = 10;

fn birthday_message(name: &str) -> String {
    format!(
        "Happy Birthday from eFuneral! {}, I see that it's your birthday month. \
         I hope you have an awesome month!",
        name
    )
}

/// SMS delivery through the Twilio Messages API.
#[derive(Debug, Clone)]
pub struct TwilioNotifier {
    client: Client,
    api_base: String,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

impl TwilioNotifier {
    pub fn new(
        api_base: String,
        account_sid: String,
        auth_token: String,
        from_number: String,
    ) -> Self {
        Self {
            client: Client::new(),
            api_base,
            account_sid,
            auth_token,
            from_number,
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base.trim_end_matches('/'),
            self.account_sid
        )
    }
}

#[async_trait]
impl Notifier for TwilioNotifier {
    async fn send(&self, contact: &Contact) -> Result<SendOutcome> {
        // A contact without a usable number is skipped outright, with no
        // provider call. Long-standing behavior; callers rely on it.
        if contact.phone.len() != VALID_PHONE_LEN {
            return Ok(SendOutcome::SkippedInvalidRecipient);
        }

        let params = [
            ("Body", birthday_message(&contact.name)),
            ("From", format!("{}{}", COUNTRY_CODE_PREFIX, self.from_number)),
            ("To", format!("{}{}", COUNTRY_CODE_PREFIX, contact.phone)),
        ];

        debug!("Sending birthday message to {}", contact.name);
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let message: MessageResponse = serde_json::from_str(&body)?;
        Ok(SendOutcome::Sent { sid: message.sid })
    }
}
