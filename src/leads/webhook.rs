use std::time::Duration;

use super::StoredLead;
use crate::error::WebhookError;

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts accepted leads to an external webhook as JSON.
#[derive(Debug, Clone)]
pub struct WebhookForwarder {
    client: reqwest::Client,
    url: String,
}

impl WebhookForwarder {
    pub fn new(url: impl Into<String>) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn forward(&self, lead: &StoredLead) -> Result<(), WebhookError> {
        let response = self.client.post(&self.url).json(lead).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status(status));
        }
        Ok(())
    }
}
