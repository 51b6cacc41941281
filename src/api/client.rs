//! Native HTTP backend client
//!
//! Used by the operator CLI to reach the same endpoints the site calls.

use async_trait::async_trait;
use reqwest::Client;

use super::{endpoint, ApiError, PortfolioBackend, CONTACT_PATH, MESSAGES_PATH};
use crate::admin::ContactMessage;
use crate::config::BackendConfig;
use crate::contact::ContactSubmission;

/// reqwest-backed [`PortfolioBackend`]
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl PortfolioBackend for HttpBackend {
    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), ApiError> {
        let url = endpoint(&self.base_url, CONTACT_PATH);
        tracing::debug!(%url, "Submitting contact message");

        self.client
            .post(&url)
            .json(submission)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn fetch_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
        let url = endpoint(&self.base_url, MESSAGES_PATH);
        tracing::debug!(%url, "Fetching messages");

        let messages = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ContactMessage>>()
            .await?;

        Ok(messages)
    }
}
