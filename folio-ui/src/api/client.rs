//! HTTP API Client
//!
//! `gloo-net` implementation of [`PortfolioBackend`] for the browser.

use async_trait::async_trait;
use folio::api::{endpoint, CONTACT_PATH, MESSAGES_PATH};
use folio::{ApiError, ContactMessage, ContactSubmission, PortfolioBackend};
use gloo_net::http::{Request, Response};

/// Empty base keeps requests same-origin (`/api/...`)
pub const DEFAULT_API_BASE: &str = "";

const API_URL_KEY: &str = "folio_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Browser client for the portfolio backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client pointed at the configured base URL
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }
}

fn network_error(e: gloo_net::Error) -> ApiError {
    match e {
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
        })
    }
}

#[async_trait(?Send)]
impl PortfolioBackend for ApiClient {
    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), ApiError> {
        let response = Request::post(&endpoint(&self.base_url, CONTACT_PATH))
            .json(submission)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        check_status(response)?;
        Ok(())
    }

    async fn fetch_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
        let response = Request::get(&endpoint(&self.base_url, MESSAGES_PATH))
            .send()
            .await
            .map_err(network_error)?;

        check_status(response)?
            .json::<Vec<ContactMessage>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
