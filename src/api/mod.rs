//! Portfolio Backend Contract
//!
//! The site talks to an external backend through two endpoints:
//!
//! - `POST /api/contact` - Submit a contact message (any 2xx is success)
//! - `GET /api/messages` - List received messages for the admin inbox
//!
//! [`PortfolioBackend`] abstracts both so the contact flow and admin view
//! can run against the native [`HttpBackend`], the browser client in
//! `folio-ui`, or a mock in tests. Futures are not `Send`, matching the
//! single-threaded browser runtime.

pub mod error;

#[cfg(feature = "native")]
mod client;

pub use error::ApiError;

#[cfg(feature = "native")]
pub use client::HttpBackend;

use async_trait::async_trait;

use crate::admin::ContactMessage;
use crate::contact::ContactSubmission;

pub const CONTACT_PATH: &str = "/api/contact";
pub const MESSAGES_PATH: &str = "/api/messages";

#[async_trait(?Send)]
pub trait PortfolioBackend {
    /// Deliver a contact form submission
    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), ApiError>;

    /// Fetch every message received so far
    async fn fetch_messages(&self) -> Result<Vec<ContactMessage>, ApiError>;
}

/// Join a base URL and an endpoint path; an empty base keeps the path relative
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
