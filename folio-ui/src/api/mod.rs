//! API Layer
//!
//! Browser implementation of the portfolio backend contract.

pub mod client;

pub use client::{get_api_base, ApiClient};
