//! State Management
//!
//! Global application state and its session persistence.

pub mod global;
pub mod storage;

pub use global::{provide_global_state, GlobalState};
