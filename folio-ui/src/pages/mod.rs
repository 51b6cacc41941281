//! Pages
//!
//! Top-level page components for each route.

pub mod about;
pub mod admin;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod projects;

pub use about::About;
pub use admin::Admin;
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;
