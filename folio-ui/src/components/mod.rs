//! UI Components
//!
//! Reusable Leptos components for the site shell.

pub mod cursor;
pub mod footer;
pub mod loading;
pub mod nav;
pub mod preferences_modal;
pub mod reveal;
pub mod social;
pub mod splash;

pub use cursor::Cursor;
pub use footer::Footer;
pub use loading::Loading;
pub use nav::{Nav, ThemeToggle};
pub use preferences_modal::PreferencesModal;
pub use reveal::{Reveal, Staggered};
pub use social::SocialLinks;
pub use splash::Splash;
