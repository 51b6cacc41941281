//! # Folio
//!
//! Core of a personal portfolio single-page site: the state machines behind
//! every interactive piece, kept free of any rendering toolkit so they can be
//! driven by the browser frontend (`folio-ui`) and tested natively with a
//! simulated clock.
//!
//! ## Modules
//!
//! - [`theme`]: Light/dark token and its color values
//! - [`preferences`]: Visitor profile and the first-visit capture dialog
//! - [`loader`]: Splash screen gate in front of the application shell
//! - [`navigation`]: Routes, active link, mobile menu, scroll condensing
//! - [`cursor`]: Custom pointer overlay for wide viewports
//! - [`projects`]: Project catalog and category filtering
//! - [`profile`]: Owner contact details and social links
//! - [`contact`]: Contact form submission flow
//! - [`admin`]: Read-only inbox of received messages
//! - [`timeline`]: Declarative entrance and loop animations
//! - [`session`]: Per-session persistence of theme and preferences
//! - [`api`]: Backend contract, plus a reqwest client with the `native` feature
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folio::{ContactField, ContactFlow, Config, HttpBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let backend = HttpBackend::new(&config.backend)?;
//!
//!     let mut flow = ContactFlow::new(config.site.contact_reset());
//!     flow.set_field(ContactField::Name, "Ada");
//!     flow.set_field(ContactField::Email, "ada@example.com");
//!     flow.set_field(ContactField::Message, "Hello!");
//!
//!     flow.submit(&backend).await;
//!     println!("{}", flow.status().message);
//!
//!     Ok(())
//! }
//! ```

pub mod admin;
pub mod api;
pub mod config;
pub mod contact;
pub mod cursor;
pub mod loader;
pub mod navigation;
pub mod preferences;
pub mod profile;
pub mod projects;
pub mod session;
pub mod theme;
pub mod timeline;

// Re-export top-level types for convenience
pub use admin::{AdminView, ContactMessage, MessageAccent, MessageId, MessageTimestamp};

pub use api::{ApiError, PortfolioBackend};

#[cfg(feature = "native")]
pub use api::HttpBackend;

pub use config::{BackendConfig, Config, ConfigError, LoggingConfig, SiteConfig};

pub use contact::{
    ContactField, ContactFlow, ContactSubmission, ResetTicket, SubmissionPhase, SubmissionStatus,
};

pub use cursor::{CursorOverlay, CursorVariant, Point, RingTransform};

pub use loader::{GateState, LoadingGate, MountShell, SplashAnimation};

pub use navigation::{NavLink, NavigationState, Route, NAV_LINKS};

pub use preferences::{
    DialogVisibility, Experience, Mood, PreferenceDialog, PreferenceStore, PreferencesPatch,
    UserPreferences,
};

pub use profile::{ContactDetail, SocialLink, CONTACT_DETAILS, SOCIAL_LINKS};

pub use projects::{
    default_catalog, filter_projects, Category, CategoryFilter, GalleryState, ProjectGallery,
    ProjectListing,
};

pub use session::{MemoryStore, SessionSnapshot, SessionStore};

pub use theme::{ThemeStore, ThemeToken, ThemeValues};

pub use timeline::{Easing, Property, Step, Timeline};
