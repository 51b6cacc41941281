//! Folio Site
//!
//! Personal portfolio single-page site built with Leptos (WASM).
//!
//! # Features
//!
//! - Splash screen, then a themed shell with client-side routing
//! - Filterable project gallery
//! - Contact form posting to the portfolio backend
//! - Admin inbox of received messages
//! - Custom cursor on wide viewports
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every piece of interactive state lives in the `folio` core
//! crate; components here hold it in signals and feed it browser events.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
