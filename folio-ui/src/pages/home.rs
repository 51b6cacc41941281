//! Home Page
//!
//! Hero section; also hosts the first-visit preferences dialog.

use leptos::*;
use leptos_router::*;

use crate::components::{PreferencesModal, Staggered};
use crate::state::GlobalState;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let greeting = move || {
        state.preferences.with(|p| {
            let name = &p.get().name;
            if name.is_empty() {
                "Hello there".to_string()
            } else {
                format!("Hello, {}", name)
            }
        })
    };

    let hero = vec![
        view! { <p class="hero-greeting">{greeting}</p> }.into_view(),
        view! {
            <h1 class="hero-title">"I'm a "<span class="accent">"Creative Developer"</span></h1>
        }
        .into_view(),
        view! {
            <p class="hero-subtitle">
                "I create beautiful, interactive, and responsive web experiences that engage users and deliver results."
            </p>
        }
        .into_view(),
        view! {
            <div class="hero-buttons">
                <A href="/projects" class="btn btn-primary">"View Projects →"</A>
                <A href="/contact" class="btn btn-secondary">"Contact Me"</A>
            </div>
        }
        .into_view(),
    ];

    view! {
        <PreferencesModal />
        <section class="hero">
            <div class="hero-content">
                <Staggered items=hero />
            </div>
            <div class="scroll-indicator">
                <p>"Scroll Down"</p>
                <div class="scroll-line" />
            </div>
        </section>
    }
}
