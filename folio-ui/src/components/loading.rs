//! Loading Component
//!
//! Spinners shown while page data resolves.

use leptos::*;

/// Centered spinner with an optional label
#[component]
pub fn Loading(
    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner" />
            {label.map(|text| view! { <p class="loading-label">{text}</p> })}
        </div>
    }
}
