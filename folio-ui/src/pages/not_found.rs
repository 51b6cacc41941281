//! 404 Page

use folio::timeline::presets;
use leptos::*;
use leptos_router::*;

use crate::components::Reveal;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Reveal step=presets::rise_in() class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you are looking for might have been removed or is temporarily unavailable."</p>
            <A href="/" class="btn btn-primary">"Back to Home"</A>
        </Reveal>
    }
}
