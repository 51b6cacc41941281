//! App Root Component
//!
//! Splash screen behind the loading gate, then the themed shell with
//! routing and global providers.

use folio::navigation::Route as SiteRoute;
use folio::LoadingGate;
use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;

use crate::components::{Cursor, Footer, Nav, Splash};
use crate::pages::{About, Admin, Contact, Home, NotFound, Projects};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let gate = create_rw_signal(LoadingGate::new(state.site.loading_delay()));
    let timer = store_value(Some(Timeout::new(
        state.site.loading_delay_ms as u32,
        move || {
            let _ = gate.try_update(|g| g.expire());
        },
    )));
    on_cleanup(move || {
        let _ = gate.try_update(|g| g.cancel());
        let _ = timer.try_update_value(|t| t.take());
    });

    let open = create_memo(move |_| gate.with(LoadingGate::is_open));

    view! {
        <Show when=move || open.get() fallback=|| view! { <Splash /> }>
            <Shell />
        </Show>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let class_state = state.clone();

    view! {
        <Router>
            <div
                class=move || class_state.theme_class()
                style=move || state.theme_style()
            >
                <Cursor />
                <Nav />

                <main class="main-content">
                    <Routes>
                        <Route path="/" view=RouteView />
                        <Route path="/*any" view=RouteView />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Resolves the current path through the site's route table
#[component]
fn RouteView() -> impl IntoView {
    let location = use_location();
    let route = create_memo(move |_| location.pathname.with(|p| SiteRoute::from_path(p)));

    move || match route.get() {
        SiteRoute::Home => view! { <Home /> }.into_view(),
        SiteRoute::About => view! { <About /> }.into_view(),
        SiteRoute::Projects => view! { <Projects /> }.into_view(),
        SiteRoute::Contact => view! { <Contact /> }.into_view(),
        SiteRoute::Admin => view! { <Admin /> }.into_view(),
        SiteRoute::NotFound => view! { <NotFound /> }.into_view(),
    }
}
