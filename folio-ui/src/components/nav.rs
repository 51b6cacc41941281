//! Navigation Component
//!
//! Fixed header with route-aware links, theme toggle and a slide-in menu
//! for small screens.

use folio::timeline::presets;
use folio::{NavLink, NavigationState, ThemeToken, NAV_LINKS};
use leptos::*;
use leptos_router::*;

use super::Reveal;
use crate::state::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let nav = create_rw_signal(NavigationState::new(state.site.scroll_threshold_px));
    let pathname = use_location().pathname;

    // Only touch the signal when the condensed flag flips
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        let mut next = nav.get_untracked();
        if next.on_scroll(offset) {
            nav.set(next);
        }
    });
    on_cleanup(move || scroll_handle.remove());

    create_effect(move |previous: Option<String>| {
        let path = pathname.get();
        if previous.is_some_and(|p| p != path) {
            nav.update(|n| n.on_route_change());
        }
        path
    });

    view! {
        <nav class=move || if nav.with(|n| n.scrolled()) { "navbar scrolled" } else { "navbar" }>
            <div class="nav-container">
                <A href="/" class="logo">"Portfolio"</A>

                <ul class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <li><HeaderLink link=*link pathname=pathname /></li> })
                        .collect_view()}
                </ul>

                <div class="nav-actions">
                    <ThemeToggle />
                    <button
                        class="menu-button"
                        aria-label="Open menu"
                        on:click=move |_| nav.update(|n| n.toggle_menu())
                    >
                        "☰"
                    </button>
                </div>
            </div>

            <Show when=move || nav.with(|n| n.mobile_menu_open())>
                <MobileMenu nav=nav pathname=pathname />
            </Show>
        </nav>
    }
}

/// Link highlighted only on an exact path match
#[component]
fn HeaderLink(link: NavLink, pathname: Memo<String>) -> impl IntoView {
    view! {
        <A
            href=link.href()
            class=move || if pathname.with(|p| link.is_active(p)) { "nav-link active" } else { "nav-link" }
        >
            {link.label}
        </A>
    }
}

#[component]
fn MobileMenu(nav: RwSignal<NavigationState>, pathname: Memo<String>) -> impl IntoView {
    view! {
        <Reveal step=presets::menu_slide_in() class="mobile-menu">
            <div class="mobile-menu-header">
                <ThemeToggle />
                <button
                    class="menu-close"
                    aria-label="Close menu"
                    on:click=move |_| nav.update(|n| n.close_menu())
                >
                    "✕"
                </button>
            </div>
            <ul class="mobile-links">
                {NAV_LINKS
                    .iter()
                    .map(|link| view! {
                        <li on:click=move |_| nav.update(|n| n.on_link_activated())>
                            <HeaderLink link=*link pathname=pathname />
                        </li>
                    })
                    .collect_view()}
            </ul>
        </Reveal>
    }
}

/// Light/dark switch
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| state.toggle_theme()
        >
            {move || match theme.with(|t| t.get()) {
                ThemeToken::Light => "☾",
                ThemeToken::Dark => "☀",
            }}
        </button>
    }
}
