//! Global Application State
//!
//! Reactive state management using Leptos signals. The stores themselves
//! are plain values from the core crate.

use folio::session::{load_snapshot, save_snapshot, SessionSnapshot, SessionStore};
use folio::{PreferenceStore, SiteConfig, ThemeStore};
use leptos::*;
use std::rc::Rc;

use super::storage::session_store;
use crate::api::ApiClient;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Active light/dark theme
    pub theme: RwSignal<ThemeStore>,
    /// Visitor profile
    pub preferences: RwSignal<PreferenceStore>,
    /// Timings and thresholds
    pub site: SiteConfig,
    /// Portfolio backend
    pub backend: ApiClient,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let store = session_store();
    let snapshot = load_snapshot(store.as_ref());

    let state = GlobalState {
        theme: create_rw_signal(ThemeStore::new(snapshot.theme)),
        preferences: create_rw_signal(PreferenceStore::new(snapshot.preferences)),
        site: SiteConfig::default(),
        backend: ApiClient::from_storage(),
    };

    persist_on_change(&state, store);
    provide_context(state);
}

/// Write a snapshot whenever theme or preferences change
fn persist_on_change(state: &GlobalState, store: Rc<dyn SessionStore>) {
    let theme = state.theme;
    let preferences = state.preferences;
    create_effect(move |_| {
        let snapshot = SessionSnapshot {
            theme: theme.with(ThemeStore::get),
            preferences: preferences.with(|p| p.get().clone()),
        };
        save_snapshot(store.as_ref(), &snapshot);
    });
}

impl GlobalState {
    pub fn toggle_theme(&self) {
        self.theme.update(|t| {
            t.toggle();
        });
    }

    /// CSS custom properties for the themed container
    pub fn theme_style(&self) -> String {
        self.theme.with(|t| t.values().css_variables())
    }

    pub fn theme_class(&self) -> String {
        self.theme.with(|t| format!("app theme-{}", t.get()))
    }
}
