//! Session Persistence
//!
//! Theme and preferences survive a reload within the same browser session.
//! Storage is abstracted behind [`SessionStore`]; the UI backs it with
//! `localStorage`, tests and the CLI with [`MemoryStore`].

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::preferences::UserPreferences;
use crate::theme::ThemeToken;

/// Key under which the snapshot is stored
pub const SESSION_KEY: &str = "folio.session";

/// String key/value storage
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store used when no persistent backend is available
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Everything the site remembers between reloads
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSnapshot {
    pub theme: ThemeToken,
    pub preferences: UserPreferences,
}

/// Read the stored snapshot; missing or corrupt data yields defaults
pub fn load_snapshot(store: &dyn SessionStore) -> SessionSnapshot {
    let Some(raw) = store.read(SESSION_KEY) else {
        return SessionSnapshot::default();
    };

    match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unreadable session snapshot");
            store.remove(SESSION_KEY);
            SessionSnapshot::default()
        }
    }
}

pub fn save_snapshot(store: &dyn SessionStore, snapshot: &SessionSnapshot) {
    match serde_json::to_string(snapshot) {
        Ok(raw) => store.write(SESSION_KEY, &raw),
        Err(e) => tracing::warn!(error = %e, "Failed to serialize session snapshot"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{Experience, Mood};

    #[test]
    fn test_missing_snapshot_is_default() {
        let store = MemoryStore::new();
        assert_eq!(load_snapshot(&store), SessionSnapshot::default());
    }

    #[test]
    fn test_snapshot_survives_reload() {
        let store = MemoryStore::new();
        let snapshot = SessionSnapshot {
            theme: ThemeToken::Dark,
            preferences: UserPreferences {
                name: "Ada".to_string(),
                experience: Experience::Simple,
                mood: Mood::Focused,
                play_music: true,
            },
        };

        save_snapshot(&store, &snapshot);
        assert_eq!(load_snapshot(&store), snapshot);
    }

    #[test]
    fn test_corrupt_snapshot_discarded() {
        let store = MemoryStore::new();
        store.write(SESSION_KEY, "{not json");

        assert_eq!(load_snapshot(&store), SessionSnapshot::default());
        assert!(store.read(SESSION_KEY).is_none());
    }

    #[test]
    fn test_partial_snapshot_fills_defaults() {
        let store = MemoryStore::new();
        store.write(SESSION_KEY, r#"{"theme":"dark"}"#);

        let snapshot = load_snapshot(&store);
        assert_eq!(snapshot.theme, ThemeToken::Dark);
        assert!(snapshot.preferences.needs_capture());
    }
}
