//! Session storage backed by `window.localStorage`

use folio::session::{MemoryStore, SessionStore};
use std::rc::Rc;

/// `localStorage` wrapper; write failures (quota, private mode) are logged
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl SessionStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            web_sys::console::warn_1(&format!("Failed to persist {}", key).into());
        }
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

/// Browser storage when available, otherwise an in-memory store
pub fn session_store() -> Rc<dyn SessionStore> {
    match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        Some(storage) => Rc::new(LocalStorage { storage }),
        None => {
            web_sys::console::warn_1(&"localStorage unavailable, settings won't persist".into());
            Rc::new(MemoryStore::new())
        }
    }
}
