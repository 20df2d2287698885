//! Lightweight preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for small string preferences keyed by name.
pub trait PrefsStore {
    /// Loads the raw value stored under `key`.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Stores `value` under `key`.
    fn save_pref(&self, key: &str, value: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string. Clones share storage.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_prefs_store_round_trip_and_overwrite() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_pref("pref.key", "dark").expect("save");
        assert_eq!(
            store_obj.load_pref("pref.key").expect("load"),
            Some("dark".to_string())
        );
        store_obj.save_pref("pref.key", "light").expect("save");
        assert_eq!(
            store_obj.load_pref("pref.key").expect("load"),
            Some("light".to_string())
        );
        assert_eq!(store_obj.load_pref("other").expect("load"), None);
    }

    #[test]
    fn memory_prefs_store_clones_share_state() {
        let store = MemoryPrefsStore::default();
        let clone = store.clone();
        store.save_pref("k", "v").expect("save");
        assert_eq!(clone.load_pref("k").expect("load"), Some("v".to_string()));
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(store_obj.load_pref("k").expect("load"), None);
        store_obj.save_pref("k", "{}").expect("save");
    }
}
