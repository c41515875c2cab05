//! Durable preference storage over browser `localStorage`.
//!
//! ERROR HANDLING
//! ==============
//! Persistence is best-effort: storage that is missing or blocked by browser
//! policy reads as absent and swallows writes, so preferences degrade to
//! in-memory defaults instead of failing the page.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Persisted theme token (`"dark"` / `"light"`).
pub const THEME_KEY: &str = "theme";

/// Persisted consent flag; only the exact token `"true"` counts as consent.
pub const CONSENT_KEY: &str = "cookie_consent";

/// Origin-scoped key/value store for the persisted preference flags.
///
/// The controller takes the store as a trait object so tests can substitute
/// [`MemoryStore`] for the browser.
pub trait PreferenceStore {
    /// Read `key`, treating any storage failure as absent.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `key`, ignoring storage failures.
    fn write(&self, key: &str, value: &str);
}

/// `localStorage`-backed store used by the running site.
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "web")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "web")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store for tests and storage-less environments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
