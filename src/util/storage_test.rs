#![cfg(not(feature = "web"))]

use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    store.write(THEME_KEY, "dark");
    assert_eq!(store.read(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn memory_store_overwrites_an_existing_key() {
    let store = MemoryStore::default();
    store.write(THEME_KEY, "dark");
    store.write(THEME_KEY, "light");
    assert_eq!(store.read(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryStore::default();
    store.write(CONSENT_KEY, "true");
    assert!(store.read(THEME_KEY).is_none());
    assert_eq!(store.read(CONSENT_KEY).as_deref(), Some("true"));
}

#[test]
fn browser_store_reads_absent_without_a_browser() {
    let store = BrowserStore;
    assert!(store.read(THEME_KEY).is_none());
}

#[test]
fn browser_store_write_is_noop_but_callable() {
    let store = BrowserStore;
    store.write(CONSENT_KEY, "true");
    assert!(store.read(CONSENT_KEY).is_none());
}
