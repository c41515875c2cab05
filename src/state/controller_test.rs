#![cfg(not(feature = "web"))]

use std::rc::Rc;

use super::*;
use crate::util::storage::MemoryStore;

fn fresh() -> (Rc<MemoryStore>, PageController) {
    let store = Rc::new(MemoryStore::default());
    let controller = PageController::new(store.clone(), false);
    (store, controller)
}

// =============================================================
// Theme
// =============================================================

#[test]
fn toggle_theme_alternates_and_persists() {
    let (store, controller) = fresh();
    assert_eq!(controller.theme().get_untracked(), Theme::Light);

    controller.toggle_theme();
    assert_eq!(controller.theme().get_untracked(), Theme::Dark);
    assert_eq!(store.read(THEME_KEY).as_deref(), Some("dark"));

    controller.toggle_theme();
    assert_eq!(controller.theme().get_untracked(), Theme::Light);
    assert_eq!(store.read(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn even_toggle_count_returns_to_initial_theme() {
    let (_, controller) = fresh();
    for _ in 0..4 {
        controller.toggle_theme();
    }
    assert_eq!(controller.theme().get_untracked(), Theme::Light);

    controller.toggle_theme();
    assert_eq!(controller.theme().get_untracked(), Theme::Dark);
}

#[test]
fn persisted_theme_never_drifts_from_memory() {
    let (store, controller) = fresh();
    for _ in 0..5 {
        controller.toggle_theme();
        assert_eq!(
            store.read(THEME_KEY).as_deref(),
            Some(controller.theme().get_untracked().as_str())
        );
    }
}

#[test]
fn startup_prefers_persisted_theme_over_system_signal() {
    let store = Rc::new(MemoryStore::default());
    store.write(THEME_KEY, "light");
    let controller = PageController::new(store, true);
    assert_eq!(controller.theme().get_untracked(), Theme::Light);
}

#[test]
fn startup_uses_dark_system_signal_when_nothing_persisted() {
    let controller = PageController::new(Rc::new(MemoryStore::default()), true);
    assert_eq!(controller.theme().get_untracked(), Theme::Dark);
}

// =============================================================
// Modal
// =============================================================

#[test]
fn open_modal_replaces_the_active_dialog() {
    let (_, controller) = fresh();
    assert_eq!(controller.active_modal().get_untracked(), None);

    controller.open_modal(LegalDoc::Terms);
    controller.open_modal(LegalDoc::Privacy);
    assert_eq!(controller.active_modal().get_untracked(), Some(LegalDoc::Privacy));
}

#[test]
fn close_modal_clears_and_is_idempotent() {
    let (_, controller) = fresh();
    controller.open_modal(LegalDoc::DataPolicy);
    controller.close_modal();
    assert_eq!(controller.active_modal().get_untracked(), None);

    controller.close_modal();
    assert_eq!(controller.active_modal().get_untracked(), None);
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn scroll_flags_follow_the_offset() {
    let (_, controller) = fresh();

    controller.on_scroll_offset(0.0);
    assert_eq!(controller.scroll().get_untracked(), ScrollFlags::at_offset(0.0));

    controller.on_scroll_offset(51.0);
    let flags = controller.scroll().get_untracked();
    assert!(flags.past_header);
    assert!(!flags.past_scroll_top);

    controller.on_scroll_offset(501.0);
    let flags = controller.scroll().get_untracked();
    assert!(flags.past_header);
    assert!(flags.past_scroll_top);
}

#[test]
fn scrolling_back_up_clears_the_flags() {
    let (_, controller) = fresh();
    controller.on_scroll_offset(900.0);
    controller.on_scroll_offset(0.0);
    assert_eq!(controller.scroll().get_untracked(), ScrollFlags::default());
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn marked_regions_survive_further_events() {
    let (_, controller) = fresh();
    controller.mark_revealed(Region::AboutText);

    // Scrolling away (or any later event) must not reset the region.
    controller.on_scroll_offset(0.0);
    controller.mark_revealed(Region::AboutText);
    assert!(controller.revealed().get_untracked().contains(Region::AboutText));
}

// =============================================================
// Cookie consent
// =============================================================

#[test]
fn banner_is_visible_without_stored_consent() {
    let (_, controller) = fresh();
    assert!(controller.cookie_banner_visible().get_untracked());
}

#[test]
fn accept_cookies_hides_banner_and_persists_consent() {
    let (store, controller) = fresh();
    controller.accept_cookies();
    assert!(!controller.cookie_banner_visible().get_untracked());
    assert_eq!(store.read(CONSENT_KEY).as_deref(), Some("true"));

    // Accepting again stays hidden and persisted.
    controller.accept_cookies();
    assert!(!controller.cookie_banner_visible().get_untracked());
}

#[test]
fn banner_stays_hidden_after_reinitialization() {
    let store = Rc::new(MemoryStore::default());
    let controller = PageController::new(store.clone(), false);
    controller.accept_cookies();

    let next_visit = PageController::new(store, false);
    assert!(!next_visit.cookie_banner_visible().get_untracked());
}

#[test]
fn non_true_consent_value_still_shows_banner() {
    let store = Rc::new(MemoryStore::default());
    store.write(CONSENT_KEY, "yes");
    let controller = PageController::new(store, false);
    assert!(controller.cookie_banner_visible().get_untracked());
}
