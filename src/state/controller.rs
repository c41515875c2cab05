//! Presentation state controller.
//!
//! DESIGN
//! ======
//! The controller is a `Copy` handle (reactive cells plus a stored reference
//! to the preference store) provided once via context. Views read the cells
//! through the read-only accessors and mutate exclusively through the
//! operation methods, so every legal transition lives in this module.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::state::modal::LegalDoc;
use crate::state::reveal::{Region, RevealSet};
use crate::state::scroll::ScrollFlags;
use crate::state::theme::Theme;
use crate::util::dark_mode;
use crate::util::storage::{CONSENT_KEY, PreferenceStore, THEME_KEY};

#[derive(Clone, Copy)]
pub struct PageController {
    theme: RwSignal<Theme>,
    active_modal: RwSignal<Option<LegalDoc>>,
    scroll: RwSignal<ScrollFlags>,
    cookie_banner_visible: RwSignal<bool>,
    revealed: RwSignal<RevealSet>,
    store: StoredValue<Rc<dyn PreferenceStore>, LocalStorage>,
}

impl PageController {
    /// Seed initial state from the preference store and the one-shot system
    /// color-scheme signal.
    ///
    /// The resolved theme is applied to the document before the signal is
    /// created, so the page never paints in the wrong mode.
    pub fn new(store: Rc<dyn PreferenceStore>, system_prefers_dark: bool) -> Self {
        let theme = Theme::resolve_initial(store.read(THEME_KEY).as_deref(), system_prefers_dark);
        dark_mode::apply(theme);

        let consented = store.read(CONSENT_KEY).as_deref() == Some("true");

        Self {
            theme: RwSignal::new(theme),
            active_modal: RwSignal::new(None),
            scroll: RwSignal::new(ScrollFlags::default()),
            cookie_banner_visible: RwSignal::new(!consented),
            revealed: RwSignal::new(RevealSet::default()),
            store: StoredValue::new_local(store),
        }
    }

    #[must_use]
    pub fn theme(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }

    #[must_use]
    pub fn active_modal(&self) -> ReadSignal<Option<LegalDoc>> {
        self.active_modal.read_only()
    }

    #[must_use]
    pub fn scroll(&self) -> ReadSignal<ScrollFlags> {
        self.scroll.read_only()
    }

    #[must_use]
    pub fn cookie_banner_visible(&self) -> ReadSignal<bool> {
        self.cookie_banner_visible.read_only()
    }

    #[must_use]
    pub fn revealed(&self) -> ReadSignal<RevealSet> {
        self.revealed.read_only()
    }

    /// Flip the theme, keeping the document class and the persisted value in
    /// step with the signal within the same synchronous call.
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().opposite();
        dark_mode::apply(next);
        self.theme.set(next);
        self.store.with_value(|store| store.write(THEME_KEY, next.as_str()));
    }

    /// Present `doc`, replacing whatever dialog is already on screen.
    pub fn open_modal(&self, doc: LegalDoc) {
        self.active_modal.set(Some(doc));
    }

    /// Dismiss the active dialog. Closing with nothing open is a no-op.
    pub fn close_modal(&self) {
        if self.active_modal.get_untracked().is_some() {
            self.active_modal.set(None);
        }
    }

    /// Record consent durably and hide the banner for this page lifetime.
    pub fn accept_cookies(&self) {
        self.store.with_value(|store| store.write(CONSENT_KEY, "true"));
        if self.cookie_banner_visible.get_untracked() {
            self.cookie_banner_visible.set(false);
        }
    }

    /// Scroll sampler entry point: recompute both flags from the offset,
    /// notifying subscribers only when a flag actually changed.
    pub fn on_scroll_offset(&self, offset: f64) {
        let flags = ScrollFlags::at_offset(offset);
        if flags != self.scroll.get_untracked() {
            self.scroll.set(flags);
        }
    }

    /// Intersection watcher entry point. Re-marking an already revealed
    /// region is a no-op, so reveal state never regresses or renotifies.
    pub fn mark_revealed(&self, region: Region) {
        if self.revealed.with_untracked(|set| set.contains(region)) {
            return;
        }
        self.revealed.update(|set| {
            set.mark(region);
        });
    }
}
