//! Document-level dark mode glue.
//!
//! Applies the active [`Theme`] as a `dark` class on the `<html>` element and
//! reads the system color-scheme signal. Requires a browser environment;
//! native builds no-op so state logic stays testable on the host.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Theme;

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "web")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                match theme {
                    Theme::Dark => {
                        let _ = class_list.add_1("dark");
                    }
                    Theme::Light => {
                        let _ = class_list.remove_1("dark");
                    }
                }
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = theme;
    }
}

/// One-shot read of the user agent's `prefers-color-scheme` signal.
///
/// Queried once at startup only; the site does not follow live scheme
/// changes after load.
#[must_use]
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "web")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "web"))]
    {
        false
    }
}
