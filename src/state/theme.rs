//! Theme preference model and startup resolution.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Site-wide presentation mode. Exactly one variant is active at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Token persisted in the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Resolve the startup theme.
    ///
    /// An explicit persisted value wins. Only the exact `"dark"` token selects
    /// dark mode; any other stored value means the user chose light. With
    /// nothing stored, the system color-scheme signal decides (read once at
    /// startup), defaulting to light.
    #[must_use]
    pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
        match stored {
            Some("dark") => Theme::Dark,
            Some(_) => Theme::Light,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}
