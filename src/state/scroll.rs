//! Scroll-derived chrome flags.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Offset beyond which the fixed header switches to its condensed chrome.
pub const HEADER_OFFSET: f64 = 50.0;

/// Offset beyond which the back-to-top affordance is shown.
pub const SCROLL_TOP_OFFSET: f64 = 500.0;

/// Boolean projections of the vertical scroll offset.
///
/// Both flags are strict greater-than comparisons on the same offset, so the
/// struct is a pure function of scroll position: recomputed wholesale on each
/// sample, never patched incrementally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    pub past_header: bool,
    pub past_scroll_top: bool,
}

impl ScrollFlags {
    #[must_use]
    pub fn at_offset(offset: f64) -> Self {
        Self {
            past_header: offset > HEADER_OFFSET,
            past_scroll_top: offset > SCROLL_TOP_OFFSET,
        }
    }
}
