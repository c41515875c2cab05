//! Reveal-on-scroll regions and the monotonic revealed set.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

/// Page blocks that fade in the first time they become sufficiently visible.
///
/// The hero is not listed: it is visible from the first paint and is never
/// observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    PracticeIntro,
    AboutText,
    AboutPortrait,
    ContactIntro,
    ContactCard,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::PracticeIntro,
        Region::AboutText,
        Region::AboutPortrait,
        Region::ContactIntro,
        Region::ContactCard,
    ];

    /// Value of the `data-reveal` attribute carried by the region's element.
    #[must_use]
    pub fn attr(self) -> &'static str {
        match self {
            Region::PracticeIntro => "practice-intro",
            Region::AboutText => "about-text",
            Region::AboutPortrait => "about-portrait",
            Region::ContactIntro => "contact-intro",
            Region::ContactCard => "contact-card",
        }
    }

    /// Inverse of [`Region::attr`], used by the intersection callback to map
    /// a DOM target back to its region.
    #[must_use]
    pub fn from_attr(value: &str) -> Option<Region> {
        match value {
            "practice-intro" => Some(Region::PracticeIntro),
            "about-text" => Some(Region::AboutText),
            "about-portrait" => Some(Region::AboutPortrait),
            "contact-intro" => Some(Region::ContactIntro),
            "contact-card" => Some(Region::ContactCard),
            _ => None,
        }
    }
}

/// Set of regions that have been revealed.
///
/// Insert-only: there is no API to take a region back out, so reveal state
/// cannot regress when a region scrolls out of view again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: HashSet<Region>,
}

impl RevealSet {
    /// Mark `region` revealed. Returns `true` only the first time.
    pub fn mark(&mut self, region: Region) -> bool {
        self.revealed.insert(region)
    }

    #[must_use]
    pub fn contains(&self, region: Region) -> bool {
        self.revealed.contains(&region)
    }
}
