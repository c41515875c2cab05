//! Page modules.
//!
//! The site is a single composed view; `home` stacks the sections and the
//! floating overlays.

pub mod home;
