//! # chambers
//!
//! Single-page profile site for a private legal practice, rendered entirely
//! in the browser with Leptos. The interactive surface is a small state
//! machine: a persisted theme preference, scroll-derived chrome flags,
//! one-shot reveal-on-scroll regions, a legal-document overlay, and a
//! cookie-consent gate.
//!
//! The crate compiles natively with no features so the state machine is
//! testable on the host; the `web` feature enables the browser glue and is
//! what Trunk builds.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;
