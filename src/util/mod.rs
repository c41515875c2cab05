//! Utility helpers shared across site modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability. Everything that touches
//! `web_sys` directly lives here, behind the `web` feature where the module
//! only makes sense in a browser.

pub mod dark_mode;
#[cfg(feature = "web")]
pub mod events;
pub mod storage;
#[cfg(feature = "web")]
pub mod viewport;
