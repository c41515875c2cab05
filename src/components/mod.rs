//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading
//! shared state from the controller provided via Leptos context.

pub mod about;
pub mod contact;
pub mod cookie_banner;
pub mod hero;
pub mod icons;
pub mod modal;
pub mod practice;
pub mod reveal;
pub mod scroll_top;
pub mod site_footer;
pub mod site_header;
