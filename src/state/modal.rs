//! Legal-document dialog identifiers.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// The closed set of documents the footer can open in the overlay.
///
/// At most one is presented at a time; opening another replaces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalDoc {
    Terms,
    DataPolicy,
    Privacy,
}
