#![cfg(not(feature = "web"))]

use super::*;

#[test]
fn system_signal_reads_light_in_native_tests() {
    assert!(!system_prefers_dark());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
