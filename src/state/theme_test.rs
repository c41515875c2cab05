use super::*;

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn stored_dark_wins_over_light_system() {
    assert_eq!(Theme::resolve_initial(Some("dark"), false), Theme::Dark);
}

#[test]
fn stored_light_wins_over_dark_system() {
    assert_eq!(Theme::resolve_initial(Some("light"), true), Theme::Light);
}

#[test]
fn unknown_stored_value_resolves_to_light() {
    assert_eq!(Theme::resolve_initial(Some("blue"), true), Theme::Light);
    assert_eq!(Theme::resolve_initial(Some(""), true), Theme::Light);
}

#[test]
fn system_signal_decides_when_nothing_stored() {
    assert_eq!(Theme::resolve_initial(None, true), Theme::Dark);
    assert_eq!(Theme::resolve_initial(None, false), Theme::Light);
}

// =============================================================
// Tokens and toggling
// =============================================================

#[test]
fn tokens_round_trip_through_resolution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::resolve_initial(Some(theme.as_str()), false), theme);
    }
}

#[test]
fn opposite_is_an_involution() {
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
    assert_eq!(Theme::Dark.opposite(), Theme::Light);
    assert_eq!(Theme::Light.opposite().opposite(), Theme::Light);
}

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}
