use super::*;

#[test]
fn top_of_page_sets_neither_flag() {
    let flags = ScrollFlags::at_offset(0.0);
    assert!(!flags.past_header);
    assert!(!flags.past_scroll_top);
}

#[test]
fn just_past_header_threshold_sets_only_header_flag() {
    let flags = ScrollFlags::at_offset(51.0);
    assert!(flags.past_header);
    assert!(!flags.past_scroll_top);
}

#[test]
fn past_both_thresholds_sets_both_flags() {
    let flags = ScrollFlags::at_offset(501.0);
    assert!(flags.past_header);
    assert!(flags.past_scroll_top);
}

#[test]
fn thresholds_are_strict_greater_than() {
    assert!(!ScrollFlags::at_offset(HEADER_OFFSET).past_header);
    assert!(!ScrollFlags::at_offset(SCROLL_TOP_OFFSET).past_scroll_top);
}

#[test]
fn flags_are_a_pure_function_of_offset() {
    let a = ScrollFlags::at_offset(320.0);
    let b = ScrollFlags::at_offset(320.0);
    assert_eq!(a, b);
}

#[test]
fn default_matches_top_of_page() {
    assert_eq!(ScrollFlags::default(), ScrollFlags::at_offset(0.0));
}
