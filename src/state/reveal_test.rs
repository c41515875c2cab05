use super::*;

// =============================================================
// Region attribute mapping
// =============================================================

#[test]
fn attr_round_trips_for_every_region() {
    for region in Region::ALL {
        assert_eq!(Region::from_attr(region.attr()), Some(region));
    }
}

#[test]
fn unknown_attr_maps_to_none() {
    assert_eq!(Region::from_attr("hero"), None);
    assert_eq!(Region::from_attr(""), None);
}

#[test]
fn attrs_are_distinct() {
    for (i, a) in Region::ALL.iter().enumerate() {
        for (j, b) in Region::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.attr(), b.attr());
            }
        }
    }
}

// =============================================================
// RevealSet monotonicity
// =============================================================

#[test]
fn fresh_set_contains_nothing() {
    let set = RevealSet::default();
    for region in Region::ALL {
        assert!(!set.contains(region));
    }
}

#[test]
fn mark_is_first_time_only() {
    let mut set = RevealSet::default();
    assert!(set.mark(Region::AboutText));
    assert!(!set.mark(Region::AboutText));
    assert!(set.contains(Region::AboutText));
}

#[test]
fn marked_regions_stay_marked() {
    let mut set = RevealSet::default();
    set.mark(Region::ContactCard);
    set.mark(Region::PracticeIntro);
    set.mark(Region::ContactCard);
    assert!(set.contains(Region::ContactCard));
    assert!(set.contains(Region::PracticeIntro));
    assert!(!set.contains(Region::AboutPortrait));
}
