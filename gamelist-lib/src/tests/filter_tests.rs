use super::*;
use gamelist_core::IdText;

fn game(system: &str, clone_of: &str, available: bool) -> Game {
    Game {
        system: IdText::new("", system),
        clone_of: clone_of.to_string(),
        available,
        ..Game::default()
    }
}

#[test]
fn test_default_matches_everything() {
    let filter = GameFilter::new();
    assert!(filter.matches(&game("CPS-1", "0", false)));
    assert!(filter.matches(&game("CPS-1", "12", true)));
    for facet in Facet::ALL {
        assert_eq!(filter.selection(facet), WILDCARD);
    }
}

#[test]
fn test_facet_selection_is_exact() {
    let filter = GameFilter::new().with(Facet::System, "CPS-1");
    assert!(filter.matches(&game("CPS-1", "0", false)));
    assert!(!filter.matches(&game("CPS-2", "0", false)));
    assert!(!filter.matches(&game("cps-1", "0", false)));
}

#[test]
fn test_wildcard_clears_selection() {
    let mut filter = GameFilter::new().with(Facet::System, "CPS-1");
    filter.set(Facet::System, WILDCARD);
    assert_eq!(filter.selection(Facet::System), WILDCARD);
    assert!(filter.matches(&game("Neo-Geo", "0", false)));
}

#[test]
fn test_available_only() {
    let filter = GameFilter::new().available_only(true);
    assert!(filter.matches(&game("", "0", true)));
    assert!(!filter.matches(&game("", "0", false)));
}

#[test]
fn test_exclude_clones() {
    let filter = GameFilter::new().include_clones(false);
    assert!(filter.matches(&game("", "0", false)));
    assert!(!filter.matches(&game("", "20", false)));
}

#[test]
fn test_all_conditions_combine() {
    let filter = GameFilter::new()
        .available_only(true)
        .include_clones(false)
        .with(Facet::System, "CPS-1");
    assert!(filter.matches(&game("CPS-1", "0", true)));
    assert!(!filter.matches(&game("CPS-1", "3", true)));
    assert!(!filter.matches(&game("CPS-1", "0", false)));
    assert!(!filter.matches(&game("CPS-2", "0", true)));
}
