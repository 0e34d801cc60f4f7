use super::*;
use gamelist_core::{Genre, IdText, LocalizedText};

fn game(system: &str, players: &str, date: Option<&str>) -> Game {
    Game {
        system: IdText::new("1", system),
        players: players.to_string(),
        dates: date
            .map(|d| vec![LocalizedText::new("wor", d)])
            .unwrap_or_default(),
        ..Game::default()
    }
}

#[test]
fn test_empty_index_holds_only_wildcard() {
    let index = FacetIndex::default();
    for facet in Facet::ALL {
        assert_eq!(index.values(facet), [WILDCARD]);
    }
}

#[test]
fn test_sorted_distinct_with_wildcard_first() {
    let mut builder = FacetIndexBuilder::new();
    builder.observe(&game("Neo-Geo", "2", Some("1994")));
    builder.observe(&game("CPS-1", "1-2", Some("1991")));
    builder.observe(&game("Neo-Geo", "2", Some("1991")));
    let index = builder.finalize();

    assert_eq!(index.values(Facet::System), ["All", "CPS-1", "Neo-Geo"]);
    assert_eq!(index.values(Facet::Players), ["All", "1-2", "2"]);
    assert_eq!(index.values(Facet::Date), ["All", "1991", "1994"]);
}

#[test]
fn test_byte_order_not_locale_order() {
    let mut builder = FacetIndexBuilder::new();
    builder.observe(&game("atari", "", None));
    builder.observe(&game("Zeta", "", None));
    let index = builder.finalize();
    assert_eq!(index.values(Facet::System), ["All", "Zeta", "atari"]);
}

#[test]
fn test_empty_scalar_values_are_indexed() {
    let mut builder = FacetIndexBuilder::new();
    builder.observe(&Game::default());
    let index = builder.finalize();
    assert_eq!(index.values(Facet::Rotation), ["All", ""]);
}

#[test]
fn test_missing_dates_and_genres_are_skipped() {
    let mut builder = FacetIndexBuilder::new();
    builder.observe(&game("CPS-1", "2", None));
    let index = builder.finalize();
    assert_eq!(index.values(Facet::Date), [WILDCARD]);
    assert_eq!(index.values(Facet::Genre), [WILDCARD]);
}

#[test]
fn test_genre_uses_english_name() {
    let mut builder = FacetIndexBuilder::new();
    builder.observe(&Game {
        genres: vec![
            Genre {
                language: "fr".into(),
                text: "Combat".into(),
                ..Genre::default()
            },
            Genre {
                language: "en".into(),
                text: "Fighting".into(),
                ..Genre::default()
            },
        ],
        ..Game::default()
    });
    let index = builder.finalize();
    assert_eq!(index.values(Facet::Genre), ["All", "Fighting"]);
}

#[test]
fn test_wildcard_value_not_duplicated() {
    let mut builder = FacetIndexBuilder::new();
    builder.observe(&game("All", "1", None));
    let index = builder.finalize();
    assert_eq!(index.values(Facet::System), [WILDCARD]);
}

#[test]
fn test_facet_names() {
    assert_eq!(Facet::TopStaff.to_string(), "topstaff");
    assert_eq!(Facet::ALL.len(), 10);
}
