use super::*;
use crate::facets::WILDCARD;
use gamelist_core::StdFileSystem;

const NATIVE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Data>
  <jeux>
    <jeu id="2" romid="20" notgame="false">
      <path>parent.zip</path>
      <noms><nom region="wor">Metal Slug</nom></noms>
      <cloneof>0</cloneof>
      <systeme id="142">Neo-Geo</systeme>
      <dates><date region="wor">1996</date></dates>
      <genres><genre id="1" principale="1" parentid="0" langue="en">Shooter</genre></genres>
      <joueurs>1-2</joueurs>
    </jeu>
    <jeu id="1" romid="10" notgame="false">
      <path>game.zip</path>
      <noms><nom region="wor">Alpha Mission</nom></noms>
      <cloneof>0</cloneof>
      <systeme id="6">CPS-1</systeme>
      <joueurs>2</joueurs>
    </jeu>
    <jeu id="3" romid="30" notgame="false">
      <path>clone.zip</path>
      <noms><nom region="ss">Metal Slug (clone)</nom></noms>
      <cloneof>20</cloneof>
      <systeme id="142">Neo-Geo</systeme>
      <joueurs>1-2</joueurs>
    </jeu>
  </jeux>
</Data>"#;

fn list(available: &[&str]) -> GameList {
    let available = available.iter().map(|s| s.to_string()).collect();
    GameList::from_xml_str(NATIVE, &available).unwrap()
}

fn paths(list: &GameList) -> Vec<&str> {
    list.games().iter().map(|g| g.path.as_str()).collect()
}

#[test]
fn test_games_sorted_by_name() {
    let list = list(&[]);
    assert_eq!(list.format, Format::Native);
    assert_eq!(list.len(), 3);
    assert_eq!(paths(&list), ["game.zip", "parent.zip", "clone.zip"]);
}

#[test]
fn test_facets_built_on_load() {
    let list = list(&[]);
    assert_eq!(list.facet_values(Facet::System), ["All", "CPS-1", "Neo-Geo"]);
    assert_eq!(list.facet_values(Facet::Players), ["All", "1-2", "2"]);
    assert_eq!(list.facet_values(Facet::Date), ["All", "1996"]);
    assert_eq!(list.facet_values(Facet::Genre), ["All", "Shooter"]);
}

#[test]
fn test_find_exist_remove() {
    let mut list = list(&[]);
    assert_eq!(list.find("20").map(|g| g.name()), Some("Metal Slug"));
    assert!(list.find("99").is_none());
    assert!(list.exist("10"));
    assert!(!list.exist(""));

    assert!(list.remove("10"));
    assert!(!list.exist("10"));
    assert_eq!(list.len(), 2);
    assert!(!list.remove("10"));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_available_count() {
    let list = list(&["game.zip", "clone.zip", "missing.zip"]);
    assert_eq!(list.available_count(), 2);
    assert!(list.find("10").is_some_and(|g| g.available));
    assert!(list.find("20").is_some_and(|g| !g.available));
}

#[test]
fn test_filter_all_wildcards_is_identity() {
    let list = list(&[]);
    let filtered = list.filter_by(
        false, true, WILDCARD, WILDCARD, WILDCARD, WILDCARD, WILDCARD, WILDCARD, WILDCARD,
        WILDCARD, WILDCARD, WILDCARD,
    );
    assert_eq!(filtered.games(), list.games());
    assert_eq!(filtered.facets(), list.facets());
}

#[test]
fn test_filter_by_system_and_clones() {
    let list = list(&["clone.zip"]);

    let neo = list.filter(&GameFilter::new().with(Facet::System, "Neo-Geo"));
    assert_eq!(paths(&neo), ["parent.zip", "clone.zip"]);
    assert_eq!(neo.facets(), list.facets());

    let parents = neo.filter(&GameFilter::new().include_clones(false));
    assert_eq!(paths(&parents), ["parent.zip"]);

    let available = list.filter(&GameFilter::new().available_only(true));
    assert_eq!(paths(&available), ["clone.zip"]);
}

#[test]
fn test_filter_is_idempotent() {
    let list = list(&[]);
    let filter = GameFilter::new().with(Facet::Players, "1-2");
    let once = list.filter(&filter);
    let twice = once.filter(&filter);
    assert_eq!(once.games(), twice.games());
}

#[test]
fn test_filter_no_match_keeps_facets() {
    let list = list(&[]);
    let none = list.filter(&GameFilter::new().with(Facet::System, "Atari 2600"));
    assert!(none.is_empty());
    assert_eq!(none.facet_values(Facet::System), ["All", "CPS-1", "Neo-Geo"]);
}

#[test]
fn test_unknown_root_is_schema_error() {
    let result = GameList::from_xml_str("<games/>", &HashSet::new());
    assert!(matches!(result, Err(GameListError::Schema(_))));
}

#[test]
fn test_malformed_is_parse_error() {
    let result = GameList::from_xml_str("<Data><jeux>", &HashSet::new());
    assert!(matches!(result, Err(GameListError::Parse(_))));
}

#[test]
fn test_default_list_is_empty() {
    let list = GameList::default();
    assert!(list.is_empty());
    assert_eq!(list.available_count(), 0);
    assert_eq!(list.facet_values(Facet::Rating), [WILDCARD]);
}

#[test]
fn test_load_missing_rom_dir_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let xml = dir.path().join("gamelist.xml");
    std::fs::write(&xml, NATIVE).unwrap();

    let options = LoadOptions::default().with_rom_dir(dir.path().join("missing"));
    let list = GameList::load(&xml, &options, &StdFileSystem).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.available_count(), 0);
    assert_eq!(list.xml_path.as_deref(), Some(xml.as_path()));
}

#[test]
fn test_load_missing_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = GameList::load(
        &dir.path().join("nope.xml"),
        &LoadOptions::default(),
        &StdFileSystem,
    );
    assert!(matches!(result, Err(GameListError::Parse(_))));
}
