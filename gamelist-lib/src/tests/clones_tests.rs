use super::*;
use crate::format::Format;
use gamelist_core::LocalizedText;
use gamelist_dat::DatGame;

fn game(name: &str, path: &str, rom_id: &str, clone_of: &str) -> Game {
    Game {
        rom_id: rom_id.into(),
        path: path.into(),
        clone_of: clone_of.into(),
        names: vec![LocalizedText::new("wor", name)],
        ..Game::default()
    }
}

fn dat_game(name: &str, clone_of: Option<&str>) -> DatGame {
    DatGame {
        name: name.into(),
        description: name.to_uppercase(),
        clone_of: clone_of.map(str::to_string),
    }
}

fn dat(games: Vec<DatGame>) -> DatFile {
    DatFile {
        name: "FinalBurn Neo - Arcade Games".into(),
        games,
        ..DatFile::default()
    }
}

#[test]
fn test_reference_games() {
    let dat = dat(vec![dat_game("sf2", None), dat_game("sf2ce", Some("sf2"))]);
    let reference = reference_games(&dat, "zip");
    assert_eq!(reference.len(), 2);
    assert_eq!(reference[0].path, "sf2.zip");
    assert_eq!(reference[0].clone_of, "");
    assert_eq!(reference[1].name(), "SF2CE");
    assert_eq!(reference[1].clone_of, "sf2");
}

#[test]
fn test_fixes_missing_link() {
    let mut list = GameList::from_games(
        vec![
            game("Game", "game.zip", "10", "0"),
            game("Parent", "parent.zip", "20", "0"),
        ],
        Format::Native,
    );
    let dat = dat(vec![dat_game("game", Some("parent")), dat_game("parent", None)]);

    let report = list.fix_clones_with(&dat, "zip");

    assert_eq!(list.find("10").map(|g| g.clone_of.as_str()), Some("20"));
    assert_eq!(list.find("20").map(|g| g.clone_of.as_str()), Some("0"));
    assert_eq!(
        report.fixed,
        [CloneFix {
            name: "Game".into(),
            path: "game.zip".into(),
            rom_id: "10".into(),
            parent_name: "Parent".into(),
            parent_path: "parent.zip".into(),
            parent_rom_id: "20".into(),
        }]
    );
    assert_eq!(report.not_a_clone, 1);
    assert_eq!(report.total_checked(), 2);
}

#[test]
fn test_self_parent_is_reported_not_applied() {
    // Two archives sharing one rom id: the link would point the game at itself.
    let mut list = GameList::from_games(
        vec![
            game("Game", "game.zip", "10", "0"),
            game("Parent", "parent.zip", "10", "0"),
        ],
        Format::Native,
    );
    let dat = dat(vec![dat_game("game", Some("parent")), dat_game("parent", None)]);

    let report = list.fix_clones_with(&dat, "zip");

    assert!(report.fixed.is_empty());
    assert_eq!(report.inconsistent.len(), 1);
    assert_eq!(report.inconsistent[0].path, "game.zip");
    assert!(list.games().iter().all(|g| !g.is_clone()));
    assert!(list.games().iter().all(|g| g.clone_of != g.rom_id));
}

#[test]
fn test_existing_clones_are_skipped() {
    let mut list = GameList::from_games(
        vec![
            game("Game", "game.zip", "10", "33"),
            game("Parent", "parent.zip", "20", "0"),
        ],
        Format::Native,
    );
    let dat = dat(vec![dat_game("game", Some("parent")), dat_game("parent", None)]);

    let report = list.fix_clones_with(&dat, "zip");

    assert_eq!(list.find("10").map(|g| g.clone_of.as_str()), Some("33"));
    assert!(report.fixed.is_empty());
    assert_eq!(report.total_checked(), 1);
}

#[test]
fn test_unresolved_games_are_counted() {
    let mut list = GameList::from_games(
        vec![
            game("Homebrew", "homebrew.zip", "1", "0"),
            game("Orphan", "orphan.zip", "2", "0"),
        ],
        Format::Native,
    );
    let dat = dat(vec![dat_game("orphan", Some("missingparent"))]);

    let report = list.fix_clones_with(&dat, "zip");

    assert_eq!(report.not_in_reference, 1);
    assert_eq!(report.parent_missing, 1);
    assert!(report.fixed.is_empty());
    assert!(list.games().iter().all(|g| !g.is_clone()));
}

#[test]
fn test_rom_extension_is_used_for_join() {
    let mut list = GameList::from_games(
        vec![
            game("Game", "game.7z", "10", "0"),
            game("Parent", "parent.7z", "20", "0"),
        ],
        Format::Native,
    );
    let dat = dat(vec![dat_game("game", Some("parent")), dat_game("parent", None)]);

    let report = list.fix_clones_with(&dat, "zip");
    assert_eq!(report.not_in_reference, 2);

    let report = list.fix_clones_with(&dat, "7z");
    assert_eq!(report.fixed.len(), 1);
    assert_eq!(list.find("10").map(|g| g.clone_of.as_str()), Some("20"));
}

#[test]
fn test_missing_dat_is_reference_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut list = GameList::default();
    let result = list.fix_clones(&dir.path().join("missing.dat"), "zip");
    assert!(matches!(result, Err(GameListError::ReferenceLoad(_))));
}

#[test]
fn test_truncated_dat_is_reference_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.dat");
    std::fs::write(
        &path,
        "<datafile>\n  <game name=\"game\" cloneof=\"parent\">\n    <description>Game</description>\n  </game>\n  <game name=\"parent\">\n",
    )
    .unwrap();

    let mut list = GameList::from_games(
        vec![
            game("Game", "game.zip", "10", "0"),
            game("Parent", "parent.zip", "20", "0"),
        ],
        Format::Native,
    );
    let result = list.fix_clones(&path, "zip");
    assert!(matches!(result, Err(GameListError::ReferenceLoad(_))));
    assert!(list.games().iter().all(|g| !g.is_clone()));
}
