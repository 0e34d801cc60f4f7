use super::*;

fn media(media_type: &str, region: &str, url: &str, format: &str) -> Media {
    Media {
        media_type: media_type.to_string(),
        region: region.to_string(),
        url: url.to_string(),
        format: format.to_string(),
        ..Media::default()
    }
}

#[test]
fn test_default_is_not_a_clone() {
    let game = Game::default();
    assert_eq!(game.clone_of, NOT_A_CLONE);
    assert!(!game.is_clone());
    assert!(!game.available);
}

#[test]
fn test_name_prefers_world() {
    let game = Game {
        names: vec![
            LocalizedText::new("ss", "Street Fighter II (ss)"),
            LocalizedText::new("wor", "Street Fighter II"),
        ],
        ..Game::default()
    };
    assert_eq!(game.name(), "Street Fighter II");
    assert_eq!(game.name_for("jp"), "Street Fighter II (ss)");
}

#[test]
fn test_empty_collections_resolve_to_empty_string() {
    let game = Game::default();
    assert_eq!(game.name(), "");
    assert_eq!(game.synopsis("fr"), "");
    assert_eq!(game.genre("en"), "");
    assert_eq!(game.date(), "");
    assert!(game.media("video", "ss").is_none());
}

#[test]
fn test_synopsis_falls_back_to_english() {
    let game = Game {
        synopses: vec![
            LocalizedText::new("de", "Deutsch"),
            LocalizedText::new("en", "English"),
        ],
        ..Game::default()
    };
    assert_eq!(game.synopsis("fr"), "English");
    assert_eq!(game.synopsis("de"), "Deutsch");
}

#[test]
fn test_genre_by_language() {
    let game = Game {
        genres: vec![
            Genre {
                id: "10".to_string(),
                language: "fr".to_string(),
                text: "Combat".to_string(),
                ..Genre::default()
            },
            Genre {
                id: "10".to_string(),
                language: "en".to_string(),
                text: "Fighting".to_string(),
                ..Genre::default()
            },
        ],
        ..Game::default()
    };
    assert_eq!(game.genre("en"), "Fighting");
    assert_eq!(game.genre("fr"), "Combat");
}

#[test]
fn test_media_selects_type_then_region() {
    let game = Game {
        medias: vec![
            media("box-3D", "ss", "http://x/box.png", "png"),
            media("mixrbv2", "wor", "http://x/wor.png", "png"),
            media("mixrbv2", "ss", "http://x/ss.png", "png"),
        ],
        ..Game::default()
    };
    assert_eq!(game.media("mixrbv2", "ss").unwrap().url, "http://x/ss.png");
    assert_eq!(game.media("mixrbv2", "jp").unwrap().url, "http://x/wor.png");
    assert_eq!(game.media("box-3D", "wor").unwrap().url, "http://x/box.png");
}

#[test]
fn test_remote_media_rewritten_to_local_path() {
    let m = media("mixrbv2", "ss", "http://x/y.png", "png");
    assert!(m.is_remote());
    assert_eq!(m.export_path("sonic.zip"), "media/mixrbv2/sonic.png");
}

#[test]
fn test_local_media_unchanged() {
    let m = media("mixrbv2", "ss", "local/already.png", "png");
    assert!(!m.is_remote());
    assert_eq!(m.export_path("sonic.zip"), "local/already.png");
}

#[test]
fn test_local_path_keeps_inner_dots() {
    let m = media("video", "ss", "https://x/v", "mp4");
    assert_eq!(m.local_path("sf2.ce.zip"), "media/video/sf2.ce.mp4");
    assert_eq!(m.local_path("noext"), "media/video/noext.mp4");
}

#[test]
fn test_reference_record() {
    let game = Game::reference("Street Fighter II (World 910522)", "sf2.zip", "");
    assert_eq!(game.name(), "Street Fighter II (World 910522)");
    assert_eq!(game.path, "sf2.zip");
    assert_eq!(game.clone_of, "");
    assert!(game.rom_id.is_empty());
}
