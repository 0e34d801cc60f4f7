//! Game element → [`Game`] conversion for both schemas.

use gamelist_core::{
    Game, Genre, IdText, LANGUAGE_ENGLISH, LocalizedText, Media, NOT_A_CLONE,
    REGION_SCREENSCRAPER, REGION_WORLD,
};

use crate::format::{FRONTEND_MEDIA_SLOTS, Format};
use crate::xml::Element;

/// Parse one game element. The schema is taken from the element's tag.
pub fn parse_game(element: &Element) -> Game {
    if element.name == Format::Frontend.game_tag() {
        parse_frontend_game(element)
    } else {
        parse_native_game(element)
    }
}

fn parse_native_game(e: &Element) -> Game {
    Game {
        id: e.attr("id").to_string(),
        rom_id: e.attr("romid").to_string(),
        not_game: parse_flag(e.attr("notgame")),
        path: e.child_text("path").to_string(),
        names: localized(e, "noms", "nom", "region"),
        countries: e
            .child("regions")
            .map(|regions| {
                regions
                    .children_named("region")
                    .map(|r| r.text.clone())
                    .collect()
            })
            .unwrap_or_default(),
        clone_of: clone_of(e.child_text("cloneof")),
        system: id_text(e.child("systeme")),
        synopses: localized(e, "synopsis", "synopsis", "langue"),
        medias: e
            .child("medias")
            .map(|medias| medias.children_named("media").map(parse_media).collect())
            .unwrap_or_default(),
        dates: localized(e, "dates", "date", "region"),
        developer: id_text(e.child("developpeur")),
        editor: id_text(e.child("editeur")),
        genres: e
            .child("genres")
            .map(|genres| genres.children_named("genre").map(parse_genre).collect())
            .unwrap_or_default(),
        players: e.child_text("joueurs").to_string(),
        topstaff: e.child_text("topstaff").to_string(),
        rating: e.child_text("note").to_string(),
        rotation: e.child_text("rotation").to_string(),
        resolution: e.child_text("resolution").to_string(),
        inputs: e.child_text("controles").to_string(),
        colors: e.child_text("couleurs").to_string(),
        ..Game::default()
    }
}

fn parse_frontend_game(e: &Element) -> Game {
    let mut game = Game {
        id: e.attr("id").to_string(),
        source: e.attr("source").to_string(),
        path: e.child_text("path").to_string(),
        rating: e.child_text("rating").to_string(),
        developer: IdText::new("", e.child_text("developer")),
        editor: IdText::new("", e.child_text("publisher")),
        players: e.child_text("players").to_string(),
        ..Game::default()
    };

    if let Some(name) = non_empty(e.child_text("name")) {
        game.names.push(LocalizedText::new(REGION_WORLD, name));
    }
    if let Some(desc) = non_empty(e.child_text("desc")) {
        game.synopses.push(LocalizedText::new(LANGUAGE_ENGLISH, desc));
    }
    if let Some(date) = non_empty(e.child_text("releasedate")) {
        game.dates.push(LocalizedText::new(REGION_WORLD, date));
    }
    if let Some(genre) = non_empty(e.child_text("genre")) {
        game.genres.push(Genre {
            language: LANGUAGE_ENGLISH.to_string(),
            text: genre.to_string(),
            ..Genre::default()
        });
    }

    for (tag, media_type) in FRONTEND_MEDIA_SLOTS {
        if let Some(url) = non_empty(e.child_text(tag)) {
            game.medias.push(Media {
                media_type: media_type.to_string(),
                region: REGION_SCREENSCRAPER.to_string(),
                format: url_extension(url).to_string(),
                url: url.to_string(),
                ..Media::default()
            });
        }
    }

    game
}

fn parse_media(e: &Element) -> Media {
    Media {
        parent: e.attr("parent").to_string(),
        media_type: e.attr("type").to_string(),
        region: e.attr("region").to_string(),
        crc: e.attr("crc").to_string(),
        md5: e.attr("md5").to_string(),
        sha1: e.attr("sha1").to_string(),
        format: e.attr("format").to_string(),
        support: e.attr("support").to_string(),
        url: e.text.clone(),
    }
}

fn parse_genre(e: &Element) -> Genre {
    Genre {
        id: e.attr("id").to_string(),
        is_main: parse_flag(e.attr("principale")),
        parent_id: e.attr("parentid").to_string(),
        language: e.attr("langue").to_string(),
        text: e.text.clone(),
    }
}

/// `<list><item attr="..">text</item>...</list>` → localized texts.
fn localized(e: &Element, list: &str, item: &str, locale_attr: &str) -> Vec<LocalizedText> {
    e.child(list)
        .map(|list| {
            list.children_named(item)
                .map(|i| LocalizedText::new(i.attr(locale_attr), i.text.as_str()))
                .collect()
        })
        .unwrap_or_default()
}

fn id_text(e: Option<&Element>) -> IdText {
    e.map(|e| IdText::new(e.attr("id"), e.text.as_str()))
        .unwrap_or_default()
}

fn clone_of(text: &str) -> String {
    non_empty(text).unwrap_or(NOT_A_CLONE).to_string()
}

fn parse_flag(value: &str) -> bool {
    matches!(value, "1" | "true")
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

/// Extension of the last path segment of a URL or path, without the dot.
fn url_extension(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next().unwrap_or(path);
    file.rfind('.').map_or("", |dot| &file[dot + 1..])
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;
