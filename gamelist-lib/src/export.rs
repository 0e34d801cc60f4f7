//! Game list serialization to either schema.

use std::path::Path;

use gamelist_core::{Game, REGION_SCREENSCRAPER};

use crate::error::GameListError;
use crate::format::{FRONTEND_MEDIA_SLOTS, Format, NATIVE_MEDIA_TYPES};
use crate::gamelist::{GameList, sort_by_name};
use crate::xml::XmlWriter;

impl GameList {
    /// Write the list to `dst` in `format`.
    ///
    /// Language-scoped fields are restricted to (native) or resolved for
    /// (frontend) `language`. On failure the list itself is left untouched.
    pub fn save(&self, dst: &Path, language: &str, format: Format) -> Result<(), GameListError> {
        let xml = self.render(language, format);
        std::fs::write(dst, xml)
            .map_err(|e| GameListError::write(format!("{}: {e}", dst.display())))?;
        log::debug!(
            "Saved {} games to {} ({format} format)",
            self.len(),
            dst.display()
        );
        Ok(())
    }

    /// Render the document, games sorted by display name.
    pub fn render(&self, language: &str, format: Format) -> String {
        let mut games: Vec<&Game> = self.games().iter().collect();
        sort_by_name(&mut games);

        let mut xml = XmlWriter::new();
        xml.open(format.root_tag(), &[]);
        if let Some(wrapper) = format.wrapper_tag() {
            xml.open(wrapper, &[]);
        }

        for game in games {
            match format {
                Format::Native => write_native_game(&mut xml, game, language),
                Format::Frontend => write_frontend_game(&mut xml, game, language),
            }
        }

        if let Some(wrapper) = format.wrapper_tag() {
            xml.close(wrapper);
        }
        xml.close(format.root_tag());
        xml.finish()
    }
}

fn write_frontend_game(xml: &mut XmlWriter, game: &Game, language: &str) {
    xml.open(
        Format::Frontend.game_tag(),
        &[("id", game.id.as_str()), ("source", game.source.as_str())],
    );
    xml.tag("path", game.path.as_str());
    xml.tag("name", game.name());
    xml.tag("desc", game.synopsis(language));
    xml.tag("rating", game.rating.as_str());
    xml.tag("releasedate", game.date());
    xml.tag("developer", game.developer.text.as_str());
    xml.tag("publisher", game.editor.text.as_str());
    xml.tag("genre", game.genre(language));
    xml.tag("players", game.players.as_str());

    for (tag, media_type) in FRONTEND_MEDIA_SLOTS {
        if let Some(media) = game.media(media_type, REGION_SCREENSCRAPER)
            && !media.url.is_empty()
        {
            xml.tag(tag, &media.export_path(&game.path));
        }
    }

    xml.close(Format::Frontend.game_tag());
}

fn write_native_game(xml: &mut XmlWriter, game: &Game, language: &str) {
    let not_game = if game.not_game { "true" } else { "false" };
    xml.open(
        Format::Native.game_tag(),
        &[
            ("id", game.id.as_str()),
            ("romid", game.rom_id.as_str()),
            ("notgame", not_game),
        ],
    );
    xml.tag("path", game.path.as_str());

    xml.open("noms", &[]);
    for name in &game.names {
        xml.leaf("nom", &[("region", name.locale.as_str())], &name.text);
    }
    xml.close("noms");

    xml.open("regions", &[]);
    for country in &game.countries {
        xml.tag("region", country);
    }
    xml.close("regions");

    xml.tag("cloneof", game.clone_of.as_str());

    if game.system.id.is_empty() {
        xml.tag("systeme", "");
    } else {
        xml.leaf("systeme", &[("id", game.system.id.as_str())], &game.system.text);
    }

    xml.open("synopsis", &[]);
    for synopsis in game.synopses.iter().filter(|s| s.locale == language) {
        xml.leaf("synopsis", &[("langue", synopsis.locale.as_str())], &synopsis.text);
    }
    xml.close("synopsis");

    xml.open("medias", &[]);
    for media in game
        .medias
        .iter()
        .filter(|m| NATIVE_MEDIA_TYPES.contains(&m.media_type.as_str()))
    {
        let url = if media.url.is_empty() {
            String::new()
        } else {
            media.export_path(&game.path)
        };
        xml.leaf(
            "media",
            &[
                ("parent", media.parent.as_str()),
                ("type", media.media_type.as_str()),
                ("region", media.region.as_str()),
                ("crc", media.crc.as_str()),
                ("md5", media.md5.as_str()),
                ("sha1", media.sha1.as_str()),
                ("format", media.format.as_str()),
                ("support", media.support.as_str()),
            ],
            &url,
        );
    }
    xml.close("medias");

    xml.open("dates", &[]);
    for date in &game.dates {
        xml.leaf("date", &[("region", date.locale.as_str())], &date.text);
    }
    xml.close("dates");

    xml.leaf("developpeur", &[("id", game.developer.id.as_str())], &game.developer.text);
    xml.leaf("editeur", &[("id", game.editor.id.as_str())], &game.editor.text);

    xml.open("genres", &[]);
    for genre in game.genres.iter().filter(|g| g.language == language) {
        let main = if genre.is_main { "1" } else { "0" };
        xml.leaf(
            "genre",
            &[
                ("id", genre.id.as_str()),
                ("principale", main),
                ("parentid", genre.parent_id.as_str()),
                ("langue", genre.language.as_str()),
            ],
            &genre.text,
        );
    }
    xml.close("genres");

    xml.tag("joueurs", game.players.as_str());
    xml.tag("topstaff", game.topstaff.as_str());
    xml.tag("note", game.rating.as_str());
    xml.tag("rotation", game.rotation.as_str());
    xml.tag("resolution", game.resolution.as_str());
    xml.tag("controles", game.inputs.as_str());
    xml.tag("couleurs", game.colors.as_str());

    xml.close(Format::Native.game_tag());
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
