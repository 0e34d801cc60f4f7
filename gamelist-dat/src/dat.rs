use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::DatError;

/// A parsed Logiqx-style reference DAT (`<datafile>` root).
///
/// Arcade DATs (FBNeo, MAME) key games by archive name and record accurate
/// parent/clone relationships through the `cloneof` attribute.
#[derive(Debug, Clone, Default)]
pub struct DatFile {
    pub name: String,
    pub description: String,
    pub version: String,
    pub games: Vec<DatGame>,
}

/// A single game entry from a DAT file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatGame {
    /// Archive base name, without extension (e.g. "sf2ce")
    pub name: String,
    pub description: String,
    /// Parent archive base name, if this game is a clone
    pub clone_of: Option<String>,
}

impl DatGame {
    pub fn is_clone(&self) -> bool {
        self.clone_of.is_some()
    }

    /// Archive file name for this game, e.g. "sf2ce.zip". Empty when the
    /// game has no name.
    pub fn archive_name(&self, extension: &str) -> String {
        archive_name(&self.name, extension)
    }

    /// Archive file name of the parent game, if any.
    pub fn parent_archive_name(&self, extension: &str) -> Option<String> {
        self.clone_of
            .as_deref()
            .map(|parent| archive_name(parent, extension))
    }
}

fn archive_name(base: &str, extension: &str) -> String {
    if base.is_empty() {
        String::new()
    } else {
        format!("{base}.{extension}")
    }
}

/// Parse a reference DAT from a file path.
pub fn parse_dat_file(path: &std::path::Path) -> Result<DatFile, DatError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    parse_dat(reader)
}

/// Parse a reference DAT.
///
/// The document root must be `<datafile>` and contain at least one `<game>`.
pub fn parse_dat<R: BufRead>(reader: R) -> Result<DatFile, DatError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut dat = DatFile::default();

    let mut depth = 0usize;
    let mut in_header = false;
    let mut current_tag = String::new();
    let mut current_game: Option<DatGame> = None;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                check_root(depth, &tag_name)?;
                depth += 1;
                match tag_name.as_str() {
                    "header" => in_header = true,
                    "game" if depth == 2 => current_game = Some(parse_game_attributes(e)?),
                    _ => current_tag = tag_name,
                }
            }
            Event::Empty(ref e) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                check_root(depth, &tag_name)?;
                if tag_name == "game" && depth == 1 {
                    dat.games.push(parse_game_attributes(e)?);
                }
            }
            Event::Text(ref e) => {
                let text = e.unescape()?.to_string();
                set_text(&mut dat, current_game.as_mut(), in_header, &current_tag, text);
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                set_text(&mut dat, current_game.as_mut(), in_header, &current_tag, text);
            }
            Event::End(ref e) => {
                depth = depth.saturating_sub(1);
                match e.name().as_ref() {
                    b"header" => in_header = false,
                    b"game" if depth == 1 => {
                        if let Some(game) = current_game.take() {
                            dat.games.push(game);
                        }
                    }
                    _ => current_tag.clear(),
                }
            }
            Event::Eof => {
                if depth != 0 || current_game.is_some() {
                    return Err(DatError::invalid_dat(format!(
                        "unexpected end of document ({depth} unclosed elements)"
                    )));
                }
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    if dat.games.is_empty() {
        return Err(DatError::invalid_dat("No game entries found in DAT file"));
    }

    log::debug!(
        "Parsed DAT '{}' ({} games, {} clones)",
        dat.name,
        dat.games.len(),
        dat.games.iter().filter(|g| g.is_clone()).count(),
    );

    Ok(dat)
}

fn check_root(depth: usize, tag_name: &str) -> Result<(), DatError> {
    if depth == 0 && tag_name != "datafile" {
        return Err(DatError::invalid_dat(format!(
            "expected 'datafile' root element, found '{tag_name}'"
        )));
    }
    Ok(())
}

fn set_text(
    dat: &mut DatFile,
    game: Option<&mut DatGame>,
    in_header: bool,
    current_tag: &str,
    text: String,
) {
    if let Some(game) = game {
        if current_tag == "description" {
            game.description = text;
        }
    } else if in_header {
        match current_tag {
            "name" => dat.name = text,
            "description" => dat.description = text,
            "version" => dat.version = text,
            _ => {}
        }
    }
}

fn parse_game_attributes(e: &BytesStart<'_>) -> Result<DatGame, DatError> {
    let mut game = DatGame::default();

    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?.to_string();
        match attr.key.as_ref() {
            b"name" => game.name = value,
            b"cloneof" if !value.is_empty() => game.clone_of = Some(value),
            _ => {}
        }
    }

    Ok(game)
}

#[cfg(test)]
#[path = "tests/dat_tests.rs"]
mod tests;
