//! The two supported game list schemas.

use std::fmt;
use std::str::FromStr;

use crate::error::GameListError;
use crate::xml::{Document, Element};

/// Media types kept in native exports.
pub const NATIVE_MEDIA_TYPES: [&str; 3] = ["mixrbv2", "box-3D", "video"];

/// Frontend media elements and the media type each one is filled from.
pub const FRONTEND_MEDIA_SLOTS: [(&str, &str); 3] = [
    ("image", "mixrbv2"),
    ("thumbnail", "box-3D"),
    ("video", "video"),
];

/// Game list document schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// ScreenScraper's multi-locale schema: `<Data><jeux><jeu>...`
    #[default]
    Native,
    /// EmulationStation's single-locale schema: `<gameList><game>...`
    Frontend,
}

impl Format {
    /// Detection order: native first, then frontend.
    pub const ALL: [Format; 2] = [Format::Native, Format::Frontend];

    pub fn root_tag(self) -> &'static str {
        match self {
            Format::Native => "Data",
            Format::Frontend => "gameList",
        }
    }

    /// Container between the root and the game elements, if any.
    pub fn wrapper_tag(self) -> Option<&'static str> {
        match self {
            Format::Native => Some("jeux"),
            Format::Frontend => None,
        }
    }

    pub fn game_tag(self) -> &'static str {
        match self {
            Format::Native => "jeu",
            Format::Frontend => "game",
        }
    }

    /// Find the root container, trying each schema's root tag in order.
    pub fn detect(doc: &Document) -> Result<(Format, &Element), GameListError> {
        Self::ALL
            .iter()
            .find_map(|&format| doc.root(format.root_tag()).map(|root| (format, root)))
            .ok_or_else(|| {
                GameListError::schema("'Data' or 'gameList' root element not found")
            })
    }

    /// The element holding the games: a `jeux` wrapper if present, else `root`.
    pub fn games_container(root: &Element) -> &Element {
        Format::Native
            .wrapper_tag()
            .and_then(|tag| root.child(tag))
            .unwrap_or(root)
    }

    /// Game elements of `container`. The native tag is probed first; when
    /// absent the frontend tag is used, whatever the root was.
    pub fn game_elements(container: &Element) -> Vec<&Element> {
        Self::ALL
            .iter()
            .map(|format| {
                container
                    .children_named(format.game_tag())
                    .collect::<Vec<_>>()
            })
            .find(|games| !games.is_empty())
            .unwrap_or_default()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Native => write!(f, "native"),
            Format::Frontend => write!(f, "frontend"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" | "screenscraper" | "ss" => Ok(Format::Native),
            "frontend" | "emulationstation" | "es" | "esde" => Ok(Format::Frontend),
            other => Err(format!(
                "unknown format '{other}' (expected 'native' or 'frontend')"
            )),
        }
    }
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
