//! Distinct facet values observed in a game list.

use std::collections::BTreeSet;
use std::fmt;

use gamelist_core::{Game, LANGUAGE_ENGLISH};

/// Facet value meaning "no filter on this facet". Always first in a
/// [`FacetIndex`] list.
pub const WILDCARD: &str = "All";

/// An independently filterable game attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    System,
    Editor,
    Developer,
    Players,
    Rating,
    TopStaff,
    Rotation,
    Resolution,
    Date,
    Genre,
}

impl Facet {
    pub const ALL: [Facet; 10] = [
        Facet::System,
        Facet::Editor,
        Facet::Developer,
        Facet::Players,
        Facet::Rating,
        Facet::TopStaff,
        Facet::Rotation,
        Facet::Resolution,
        Facet::Date,
        Facet::Genre,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// The value of this facet for `game`. Dates and genres are multi-valued,
    /// so the world date and the English genre stand in for them.
    pub fn value_of(self, game: &Game) -> &str {
        match self {
            Facet::System => &game.system.text,
            Facet::Editor => &game.editor.text,
            Facet::Developer => &game.developer.text,
            Facet::Players => &game.players,
            Facet::Rating => &game.rating,
            Facet::TopStaff => &game.topstaff,
            Facet::Rotation => &game.rotation,
            Facet::Resolution => &game.resolution,
            Facet::Date => game.date(),
            Facet::Genre => game.genre(LANGUAGE_ENGLISH),
        }
    }

    /// Whether `game` has any value to index for this facet.
    fn is_present(self, game: &Game) -> bool {
        match self {
            Facet::Date => !game.dates.is_empty(),
            Facet::Genre => !game.genres.is_empty(),
            _ => true,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Facet::System => "system",
            Facet::Editor => "editor",
            Facet::Developer => "developer",
            Facet::Players => "players",
            Facet::Rating => "rating",
            Facet::TopStaff => "topstaff",
            Facet::Rotation => "rotation",
            Facet::Resolution => "resolution",
            Facet::Date => "date",
            Facet::Genre => "genre",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sorted distinct values per facet, each list prefixed with [`WILDCARD`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetIndex {
    values: [Vec<String>; 10],
}

impl FacetIndex {
    pub fn values(&self, facet: Facet) -> &[String] {
        &self.values[facet.index()]
    }
}

impl Default for FacetIndex {
    /// The index of an empty list: only the wildcard for every facet.
    fn default() -> Self {
        FacetIndexBuilder::new().finalize()
    }
}

/// Accumulates facet values while games are parsed.
#[derive(Debug, Default)]
pub struct FacetIndexBuilder {
    seen: [BTreeSet<String>; 10],
}

impl FacetIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, game: &Game) {
        for facet in Facet::ALL {
            if !facet.is_present(game) {
                continue;
            }
            let value = facet.value_of(game);
            if value == WILDCARD {
                continue;
            }
            let seen = &mut self.seen[facet.index()];
            if !seen.contains(value) {
                seen.insert(value.to_string());
            }
        }
    }

    /// Byte-wise sorted, de-duplicated lists with the wildcard first.
    pub fn finalize(self) -> FacetIndex {
        FacetIndex {
            values: self.seen.map(|seen| {
                std::iter::once(WILDCARD.to_string())
                    .chain(seen)
                    .collect()
            }),
        }
    }
}

#[cfg(test)]
#[path = "tests/facets_tests.rs"]
mod tests;
