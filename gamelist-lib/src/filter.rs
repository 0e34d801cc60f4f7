use std::collections::BTreeMap;

use gamelist_core::Game;

use crate::facets::{Facet, WILDCARD};

/// A multi-facet game filter.
///
/// Every facet starts as [`WILDCARD`]; a concrete value must equal the
/// game's facet value exactly. Availability and clone switches apply on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFilter {
    /// Keep only games whose ROM was found at load time
    pub available_only: bool,
    /// Keep games with a parent (`clone_of != "0"`)
    pub include_clones: bool,
    selections: BTreeMap<Facet, String>,
}

impl Default for GameFilter {
    fn default() -> Self {
        Self {
            available_only: false,
            include_clones: true,
            selections: BTreeMap::new(),
        }
    }
}

impl GameFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available_only(mut self, available_only: bool) -> Self {
        self.available_only = available_only;
        self
    }

    pub fn include_clones(mut self, include_clones: bool) -> Self {
        self.include_clones = include_clones;
        self
    }

    /// Select `value` for `facet`. Passing [`WILDCARD`] clears the selection.
    pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.set(facet, value);
        self
    }

    pub fn set(&mut self, facet: Facet, value: impl Into<String>) {
        let value = value.into();
        if value == WILDCARD {
            self.selections.remove(&facet);
        } else {
            self.selections.insert(facet, value);
        }
    }

    /// The selected value for `facet`, [`WILDCARD`] when unset.
    pub fn selection(&self, facet: Facet) -> &str {
        self.selections.get(&facet).map_or(WILDCARD, |v| v.as_str())
    }

    pub fn matches(&self, game: &Game) -> bool {
        (!self.available_only || game.available)
            && (self.include_clones || !game.is_clone())
            && self
                .selections
                .iter()
                .all(|(facet, value)| facet.value_of(game) == value)
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
