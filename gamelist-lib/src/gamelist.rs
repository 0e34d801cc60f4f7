//! The in-memory game list.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use gamelist_core::{FileSystem, Game};

use crate::error::GameListError;
use crate::facets::{Facet, FacetIndex, FacetIndexBuilder};
use crate::filter::GameFilter;
use crate::format::Format;
use crate::parse::parse_game;
use crate::xml::Document;

/// Default ROM archive extension.
pub const DEFAULT_ROM_EXTENSION: &str = "zip";

/// Options for [`GameList::load`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Directory checked for ROM archives; games found there are flagged available
    pub rom_dir: Option<PathBuf>,
    /// Archive extension listed in `rom_dir`, without the dot
    pub rom_extension: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            rom_dir: None,
            rom_extension: DEFAULT_ROM_EXTENSION.to_string(),
        }
    }
}

impl LoadOptions {
    pub fn with_rom_dir(mut self, rom_dir: impl Into<PathBuf>) -> Self {
        self.rom_dir = Some(rom_dir.into());
        self
    }

    pub fn with_rom_extension(mut self, extension: impl Into<String>) -> Self {
        self.rom_extension = extension.into();
        self
    }
}

/// An ordered collection of games plus the distinct values of every facet.
#[derive(Debug, Clone, Default)]
pub struct GameList {
    games: Vec<Game>,
    /// Document the list was loaded from
    pub xml_path: Option<PathBuf>,
    /// ROM directory used for availability checks
    pub rom_dir: Option<PathBuf>,
    /// Schema of the source document
    pub format: Format,
    facets: FacetIndex,
}

/// Display-name ordering used for the list and every export.
pub(crate) fn sort_by_name<G: Borrow<Game>>(games: &mut [G]) {
    games.sort_by(|a, b| {
        let (a, b): (&Game, &Game) = (a.borrow(), b.borrow());
        a.name().cmp(b.name())
    });
}

impl GameList {
    /// Load a game list document in either schema.
    ///
    /// When `options.rom_dir` is set, its archives are listed once and each
    /// game whose `path` appears in the listing is flagged available.
    pub fn load(
        xml_path: &Path,
        options: &LoadOptions,
        fs: &dyn FileSystem,
    ) -> Result<Self, GameListError> {
        let doc = Document::load(xml_path)?;

        let available = match &options.rom_dir {
            Some(dir) => match fs.list_dir(dir, &options.rom_extension) {
                Ok(files) => files.into_iter().collect(),
                Err(e) => {
                    log::warn!("Could not list ROM directory {}: {e}", dir.display());
                    HashSet::new()
                }
            },
            None => HashSet::new(),
        };

        let mut list = Self::from_document(&doc, &available)?;
        list.xml_path = Some(xml_path.to_path_buf());
        list.rom_dir = options.rom_dir.clone();

        log::debug!(
            "Loaded {} games from {} ({} format, {} available)",
            list.len(),
            xml_path.display(),
            list.format,
            list.available_count(),
        );

        Ok(list)
    }

    /// Parse a document held in memory. `available` holds the ROM file
    /// names present on disk.
    pub fn from_xml_str(xml: &str, available: &HashSet<String>) -> Result<Self, GameListError> {
        Self::from_document(&Document::parse_str(xml)?, available)
    }

    fn from_document(doc: &Document, available: &HashSet<String>) -> Result<Self, GameListError> {
        let (format, root) = Format::detect(doc)?;
        let container = Format::games_container(root);

        let mut games: Vec<Game> = Format::game_elements(container)
            .into_iter()
            .map(|element| {
                let mut game = parse_game(element);
                game.available = available.contains(&game.path);
                game
            })
            .collect();
        sort_by_name(&mut games);

        Ok(Self::from_games(games, format))
    }

    /// Build a list from records, in the given order, indexing their facets.
    pub fn from_games(games: Vec<Game>, format: Format) -> Self {
        let mut builder = FacetIndexBuilder::new();
        for game in &games {
            builder.observe(game);
        }
        Self {
            games,
            xml_path: None,
            rom_dir: None,
            format,
            facets: builder.finalize(),
        }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub(crate) fn games_mut(&mut self) -> &mut [Game] {
        &mut self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn facets(&self) -> &FacetIndex {
        &self.facets
    }

    /// Distinct values of `facet`, wildcard first.
    pub fn facet_values(&self, facet: Facet) -> &[String] {
        self.facets.values(facet)
    }

    /// First game with `rom_id`.
    pub fn find(&self, rom_id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.rom_id == rom_id)
    }

    pub fn exist(&self, rom_id: &str) -> bool {
        self.find(rom_id).is_some()
    }

    /// Remove the first game with `rom_id`. Returns whether one was removed.
    pub fn remove(&mut self, rom_id: &str) -> bool {
        match self.games.iter().position(|g| g.rom_id == rom_id) {
            Some(index) => {
                self.games.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn available_count(&self) -> usize {
        self.games.iter().filter(|g| g.available).count()
    }

    /// Games matching `filter`, in list order.
    ///
    /// The facet index is copied from this list unchanged, so the result
    /// still offers every facet value of the source.
    pub fn filter(&self, filter: &GameFilter) -> GameList {
        GameList {
            games: self
                .games
                .iter()
                .filter(|g| filter.matches(g))
                .cloned()
                .collect(),
            xml_path: self.xml_path.clone(),
            rom_dir: self.rom_dir.clone(),
            format: self.format,
            facets: self.facets.clone(),
        }
    }

    /// Positional form of [`GameList::filter`]. Each facet argument is either
    /// a value or [`crate::WILDCARD`].
    #[allow(clippy::too_many_arguments)]
    pub fn filter_by(
        &self,
        available: bool,
        clones: bool,
        system: &str,
        editor: &str,
        developer: &str,
        players: &str,
        rating: &str,
        topstaff: &str,
        rotation: &str,
        resolution: &str,
        date: &str,
        genre: &str,
    ) -> GameList {
        let filter = GameFilter::new()
            .available_only(available)
            .include_clones(clones)
            .with(Facet::System, system)
            .with(Facet::Editor, editor)
            .with(Facet::Developer, developer)
            .with(Facet::Players, players)
            .with(Facet::Rating, rating)
            .with(Facet::TopStaff, topstaff)
            .with(Facet::Rotation, rotation)
            .with(Facet::Resolution, resolution)
            .with(Facet::Date, date)
            .with(Facet::Genre, genre);
        self.filter(&filter)
    }
}

#[cfg(test)]
#[path = "tests/gamelist_tests.rs"]
mod tests;
