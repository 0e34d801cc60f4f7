//! Game list engine.
//!
//! Loads game list documents in ScreenScraper's native schema or
//! EmulationStation's frontend schema, filters them by facet, writes them
//! back in either schema and repairs clone links from a reference DAT.

pub mod clones;
pub mod error;
mod export;
pub mod facets;
pub mod filter;
pub mod format;
pub mod gamelist;
pub mod parse;
pub mod settings;
pub mod xml;

pub use clones::{CloneFix, CloneReport};
pub use error::GameListError;
pub use facets::{Facet, FacetIndex, FacetIndexBuilder, WILDCARD};
pub use filter::GameFilter;
pub use format::Format;
pub use gamelist::{DEFAULT_ROM_EXTENSION, GameList, LoadOptions};
pub use settings::Settings;

pub use gamelist_core::{FileSystem, Game, StdFileSystem};
