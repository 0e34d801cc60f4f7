//! Record model shared by every gamelist crate.
//!
//! A [`Game`] is the normalized form of one game element from either the
//! native (multi-locale) or the frontend (single-locale) document schema.

pub mod fs;
pub mod game;
pub mod locale;

pub use fs::{FileSystem, StdFileSystem};
pub use game::{Game, Genre, IdText, LocalizedText, Media, NOT_A_CLONE};
pub use locale::{LANGUAGE_ENGLISH, Localized, REGION_SCREENSCRAPER, REGION_WORLD, resolve};
