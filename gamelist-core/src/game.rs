use crate::locale::{
    LANGUAGE_ENGLISH, Localized, REGION_SCREENSCRAPER, REGION_WORLD, resolve,
};

/// `clone_of` value of a record that is not a clone.
pub const NOT_A_CLONE: &str = "0";

/// Text tagged with a region (names, dates) or a language (synopses).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    pub locale: String,
    pub text: String,
}

impl LocalizedText {
    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            text: text.into(),
        }
    }
}

impl Localized for LocalizedText {
    fn locale(&self) -> &str {
        &self.locale
    }
}

/// A value with an optional database id (system, editor, developer).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdText {
    pub id: String,
    pub text: String,
}

impl IdText {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A localized genre name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Genre {
    pub id: String,
    /// Marked `principale="1"` in native documents
    pub is_main: bool,
    pub parent_id: String,
    /// Language code
    pub language: String,
    pub text: String,
}

impl Localized for Genre {
    fn locale(&self) -> &str {
        &self.language
    }
}

/// A media asset attached to a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Media {
    pub parent: String,
    /// Media kind (e.g. "mixrbv2", "box-3D", "video")
    pub media_type: String,
    pub region: String,
    pub crc: String,
    pub md5: String,
    pub sha1: String,
    /// File extension without the dot (e.g. "png", "mp4")
    pub format: String,
    pub support: String,
    /// Remote URL or local relative path
    pub url: String,
}

impl Media {
    /// True when the URL points at a remote server rather than a local file.
    pub fn is_remote(&self) -> bool {
        self.url.starts_with("http")
    }

    /// Local path a remote media is stored under for the ROM `rom_path`:
    /// `media/<type>/<rom stem>.<format>`.
    pub fn local_path(&self, rom_path: &str) -> String {
        let stem = rom_path
            .rfind('.')
            .map_or(rom_path, |dot| &rom_path[..dot]);
        format!("media/{}/{}.{}", self.media_type, stem, self.format)
    }

    /// The path written to exported documents: remote URLs are replaced by
    /// [`Media::local_path`], local paths are kept as-is.
    pub fn export_path(&self, rom_path: &str) -> String {
        if self.is_remote() {
            self.local_path(rom_path)
        } else {
            self.url.clone()
        }
    }
}

impl Localized for Media {
    fn locale(&self) -> &str {
        &self.region
    }
}

/// A game record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Game id in the metadata database
    pub id: String,
    /// ROM id, the key used by lookups and clone links
    pub rom_id: String,
    /// Origin label (frontend schema `source` attribute)
    pub source: String,
    /// ROM file name, the join key for availability and clone repair
    pub path: String,
    /// Parent ROM id, or [`NOT_A_CLONE`]
    pub clone_of: String,
    pub not_game: bool,
    pub system: IdText,
    pub editor: IdText,
    pub developer: IdText,
    /// Player count (e.g. "1", "1-2")
    pub players: String,
    pub rating: String,
    pub topstaff: String,
    pub rotation: String,
    pub resolution: String,
    pub inputs: String,
    pub colors: String,
    pub names: Vec<LocalizedText>,
    pub synopses: Vec<LocalizedText>,
    pub genres: Vec<Genre>,
    pub dates: Vec<LocalizedText>,
    /// Region codes the game was released in
    pub countries: Vec<String>,
    pub medias: Vec<Media>,
    /// Set at load time when `path` is present in the ROM directory. Never persisted.
    pub available: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            id: String::new(),
            rom_id: String::new(),
            source: String::new(),
            path: String::new(),
            clone_of: NOT_A_CLONE.to_string(),
            not_game: false,
            system: IdText::default(),
            editor: IdText::default(),
            developer: IdText::default(),
            players: String::new(),
            rating: String::new(),
            topstaff: String::new(),
            rotation: String::new(),
            resolution: String::new(),
            inputs: String::new(),
            colors: String::new(),
            names: Vec::new(),
            synopses: Vec::new(),
            genres: Vec::new(),
            dates: Vec::new(),
            countries: Vec::new(),
            medias: Vec::new(),
            available: false,
        }
    }
}

impl Game {
    /// Reduced record built from a reference dataset entry: only the world
    /// name, the ROM path and the clone link are known.
    pub fn reference(
        description: impl Into<String>,
        path: impl Into<String>,
        clone_of: impl Into<String>,
    ) -> Self {
        Self {
            names: vec![LocalizedText::new(REGION_WORLD, description)],
            path: path.into(),
            clone_of: clone_of.into(),
            ..Self::default()
        }
    }

    pub fn is_clone(&self) -> bool {
        self.clone_of != NOT_A_CLONE
    }

    /// Display name: world name, else ScreenScraper name, else the first one.
    pub fn name(&self) -> &str {
        self.name_for(REGION_WORLD)
    }

    pub fn name_for(&self, region: &str) -> &str {
        resolve(&self.names, region, REGION_SCREENSCRAPER).map_or("", |n| n.text.as_str())
    }

    pub fn synopsis(&self, language: &str) -> &str {
        resolve(&self.synopses, language, LANGUAGE_ENGLISH).map_or("", |s| s.text.as_str())
    }

    pub fn genre(&self, language: &str) -> &str {
        resolve(&self.genres, language, LANGUAGE_ENGLISH).map_or("", |g| g.text.as_str())
    }

    /// Release date for the world region, used for display and filtering.
    pub fn date(&self) -> &str {
        self.date_for(REGION_WORLD)
    }

    pub fn date_for(&self, region: &str) -> &str {
        resolve(&self.dates, region, REGION_SCREENSCRAPER).map_or("", |d| d.text.as_str())
    }

    /// Best media of `media_type` for `region`, falling back to the world region.
    pub fn media(&self, media_type: &str, region: &str) -> Option<&Media> {
        let matches: Vec<&Media> = self
            .medias
            .iter()
            .filter(|m| m.media_type == media_type)
            .collect();
        resolve(&matches, region, REGION_WORLD).copied()
    }
}

#[cfg(test)]
#[path = "tests/game_tests.rs"]
mod tests;
