//! User settings: `~/.config/gamelist/settings.toml`.
//!
//! ```toml
//! [gamelist]
//! language = "en"
//! format = "native"
//! rom_extension = "zip"
//! ```
//!
//! Every key is optional. Command-line flags take priority over the file,
//! the file over built-in defaults.

use std::io;
use std::path::{Path, PathBuf};

use gamelist_core::LANGUAGE_ENGLISH;

use crate::format::Format;
use crate::gamelist::DEFAULT_ROM_EXTENSION;

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamelist").join("settings.toml")
}

/// TOML file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct SettingsFile {
    gamelist: Option<SettingsSection>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct SettingsSection {
    language: Option<String>,
    format: Option<String>,
    rom_extension: Option<String>,
}

/// Effective settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Language for synopses and genres on export
    pub language: String,
    /// Default export format
    pub format: Format,
    /// ROM archive extension, without the dot
    pub rom_extension: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: LANGUAGE_ENGLISH.to_string(),
            format: Format::Native,
            rom_extension: DEFAULT_ROM_EXTENSION.to_string(),
        }
    }
}

impl Settings {
    /// Load from [`settings_path`], falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match Self::parse(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn parse(contents: &str) -> Result<Self, String> {
        let file: SettingsFile = toml::from_str(contents).map_err(|e| e.to_string())?;
        let mut settings = Self::default();
        if let Some(section) = file.gamelist {
            if let Some(language) = section.language {
                settings.language = language;
            }
            if let Some(format) = section.format {
                settings.format = format.parse()?;
            }
            if let Some(ext) = section.rom_extension {
                settings.rom_extension = ext.trim_start_matches('.').to_string();
            }
        }
        Ok(settings)
    }

    /// Write the settings to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let file = SettingsFile {
            gamelist: Some(SettingsSection {
                language: Some(self.language.clone()),
                format: Some(self.format.to_string()),
                rom_extension: Some(self.rom_extension.clone()),
            }),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(&file).map_err(io::Error::other)?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
