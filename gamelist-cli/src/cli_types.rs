//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gamelist_lib::{Facet, Format, GameFilter, LoadOptions, Settings};

#[derive(Parser)]
#[command(name = "gamelist")]
#[command(about = "Inspect, filter and convert ScreenScraper and EmulationStation game lists", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every command that loads a game list.
#[derive(Args, Clone)]
pub(crate) struct ListArgs {
    /// Game list document (native or frontend schema)
    pub gamelist: PathBuf,

    /// ROM directory; games whose archive is present are flagged available
    #[arg(short, long)]
    pub roms: Option<PathBuf>,

    /// ROM archive extension (default: from settings, else "zip")
    #[arg(short, long)]
    pub ext: Option<String>,
}

impl ListArgs {
    pub fn rom_extension(&self, settings: &Settings) -> String {
        self.ext
            .as_deref()
            .map(|e| e.trim_start_matches('.').to_string())
            .unwrap_or_else(|| settings.rom_extension.clone())
    }

    pub fn load_options(&self, settings: &Settings) -> LoadOptions {
        let options = LoadOptions::default().with_rom_extension(self.rom_extension(settings));
        match &self.roms {
            Some(dir) => options.with_rom_dir(dir),
            None => options,
        }
    }
}

/// Arguments for commands that write a game list.
#[derive(Args, Clone)]
pub(crate) struct ExportArgs {
    /// Output schema: native (ScreenScraper) or frontend (EmulationStation)
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Language kept for synopses and genres (e.g., en, fr)
    #[arg(short, long)]
    pub language: Option<String>,
}

impl ExportArgs {
    pub fn format(&self, settings: &Settings) -> Format {
        self.format.unwrap_or(settings.format)
    }

    pub fn language(&self, settings: &Settings) -> String {
        self.language
            .clone()
            .unwrap_or_else(|| settings.language.clone())
    }
}

/// Facet selections. An omitted facet matches every game.
#[derive(Args, Clone, Default)]
pub(crate) struct FacetArgs {
    /// Keep only games whose ROM is in the ROM directory
    #[arg(long)]
    pub available: bool,

    /// Drop games that are clones of another game
    #[arg(long)]
    pub no_clones: bool,

    #[arg(long)]
    pub system: Option<String>,

    #[arg(long)]
    pub editor: Option<String>,

    #[arg(long)]
    pub developer: Option<String>,

    #[arg(long)]
    pub players: Option<String>,

    #[arg(long)]
    pub rating: Option<String>,

    #[arg(long)]
    pub topstaff: Option<String>,

    #[arg(long)]
    pub rotation: Option<String>,

    #[arg(long)]
    pub resolution: Option<String>,

    /// Release date (world region)
    #[arg(long)]
    pub date: Option<String>,

    /// Genre (English name)
    #[arg(long)]
    pub genre: Option<String>,
}

impl FacetArgs {
    pub fn to_filter(&self) -> GameFilter {
        let selections = [
            (Facet::System, &self.system),
            (Facet::Editor, &self.editor),
            (Facet::Developer, &self.developer),
            (Facet::Players, &self.players),
            (Facet::Rating, &self.rating),
            (Facet::TopStaff, &self.topstaff),
            (Facet::Rotation, &self.rotation),
            (Facet::Resolution, &self.resolution),
            (Facet::Date, &self.date),
            (Facet::Genre, &self.genre),
        ];

        let mut filter = GameFilter::new()
            .available_only(self.available)
            .include_clones(!self.no_clones);
        for (facet, value) in selections {
            if let Some(value) = value {
                filter.set(facet, value.as_str());
            }
        }
        filter
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Summarize a game list: schema, counts and facet values
    Info {
        #[command(flatten)]
        list: ListArgs,

        /// Print every value of each facet
        #[arg(long)]
        facets: bool,
    },

    /// Show one game by rom id
    Show {
        #[command(flatten)]
        list: ListArgs,

        /// Rom id of the game
        #[arg(long)]
        id: String,

        /// Language for the synopsis and genre
        #[arg(short, long)]
        language: Option<String>,
    },

    /// List or export the games matching facet filters
    Filter {
        #[command(flatten)]
        list: ListArgs,

        #[command(flatten)]
        facets: FacetArgs,

        /// Write the matching games to this file instead of listing them
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Convert a game list to another schema
    Convert {
        #[command(flatten)]
        list: ListArgs,

        /// Destination file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Remove games by rom id
    Remove {
        #[command(flatten)]
        list: ListArgs,

        /// Rom ids to remove
        #[arg(long = "id", required = true, value_delimiter = ',')]
        ids: Vec<String>,

        /// Destination file (default: overwrite the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Repair missing clone links from a reference DAT
    FixClones {
        #[command(flatten)]
        list: ListArgs,

        /// Reference DAT (Logiqx datafile, e.g. FBNeo or MAME)
        #[arg(short, long)]
        dat: PathBuf,

        /// Report repairs without writing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Destination file (default: overwrite the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings
    Show,

    /// Print the settings file path
    Path,

    /// Write the effective settings to the settings file
    Init,
}

#[cfg(test)]
#[path = "tests/cli_types_tests.rs"]
mod tests;
