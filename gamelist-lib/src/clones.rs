//! Clone link repair from a reference DAT.
//!
//! Metadata databases sometimes report a clone as a parent game
//! (`clone_of == "0"`). Arcade DATs key games by archive name and carry
//! reliable `cloneof` attributes, so a clone can be re-linked by matching
//! archive names: game → DAT entry → DAT parent archive → local parent game.

use std::collections::HashMap;
use std::path::Path;

use gamelist_core::Game;
use gamelist_dat::{DatFile, DatGame, parse_dat_file};

use crate::error::GameListError;
use crate::gamelist::GameList;

/// A clone → parent link found during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneFix {
    pub name: String,
    pub path: String,
    pub rom_id: String,
    pub parent_name: String,
    pub parent_path: String,
    pub parent_rom_id: String,
}

/// Outcome of [`GameList::fix_clones`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneReport {
    /// Links applied: `clone_of` now holds the parent's rom id
    pub fixed: Vec<CloneFix>,
    /// Links that would make a game its own parent. Not applied.
    pub inconsistent: Vec<CloneFix>,
    /// Parent games whose archive is not in the reference DAT
    pub not_in_reference: usize,
    /// Parent games the reference DAT agrees are parents
    pub not_a_clone: usize,
    /// Clones whose parent archive is not in this list
    pub parent_missing: usize,
}

impl CloneReport {
    pub fn total_checked(&self) -> usize {
        self.fixed.len()
            + self.inconsistent.len()
            + self.not_in_reference
            + self.not_a_clone
            + self.parent_missing
    }
}

/// Reduced records built from the reference DAT: world name, archive path
/// and parent archive base name (empty when not a clone).
pub fn reference_games(dat: &DatFile, rom_extension: &str) -> Vec<Game> {
    dat.games
        .iter()
        .map(|g| {
            Game::reference(
                g.description.as_str(),
                g.archive_name(rom_extension),
                g.clone_of.as_deref().unwrap_or_default(),
            )
        })
        .collect()
}

impl GameList {
    /// Repair missing clone links using the reference DAT at `dat_path`.
    ///
    /// Fails only when the DAT cannot be loaded; unresolved games are
    /// counted in the report.
    pub fn fix_clones(
        &mut self,
        dat_path: &Path,
        rom_extension: &str,
    ) -> Result<CloneReport, GameListError> {
        let dat = parse_dat_file(dat_path)
            .map_err(|e| GameListError::reference_load(format!("{}: {e}", dat_path.display())))?;
        Ok(self.fix_clones_with(&dat, rom_extension))
    }

    /// Repair missing clone links using an already parsed reference DAT.
    pub fn fix_clones_with(&mut self, dat: &DatFile, rom_extension: &str) -> CloneReport {
        let reference = reference_games(dat, rom_extension);
        let reference_by_path: HashMap<&str, &DatGame> = reference
            .iter()
            .zip(&dat.games)
            .rev()
            .map(|(g, dat_game)| (g.path.as_str(), dat_game))
            .collect();

        // First game wins for duplicated paths.
        let mut parent_by_path: HashMap<String, (String, String)> = HashMap::new();
        for game in self.games() {
            parent_by_path
                .entry(game.path.clone())
                .or_insert_with(|| (game.rom_id.clone(), game.name().to_string()));
        }

        let mut report = CloneReport::default();
        for game in self.games_mut() {
            if game.is_clone() {
                continue;
            }

            let Some(dat_game) = reference_by_path.get(game.path.as_str()) else {
                report.not_in_reference += 1;
                continue;
            };
            let Some(parent_path) = dat_game.parent_archive_name(rom_extension) else {
                report.not_a_clone += 1;
                continue;
            };

            let Some((parent_rom_id, parent_name)) = parent_by_path.get(&parent_path) else {
                log::debug!(
                    "{} ({}): parent {} not in list",
                    game.name(),
                    game.path,
                    parent_path
                );
                report.parent_missing += 1;
                continue;
            };

            let fix = CloneFix {
                name: game.name().to_string(),
                path: game.path.clone(),
                rom_id: game.rom_id.clone(),
                parent_name: parent_name.clone(),
                parent_path,
                parent_rom_id: parent_rom_id.clone(),
            };

            if fix.parent_rom_id == game.rom_id {
                log::warn!(
                    "clone: {} ({}, id: {}) => parent: {} ({}, id: {}): clone can't be its own parent",
                    fix.name,
                    fix.path,
                    fix.rom_id,
                    fix.parent_name,
                    fix.parent_path,
                    fix.parent_rom_id,
                );
                report.inconsistent.push(fix);
                continue;
            }

            log::info!(
                "fix: clone: {} ({}, id: {}) => parent: {} ({}, id: {})",
                fix.name,
                fix.path,
                fix.rom_id,
                fix.parent_name,
                fix.parent_path,
                fix.parent_rom_id,
            );
            game.clone_of = fix.parent_rom_id.clone();
            report.fixed.push(fix);
        }

        report
    }
}

#[cfg(test)]
#[path = "tests/clones_tests.rs"]
mod tests;
