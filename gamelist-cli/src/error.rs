use thiserror::Error;

use gamelist_dat::DatError;
use gamelist_lib::GameListError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Game list load, write or repair failure
    #[error("{0}")]
    GameList(#[from] GameListError),

    /// Reference DAT could not be read
    #[error("DAT error: {0}")]
    Dat(#[from] DatError),

    /// No game with the requested rom id
    #[error("No game with rom id '{0}'")]
    NotFound(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn not_found(rom_id: impl Into<String>) -> Self {
        Self::NotFound(rom_id.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
