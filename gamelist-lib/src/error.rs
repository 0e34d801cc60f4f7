use thiserror::Error;

/// Errors that can occur while loading, saving or repairing a game list.
///
/// None of these are fatal: the list involved is left as it was and the
/// caller decides how to report the failure.
#[derive(Debug, Error)]
pub enum GameListError {
    /// The document could not be read or is not well-formed XML
    #[error("XML parse error: {0}")]
    Parse(String),

    /// Well-formed XML, but not a game list document
    #[error("Wrong document format: {0}")]
    Schema(String),

    /// The clone reference dataset could not be loaded
    #[error("Could not load reference dataset: {0}")]
    ReferenceLoad(String),

    /// The destination could not be written
    #[error("Could not write game list: {0}")]
    Write(String),
}

impl GameListError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    pub fn reference_load(msg: impl Into<String>) -> Self {
        Self::ReferenceLoad(msg.into())
    }

    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }
}

impl From<quick_xml::Error> for GameListError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for GameListError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<gamelist_dat::DatError> for GameListError {
    fn from(e: gamelist_dat::DatError) -> Self {
        Self::ReferenceLoad(e.to_string())
    }
}
