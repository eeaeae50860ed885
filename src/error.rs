use std::path::PathBuf;

/// Errors from parsing the textual board format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 7 columns, found {0}")]
    ColumnCount(usize),

    #[error("column {col} has {len} cells, expected 6")]
    ColumnLength { col: usize, len: usize },

    #[error("unexpected character {ch:?} at column {col}, row {row}")]
    BadCell { col: usize, row: usize, ch: char },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors from parsing a scripted move list such as `3,3,4`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveListError {
    #[error("move list is empty")]
    Empty,

    #[error("invalid column {token:?} at position {position}")]
    BadColumn { position: usize, token: String },
}
