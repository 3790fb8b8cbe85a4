use std::path::PathBuf;

/// Why a column was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidColumnReason {
    #[error("out of range (board has {width} columns)")]
    OutOfRange { width: usize },

    #[error("column is full")]
    Full,
}

/// Errors returned when applying or computing a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid column {column}: {reason}")]
    InvalidColumn {
        column: usize,
        reason: InvalidColumnReason,
    },

    #[error("game is already over")]
    GameOver,
}

/// A win check or line extraction was requested before any piece was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no move has been made yet")]
pub struct NoMoveYet;

/// Errors that can occur when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}: both must be positive and the board at most {max} cells", max = crate::game::MAX_CELLS)]
    InvalidDimensions { width: usize, height: usize },
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
