//! Error types for the intro-ai crate

use thiserror::Error;

/// Main error type for the intro-ai crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move ({row}, {col}): {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: String,
    },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("symbol '{symbol}' has no value in the model")]
    UnassignedSymbol { symbol: String },

    #[error("corpus contains no pages")]
    EmptyCorpus,

    #[error("damping factor {value} must lie in [0, 1]")]
    InvalidDamping { value: f64 },

    #[error("sample count must be positive")]
    InvalidSampleCount,

    #[error("invalid transition model '{input}'. Expected one of: {expected}")]
    ParseTransitionKind { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the operation that produced it.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
