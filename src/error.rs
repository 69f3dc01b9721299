//! Error types for the parity-split crate

use thiserror::Error;

/// Main error type for the parity-split crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: value {value} (split: {split}) is not playable")]
    InvalidMove { value: u8, split: bool },

    #[error("no numbers left to move")]
    EmptyState,

    #[error("game tree has not been built")]
    TreeNotBuilt,

    #[error("game tree has already been built")]
    TreeAlreadyBuilt,

    #[error("search depth {depth} is out of range (must be 1-{max})")]
    InvalidDepth { depth: u32, max: u32 },

    #[error("row length {length} is out of range (must be 1-{max})")]
    InvalidRowLength { length: usize, max: usize },

    #[error("row index {index} is out of bounds (row has {len} numbers)")]
    InvalidRowIndex { index: usize, len: usize },

    #[error("invalid number list '{input}': {reason}")]
    ParseNumbers { input: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("no root child carries the optimal value {value}")]
    MoveNotFound { value: i32 },

    #[error("it is not the {participant} player's turn")]
    WrongParticipant { participant: String },

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

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
