//! Error types for the game core

use thiserror::Error;

/// Common result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors surfaced by data loading and session setup
#[derive(Error, Debug)]
pub enum GameError {
    /// The country pool has no entries at all
    #[error("country pool is empty")]
    EmptyPool,

    /// The pool cannot fill a question at the requested option count
    #[error("country pool has {have} entries but the profile needs {need} options")]
    PoolTooSmall { need: usize, have: usize },

    /// Two pool entries share an identifier
    #[error("duplicate country id: {0}")]
    DuplicateId(String),

    /// Malformed external pool file
    #[error("invalid pool data: {0}")]
    Data(#[from] serde_json::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
