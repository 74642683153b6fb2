//! Error types for the memory-master crate.
//!
//! Configuration problems (bad knowledge base, unknown category) are
//! errors; game mistakes are ordinary outcomes and never appear here.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("unknown category '{name}'")]
    UnknownCategory { name: String },

    #[error("knowledge base has no categories")]
    EmptyKnowledgeBase,

    #[error("knowledge base row {row} has no items for category '{category}'")]
    EmptyCategory { row: usize, category: String },

    #[error("knowledge base row {row} is missing the items column")]
    MissingItems { row: usize },

    #[error("a game needs at least two players, got {got}")]
    NotEnoughPlayers { got: usize },

    #[error("failed to read knowledge base: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed knowledge base: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias for Results using the crate's error type.
pub type Result<T> = std::result::Result<T, GameError>;
