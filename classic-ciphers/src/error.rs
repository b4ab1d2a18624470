//! Error types for cipher operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Invalid shift {0:?} (must be an integer between 1 and 25)")]
    InvalidShift(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid block size (expected {expected}, got {actual})")]
    InvalidBlockSize { expected: usize, actual: usize },

    #[error("Incomplete substitution mapping ({found} of 26 letters ranked)")]
    IncompleteMapping { found: usize },
}

pub type Result<T> = std::result::Result<T, CipherError>;
