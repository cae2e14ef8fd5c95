//! Error types for exbranch

use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the resolver and the snapshot layer
#[derive(Debug, Error)]
pub enum Error {
    /// A dimension name is unknown or not eligible for the attempted mutation
    #[error("invalid dimension name {0}")]
    InvalidDimension(String),

    /// The proposed experiment name was rejected
    #[error("invalid experiment name {0:?}")]
    InvalidExperimentName(String),

    /// A rename pair was rejected
    #[error("invalid rename {old} -> {new}")]
    InvalidRename {
        /// Name of the dimension to rename away from
        old: String,
        /// Name of the dimension to rename to
        new: String,
    },

    /// Conflict snapshot could not be read or parsed
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// I/O failure while driving the shell loop
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
