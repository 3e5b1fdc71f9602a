//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias defaulting to [`WordPieceError`].
pub type Result<T, E = WordPieceError> = std::result::Result<T, E>;

/// Failures surfaced by the library: configuration validation, vocabulary
/// file IO, and id resolution.
#[derive(Debug, Error)]
pub enum WordPieceError {
    /// Configuration rejected by the builder or constructor.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Vocabulary file could not be opened or read.
    #[error("io failure on {path:?}: {source}")]
    Io {
        /// The originating IO error.
        source: std::io::Error,
        /// Path being processed when the failure occurred, when known.
        path: Option<PathBuf>,
    },
    /// A produced token has no id in the vocabulary. Segmentation only emits
    /// in-vocabulary pieces and the unknown sentinel, so this can only occur
    /// when the sentinel itself is missing from the vocabulary.
    #[error("token {token:?} is not present in the vocabulary")]
    MissingVocabEntry {
        /// The token that could not be resolved to an id.
        token: String,
    },
}

impl WordPieceError {
    /// Wraps an IO error together with the path that produced it.
    pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { source, path }
    }
}
