//! Configuration builder controlling tokenization behaviour.

use crate::error::{Result, WordPieceError};
use serde::{Deserialize, Serialize};

/// Sentinel emitted for any word the vocabulary cannot represent.
pub const DEFAULT_UNKNOWN_TOKEN: &str = "[UNK]";

/// Longest word-level token, in UTF-8 bytes, that segmentation will attempt.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 100;

/// Configuration for WordPiece tokenization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Token substituted for unsegmentable or oversized words.
    pub unknown_token: String,
    /// Lowercases input during cleaning, the uncased-model convention.
    pub lowercase: bool,
    /// Words longer than this many UTF-8 bytes become the unknown token
    /// without any segmentation attempt; bounds per-word matching cost.
    pub max_token_length: usize,
}

impl TokenizerConfig {
    /// Returns a builder initialised with [`TokenizerConfig::default`].
    #[must_use]
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::default()
    }

    /// Validates the invariants required for tokenization.
    pub fn validate(&self) -> Result<()> {
        if self.unknown_token.is_empty() {
            return Err(WordPieceError::InvalidConfig(
                "unknown_token must not be empty".into(),
            ));
        }
        if self.max_token_length == 0 {
            return Err(WordPieceError::InvalidConfig(
                "max_token_length must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            unknown_token: DEFAULT_UNKNOWN_TOKEN.into(),
            lowercase: true,
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }
}

/// Builder for [`TokenizerConfig`].
#[derive(Debug, Default, Clone)]
pub struct TokenizerBuilder {
    cfg: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Creates a builder with [`TokenizerConfig::default`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the unknown-token sentinel.
    #[must_use]
    pub fn unknown_token<S: Into<String>>(mut self, token: S) -> Self {
        self.cfg.unknown_token = token.into();
        self
    }

    /// Enables or disables lowercasing during cleaning.
    #[must_use]
    pub fn lowercase(mut self, enabled: bool) -> Self {
        self.cfg.lowercase = enabled;
        self
    }

    /// Sets the maximum word length (UTF-8 bytes) attempted by segmentation.
    #[must_use]
    pub fn max_token_length(mut self, length: usize) -> Self {
        self.cfg.max_token_length = length;
        self
    }

    /// Finalises the builder, returning a validated [`TokenizerConfig`].
    pub fn build(self) -> Result<TokenizerConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
