//! Greedy WordPiece segmentation and the configured tokenizer façade.

use std::borrow::Cow;
use std::path::Path;

use log::debug;
use rayon::prelude::*;

use crate::basic::basic_tokenize;
use crate::config::{TokenizerConfig, DEFAULT_MAX_TOKEN_LENGTH};
use crate::error::{Result, WordPieceError};
use crate::vocab::{TokenId, Vocabulary};

/// Continuation marker prefixed to non-word-initial subword pieces.
pub const CONTINUATION_PREFIX: &str = "##";

/// Segments one word-level token into vocabulary pieces.
///
/// Greedy longest-match-first: at each cursor position the longest substring
/// present in the vocabulary is taken, trying progressively shorter windows
/// down to a single character. Candidates at a non-zero cursor are looked up
/// with the [`CONTINUATION_PREFIX`]. When no window matches, the unknown
/// sentinel is appended after any pieces already matched and segmentation of
/// this token stops. Tokens longer than `max_token_length` bytes produce the
/// sentinel outright, bounding the quadratic window search.
///
/// Windows are tried at character boundaries; a narrower window set than
/// byte offsets, but an equivalent one, since a candidate that splits a
/// UTF-8 sequence can never equal a vocabulary entry.
#[must_use]
pub fn segment(
    token: &str,
    vocab: &Vocabulary,
    unknown_token: &str,
    max_token_length: usize,
) -> Vec<String> {
    if token.len() > max_token_length {
        return vec![unknown_token.to_owned()];
    }

    let mut boundaries: Vec<usize> = token.char_indices().map(|(offset, _)| offset).collect();
    boundaries.push(token.len());
    let last = boundaries.len() - 1;

    let mut pieces = Vec::new();
    let mut start = 0;
    while start < last {
        let piece_start = boundaries[start];
        let mut matched: Option<(usize, String)> = None;

        let mut end = last;
        while end > start {
            let candidate = &token[piece_start..boundaries[end]];
            let lookup: Cow<'_, str> = if piece_start > 0 {
                Cow::Owned(format!("{CONTINUATION_PREFIX}{candidate}"))
            } else {
                Cow::Borrowed(candidate)
            };
            if vocab.contains(&lookup) {
                matched = Some((end, lookup.into_owned()));
                break;
            }
            end -= 1;
        }

        match matched {
            Some((end, piece)) => {
                pieces.push(piece);
                start = end;
            }
            None => {
                pieces.push(unknown_token.to_owned());
                break;
            }
        }
    }
    pieces
}

/// Runs the full pipeline with the default maximum token length.
///
/// Basic tokenization first, then [`segment`] per word-level token, results
/// concatenated in order. Empty input yields an empty sequence.
#[must_use]
pub fn tokenize(
    text: &str,
    vocab: &Vocabulary,
    unknown_token: &str,
    lowercase: bool,
) -> Vec<String> {
    let mut output = Vec::new();
    for word in basic_tokenize(text, lowercase) {
        output.extend(segment(&word, vocab, unknown_token, DEFAULT_MAX_TOKEN_LENGTH));
    }
    output
}

/// WordPiece tokenizer owning a vocabulary and its configuration.
#[derive(Debug, Clone)]
pub struct WordPiece {
    vocab: Vocabulary,
    cfg: TokenizerConfig,
}

impl WordPiece {
    /// Creates a tokenizer from a vocabulary and a validated configuration.
    pub fn new(vocab: Vocabulary, cfg: TokenizerConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { vocab, cfg })
    }

    /// Loads a vocabulary file and pairs it with the default configuration.
    pub fn from_vocab_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let vocab = Vocabulary::from_file(path)?;
        Self::new(vocab, TokenizerConfig::default())
    }

    /// Returns the underlying vocabulary.
    #[must_use]
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &TokenizerConfig {
        &self.cfg
    }

    /// Word-level tokenization only, using the configured case handling.
    #[must_use]
    pub fn basic_tokenize(&self, text: &str) -> Vec<String> {
        basic_tokenize(text, self.cfg.lowercase)
    }

    /// Tokenizes text into subword pieces.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut output = Vec::new();
        for word in basic_tokenize(text, self.cfg.lowercase) {
            output.extend(segment(
                &word,
                &self.vocab,
                &self.cfg.unknown_token,
                self.cfg.max_token_length,
            ));
        }
        output
    }

    /// Tokenizes text and resolves every piece to its vocabulary id.
    ///
    /// Segmentation only produces in-vocabulary pieces and the unknown
    /// sentinel, so the lookup can only fail when the sentinel itself is
    /// missing from the vocabulary.
    pub fn encode(&self, text: &str) -> Result<Vec<TokenId>> {
        self.tokenize(text)
            .into_iter()
            .map(|token| match self.vocab.id(&token) {
                Some(id) => Ok(id),
                None => Err(WordPieceError::MissingVocabEntry { token }),
            })
            .collect()
    }

    /// Tokenizes many independent texts in parallel, preserving order.
    #[must_use]
    pub fn tokenize_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Vec<String>> {
        debug!("tokenizing batch of {} texts", texts.len());
        texts
            .par_iter()
            .map(|text| self.tokenize(text.as_ref()))
            .collect()
    }
}
