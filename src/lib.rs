//! BERT-style WordPiece tokenization library and CLI.
//!
//! The crate exposes both a library API and a `wordpiece` command line
//! interface for segmenting text against a fixed vocabulary.  Tokenization
//! runs in two stages: basic tokenization (Unicode cleanup, whitespace
//! splitting, punctuation isolation) followed by greedy longest-match-first
//! WordPiece segmentation with `##`-prefixed continuation pieces.  Typical
//! usage loads a vocabulary file and tokenizes text with a `WordPiece`.
//!
//! ```no_run
//! use wordpiece::WordPiece;
//!
//! # fn main() -> wordpiece::Result<()> {
//! let tokenizer = WordPiece::from_vocab_file("vocab.txt")?;
//! let pieces = tokenizer.tokenize("Hello world, from go.");
//! let ids = tokenizer.encode("Hello world, from go.")?;
//! println!("{pieces:?} {ids:?}");
//! # Ok(())
//! # }
//! ```
//!
//! The CLI is enabled by default through the `cli` feature.  Users targeting
//! the library portion only can disable default features to avoid the CLI
//! dependencies: `wordpiece = { version = "...", default-features = false }`.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    clippy::all,
    rust_2018_idioms,
    future_incompatible,
    unused_lifetimes,
    unreachable_pub
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::multiple_crate_versions
)]

pub mod basic;
pub mod config;
pub mod error;
pub mod normalize;
pub mod tokenizer;
pub mod unicode;
pub mod vocab;

pub use basic::basic_tokenize;
pub use config::{
    TokenizerBuilder, TokenizerConfig, DEFAULT_MAX_TOKEN_LENGTH, DEFAULT_UNKNOWN_TOKEN,
};
pub use error::{Result, WordPieceError};
pub use normalize::normalize;
pub use tokenizer::{segment, tokenize, WordPiece, CONTINUATION_PREFIX};
pub use vocab::{TokenId, Vocabulary};
