//! Vocabulary loading and token id lookup.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use rustc_hash::FxHashMap;

use crate::error::{Result, WordPieceError};

/// Integer identifier assigned to each vocabulary entry.
pub type TokenId = u32;

/// Fixed mapping between token strings and integer ids.
///
/// Ids are assigned in insertion order starting at 0, so a vocabulary built
/// from a file mirrors its line numbering. The mapping is immutable after
/// construction and can be shared read-only across threads.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    ids: FxHashMap<String, TokenId>,
    tokens: Vec<String>,
}

impl Vocabulary {
    /// Reads a vocabulary from a plain-text file with one token per line.
    ///
    /// The first line receives id 0; a trailing newline is optional and line
    /// endings may be LF or CRLF. No validation is applied beyond readable
    /// lines. When the same token appears on several lines, the later line's
    /// id wins for lookups while every line keeps its slot in id order.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|err| WordPieceError::io(err, Some(path.to_path_buf())))?;
        let mut vocab = Self::default();
        for line in BufReader::new(file).lines() {
            let mut line = line.map_err(|err| WordPieceError::io(err, Some(path.to_path_buf())))?;
            if line.ends_with('\r') {
                line.pop();
            }
            vocab.push(line);
        }
        info!(
            "loaded {} vocabulary entries from {}",
            vocab.len(),
            path.display()
        );
        Ok(vocab)
    }

    /// Builds a vocabulary from an in-memory sequence of tokens, assigning
    /// ids in iteration order.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self::default();
        for token in tokens {
            vocab.push(token.into());
        }
        vocab
    }

    fn push(&mut self, token: String) {
        let id = self.tokens.len() as TokenId;
        self.tokens.push(token.clone());
        self.ids.insert(token, id);
    }

    /// Number of entries, counting duplicate lines separately.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when the vocabulary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Case-sensitive membership test.
    #[inline]
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    /// Looks up the id assigned to a token.
    #[inline]
    #[must_use]
    pub fn id(&self, token: &str) -> Option<TokenId> {
        self.ids.get(token).copied()
    }

    /// Returns the token stored at an id, in file/insertion order.
    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Iterates tokens in id order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_tokens_assigns_sequential_ids() {
        let vocab = Vocabulary::from_tokens(["hello", "world", ","]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("hello"), Some(0));
        assert_eq!(vocab.id("world"), Some(1));
        assert_eq!(vocab.id(","), Some(2));
        assert_eq!(vocab.token(1), Some("world"));
        assert!(vocab.contains(","));
        assert!(!vocab.contains("missing"));
    }

    #[test]
    fn from_file_mirrors_line_order() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("vocab.txt");
        fs::write(&path, "hello\nworld\n,\n.\ngo\n##go\n").expect("write vocab");

        let vocab = Vocabulary::from_file(&path).expect("load vocab");
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.id("##go"), Some(5));
        assert_eq!(vocab.token(0), Some("hello"));
        let collected: Vec<&str> = vocab.tokens().collect();
        assert_eq!(collected, ["hello", "world", ",", ".", "go", "##go"]);
    }

    #[test]
    fn from_file_without_trailing_newline() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("vocab.txt");
        fs::write(&path, "alpha\nbeta").expect("write vocab");

        let vocab = Vocabulary::from_file(&path).expect("load vocab");
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.id("beta"), Some(1));
    }

    #[test]
    fn from_file_strips_carriage_returns() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("vocab.txt");
        fs::write(&path, "alpha\r\nbeta\r\n").expect("write vocab");

        let vocab = Vocabulary::from_file(&path).expect("load vocab");
        assert_eq!(vocab.id("alpha"), Some(0));
        assert_eq!(vocab.id("beta"), Some(1));
        assert!(!vocab.contains("alpha\r"));
    }

    #[test]
    fn duplicate_lines_keep_later_id_for_lookup() {
        let vocab = Vocabulary::from_tokens(["a", "b", "a"]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("a"), Some(2));
        assert_eq!(vocab.token(0), Some("a"));
        assert_eq!(vocab.token(2), Some("a"));
    }

    #[test]
    fn missing_file_surfaces_io_error_with_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("absent.txt");
        let err = Vocabulary::from_file(&path).expect_err("load should fail");
        match err {
            WordPieceError::Io { path: Some(p), .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_an_empty_vocabulary() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").expect("write empty file");

        let vocab = Vocabulary::from_file(&path).expect("load vocab");
        assert!(vocab.is_empty());
        assert_eq!(vocab.id("anything"), None);
    }
}
