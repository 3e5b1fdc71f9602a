//! Whitespace- and punctuation-driven pre-segmentation.

use crate::normalize::clean;
use crate::unicode::is_punctuation;

/// Splits text into word-level tokens.
///
/// Whitespace runs delimit candidate words; each candidate is cleaned (see
/// [`clean`]) and then split on punctuation, with every punctuation character
/// emitted as its own single-character token. Candidates that clean down to
/// nothing disappear. The output never contains an empty token and preserves
/// input order. This stage cannot fail.
#[must_use]
pub fn basic_tokenize(text: &str, lowercase: bool) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        let cleaned = clean(word, lowercase);
        split_on_punctuation(&cleaned, &mut tokens);
    }
    tokens
}

/// Emits alternating non-punctuation runs and single punctuation characters.
fn split_on_punctuation(token: &str, out: &mut Vec<String>) {
    let mut run = String::new();
    for c in token.chars() {
        if is_punctuation(c) {
            if !run.is_empty() {
                out.push(std::mem::take(&mut run));
            }
            out.push(c.to_string());
        } else {
            run.push(c);
        }
    }
    if !run.is_empty() {
        out.push(run);
    }
}
