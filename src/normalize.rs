//! Unicode normalization and the per-token cleaning stage.
//!
//! Normalization canonicalizes input before tokenization (NFD followed by
//! re-composition, the composed canonical form). Cleaning walks the
//! canonically decomposed character stream of a single token, which is what
//! makes accent stripping effective for precomposed characters: `é` is only
//! visible as base + combining mark after decomposition.

use std::borrow::Cow;

use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

use crate::unicode::is_nonspacing_mark;

/// Canonically normalizes text (NFD, then re-composed to NFC).
///
/// Borrows the input when a quick check proves it is already in composed
/// form, which is the common case for ASCII and most Western text.
#[must_use]
pub fn normalize(text: &str) -> Cow<'_, str> {
    match is_nfc_quick(text.chars()) {
        IsNormalized::Yes => Cow::Borrowed(text),
        IsNormalized::No | IsNormalized::Maybe => Cow::Owned(text.nfd().nfc().collect()),
    }
}

/// Cleans a single whitespace-free token.
///
/// Lowercases the whole token first when requested (single pass with the
/// locale-independent Unicode mapping), then scans its canonical
/// decomposition in order: any whitespace character becomes one plain space,
/// nonspacing marks (category Mn) are dropped, and NUL, U+FFFD, and control
/// characters are dropped. The whitespace test runs before the control test
/// so that tab maps to a space instead of vanishing. The result may be empty.
#[must_use]
pub fn clean(token: &str, lowercase: bool) -> String {
    let source: Cow<'_, str> = if lowercase {
        Cow::Owned(token.to_lowercase())
    } else {
        Cow::Borrowed(token)
    };

    let mut cleaned = String::with_capacity(source.len());
    for c in source.nfd() {
        if c.is_whitespace() {
            cleaned.push(' ');
        } else if is_nonspacing_mark(c) {
            // accent stripping
        } else if c == '\0' || c == '\u{fffd}' || c.is_control() {
            // not representable in any vocabulary
        } else {
            cleaned.push(c);
        }
    }
    cleaned
}
