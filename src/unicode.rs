//! Character classification used by the cleaning and basic tokenization
//! stages.
//!
//! Whitespace and control classes come from `char::is_whitespace` and
//! `char::is_control` (the Unicode `White_Space` property and category `Cc`),
//! which already match the reference behaviour. Punctuation and nonspacing
//! marks need their own tables: the BERT convention treats every
//! non-alphanumeric ASCII character as punctuation, non-ASCII characters
//! follow Unicode general category P, and accent stripping drops exactly the
//! general category Mn.

/// Non-ASCII general category P, as inclusive code point ranges.
///
/// Curated to the common punctuation blocks of the Basic Multilingual Plane
/// rather than the full Unicode database; symbol characters interleaved with
/// punctuation (currency signs, arithmetic operators, modifier letters) are
/// deliberately absent from the ranges.
const PUNCT_RANGES: &[(u32, u32)] = &[
    (0x00A1, 0x00A1), // inverted exclamation mark
    (0x00A7, 0x00A7), // section sign
    (0x00AB, 0x00AB), // left guillemet
    (0x00B6, 0x00B7), // pilcrow, middle dot
    (0x00BB, 0x00BB), // right guillemet
    (0x00BF, 0x00BF), // inverted question mark
    (0x037E, 0x037E), // Greek question mark
    (0x0387, 0x0387), // Greek ano teleia
    (0x055A, 0x055F), // Armenian
    (0x0589, 0x058A),
    (0x05BE, 0x05BE), // Hebrew maqaf
    (0x05C0, 0x05C0),
    (0x05C3, 0x05C3),
    (0x05C6, 0x05C6),
    (0x05F3, 0x05F4),
    (0x0609, 0x060A), // Arabic
    (0x060C, 0x060D),
    (0x061B, 0x061B),
    (0x061E, 0x061F),
    (0x066A, 0x066D),
    (0x06D4, 0x06D4),
    (0x0700, 0x070D), // Syriac
    (0x07F7, 0x07F9), // NKo
    (0x0830, 0x083E), // Samaritan
    (0x085E, 0x085E),
    (0x0964, 0x0965), // danda, double danda
    (0x0970, 0x0970),
    (0x09FD, 0x09FD),
    (0x0A76, 0x0A76),
    (0x0AF0, 0x0AF0),
    (0x0C77, 0x0C77),
    (0x0C84, 0x0C84),
    (0x0DF4, 0x0DF4),
    (0x0E4F, 0x0E4F), // Thai
    (0x0E5A, 0x0E5B),
    (0x0F04, 0x0F12), // Tibetan
    (0x0F14, 0x0F14),
    (0x0F3A, 0x0F3D),
    (0x0F85, 0x0F85),
    (0x0FD0, 0x0FD4),
    (0x0FD9, 0x0FDA),
    (0x104A, 0x104F), // Myanmar
    (0x10FB, 0x10FB), // Georgian paragraph separator
    (0x1360, 0x1368), // Ethiopic
    (0x1400, 0x1400),
    (0x166E, 0x166E),
    (0x169B, 0x169C), // Ogham
    (0x16EB, 0x16ED), // Runic
    (0x1735, 0x1736),
    (0x17D4, 0x17D6), // Khmer
    (0x17D8, 0x17DA),
    (0x1800, 0x180A), // Mongolian
    (0x1944, 0x1945),
    (0x1A1E, 0x1A1F),
    (0x1AA0, 0x1AA6), // Tai Tham
    (0x1AA8, 0x1AAD),
    (0x1B5A, 0x1B60), // Balinese
    (0x1BFC, 0x1BFF), // Batak
    (0x1C3B, 0x1C3F), // Lepcha
    (0x1C7E, 0x1C7F),
    (0x1CC0, 0x1CC7), // Sundanese
    (0x1CD3, 0x1CD3),
    (0x2010, 0x2027), // general punctuation: dashes, quotes, daggers, ellipsis
    (0x2030, 0x2043),
    (0x2045, 0x2051),
    (0x2053, 0x205E),
    (0x207D, 0x207E), // superscript parentheses
    (0x208D, 0x208E), // subscript parentheses
    (0x2329, 0x232A),
    (0x2768, 0x2775), // ornate parentheses
    (0x27C5, 0x27C6),
    (0x27E6, 0x27EF), // mathematical brackets
    (0x2983, 0x2998),
    (0x29D8, 0x29DB),
    (0x29FC, 0x29FD),
    (0x2CF9, 0x2CFC), // Coptic
    (0x2CFE, 0x2CFF),
    (0x2D70, 0x2D70),
    (0x2E00, 0x2E2E), // supplemental punctuation
    (0x2E30, 0x2E4F),
    (0x3001, 0x3003), // CJK symbols: ideographic comma, full stop, ditto mark
    (0x3008, 0x3011), // CJK brackets
    (0x3014, 0x301F),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x30A0, 0x30A0), // katakana double hyphen
    (0x30FB, 0x30FB), // katakana middle dot
    (0xA4FE, 0xA4FF), // Lisu
    (0xA60D, 0xA60F), // Vai
    (0xA673, 0xA673),
    (0xA67E, 0xA67E),
    (0xA6F2, 0xA6F7), // Bamum
    (0xA874, 0xA877), // Phags-pa
    (0xA8CE, 0xA8CF), // Saurashtra
    (0xA8F8, 0xA8FA),
    (0xA8FC, 0xA8FC),
    (0xA92E, 0xA92F), // Kayah Li
    (0xA95F, 0xA95F),
    (0xA9C1, 0xA9CD), // Javanese
    (0xA9DE, 0xA9DF),
    (0xAA5C, 0xAA5F), // Cham
    (0xAADE, 0xAADF),
    (0xAAF0, 0xAAF1),
    (0xABEB, 0xABEB),
    (0xFD3E, 0xFD3F), // ornate Arabic parentheses
    (0xFE10, 0xFE19), // vertical forms
    (0xFE30, 0xFE52), // CJK compatibility forms
    (0xFE54, 0xFE61),
    (0xFE63, 0xFE63),
    (0xFE68, 0xFE68),
    (0xFE6A, 0xFE6B),
    (0xFF01, 0xFF03), // fullwidth forms
    (0xFF05, 0xFF0A),
    (0xFF0C, 0xFF0F),
    (0xFF1A, 0xFF1B),
    (0xFF1F, 0xFF20),
    (0xFF3B, 0xFF3D),
    (0xFF3F, 0xFF3F),
    (0xFF5B, 0xFF5B),
    (0xFF5D, 0xFF5D),
    (0xFF5F, 0xFF65),
];

/// Returns `true` when the character splits a word during basic tokenization.
///
/// ASCII follows the BERT tokenizer's definition, which also covers symbol
/// characters such as `$`, `+`, and `` ` `` so that no printable non-alphanumeric
/// ASCII ever glues itself to a word. Non-ASCII characters are matched against
/// [`PUNCT_RANGES`], which stops at the Basic Multilingual Plane: punctuation
/// in the supplementary planes (U+10100 AEGEAN WORD SEPARATOR DOT and
/// friends) is not recognized and stays attached to the surrounding word.
#[inline]
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    let cp = c as u32;
    if (0x21..=0x2F).contains(&cp)
        || (0x3A..=0x40).contains(&cp)
        || (0x5B..=0x60).contains(&cp)
        || (0x7B..=0x7E).contains(&cp)
    {
        return true;
    }
    if cp < 0x80 {
        return false;
    }
    let idx = PUNCT_RANGES.partition_point(|&(start, _)| start <= cp);
    idx > 0 && cp <= PUNCT_RANGES[idx - 1].1
}

/// Nonspacing marks (general category Mn), as inclusive code point ranges.
///
/// Covers the mark-bearing scripts of the Basic Multilingual Plane. Spacing
/// combining marks (Mc, the Indic vowel signs that render as their own
/// glyph) and enclosing marks (Me) are deliberately absent from the ranges;
/// cleaning keeps them.
const NONSPACING_MARK_RANGES: &[(u32, u32)] = &[
    (0x0300, 0x036F), // combining diacritical marks
    (0x0483, 0x0487), // Cyrillic titlo, pokrytie
    (0x0591, 0x05BD), // Hebrew cantillation and points
    (0x05BF, 0x05BF),
    (0x05C1, 0x05C2),
    (0x05C4, 0x05C5),
    (0x05C7, 0x05C7),
    (0x0610, 0x061A), // Arabic honorific signs
    (0x064B, 0x065F), // Arabic harakat
    (0x0670, 0x0670), // superscript alef
    (0x06D6, 0x06DC), // Koranic annotation signs
    (0x06DF, 0x06E4),
    (0x06E7, 0x06E8),
    (0x06EA, 0x06ED),
    (0x0711, 0x0711), // Syriac superscript alaph
    (0x0730, 0x074A), // Syriac points
    (0x07A6, 0x07B0), // Thaana vowels
    (0x07EB, 0x07F3), // NKo tones
    (0x07FD, 0x07FD),
    (0x0816, 0x0819), // Samaritan
    (0x081B, 0x0823),
    (0x0825, 0x0827),
    (0x0829, 0x082D),
    (0x0859, 0x085B), // Mandaic
    (0x0898, 0x089F), // Arabic extended
    (0x08CA, 0x08E1),
    (0x08E3, 0x08FF),
    (0x0900, 0x0902), // Devanagari candrabindu, anusvara
    (0x093A, 0x093A),
    (0x093C, 0x093C), // nukta
    (0x0941, 0x0948),
    (0x094D, 0x094D), // virama
    (0x0951, 0x0957),
    (0x0962, 0x0963),
    (0x0981, 0x0981), // Bengali
    (0x09BC, 0x09BC),
    (0x09C1, 0x09C4),
    (0x09CD, 0x09CD),
    (0x09E2, 0x09E3),
    (0x09FE, 0x09FE),
    (0x0A01, 0x0A02), // Gurmukhi
    (0x0A3C, 0x0A3C),
    (0x0A41, 0x0A42),
    (0x0A47, 0x0A48),
    (0x0A4B, 0x0A4D),
    (0x0A51, 0x0A51),
    (0x0A70, 0x0A71),
    (0x0A75, 0x0A75),
    (0x0A81, 0x0A82), // Gujarati
    (0x0ABC, 0x0ABC),
    (0x0AC1, 0x0AC5),
    (0x0AC7, 0x0AC8),
    (0x0ACD, 0x0ACD),
    (0x0AE2, 0x0AE3),
    (0x0AFA, 0x0AFF),
    (0x0B01, 0x0B01), // Oriya
    (0x0B3C, 0x0B3C),
    (0x0B3F, 0x0B3F),
    (0x0B41, 0x0B44),
    (0x0B4D, 0x0B4D),
    (0x0B55, 0x0B56),
    (0x0B62, 0x0B63),
    (0x0B82, 0x0B82), // Tamil anusvara
    (0x0BC0, 0x0BC0),
    (0x0BCD, 0x0BCD), // pulli
    (0x0C00, 0x0C00), // Telugu
    (0x0C04, 0x0C04),
    (0x0C3C, 0x0C3C),
    (0x0C3E, 0x0C40),
    (0x0C46, 0x0C48),
    (0x0C4A, 0x0C4D),
    (0x0C55, 0x0C56),
    (0x0C62, 0x0C63),
    (0x0C81, 0x0C81), // Kannada
    (0x0CBC, 0x0CBC),
    (0x0CBF, 0x0CBF),
    (0x0CC6, 0x0CC6),
    (0x0CCC, 0x0CCD),
    (0x0CE2, 0x0CE3),
    (0x0D00, 0x0D01), // Malayalam
    (0x0D3B, 0x0D3C),
    (0x0D41, 0x0D44),
    (0x0D4D, 0x0D4D),
    (0x0D62, 0x0D63),
    (0x0D81, 0x0D81), // Sinhala
    (0x0DCA, 0x0DCA),
    (0x0DD2, 0x0DD4),
    (0x0DD6, 0x0DD6),
    (0x0E31, 0x0E31), // Thai
    (0x0E34, 0x0E3A),
    (0x0E47, 0x0E4E),
    (0x0EB1, 0x0EB1), // Lao
    (0x0EB4, 0x0EBC),
    (0x0EC8, 0x0ECD),
    (0x0F18, 0x0F19), // Tibetan
    (0x0F35, 0x0F35),
    (0x0F37, 0x0F37),
    (0x0F39, 0x0F39),
    (0x0F71, 0x0F7E),
    (0x0F80, 0x0F84),
    (0x0F86, 0x0F87),
    (0x0F8D, 0x0F97),
    (0x0F99, 0x0FBC), // subjoined consonants
    (0x0FC6, 0x0FC6),
    (0x102D, 0x1030), // Myanmar
    (0x1032, 0x1037),
    (0x1039, 0x103A),
    (0x103D, 0x103E),
    (0x1058, 0x1059),
    (0x105E, 0x1060),
    (0x1071, 0x1074),
    (0x1082, 0x1082),
    (0x1085, 0x1086),
    (0x108D, 0x108D),
    (0x109D, 0x109D),
    (0x135D, 0x135F), // Ethiopic gemination marks
    (0x1712, 0x1714), // Tagalog, Hanunoo, Buhid, Tagbanwa
    (0x1732, 0x1733),
    (0x1752, 0x1753),
    (0x1772, 0x1773),
    (0x17B4, 0x17B5), // Khmer
    (0x17B7, 0x17BD),
    (0x17C6, 0x17C6),
    (0x17C9, 0x17D3),
    (0x17DD, 0x17DD),
    (0x180B, 0x180D), // Mongolian free variation selectors
    (0x180F, 0x180F),
    (0x1885, 0x1886), // Mongolian
    (0x18A9, 0x18A9),
    (0x1920, 0x1922), // Limbu
    (0x1927, 0x1928),
    (0x1932, 0x1932),
    (0x1939, 0x193B),
    (0x1A17, 0x1A18), // Buginese
    (0x1A1B, 0x1A1B),
    (0x1A56, 0x1A56), // Tai Tham
    (0x1A58, 0x1A5E),
    (0x1A60, 0x1A60),
    (0x1A62, 0x1A62),
    (0x1A65, 0x1A6C),
    (0x1A73, 0x1A7C),
    (0x1A7F, 0x1A7F),
    (0x1AB0, 0x1ABD), // combining diacritical marks extended
    (0x1ABF, 0x1ACE),
    (0x1B00, 0x1B03), // Balinese
    (0x1B34, 0x1B34),
    (0x1B36, 0x1B3A),
    (0x1B3C, 0x1B3C),
    (0x1B42, 0x1B42),
    (0x1B6B, 0x1B73),
    (0x1B80, 0x1B81), // Sundanese
    (0x1BA2, 0x1BA5),
    (0x1BA8, 0x1BA9),
    (0x1BAB, 0x1BAD),
    (0x1BE6, 0x1BE6), // Batak
    (0x1BE8, 0x1BE9),
    (0x1BED, 0x1BED),
    (0x1BEF, 0x1BF1),
    (0x1C2C, 0x1C33), // Lepcha
    (0x1C36, 0x1C37),
    (0x1CD0, 0x1CD2), // Vedic extensions
    (0x1CD4, 0x1CE0),
    (0x1CE2, 0x1CE8),
    (0x1CED, 0x1CED),
    (0x1CF4, 0x1CF4),
    (0x1CF8, 0x1CF9),
    (0x1DC0, 0x1DFF), // combining diacritical marks supplement
    (0x20D0, 0x20DC), // combining marks for symbols
    (0x20E1, 0x20E1),
    (0x20E5, 0x20F0),
    (0x2CEF, 0x2CF1), // Coptic
    (0x2D7F, 0x2D7F), // Tifinagh consonant joiner
    (0x2DE0, 0x2DFF), // Cyrillic extended-A
    (0x302A, 0x302D), // ideographic tone marks
    (0x3099, 0x309A), // kana voicing marks
    (0xA66F, 0xA66F), // Cyrillic extended-B
    (0xA674, 0xA67D),
    (0xA69E, 0xA69F),
    (0xA6F0, 0xA6F1), // Bamum
    (0xA802, 0xA802), // Syloti Nagri
    (0xA806, 0xA806),
    (0xA80B, 0xA80B),
    (0xA825, 0xA826),
    (0xA82C, 0xA82C),
    (0xA8C4, 0xA8C5), // Saurashtra
    (0xA8E0, 0xA8F1), // Devanagari extended
    (0xA8FF, 0xA8FF),
    (0xA926, 0xA92D), // Kayah Li
    (0xA947, 0xA951), // Rejang
    (0xA980, 0xA982), // Javanese
    (0xA9B3, 0xA9B3),
    (0xA9B6, 0xA9B9),
    (0xA9BC, 0xA9BD),
    (0xA9E5, 0xA9E5), // Myanmar extended
    (0xAA29, 0xAA2E), // Cham
    (0xAA31, 0xAA32),
    (0xAA35, 0xAA36),
    (0xAA43, 0xAA43),
    (0xAA4C, 0xAA4C),
    (0xAA7C, 0xAA7C), // Myanmar Tai Laing
    (0xAAB0, 0xAAB0), // Tai Viet
    (0xAAB2, 0xAAB4),
    (0xAAB7, 0xAAB8),
    (0xAABE, 0xAABF),
    (0xAAC1, 0xAAC1),
    (0xAAEC, 0xAAED), // Meetei Mayek
    (0xAAF6, 0xAAF6),
    (0xABE5, 0xABE5),
    (0xABE8, 0xABE8),
    (0xABED, 0xABED),
    (0xFB1E, 0xFB1E), // Hebrew varika
    (0xFE00, 0xFE0F), // variation selectors
    (0xFE20, 0xFE2F), // combining half marks
];

/// Returns `true` for nonspacing marks (general category Mn).
///
/// Accent stripping removes exactly this category from a token's canonical
/// decomposition. Spacing combining marks such as the Devanagari vowel sign
/// AA (U+093E) and enclosing marks are not matched and survive cleaning.
#[inline]
#[must_use]
pub fn is_nonspacing_mark(c: char) -> bool {
    let cp = c as u32;
    if cp < 0x0300 {
        return false;
    }
    let idx = NONSPACING_MARK_RANGES.partition_point(|&(start, _)| start <= cp);
    idx > 0 && cp <= NONSPACING_MARK_RANGES[idx - 1].1
}
