//! Unicode Normalization Module
//!
//! This module is the first stage of the text pipeline. It canonicalizes
//! code-point sequences (NFC) and folds visually-equivalent punctuation
//! glyphs to their ASCII forms, so every later stage sees a stable
//! representation of the input.
//!
//! ## Why NFC Matters
//!
//! A character like `ö` can arrive either pre-composed (one code point) or
//! decomposed (`o` + combining diaeresis, two code points). A consumer that
//! walks the text char-by-char would treat those two encodings differently
//! and mispronounce one of them. Composing everything up front removes the
//! ambiguity.
//!
//! ## Glyph Folding
//!
//! Transcripts in the wild use typographic quotes (`’`, `“`, `”`) where
//! pronunciation models expect the plain ASCII `'` and `"`. The fold tables
//! here are a fixed many-to-one substitution; they never touch anything
//! outside that set.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Canonicalizes text to NFC (canonical composed form).
///
/// Already-normalized input is returned unchanged — `is_nfc` is a cheap
/// scan, so the common case allocates one copy and does no real work.
/// Idempotent: normalizing twice equals normalizing once.
///
/// # Example
///
/// ```
/// use cadence_core::analyzer::normalizer::normalize_unicode;
///
/// // "o" + combining diaeresis composes to a single code point.
/// assert_eq!(normalize_unicode("o\u{0308}"), "ö");
/// ```
pub fn normalize_unicode(text: &str) -> String {
    if is_nfc(text) {
        text.to_owned()
    } else {
        text.nfc().collect()
    }
}

/// Folds one quote-like glyph to its ASCII equivalent.
///
/// The substitution table is derived from glyph variants observed in
/// LJSpeech transcripts.
#[inline(always)]
const fn fold_synoglyph(c: char) -> char {
    match c {
        // right single quotation mark (U+2019)
        '\u{2019}' => '\'',
        // left/right double quotation marks (U+201C, U+201D)
        '\u{201C}' | '\u{201D}' => '"',
        _ => c,
    }
}

/// Replaces typographic quote glyphs with their ASCII equivalents.
///
/// Must run after [`normalize_unicode`] in profile composition so the fold
/// sees composed code points.
///
/// # Example
///
/// ```
/// use cadence_core::analyzer::normalizer::fold_quotes;
///
/// assert_eq!(fold_quotes("It’s a “test”"), "It's a \"test\"");
/// ```
pub fn fold_quotes(text: &str) -> String {
    text.chars().map(fold_synoglyph).collect()
}

/// Folds the right single quotation mark (U+2019) to an apostrophe.
///
/// The any-locale variant of [`fold_quotes`]: double quotes are left alone
/// because some orthographies use them meaningfully.
pub fn fold_apostrophe(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .collect()
}

/// Strips combining diacritical marks by decomposing to NFD and dropping
/// every code point in the Unicode mark category.
///
/// Used by the English profile, whose supported alphabet is ASCII-range;
/// locales where diacritics carry meaning must not call this.
///
/// # Example
///
/// ```
/// use cadence_core::analyzer::normalizer::strip_marks;
///
/// assert_eq!(strip_marks("café"), "cafe");
/// ```
pub fn strip_marks(text: &str) -> String {
    text.nfd().filter(|&c| !is_combining_mark(c)).collect()
}
