//! Streaming Tokenizer Module
//!
//! This module splits preprocessed text into typed spans for the
//! pronunciation stage. It's the second stage of the text pipeline, taking
//! normalized text and breaking it into words, protected `|...|` spans, and
//! punctuation/whitespace runs.
//!
//! ## What It Does
//!
//! Given input like `"Hello, |NVIDIA unchanged|!"` with the English pattern
//! and word lowercasing enabled, it emits:
//!
//! ```ignore
//! [hello]                      word
//! [,] [ ]                      separators
//! [NVIDIA, unchanged]          protected group, casing preserved
//! [!]                          separator
//! ```
//!
//! ## How It Works
//!
//! A single left-to-right scan tries three alternatives at each position,
//! in priority order:
//!
//! 1. a maximal run of word characters, with interior `-`/`'` permitted,
//! 2. a `|...|` span, whose interior must not contain another `|`,
//! 3. a run of anything that is neither a word char nor `|`, split at
//!    boundaries between whitespace and non-whitespace so punctuation and
//!    spacing come out as separate tokens.
//!
//! Exactly one alternative consumes input at every position, so the emitted
//! tokens partition the input: no overlap, no gap, and concatenating all
//! pieces (rejoining protected groups with single spaces) reconstructs the
//! input, modulo word lowercasing and the stripped `|` delimiters.
//!
//! The alternatives are an explicit scanner over classified character
//! ranges rather than a regex. Unicode character-class support differs
//! between regex engines; a hand-rolled scan keeps the word classes exact
//! and testable.

use cadence_types::{Token, TokenizeError};
use memchr::memchr;

/// Locale-parameterized word-character class.
///
/// A word pattern is a set of inclusive code-point ranges. The two built-in
/// patterns cover the supported Latin alphabets:
///
/// - [`WordPattern::ENGLISH`] — unaccented basic Latin letters only
/// - [`WordPattern::ANY_LOCALE`] — basic Latin plus the accented Latin-1
///   letter blocks
///
/// # Example
///
/// ```
/// use cadence_core::analyzer::tokenizer::WordPattern;
///
/// assert!(WordPattern::ENGLISH.is_word_char('k'));
/// assert!(!WordPattern::ENGLISH.is_word_char('é'));
/// assert!(WordPattern::ANY_LOCALE.is_word_char('é'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPattern {
    ranges: &'static [(char, char)],
}

impl WordPattern {
    /// Unaccented basic Latin letters (`A-Z`, `a-z`).
    pub const ENGLISH: Self = Self::new(&[('A', 'Z'), ('a', 'z')]);

    /// Basic Latin plus the accented Latin-1 letter blocks
    /// (`À-Ö`, `Ø-ö`, `ø-ÿ`; the multiplication and division signs in the
    /// middle of that block are excluded).
    pub const ANY_LOCALE: Self = Self::new(&[
        ('A', 'Z'),
        ('a', 'z'),
        ('\u{00C0}', '\u{00D6}'),
        ('\u{00D8}', '\u{00F6}'),
        ('\u{00F8}', '\u{00FF}'),
    ]);

    /// Creates a pattern from caller-supplied inclusive ranges.
    #[inline]
    pub const fn new(ranges: &'static [(char, char)]) -> Self {
        Self { ranges }
    }

    /// Tests whether `c` belongs to this pattern's word-character class.
    #[inline]
    pub fn is_word_char(&self, c: char) -> bool {
        self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)
    }
}

/// Characters permitted inside a word but not at its edges.
#[inline(always)]
const fn is_word_joiner(c: char) -> bool {
    matches!(c, '-' | '\'')
}

/// Length in bytes of the maximal word match at the start of `rest`.
///
/// Joiners extend a word only when followed by further word characters;
/// trailing joiners are backtracked off so the match ends on a bare letter.
fn scan_word(rest: &str, pattern: &WordPattern) -> usize {
    let mut end = 0;
    for (idx, c) in rest.char_indices() {
        if pattern.is_word_char(c) {
            end = idx + c.len_utf8();
        } else if !is_word_joiner(c) {
            break;
        }
    }
    end
}

/// Length in bytes of the separator run at the start of `rest`.
///
/// A run stops at any word character or `|`, and at the boundary between
/// whitespace and non-whitespace, so `", "` comes out as two tokens.
///
/// When `take_leading_pipe` is set the first character is consumed
/// unconditionally; this absorbs a `|` that has no closing delimiter and
/// therefore cannot open an unchanged span.
fn scan_separator(rest: &str, pattern: &WordPattern, take_leading_pipe: bool) -> usize {
    let mut end = 0;
    let mut run_is_space: Option<bool> = None;
    for (idx, c) in rest.char_indices() {
        if idx == 0 && take_leading_pipe {
            end = c.len_utf8();
            run_is_space = Some(false);
            continue;
        }
        if pattern.is_word_char(c) || c == '|' {
            break;
        }
        let is_space = c.is_whitespace();
        match run_is_space {
            None => run_is_space = Some(is_space),
            Some(kind) if kind != is_space => break,
            _ => {}
        }
        end = idx + c.len_utf8();
    }
    end
}

/// Tokenizes text into words, protected unchanged groups, and separators.
///
/// The caller is expected to have run the locale's preprocessing first; see
/// [`LocaleProfile::tokenize`](crate::analyzer::profile::LocaleProfile::tokenize)
/// for the composed form.
///
/// Word matches become single-piece tokens, lowercased iff
/// `lowercase_words`. A `|...|` span is stripped of its delimiters and
/// split on ASCII space into a protected piece group — casing inside is
/// never touched. Everything else is emitted as separator runs.
///
/// # Errors
///
/// Returns [`TokenizeError::InvalidPattern`] if no alternative consumes any
/// input at some position. That can only arise from a malformed custom
/// pattern, and failing fast beats looping forever.
///
/// # Example
///
/// ```
/// use cadence_core::analyzer::tokenizer::{tokenize, WordPattern};
///
/// let tokens = tokenize("Hello, |NVIDIA unchanged|!", &WordPattern::ENGLISH, true).unwrap();
/// let pieces: Vec<_> = tokens.iter().map(|t| (t.pieces.clone(), t.protected)).collect();
/// assert_eq!(pieces, vec![
///     (vec!["hello".to_string()], false),
///     (vec![",".to_string()], false),
///     (vec![" ".to_string()], false),
///     (vec!["NVIDIA".to_string(), "unchanged".to_string()], true),
///     (vec!["!".to_string()], false),
/// ]);
/// ```
pub fn tokenize(
    text: &str,
    pattern: &WordPattern,
    lowercase_words: bool,
) -> Result<Vec<Token>, TokenizeError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0usize;

    while i < text.len() {
        let rest = &text[i..];
        let first = match rest.chars().next() {
            Some(c) => c,
            None => break,
        };

        let consumed = if pattern.is_word_char(first) {
            let len = scan_word(rest, pattern);
            let word = &rest[..len];
            if lowercase_words {
                tokens.push(Token::word(word.to_lowercase()));
            } else {
                tokens.push(Token::word(word));
            }
            len
        } else if first == '|' {
            // `|` is ASCII, so a byte scan for the closing delimiter is
            // exact even in multi-byte text.
            match memchr(b'|', &bytes[i + 1..]) {
                Some(off) => {
                    let interior = &text[i + 1..i + 1 + off];
                    let pieces = interior.split(' ').map(str::to_owned).collect();
                    tokens.push(Token::unchanged(pieces));
                    off + 2
                }
                None => {
                    // Unbalanced pipe: it cannot open a span, so it joins
                    // the separator run to keep the partition exact.
                    let len = scan_separator(rest, pattern, true);
                    tokens.push(Token::separator(&rest[..len]));
                    len
                }
            }
        } else {
            let len = scan_separator(rest, pattern, false);
            tokens.push(Token::separator(&rest[..len]));
            len
        };

        if consumed == 0 {
            return Err(TokenizeError::InvalidPattern { position: i });
        }
        i += consumed;
    }

    Ok(tokens)
}
