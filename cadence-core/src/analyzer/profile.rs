//! Locale Preprocessing Profiles
//!
//! A profile ties together the three locale-specific decisions the pipeline
//! has to make before tokenization: how to normalize the raw text, which
//! word-character class to scan with, and whether words are lowercased.
//!
//! Profiles are enumerated in a static table and selected by explicit key;
//! there is no locale detection. Asking for a key that isn't registered is
//! a configuration error, not a fallback.

use crate::analyzer::normalizer::{fold_apostrophe, fold_quotes, normalize_unicode, strip_marks};
use crate::analyzer::tokenizer::{tokenize, WordPattern};
use cadence_types::{ProfileError, Token, TokenizeError};

/// English preprocessing: NFC-normalize, strip combining diacritical marks,
/// fold quote glyphs, and optionally lowercase.
///
/// Diacritic stripping is safe here because the supported English alphabet
/// is ASCII-range; `café` is pronounced like `cafe`.
pub fn english_preprocess(text: &str, lower: bool) -> String {
    let text = normalize_unicode(text);
    let text = strip_marks(&text);
    let text = fold_quotes(&text);
    if lower {
        text.to_lowercase()
    } else {
        text
    }
}

/// Any-locale preprocessing: NFC-normalize and fold the right single
/// quotation mark to an apostrophe. Nothing else.
///
/// Diacritics and casing are preserved — for most scripts, stripping either
/// would destroy meaning.
pub fn any_locale_preprocess(text: &str) -> String {
    fold_apostrophe(&normalize_unicode(text))
}

/// English preprocessing without lowercasing, for composition with the
/// tokenizer.
///
/// Case folding must happen per word match inside the tokenizer, never on
/// the whole string — otherwise the contents of protected `|...|` spans
/// would be lowercased before the scanner can shield them.
fn english_case_preserving(text: &str) -> String {
    english_preprocess(text, false)
}

/// Legacy simplified preprocessing: lowercase only, no normalization.
fn lowercase_only(text: &str) -> String {
    text.to_lowercase()
}

/// A locale's preprocessing function plus its tokenizer configuration.
///
/// Profiles live in a process-wide static table, constructed once and
/// immutable thereafter. All parts are pure functions of the input text, so
/// applying a profile twice to identical input yields byte-identical
/// output.
#[derive(Debug, Clone, Copy)]
pub struct LocaleProfile {
    key: &'static str,
    preprocess: fn(&str) -> String,
    pattern: WordPattern,
    lowercase_words: bool,
    deprecated: bool,
}

impl LocaleProfile {
    /// The locale key this profile is registered under.
    #[inline]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// The word-character class the tokenizer scans with.
    #[inline]
    pub const fn pattern(&self) -> &WordPattern {
        &self.pattern
    }

    /// Whether the tokenizer lowercases word matches for this locale.
    #[inline]
    pub const fn lowercase_words(&self) -> bool {
        self.lowercase_words
    }

    /// Whether this is a legacy simplified profile kept for compatibility.
    ///
    /// Deprecated profiles skip normalization entirely; new configurations
    /// should use the `"any"` profile instead.
    #[inline]
    pub const fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Applies this locale's preprocessing to raw text.
    #[inline]
    pub fn preprocess(&self, text: &str) -> String {
        (self.preprocess)(text)
    }

    /// Preprocesses and tokenizes text in one step.
    ///
    /// # Errors
    ///
    /// Propagates [`TokenizeError`] from the scanner.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        tokenize(&self.preprocess(text), &self.pattern, self.lowercase_words)
    }
}

/// The registered profiles. Keys are language ids, not inferred.
static PROFILES: &[LocaleProfile] = &[
    LocaleProfile {
        key: "en",
        preprocess: english_case_preserving,
        pattern: WordPattern::ENGLISH,
        lowercase_words: true,
        deprecated: false,
    },
    LocaleProfile {
        key: "any",
        preprocess: any_locale_preprocess,
        pattern: WordPattern::ANY_LOCALE,
        lowercase_words: false,
        deprecated: false,
    },
    // Legacy lowercase-only profiles, kept until their configurations are
    // migrated to "any".
    LocaleProfile {
        key: "es",
        preprocess: lowercase_only,
        pattern: WordPattern::ANY_LOCALE,
        lowercase_words: false,
        deprecated: true,
    },
    LocaleProfile {
        key: "zh",
        preprocess: lowercase_only,
        pattern: WordPattern::ANY_LOCALE,
        lowercase_words: false,
        deprecated: true,
    },
];

/// Looks up the profile registered under `key`.
///
/// # Errors
///
/// Returns [`ProfileError::UnknownLocale`] when `key` is not one of the
/// registered locale keys.
///
/// # Example
///
/// ```
/// use cadence_core::analyzer::profile::profile;
///
/// let en = profile("en").unwrap();
/// assert_eq!(en.preprocess("Café"), "Cafe");
/// assert!(profile("tlh").is_err());
/// ```
pub fn profile(key: &str) -> Result<&'static LocaleProfile, ProfileError> {
    PROFILES
        .iter()
        .find(|p| p.key == key)
        .ok_or_else(|| ProfileError::UnknownLocale { key: key.to_owned() })
}

/// All registered profiles, in registration order.
pub fn profiles() -> &'static [LocaleProfile] {
    PROFILES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_strips_diacritics_and_lowercases() {
        assert_eq!(english_preprocess("Café", true), "cafe");
        assert_eq!(english_preprocess("naïve RÉSUMÉ", true), "naive resume");
    }

    #[test]
    fn english_can_preserve_case() {
        assert_eq!(english_preprocess("Café", false), "Cafe");
    }

    #[test]
    fn english_folds_quote_glyphs() {
        assert_eq!(english_preprocess("It’s “here”", true), "it's \"here\"");
    }

    #[test]
    fn english_composes_before_stripping() {
        // Decomposed input must reach the stripper in a canonical form.
        assert_eq!(english_preprocess("cafe\u{0301}", true), "cafe");
    }

    #[test]
    fn any_locale_keeps_diacritics_and_case() {
        assert_eq!(any_locale_preprocess("Müller"), "Müller");
        assert_eq!(any_locale_preprocess("o\u{0308}"), "ö");
    }

    #[test]
    fn any_locale_folds_apostrophe_only() {
        assert_eq!(any_locale_preprocess("it’s “fine”"), "it's “fine”");
    }

    #[test]
    fn english_profile_preserves_case_for_the_tokenizer() {
        // Lowercasing is the tokenizer's job, so protected spans survive.
        let en = profile("en").unwrap();
        assert_eq!(en.preprocess("Café |NVIDIA|"), "Cafe |NVIDIA|");
        assert!(en.lowercase_words());
    }

    #[test]
    fn lookup_by_key() {
        assert_eq!(profile("en").unwrap().key(), "en");
        assert_eq!(profile("any").unwrap().key(), "any");
        assert!(profile("any").unwrap().pattern().is_word_char('é'));
    }

    #[test]
    fn unknown_key_is_rejected_not_inferred() {
        let err = profile("en-US").unwrap_err();
        assert_eq!(
            err,
            cadence_types::ProfileError::UnknownLocale {
                key: "en-US".to_owned()
            }
        );
    }

    #[test]
    fn legacy_profiles_lowercase_only() {
        let es = profile("es").unwrap();
        assert!(es.is_deprecated());
        // No normalization: decomposed input stays decomposed.
        assert_eq!(es.preprocess("CAFE\u{0301}"), "cafe\u{0301}");

        let zh = profile("zh").unwrap();
        assert!(zh.is_deprecated());
        assert_eq!(zh.preprocess("ABC 你好"), "abc 你好");
    }

    #[test]
    fn profiles_are_deterministic() {
        for p in profiles() {
            let input = "Café, It’s |X Y| №5";
            assert_eq!(p.preprocess(input), p.preprocess(input));
        }
    }

    #[test]
    fn profile_tokenize_composes_preprocessing() {
        let en = profile("en").unwrap();
        let tokens = en.tokenize("Hello, |NVIDIA unchanged|!").unwrap();
        assert_eq!(tokens[0].single(), Some("hello"));
        assert!(tokens.iter().any(|t| t.protected));

        // Protected pieces keep their casing even under the English profile.
        let protected = tokens.iter().find(|t| t.protected).unwrap();
        assert_eq!(protected.pieces, vec!["NVIDIA", "unchanged"]);
    }

    #[test]
    fn any_profile_tokenizes_accented_words_whole() {
        let any = profile("any").unwrap();
        let tokens = any.tokenize("Crème brûlée").unwrap();
        let words: Vec<_> = tokens.iter().filter_map(|t| t.single()).collect();
        assert_eq!(words, vec!["Crème", " ", "brûlée"]);
    }
}
