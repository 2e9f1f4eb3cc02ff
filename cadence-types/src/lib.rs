//! Core types and errors for the Cadence text front-end.
//!
//! This crate provides the fundamental types that are shared across
//! the Cadence ecosystem. Keeping types separate ensures:
//!
//! - **Cheap value semantics**: Everything here is a plain value type
//! - **Cross-crate compatibility**: Core and embedders share the same types
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;
use std::path::PathBuf;

/// A typed span produced by the tokenizer.
///
/// Tokens partition the input text exactly: no overlap, no gap. A token is
/// one of three shapes:
///
/// - a *word* — one piece, matched by the locale's word-character class,
/// - a *separator* — one piece covering a run of punctuation/whitespace,
/// - an *unchanged* group — one or more pieces from a `|...|` span whose
///   casing and spelling downstream consumers must not alter.
///
/// The word/separator shapes carry `protected == false`; only unchanged
/// groups are protected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The text pieces of this token, in source order.
    ///
    /// Words and separators always hold exactly one piece. Unchanged groups
    /// hold one piece per space-delimited word of the span; consecutive
    /// spaces yield empty pieces so the original span can be reconstructed.
    pub pieces: Vec<String>,
    /// Whether downstream consumers must leave the pieces untouched.
    pub protected: bool,
}

impl Token {
    /// Creates a word token holding a single piece.
    #[inline]
    pub fn word<S: Into<String>>(piece: S) -> Self {
        Self {
            pieces: vec![piece.into()],
            protected: false,
        }
    }

    /// Creates a separator token holding a single punctuation/whitespace run.
    #[inline]
    pub fn separator<S: Into<String>>(piece: S) -> Self {
        Self {
            pieces: vec![piece.into()],
            protected: false,
        }
    }

    /// Creates a protected unchanged group from its space-split pieces.
    #[inline]
    pub fn unchanged(pieces: Vec<String>) -> Self {
        Self {
            pieces,
            protected: true,
        }
    }

    /// Returns the single piece of a word or separator token.
    ///
    /// Returns `None` for unchanged groups that were split into several
    /// pieces.
    #[inline]
    pub fn single(&self) -> Option<&str> {
        match self.pieces.as_slice() {
            [piece] => Some(piece),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rejoining pieces with a single space reconstructs the source span
        // of an unchanged group (delimiters aside).
        write!(f, "{}", self.pieces.join(" "))
    }
}

/// Errors that can occur while tokenizing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeError {
    /// The word pattern yielded an empty match, which would loop forever.
    ///
    /// This indicates a malformed locale pattern, not bad input text.
    /// The tokenizer fails fast instead of silently advancing.
    InvalidPattern {
        /// Byte position at which no alternative consumed any input.
        position: usize,
    },
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::InvalidPattern { position } => {
                write!(
                    f,
                    "invalid word pattern: empty match at byte {}",
                    position
                )
            }
        }
    }
}

impl core::error::Error for TokenizeError {}

/// Errors that can occur when selecting a locale preprocessing profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// The requested locale key is not registered.
    ///
    /// Profiles are enumerated, never inferred; the caller must pass one of
    /// the known keys.
    UnknownLocale {
        /// The key that was requested.
        key: String,
    },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::UnknownLocale { key } => {
                write!(f, "unknown locale key: '{}'", key)
            }
        }
    }
}

impl core::error::Error for ProfileError {}

/// Errors raised when the linguistic syllabification capability is missing.
///
/// The linguistic clusterer depends on an external, possibly-absent
/// syllabifier. Every variant here renders as an "unavailable" message
/// naming the missing dependency; none of them is ever masked by a silent
/// fallback to the heuristic clusterer, whose output is not interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The configuration variable naming the resource root is not set.
    Unconfigured {
        /// Name of the unset configuration variable.
        variable: &'static str,
    },
    /// No syllabification resources exist for the language under the root.
    ResourcesMissing {
        /// The requested language id.
        language: String,
        /// The resource path that was probed.
        path: PathBuf,
    },
    /// Resources were found but could not be loaded.
    LoadFailed {
        /// The requested language id.
        language: String,
        /// Loader-supplied description of the failure.
        reason: String,
    },
    /// No syllabifier capability has been installed process-wide.
    NotInstalled,
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linguistic syllabification unavailable: ")?;
        match self {
            CapabilityError::Unconfigured { variable } => {
                write!(f, "configuration variable {} is not set", variable)
            }
            CapabilityError::ResourcesMissing { language, path } => {
                write!(
                    f,
                    "no resources for language '{}' under {}",
                    language,
                    path.display()
                )
            }
            CapabilityError::LoadFailed { language, reason } => {
                write!(
                    f,
                    "loading resources for language '{}' failed: {}",
                    language, reason
                )
            }
            CapabilityError::NotInstalled => {
                write!(f, "no syllabifier capability installed")
            }
        }
    }
}

impl core::error::Error for CapabilityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_token_is_single_piece() {
        let t = Token::word("hello");
        assert_eq!(t.single(), Some("hello"));
        assert!(!t.protected);
    }

    #[test]
    fn unchanged_token_is_protected() {
        let t = Token::unchanged(vec!["NVIDIA".into(), "unchanged".into()]);
        assert!(t.protected);
        assert_eq!(t.single(), None);
    }

    #[test]
    fn display_rejoins_pieces_with_space() {
        let t = Token::unchanged(vec!["EY1".into(), "EY1".into()]);
        assert_eq!(t.to_string(), "EY1 EY1");

        let t = Token::separator(", ");
        assert_eq!(t.to_string(), ", ");
    }

    #[test]
    fn display_preserves_empty_pieces() {
        // "|a  b|" splits into ["a", "", "b"]; rejoining must give "a  b".
        let t = Token::unchanged(vec!["a".into(), String::new(), "b".into()]);
        assert_eq!(t.to_string(), "a  b");
    }

    #[test]
    fn tokenize_error_mentions_position() {
        let e = TokenizeError::InvalidPattern { position: 7 };
        assert!(e.to_string().contains("byte 7"));
    }

    #[test]
    fn profile_error_mentions_key() {
        let e = ProfileError::UnknownLocale { key: "xx".into() };
        assert!(e.to_string().contains("'xx'"));
    }

    #[test]
    fn capability_errors_name_missing_dependency() {
        let e = CapabilityError::Unconfigured {
            variable: "CADENCE_RESOURCES_ROOT",
        };
        let msg = e.to_string();
        assert!(msg.contains("unavailable"));
        assert!(msg.contains("CADENCE_RESOURCES_ROOT"));

        let e = CapabilityError::ResourcesMissing {
            language: "hi".into(),
            path: PathBuf::from("/data/resources"),
        };
        let msg = e.to_string();
        assert!(msg.contains("'hi'"));
        assert!(msg.contains("/data/resources"));
    }
}
