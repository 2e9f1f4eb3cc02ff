//! # Cadence Core
//!
//! Locale-aware text normalization and tokenization for speech-synthesis
//! front-ends. Raw input text flows through a Unicode normalizer and a
//! locale preprocessing profile, then into one of two independent
//! consumers: the tokenizer, which emits words, protected `|...|` spans,
//! and punctuation/whitespace runs; or the grapheme clusterers, which
//! group code points into syllable-like units for scripts where one
//! perceptual unit spans several code points.
//!
//! ## Example
//!
//! ```
//! use cadence_core::analyzer::profile::profile;
//!
//! let en = profile("en").unwrap();
//! let tokens = en.tokenize("Hello, |NVIDIA unchanged|!").unwrap();
//!
//! assert_eq!(tokens[0].single(), Some("hello"));
//! let protected = tokens.iter().find(|t| t.protected).unwrap();
//! assert_eq!(protected.pieces, vec!["NVIDIA", "unchanged"]);
//! ```
//!
//! Every operation is pure and synchronous; the only process-wide state is
//! the lazily-loaded linguistic syllabification capability, which callers
//! that stick to the tokenizer and heuristic clusterer never touch.

/// Text analysis pipeline: normalizer, locale profiles, tokenizer.
pub mod analyzer;

/// Grapheme clustering: heuristic and linguistic strategies.
pub mod syllable;

// Re-exports
pub use analyzer::profile::{profile, LocaleProfile};
pub use analyzer::tokenizer::{tokenize, WordPattern};
pub use cadence_types::{CapabilityError, ProfileError, Token, TokenizeError};
pub use syllable::heuristic::{clusters, extract_clusters};
pub use syllable::linguistic::LinguisticClusterer;

/// This library's version number.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
