//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Canonicalizes Unicode and folds quote glyphs
//! - **Profile**: Per-locale preprocessing, selected by explicit key
//! - **Tokenizer**: Splits preprocessed text into typed spans

pub mod normalizer;
pub mod profile;
pub mod tokenizer;

pub use normalizer::{fold_quotes, normalize_unicode};
pub use profile::{profile, LocaleProfile};
pub use tokenizer::{tokenize, WordPattern};
