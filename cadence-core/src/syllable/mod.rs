//! Grapheme clustering.
//!
//! Two independent strategies over preprocessed text:
//! - **Heuristic**: Symbol-membership clustering with a caller-supplied
//!   combining set — generic, script-agnostic
//! - **Linguistic**: Orthographic syllabification through an external
//!   capability — language-specific and correct, but possibly absent
//!
//! The strategies produce materially different output and are never
//! substituted for one another.

pub mod heuristic;
pub mod linguistic;

pub use heuristic::{clusters, extract_clusters};
pub use linguistic::{cluster_linguistic, LinguisticClusterer, Syllabifier};
