//! Linguistic Grapheme Clustering
//!
//! Orthographic syllabification through an external, possibly-absent
//! capability. Unlike the heuristic clusterer next door, which only knows
//! symbol membership, a real syllabifier understands the orthography of a
//! specific language and produces linguistically correct syllables. The two
//! outputs are materially different and are **not** interchangeable, which
//! is why nothing in this module ever falls back to the heuristic path.
//!
//! ## The Contract
//!
//! - a [`Syllabifier`] splits one preprocessed word into syllables,
//! - a [`SyllabifierLoader`] resolves a syllabifier for a language id from
//!   a directory of per-language resources,
//! - a [`ResourceConfig`] names that directory — by default from the
//!   `CADENCE_RESOURCES_ROOT` environment variable.
//!
//! Loaders are invoked lazily on first use per language and the result is
//! cached; callers that never request linguistic clustering pay nothing
//! for its absence. When any link of the chain is missing, clustering
//! fails with a [`CapabilityError`] naming the missing dependency.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use cadence_types::CapabilityError;
use rustc_hash::FxHashMap;

use crate::analyzer::profile::any_locale_preprocess;

/// Name of the environment variable holding the resource root directory.
pub const RESOURCES_ROOT_VAR: &str = "CADENCE_RESOURCES_ROOT";

/// Per-word orthographic syllabification.
///
/// Implementations receive one whitespace-free, locale-preprocessed word at
/// a time and return its syllables in order.
pub trait Syllabifier: Send + Sync {
    /// Splits a single word into syllables.
    fn syllabify(&self, word: &str) -> Vec<String>;
}

/// Resolves a [`Syllabifier`] for a language from a resource directory.
///
/// Loading is the external collaborator's business: this crate defines only
/// the seam. A loader that cannot serve a language reports
/// [`CapabilityError::ResourcesMissing`] or [`CapabilityError::LoadFailed`],
/// never a stand-in syllabifier.
pub trait SyllabifierLoader: Send + Sync {
    /// Loads the syllabifier for `language` from resources under `root`.
    fn load(
        &self,
        root: &Path,
        language: &str,
    ) -> Result<Arc<dyn Syllabifier>, CapabilityError>;
}

/// Supplies the resource root directory.
///
/// Configuration is read through this seam instead of ad hoc environment
/// lookups so the clusterer stays testable without mutating process state.
pub trait ResourceConfig: Send + Sync {
    /// Returns the resource root, or the error naming what is missing.
    fn resources_root(&self) -> Result<PathBuf, CapabilityError>;
}

/// [`ResourceConfig`] backed by an environment variable.
#[derive(Debug, Clone, Copy)]
pub struct EnvResourceConfig {
    variable: &'static str,
}

impl EnvResourceConfig {
    /// Creates a config reading the given environment variable.
    #[inline]
    pub const fn new(variable: &'static str) -> Self {
        Self { variable }
    }
}

impl Default for EnvResourceConfig {
    fn default() -> Self {
        Self::new(RESOURCES_ROOT_VAR)
    }
}

impl ResourceConfig for EnvResourceConfig {
    fn resources_root(&self) -> Result<PathBuf, CapabilityError> {
        std::env::var_os(self.variable)
            .map(PathBuf::from)
            .ok_or(CapabilityError::Unconfigured {
                variable: self.variable,
            })
    }
}

/// Language-aware grapheme clusterer delegating to external syllabifiers.
///
/// Holds the configuration seam, the loader seam, and a per-language cache
/// of resolved syllabifiers. The cache is populated lazily under a mutex,
/// so concurrent first use of a language loads its resources exactly once.
pub struct LinguisticClusterer {
    config: Box<dyn ResourceConfig>,
    loader: Box<dyn SyllabifierLoader>,
    cache: Mutex<FxHashMap<String, Arc<dyn Syllabifier>>>,
}

impl LinguisticClusterer {
    /// Creates a clusterer from explicit configuration and loader seams.
    pub fn new(config: Box<dyn ResourceConfig>, loader: Box<dyn SyllabifierLoader>) -> Self {
        Self {
            config,
            loader,
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    /// Creates a clusterer configured from `CADENCE_RESOURCES_ROOT`.
    pub fn from_env(loader: Box<dyn SyllabifierLoader>) -> Self {
        Self::new(Box::new(EnvResourceConfig::default()), loader)
    }

    /// Clusters text into linguistically correct syllables.
    ///
    /// The text is preprocessed with the `"any"` profile, split on ASCII
    /// whitespace, and syllabified word by word in order. A single-space
    /// cluster is inserted between the results of consecutive words, but
    /// not after the last one.
    ///
    /// # Errors
    ///
    /// Returns a [`CapabilityError`] when the capability cannot be
    /// resolved — unset configuration, missing resources, or a failed
    /// load. There is no partial output and no heuristic fallback.
    pub fn cluster(&self, text: &str, language: &str) -> Result<Vec<String>, CapabilityError> {
        // Resolve the capability before doing any text work, so a missing
        // dependency surfaces regardless of input.
        let syllabifier = self.syllabifier(language)?;

        let text = any_locale_preprocess(text);
        let words: Vec<&str> = text.split_ascii_whitespace().collect();

        let mut out = Vec::new();
        for (i, word) in words.iter().enumerate() {
            out.extend(syllabifier.syllabify(word));
            if i + 1 != words.len() {
                out.push(" ".to_owned());
            }
        }
        Ok(out)
    }

    /// Returns the cached syllabifier for `language`, loading it on first
    /// use.
    fn syllabifier(&self, language: &str) -> Result<Arc<dyn Syllabifier>, CapabilityError> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = cache.get(language) {
            return Ok(Arc::clone(cached));
        }

        let root = self.config.resources_root()?;
        let loaded = self.loader.load(&root, language)?;
        cache.insert(language.to_owned(), Arc::clone(&loaded));
        Ok(loaded)
    }
}

static GLOBAL: OnceLock<LinguisticClusterer> = OnceLock::new();

/// Installs the process-wide linguistic clusterer.
///
/// May be called at most once; later attempts get the rejected clusterer
/// back so the caller can decide what to do with it.
pub fn install(clusterer: LinguisticClusterer) -> Result<(), LinguisticClusterer> {
    GLOBAL.set(clusterer)
}

/// Returns the process-wide clusterer, if one has been installed.
pub fn global() -> Option<&'static LinguisticClusterer> {
    GLOBAL.get()
}

/// Clusters text with the process-wide clusterer.
///
/// # Errors
///
/// [`CapabilityError::NotInstalled`] when [`install`] has not been called;
/// otherwise whatever the installed clusterer reports.
pub fn cluster_linguistic(text: &str, language: &str) -> Result<Vec<String>, CapabilityError> {
    global()
        .ok_or(CapabilityError::NotInstalled)?
        .cluster(text, language)
}
