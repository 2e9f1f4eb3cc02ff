//! Heuristic Grapheme Clustering
//!
//! Groups code points into syllable-like clusters using a caller-supplied
//! set of combining symbols. This is the generic, script-agnostic
//! approximation: a cluster boundary falls immediately before any retained
//! character that is *not* in the combining set.
//!
//! For Indic scripts the combining set is the locale's vowel signs, virama,
//! nukta and similar attaching marks, so `"रा"` (consonant + vowel sign)
//! stays one cluster while `"रर"` splits in two.
//!
//! ## Filtering
//!
//! Digits, ASCII punctuation, and whitespace are dropped before clustering:
//! they never start a cluster and are never emitted as clusters of their
//! own. This is deliberate — the clusters feed a pronunciation inventory
//! where such characters have no place. Script-specific punctuation outside
//! ASCII (the Devanagari danda, for instance) is retained and treated like
//! any other non-combining character.

use rustc_hash::FxHashSet;

/// True for characters the clusterer drops entirely.
#[inline(always)]
fn is_filtered(c: char) -> bool {
    c.is_numeric() || c.is_ascii_punctuation() || c.is_whitespace()
}

/// Emits grapheme clusters of `text` via callback.
///
/// The caller is expected to have applied locale preprocessing (the `"any"`
/// profile) to `text` already. Each retained character either joins the
/// open cluster (when it is in `combining_symbols`) or closes it and opens
/// a new one. The first retained character always opens a cluster, even
/// when it is itself a combining symbol, so no cluster is ever empty.
///
/// # Example
///
/// ```
/// use cadence_core::syllable::heuristic::extract_clusters;
/// use rustc_hash::FxHashSet;
///
/// let marks: FxHashSet<char> = ['ा', 'े'].into_iter().collect();
/// let mut out = Vec::new();
/// extract_clusters("असरारे", &marks, |c| out.push(c.to_string()));
/// assert_eq!(out, ["अ", "स", "रा", "रे"]);
/// ```
pub fn extract_clusters<F>(text: &str, combining_symbols: &FxHashSet<char>, mut emit: F)
where
    F: FnMut(&str),
{
    let mut current = String::new();

    for c in text.chars() {
        if is_filtered(c) {
            continue;
        }
        if current.is_empty() || combining_symbols.contains(&c) {
            current.push(c);
        } else {
            emit(&current);
            current.clear();
            current.push(c);
        }
    }

    if !current.is_empty() {
        emit(&current);
    }
}

/// Collects the grapheme clusters of `text` into a `Vec`.
///
/// See [`extract_clusters`] for the clustering rules.
pub fn clusters(text: &str, combining_symbols: &FxHashSet<char>) -> Vec<String> {
    let mut out = Vec::new();
    extract_clusters(text, combining_symbols, |c| out.push(c.to_owned()));
    out
}

/// Builds a sorted, deduplicated cluster inventory from a corpus.
///
/// Useful for deriving the syllable set of a training corpus in one pass;
/// reading and writing the corpus files is the caller's business.
pub fn syllable_inventory(text: &str, combining_symbols: &FxHashSet<char>) -> Vec<String> {
    let mut inventory = clusters(text, combining_symbols);
    inventory.sort_unstable();
    inventory.dedup();
    inventory
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Devanagari vowel signs, virama, nukta and friends.
    fn devanagari_marks() -> FxHashSet<char> {
        [
            'ा', 'ि', 'ी', 'ु', 'ू', 'ृ', 'े', 'ै', 'ो', 'ौ', '्', 'ं', 'ः', 'ऽ', '़', 'ॄ', 'ँ',
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn scenario_devanagari_word() {
        let out = clusters("असरारे", &devanagari_marks());
        assert_eq!(out, ["अ", "स", "रा", "रे"]);
    }

    #[test]
    fn devanagari_sentence_with_punctuation() {
        let out = clusters("असरारे मआबिद- उर्दू", &devanagari_marks());
        assert_eq!(
            out,
            ["अ", "स", "रा", "रे", "म", "आ", "बि", "द", "उ", "र्", "दू"]
        );
    }

    #[test]
    fn digits_punctuation_whitespace_are_dropped() {
        let marks = FxHashSet::default();
        let out = clusters("a1b, c\td २", &marks);
        assert_eq!(out, ["a", "b", "c", "d"]);
    }

    #[test]
    fn non_ascii_punctuation_is_retained() {
        // The Devanagari danda is not ASCII punctuation; it stays, like the
        // original behavior this mirrors.
        let out = clusters("क।", &devanagari_marks());
        assert_eq!(out, ["क", "।"]);
    }

    #[test]
    fn empty_input_emits_no_clusters() {
        let marks = devanagari_marks();
        assert!(clusters("", &marks).is_empty());
        assert!(clusters(" .7 ", &marks).is_empty());
    }

    #[test]
    fn no_cluster_is_empty() {
        let marks = devanagari_marks();
        let inputs = ["असरारे", "  ा", "ा", "a b c", "1 2 3"];
        for input in inputs {
            for cluster in clusters(input, &marks) {
                assert!(!cluster.is_empty(), "empty cluster for {input:?}");
            }
        }
    }

    #[test]
    fn leading_combining_mark_opens_its_own_cluster() {
        // A mark with no base character still becomes a (non-empty) cluster;
        // the following base character starts a fresh one.
        let out = clusters("ाक", &devanagari_marks());
        assert_eq!(out, ["ा", "क"]);
    }

    #[test]
    fn coverage_concatenation_equals_filtered_input() {
        let marks = devanagari_marks();
        let inputs = ["असरारे मआबिद- उर्दू", "abc, def!", "ा ाा  क"];
        for input in inputs {
            let joined: String = clusters(input, &marks).concat();
            let filtered: String = input.chars().filter(|&c| !is_filtered(c)).collect();
            assert_eq!(joined, filtered, "coverage broken for {input:?}");
        }
    }

    #[test]
    fn empty_combining_set_splits_every_char() {
        let marks = FxHashSet::default();
        let out = clusters("अस", &marks);
        assert_eq!(out, ["अ", "स"]);
    }

    #[test]
    fn callback_and_collector_agree() {
        let marks = devanagari_marks();
        let mut streamed = Vec::new();
        extract_clusters("असरारे", &marks, |c| streamed.push(c.to_owned()));
        assert_eq!(streamed, clusters("असरारे", &marks));
    }

    #[test]
    fn inventory_is_sorted_and_unique() {
        let marks = devanagari_marks();
        let inventory = syllable_inventory("असरारे असरारे", &marks);
        assert_eq!(inventory.len(), 4);
        let mut sorted = inventory.clone();
        sorted.sort();
        assert_eq!(inventory, sorted);
    }
}
