//! Shared test utilities and fixtures.

#![allow(dead_code)]

use bwtex::Index;

// ============================================================================
// REFERENCE DATA: "panamabananas"
// ============================================================================

/// The classic worked example.
pub const PANAMABANANAS: &str = "panamabananas";

/// Last column of "panamabananas" with '$' standing in for the sentinel.
pub const LAST_COLUMN: &str = "smnpbnnaaaaa$a";

/// Suffix array of "panamabananas" plus sentinel.
pub const SUFFIX_ARRAY: [usize; 14] = [13, 5, 3, 1, 7, 9, 11, 6, 4, 2, 8, 10, 0, 12];

/// Occurrence tables of `LAST_COLUMN`, one row of `n + 1` counts per symbol.
pub const OCCURRENCES: [(char, [usize; 15]); 7] = [
    ('a', [0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5, 5, 6]),
    ('$', [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1]),
    ('m', [0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    ('p', [0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    ('s', [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    ('b', [0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    ('n', [0, 0, 0, 1, 1, 1, 2, 3, 3, 3, 3, 3, 3, 3, 3]),
];

/// First-occurrence rows of `LAST_COLUMN`.
pub const FIRST_OCCURRENCES: [(char, usize); 7] = [
    ('a', 1),
    ('p', 12),
    ('s', 13),
    ('b', 7),
    ('m', 8),
    ('$', 0),
    ('n', 9),
];

/// Index assembled from the reference last column and suffix array.
pub fn reference_index() -> Index {
    Index::from_parts(LAST_COLUMN, SUFFIX_ARRAY.to_vec())
        .expect("reference parts have equal lengths")
        .with_sentinel('$')
}

// ============================================================================
// CORPUS
// ============================================================================

/// Small texts covering repeats, single symbols and multi-byte code points.
pub const CORPUS: &[&str] = &[
    "",
    "a",
    "aaaa",
    "banana",
    "mississippi",
    "abracadabra",
    "panamabananas",
    "the quick brown fox jumps over the lazy dog",
    "tummalachērla",
    "తెలుగు",
    "café naïve résumé",
];

// ============================================================================
// STRATEGIES
// ============================================================================

pub mod strategies {
    use proptest::prelude::*;

    /// Small-alphabet text, dense with repeats.
    pub fn repetitive_text() -> impl Strategy<Value = String> {
        prop::string::string_regex("[abn]{0,32}").unwrap()
    }

    /// Pattern over the same alphabet plus one symbol that never occurs.
    pub fn pattern() -> impl Strategy<Value = String> {
        prop::string::string_regex("[abnx]{1,5}").unwrap()
    }

    /// Text built from words with multi-byte code points.
    pub fn unicode_text() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::sample::select(vec!["café", "tōkyō", "harīṣh", "తెలుగు", "naïve", "a", "ō"]),
            0..6,
        )
        .prop_map(|words| words.join(" "))
    }
}
