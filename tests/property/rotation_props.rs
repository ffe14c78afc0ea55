//! Rotation sort and table property tests.
//!
//! - Permutation: the suffix array holds every offset once
//! - Consistency: each last-column symbol precedes its row's offset
//! - Order: an unbounded sort matches the materialized-rotation oracle
//! - Inversion: the last column alone recovers the text

use bwtex::testing::naive_suffix_array;
use bwtex::{build, rotate, verify_index, SENTINEL};
use proptest::prelude::*;

use super::common::strategies::{repetitive_text, unicode_text};

fn augmented(text: &str) -> Vec<char> {
    text.chars().chain(std::iter::once(SENTINEL)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: for any depth bound, the suffix array is a permutation of `0..n`.
    #[test]
    fn prop_suffix_array_is_permutation(text in repetitive_text(), depth in 0usize..6) {
        let (_, suffix_array) = rotate(&text, depth);
        let mut offsets = suffix_array.clone();
        offsets.sort_unstable();
        let n = text.chars().count() + 1;
        prop_assert_eq!(offsets, (0..n).collect::<Vec<_>>());
    }

    /// Property: `last[i] == text[(sa[i] + n - 1) % n]`, bounded or not.
    #[test]
    fn prop_last_column_precedes_offset(text in repetitive_text(), depth in 0usize..6) {
        let (last_column, suffix_array) = rotate(&text, depth);
        let aug = augmented(&text);
        let n = aug.len();
        for (row, &offset) in suffix_array.iter().enumerate() {
            prop_assert_eq!(last_column[row], aug[(offset + n - 1) % n], "row {}", row);
        }
    }

    /// Property: an unbounded sort agrees with sorting materialized rotations.
    #[test]
    fn prop_full_sort_matches_oracle(text in repetitive_text()) {
        let (_, suffix_array) = rotate(&text, 0);
        prop_assert_eq!(suffix_array, naive_suffix_array(&text));
    }

    /// Property: a depth bound at or past the augmented length is a full sort.
    #[test]
    fn prop_large_depth_is_full_sort(text in repetitive_text(), extra in 0usize..4) {
        let n = text.chars().count() + 1;
        prop_assert_eq!(rotate(&text, n + extra), rotate(&text, 0));
    }

    /// Property: inverting a built index returns the text.
    #[test]
    fn prop_invert_roundtrip(text in unicode_text()) {
        let index = build(&text, 0);
        let recovered: String = index.invert().unwrap().into_iter().collect();
        prop_assert_eq!(recovered, text);
    }

    /// Property: built indexes pass every structural check.
    #[test]
    fn prop_built_index_verifies(text in unicode_text()) {
        prop_assert!(verify_index(&build(&text, 0)).is_ok());
    }

    /// Property: each occurrence table ends at the symbol's total count.
    #[test]
    fn prop_occurrence_totals(text in repetitive_text()) {
        let index = build(&text, 0);
        for &symbol in index.alphabet().symbols() {
            let expected = augmented(&text).iter().filter(|&&c| c == symbol).count();
            prop_assert_eq!(index.occurrences(symbol).and_then(|c| c.last()).copied(), Some(expected));
        }
    }
}
