//! Rotation sort tests.
//!
//! Verifies the last column and suffix array against hand-computed tables and the
//! materialized-rotation oracle.

use bwtex::testing::naive_suffix_array;
use bwtex::{rotate, rotate_with, IndexConfig, SENTINEL};

use super::common::{CORPUS, LAST_COLUMN, PANAMABANANAS, SUFFIX_ARRAY};

fn as_string(column: &[char]) -> String {
    column.iter().collect()
}

#[test]
fn test_reference_rotation() {
    let config = IndexConfig::default().with_sentinel('$');
    let (last_column, suffix_array) = rotate_with(PANAMABANANAS, &config);

    assert_eq!(as_string(&last_column), LAST_COLUMN);
    assert_eq!(suffix_array, SUFFIX_ARRAY.to_vec());
}

#[test]
fn test_corpus_matches_naive_sort() {
    for text in CORPUS {
        let (_, suffix_array) = rotate(*text, 0);
        assert_eq!(suffix_array, naive_suffix_array(text), "text: {:?}", text);
    }
}

#[test]
fn test_first_row_is_sentinel_rotation() {
    for text in CORPUS {
        let (_, suffix_array) = rotate(*text, 0);
        assert_eq!(
            suffix_array[0],
            text.chars().count(),
            "sentinel sorts first for {:?}",
            text
        );
    }
}

#[test]
fn test_last_column_has_one_sentinel() {
    for text in CORPUS {
        let (last_column, _) = rotate(*text, 0);
        let sentinels = last_column.iter().filter(|&&c| c == SENTINEL).count();
        assert_eq!(sentinels, 1, "text: {:?}", text);
    }
}

#[test]
fn test_offsets_are_code_points() {
    // Multi-byte symbols count as one offset each.
    let (last_column, suffix_array) = rotate("ōa", 0);
    assert_eq!(suffix_array, vec![2, 1, 0]);
    assert_eq!(as_string(&last_column), "aō\u{3}");
}

#[test]
fn test_bytes_and_chars_agree_with_str() {
    let from_str = rotate("banana", 0);
    let from_bytes = rotate(b"banana".as_slice(), 0);
    let chars: Vec<char> = "banana".chars().collect();
    let from_chars = rotate(chars.as_slice(), 0);

    assert_eq!(from_str, from_bytes);
    assert_eq!(from_str, from_chars);
}

#[test]
fn test_deep_enough_bound_matches_full_sort() {
    let full = rotate(PANAMABANANAS, 0);
    for depth in [4, 5, 13, 14, 50] {
        assert_eq!(rotate(PANAMABANANAS, depth), full, "depth {}", depth);
    }
}

#[test]
fn test_bounded_sort_is_deterministic() {
    let first = rotate("abracadabra", 2);
    let second = rotate("abracadabra", 2);
    assert_eq!(first, second);
}

#[test]
fn test_bounded_sort_is_still_a_permutation() {
    for depth in 1..6 {
        let (last_column, suffix_array) = rotate("mississippi", depth);
        let mut offsets = suffix_array.clone();
        offsets.sort_unstable();
        assert_eq!(offsets, (0..12).collect::<Vec<_>>(), "depth {}", depth);
        assert_eq!(last_column.len(), 12);
    }
}
