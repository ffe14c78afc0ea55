// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference oracles shared by unit tests, integration tests, benches and fuzzing.
//!
//! This module is always compiled but hidden from documentation. Every function here
//! is the slow, obviously-correct version of something the index does fast; tests
//! compare the two.

#![doc(hidden)]

use crate::types::SENTINEL;

/// Offsets of every exact occurrence of `pattern` in `text`, ascending, by scanning.
///
/// Offsets are in code points, like the index's.
pub fn naive_occurrences(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern.as_slice())
        .map(|(offset, _)| offset)
        .collect()
}

/// Offsets `p` of `text + sentinel` whose cyclic window `p..p + m` differs from
/// `pattern` in at most `threshold` positions, ascending.
///
/// This is exactly the set a mismatch search reports for `threshold >= 1`: every row
/// is a candidate and the walk wraps through the sentinel like any other symbol.
pub fn cyclic_mismatch_offsets(text: &str, pattern: &str, threshold: usize) -> Vec<usize> {
    let mut augmented: Vec<char> = text.chars().collect();
    augmented.push(SENTINEL);
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() {
        return Vec::new();
    }

    let n = augmented.len();
    (0..n)
        .filter(|&offset| {
            let mismatches = pattern
                .iter()
                .enumerate()
                .filter(|&(i, &symbol)| augmented[(offset + i) % n] != symbol)
                .count();
            mismatches <= threshold
        })
        .collect()
}

/// Suffix array of `text + sentinel` by materializing and sorting every rotation.
pub fn naive_suffix_array(text: &str) -> Vec<usize> {
    let mut augmented: Vec<char> = text.chars().collect();
    augmented.push(SENTINEL);

    let n = augmented.len();
    let mut rotations: Vec<(Vec<char>, usize)> = (0..n)
        .map(|offset| {
            let mut rotation = augmented[offset..].to_vec();
            rotation.extend_from_slice(&augmented[..offset]);
            (rotation, offset)
        })
        .collect();
    rotations.sort();
    rotations.into_iter().map(|(_, offset)| offset).collect()
}

/// Sort a result for order-insensitive comparison.
pub fn sorted(mut offsets: Vec<usize>) -> Vec<usize> {
    offsets.sort_unstable();
    offsets
}
