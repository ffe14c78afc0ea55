// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts checked while an index is built.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds**: every body sits behind `cfg!(debug_assertions)`
//! 2. **Early failure detection**: a broken sort or table shows up in the first test
//!    that builds an index, not as a wrong answer three layers later
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function                | Property                                      |
//! |----------------------------------|-----------------------------------------------|
//! | `check_suffix_array_permutation` | suffix array is a permutation of `0..n`       |
//! | `check_last_column_consistent`   | `last[i] == text[(sa[i] + n - 1) % n]`        |
//! | `check_rotations_sorted`         | rows ascend in full-rotation order            |
//! | `check_occurrence_tables`        | dense, start at 0, running counts of the BWT  |
//!
//! Sentinel uniqueness is deliberately absent: a collision comes from the caller's
//! text, and `verify_index` reports it as an error instead.

use crate::index::Index;
use crate::rotation::compare_rotations;

// ============================================================================
// ROTATION CONTRACTS
// ============================================================================

/// Check that `suffix_array` holds every offset in `0..n` exactly once.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_suffix_array_permutation(suffix_array: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut seen = vec![false; suffix_array.len()];
    for (row, &offset) in suffix_array.iter().enumerate() {
        debug_assert!(
            offset < suffix_array.len() && !seen[offset],
            "Contract violation: SuffixArray.Permutation - \
             suffix_array[{}] = {} is out of range or repeated",
            row,
            offset
        );
        if let Some(slot) = seen.get_mut(offset) {
            *slot = true;
        }
    }
}

/// Check that each last-column symbol is the one preceding its row's offset.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_last_column_consistent(text: &[char], last_column: &[char], suffix_array: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert_eq!(
        last_column.len(),
        suffix_array.len(),
        "Contract violation: Bwt.Aligned - last_column.len() {} != suffix_array.len() {}",
        last_column.len(),
        suffix_array.len()
    );

    let n = text.len();
    for (row, (&symbol, &offset)) in last_column.iter().zip(suffix_array).enumerate() {
        debug_assert_eq!(
            symbol,
            text[(offset + n - 1) % n],
            "Contract violation: Bwt.Consistent - row {} (offset {})",
            row,
            offset
        );
    }
}

/// Check that consecutive rows ascend in full-rotation order.
///
/// Only meaningful for unbounded sorts; truncated keys may legitimately disagree.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_rotations_sorted(text: &[char], suffix_array: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }

    for (row, pair) in suffix_array.windows(2).enumerate() {
        debug_assert!(
            compare_rotations(text, pair[0], pair[1], None).is_le(),
            "Contract violation: Rotations.Sorted - row {} (offset {}) > row {} (offset {})",
            row,
            pair[0],
            row + 1,
            pair[1]
        );
    }
}

// ============================================================================
// TABLE CONTRACTS
// ============================================================================

/// Check that every occurrence table is dense, starts at zero, and is the running
/// count of its symbol over the last column; and that first positions ascend.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_occurrence_tables(index: &Index) {
    if !cfg!(debug_assertions) {
        return;
    }

    let stride = index.stride();
    debug_assert_eq!(
        index.occ.len(),
        index.alphabet.len() * stride,
        "Contract violation: Occ.Dense - {} entries for {} symbols of stride {}",
        index.occ.len(),
        index.alphabet.len(),
        stride
    );

    for (id, counts) in index.occ.chunks(stride).enumerate() {
        debug_assert_eq!(
            counts.first(),
            Some(&0),
            "Contract violation: Occ.RowZero - symbol #{}",
            id
        );
        for (i, window) in counts.windows(2).enumerate() {
            let step = usize::from(index.last_ids[i].index() == id);
            debug_assert_eq!(
                window[1],
                window[0] + step,
                "Contract violation: Occ.RunningCount - symbol #{} at {}",
                id,
                i + 1
            );
        }
    }

    debug_assert!(
        index.first.windows(2).all(|pair| pair[0] < pair[1]),
        "Contract violation: First.Ascending - {:?}",
        index.first
    );
}
