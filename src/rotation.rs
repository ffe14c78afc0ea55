// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rotation sorting: the Burrows-Wheeler last column and the suffix array.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana"  →  append sentinel  →  "banana$"
//!
//! Sort every cyclic rotation:
//!
//!   row  offset  rotation
//!   0    6       $banana
//!   1    5       a$banan
//!   2    3       ana$ban
//!   3    1       anana$b
//!   4    0       banana$
//!   5    4       na$bana
//!   6    2       nana$ba
//!                      ^ last column: "annb$aa"
//!
//! suffix array = offsets in row order = [6, 5, 3, 1, 0, 4, 2]
//! ```
//!
//! Rotations are never materialized; each comparison walks two wrapped slices of the
//! augmented text.
//!
//! # Depth bound
//!
//! With `max_depth = d >= 1` and a text longer than `d`, a rotation's sort key is its
//! first `d` symbols followed by its last symbol. Rotations whose keys agree fall back
//! to ascending offset, so the output is deterministic but may differ from the fully
//! sorted order. When it does, the rows are not a true BWT and backward search over
//! them can miss or misplace occurrences; `verify_index` reports such an index as
//! `InconsistentRow`.
//!
//! # Complexity
//!
//! - Time: O(n log n) comparisons, each O(d) or O(n), so O(n² log n) unbounded
//! - Space: O(n)

use std::cmp::Ordering;

use crate::config::IndexConfig;
use crate::types::AsSymbols;
use crate::verify::contracts;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sort the rotations of `text` (sentinel appended) and return
/// `(last_column, suffix_array)`.
///
/// `max_depth = 0` compares full rotations.
///
/// ```
/// let (last_column, suffix_array) = bwtex::rotate("banana", 0);
/// assert_eq!(last_column.iter().collect::<String>(), "annb\u{3}aa");
/// assert_eq!(suffix_array, vec![6, 5, 3, 1, 0, 4, 2]);
/// ```
pub fn rotate<T: AsSymbols + ?Sized>(text: &T, max_depth: usize) -> (Vec<char>, Vec<usize>) {
    rotate_with(text, &IndexConfig::default().with_max_depth(max_depth))
}

/// [`rotate`] with an explicit config (depth bound and sentinel).
pub fn rotate_with<T: AsSymbols + ?Sized>(
    text: &T,
    config: &IndexConfig,
) -> (Vec<char>, Vec<usize>) {
    let mut augmented = text.as_symbols().into_owned();
    augmented.push(config.sentinel);

    let n = augmented.len();
    let depth = config.effective_depth(n);
    let mut offsets: Vec<usize> = (0..n).collect();

    // Offsets break ties, which makes the order total and the sort deterministic.
    #[cfg(feature = "parallel")]
    {
        offsets.par_sort_unstable_by(|&a, &b| {
            compare_rotations(&augmented, a, b, depth).then(a.cmp(&b))
        });
    }
    #[cfg(not(feature = "parallel"))]
    {
        offsets.sort_unstable_by(|&a, &b| {
            compare_rotations(&augmented, a, b, depth).then(a.cmp(&b))
        });
    }

    let last_column: Vec<char> = offsets
        .iter()
        .map(|&offset| augmented[(offset + n - 1) % n])
        .collect();

    tracing::debug!(
        len = n,
        max_depth = config.max_depth,
        truncated = depth.is_some(),
        "sorted rotations"
    );

    contracts::check_suffix_array_permutation(&offsets);
    contracts::check_last_column_consistent(&augmented, &last_column, &offsets);
    if depth.is_none() {
        contracts::check_rotations_sorted(&augmented, &offsets);
    }

    (last_column, offsets)
}

/// The rotation of `text` starting at `start`, wrapping to the beginning.
pub(crate) fn rotation(text: &[char], start: usize) -> impl Iterator<Item = char> + '_ {
    text[start..].iter().chain(&text[..start]).copied()
}

/// Sort key of the rotation at `start`: the whole rotation, or its first `depth`
/// symbols followed by its last symbol.
fn rotation_key(
    text: &[char],
    start: usize,
    depth: Option<usize>,
) -> impl Iterator<Item = char> + '_ {
    let n = text.len();
    let last = depth.map(|_| text[(start + n - 1) % n]);
    rotation(text, start)
        .take(depth.unwrap_or(n))
        .chain(last)
}

/// Code-point order of two rotation keys.
pub(crate) fn compare_rotations(
    text: &[char],
    a: usize,
    b: usize,
    depth: Option<usize>,
) -> Ordering {
    rotation_key(text, a, depth).cmp(rotation_key(text, b, depth))
}
