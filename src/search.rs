// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact backward search.
//!
//! The pattern is consumed right to left. Each step narrows a half-open row range
//! `[top, bottom)` to the rows whose rotations start with the suffix of the pattern
//! consumed so far:
//!
//! ```text
//! pattern "ana" over "panamabananas$"
//!
//!   start          [0, 14)   every row
//!   after 'a'      [1, 7)    rotations starting "a"
//!   after 'n'      [9, 12)   rotations starting "na"
//!   after 'a'      [3, 6)    rotations starting "ana"  →  sa[3..6] = [1, 7, 9]
//! ```
//!
//! A symbol missing from the alphabet, or an empty range, ends the search early.

use std::ops::Range;

use crate::index::Index;
use crate::types::AsSymbols;

impl Index {
    /// Row range of rotations starting with `pattern`, or `None` when there is no
    /// occurrence (or the pattern is empty).
    pub fn range<P: AsSymbols + ?Sized>(&self, pattern: &P) -> Option<Range<usize>> {
        let pattern = pattern.as_symbols();
        if pattern.is_empty() {
            return None;
        }

        let mut top = 0usize;
        let mut bottom = self.len();

        for &symbol in pattern.iter().rev() {
            let Some(id) = self.alphabet.id_of(symbol) else {
                tracing::trace!(?symbol, "symbol not in alphabet");
                return None;
            };
            if top >= bottom {
                return None;
            }
            top = self.lf(id, top);
            bottom = self.lf(id, bottom);
        }

        (top < bottom).then_some(top..bottom)
    }

    /// Offsets of every exact occurrence of `pattern`.
    ///
    /// Offsets come back in suffix-array order, not ascending; sort them if that
    /// matters. An empty pattern matches nothing.
    pub fn lookup<P: AsSymbols + ?Sized>(&self, pattern: &P) -> Vec<usize> {
        let offsets = self
            .range(pattern)
            .and_then(|rows| self.suffix_array.get(rows))
            .map(<[usize]>::to_vec)
            .unwrap_or_default();

        tracing::trace!(hits = offsets.len(), "exact lookup");
        offsets
    }

    /// Number of exact occurrences of `pattern`, without locating them.
    pub fn count<P: AsSymbols + ?Sized>(&self, pattern: &P) -> usize {
        self.range(pattern).map_or(0, |rows| rows.len())
    }
}
