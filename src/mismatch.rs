// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Backward search tolerant of up to `k` substitutions.
//!
//! Exact search can track one contiguous row range because every surviving row
//! agrees on the pattern so far. Once substitutions are allowed, rows that disagree
//! stay alive, so each row is tracked on its own:
//!
//! ```text
//! generation 0:   (0 mismatches, row r)   for every row r
//!
//! per pattern symbol, right to left, for each candidate (m, r):
//!   c = last_column[r]
//!   m' = m + (c != symbol)
//!   drop if m' > k
//!   keep (m', lf(c, r))        ← LF step on the row's own symbol
//! ```
//!
//! After the last symbol, each surviving row maps through the suffix array to the
//! offset where its match starts.
//!
//! # Duplicates
//!
//! The LF-mapping is a bijection on rows and generation 0 holds each row once, so
//! no two candidates ever share a row. Offsets are therefore unique without a
//! dedup pass.
//!
//! # Wraparound
//!
//! The sentinel never equals a pattern symbol, so a candidate can only cross the end
//! of the text by spending a mismatch on it. With `k >= 1` an offset near the end of
//! the text (or the sentinel's own offset, `text.len()`) may be reported for a
//! pattern that runs past the end.
//!
//! # Complexity
//!
//! O(n · m) candidate steps for a pattern of length m. There is no lower-bound
//! pruning; pruning only drops candidates that already exceed `k`.

use crate::index::Index;
use crate::types::AsSymbols;

/// One offset reported by a mismatch search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MismatchHit {
    /// Start of the matched window in the text.
    pub offset: usize,
    /// Substitutions needed to turn the window into the pattern.
    pub mismatches: usize,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    mismatches: usize,
    row: usize,
}

impl Index {
    /// Offsets where `pattern` occurs with at most `threshold` substituted symbols.
    ///
    /// `threshold == 0` is the same as [`lookup`](Self::lookup). Offsets come back in
    /// candidate order, not ascending. An empty pattern matches nothing.
    pub fn lookup_mismatches<P: AsSymbols + ?Sized>(
        &self,
        pattern: &P,
        threshold: usize,
    ) -> Vec<usize> {
        if threshold == 0 {
            return self.lookup(pattern);
        }
        self.surviving_candidates(pattern, threshold)
            .iter()
            .filter_map(|candidate| self.suffix_array.get(candidate.row).copied())
            .collect()
    }

    /// Like [`lookup_mismatches`](Self::lookup_mismatches), also reporting how many
    /// substitutions each hit needed.
    pub fn find_mismatches<P: AsSymbols + ?Sized>(
        &self,
        pattern: &P,
        threshold: usize,
    ) -> Vec<MismatchHit> {
        if threshold == 0 {
            return self
                .lookup(pattern)
                .into_iter()
                .map(|offset| MismatchHit {
                    offset,
                    mismatches: 0,
                })
                .collect();
        }
        self.surviving_candidates(pattern, threshold)
            .iter()
            .filter_map(|candidate| {
                let offset = *self.suffix_array.get(candidate.row)?;
                Some(MismatchHit {
                    offset,
                    mismatches: candidate.mismatches,
                })
            })
            .collect()
    }

    fn surviving_candidates<P: AsSymbols + ?Sized>(
        &self,
        pattern: &P,
        threshold: usize,
    ) -> Vec<Candidate> {
        let pattern = pattern.as_symbols();
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<Candidate> = (0..self.len())
            .map(|row| Candidate { mismatches: 0, row })
            .collect();
        let mut next = Vec::with_capacity(candidates.len());

        for (step, &symbol) in pattern.iter().rev().enumerate() {
            // A symbol outside the alphabet mismatches every row.
            let wanted = self.alphabet.id_of(symbol);

            next.clear();
            for candidate in &candidates {
                let actual = self.last_ids[candidate.row];
                let mismatches = candidate.mismatches + usize::from(wanted != Some(actual));
                if mismatches > threshold {
                    continue;
                }
                next.push(Candidate {
                    mismatches,
                    row: self.lf(actual, candidate.row),
                });
            }
            std::mem::swap(&mut candidates, &mut next);

            if candidates.is_empty() {
                tracing::trace!(step, threshold, "all candidates pruned");
                return Vec::new();
            }
        }

        tracing::trace!(hits = candidates.len(), threshold, "mismatch lookup");
        candidates
    }
}
