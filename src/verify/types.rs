// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fallible invariant checks and the wrapper type that carries their result.
//!
//! An index built by [`build`](crate::build) satisfies every invariant below by
//! construction. Indexes assembled from outside data (`Index::from_parts`,
//! `Index::init_from`) do not get that guarantee; run them through
//! [`verify_index`] or wrap them in [`WellFormedIndex`].
//!
//! | Check                   | Error                                  |
//! |-------------------------|----------------------------------------|
//! | equal lengths           | `LengthMismatch`                       |
//! | suffix array permutation| `NotAPermutation`                      |
//! | sentinel exactly once   | `MissingSentinel` / `RepeatedSentinel` |
//! | BWT/suffix array agree  | `InconsistentRow`                      |
//! | rows in rotation order  | `InconsistentRow`                      |

use std::ops::Deref;

use thiserror::Error;

use crate::index::Index;

/// Everything that can go wrong outside of queries.
///
/// Queries themselves never fail; a miss is an empty result.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Last column and suffix array have different lengths.
    #[error("last column has {last_column} rows but suffix array has {suffix_array}")]
    LengthMismatch {
        last_column: usize,
        suffix_array: usize,
    },
    /// The suffix array is not a permutation of `0..n`.
    #[error("suffix array entry {offset} at row {position} is out of range or repeated")]
    NotAPermutation { position: usize, offset: usize },
    /// The sentinel never occurs in the last column.
    #[error("sentinel {sentinel:?} does not occur in the last column")]
    MissingSentinel { sentinel: char },
    /// The sentinel occurs more than once, i.e. it collided with the input text.
    #[error("sentinel {sentinel:?} occurs {count} times in the last column")]
    RepeatedSentinel { sentinel: char, count: usize },
    /// A row's last-column symbol does not precede its suffix array offset.
    #[error("row {row} does not agree with the suffix array")]
    InconsistentRow { row: usize },
    /// A config could not be parsed.
    #[cfg(feature = "serde_json")]
    #[error("invalid index config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Check every structural invariant of `index`.
///
/// Costs O(n). Occurrence tables are derived from the last column and are not
/// rechecked here; see `contracts::check_occurrence_tables`.
pub fn verify_index(index: &Index) -> Result<(), IndexError> {
    let n = index.len();

    if index.suffix_array.len() != n {
        return Err(IndexError::LengthMismatch {
            last_column: n,
            suffix_array: index.suffix_array.len(),
        });
    }

    let mut seen = vec![false; n];
    for (position, &offset) in index.suffix_array.iter().enumerate() {
        match seen.get_mut(offset) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(IndexError::NotAPermutation { position, offset }),
        }
    }

    // Inverting also checks that the sentinel occurs exactly once.
    let mut text = index.invert()?;
    text.push(index.sentinel);

    for (row, (&offset, &symbol)) in index
        .suffix_array
        .iter()
        .zip(&index.last_column)
        .enumerate()
    {
        if text[(offset + n - 1) % n] != symbol {
            return Err(IndexError::InconsistentRow { row });
        }
    }

    // Rows sharing a last symbol can trade offsets without breaking the check above.
    // Stepping left must land on the offset one before, which only sorted rows satisfy.
    for (row, &id) in index.last_ids.iter().enumerate() {
        let previous = index.suffix_array[index.lf(id, row)];
        if previous != (index.suffix_array[row] + n - 1) % n {
            return Err(IndexError::InconsistentRow { row });
        }
    }

    Ok(())
}

/// An index whose invariants have been checked by [`verify_index`].
///
/// Dereferences to [`Index`], so every query is available directly.
#[derive(Debug, Clone)]
pub struct WellFormedIndex {
    index: Index,
}

impl WellFormedIndex {
    pub fn new(index: Index) -> Result<Self, IndexError> {
        verify_index(&index)?;
        Ok(Self { index })
    }

    pub fn into_inner(self) -> Index {
        self.index
    }
}

impl Deref for WellFormedIndex {
    type Target = Index;

    fn deref(&self) -> &Index {
        &self.index
    }
}

impl TryFrom<Index> for WellFormedIndex {
    type Error = IndexError;

    fn try_from(index: Index) -> Result<Self, IndexError> {
        Self::new(index)
    }
}
