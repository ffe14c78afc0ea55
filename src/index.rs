// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! FM-Index construction.
//!
//! The index keeps the last column, the suffix array, and two tables derived from the
//! last column:
//!
//! ```text
//! last column   s m n p b n n a a a a a $ a        (n = 14)
//!
//! occ['a']      0 0 0 0 0 0 0 0 1 2 3 4 5 5 6      (n + 1 entries)
//! occ['n']      0 0 0 1 1 1 2 3 3 3 3 3 3 3 3
//!
//! first         $:0 a:1 b:7 m:8 n:9 p:12 s:13
//! ```
//!
//! `occ[c][i]` counts `c` in `last_column[0..i)`; `first[c]` is the row where `c`
//! first appears in the sorted first column. Together they give the LF-mapping
//! `lf(c, i) = first[c] + occ[c][i]`, the single step both matchers are built from.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **TABLES_DENSE**: every symbol has all `n + 1` occurrence entries, zero before
//!    its first appearance, so range queries never index a missing entry
//! 2. **OCC_ROW_ZERO**: `occ[c][0] == 0` for every symbol
//! 3. **FROZEN**: tables change only through `init_from`, which takes `&mut self`
//!
//! # Layout
//!
//! Tables are flat `Vec<usize>` addressed by [`SymbolId`]; occurrence counts for symbol
//! `id` live at `occ[id * (n + 1)..(id + 1) * (n + 1)]`.

use crate::alphabet::Alphabet;
use crate::config::IndexConfig;
use crate::rotation::rotate_with;
use crate::types::{AsSymbols, SymbolId, SENTINEL};
use crate::verify::{contracts, IndexError};

/// A frozen Burrows-Wheeler index over one text.
///
/// Cheap to share: it only owns plain vectors, so it is `Send + Sync` and any number
/// of threads can query it through `&Index`.
#[derive(Debug, Clone)]
pub struct Index {
    pub(crate) last_column: Vec<char>,
    /// `last_column` encoded through `alphabet`.
    pub(crate) last_ids: Vec<SymbolId>,
    pub(crate) suffix_array: Vec<usize>,
    pub(crate) alphabet: Alphabet,
    /// Flat occurrence table, stride `last_column.len() + 1`.
    pub(crate) occ: Vec<usize>,
    /// First-occurrence row per symbol (the C-array).
    pub(crate) first: Vec<usize>,
    pub(crate) sentinel: char,
}

impl Default for Index {
    fn default() -> Self {
        Self {
            last_column: Vec::new(),
            last_ids: Vec::new(),
            suffix_array: Vec::new(),
            alphabet: Alphabet::default(),
            occ: Vec::new(),
            first: Vec::new(),
            sentinel: SENTINEL,
        }
    }
}

/// Build an index over `text` (sentinel appended).
///
/// `max_depth = 0` sorts full rotations; see [`rotate`](crate::rotate).
///
/// ```
/// let index = bwtex::build("panamabananas", 0);
/// let mut hits = index.lookup("ana");
/// hits.sort_unstable();
/// assert_eq!(hits, vec![1, 7, 9]);
/// ```
pub fn build<T: AsSymbols + ?Sized>(text: &T, max_depth: usize) -> Index {
    build_with(text, &IndexConfig::default().with_max_depth(max_depth))
}

/// [`build`] with an explicit config.
pub fn build_with<T: AsSymbols + ?Sized>(text: &T, config: &IndexConfig) -> Index {
    let (last_column, suffix_array) = rotate_with(text, config);
    let mut index = Index {
        suffix_array,
        sentinel: config.sentinel,
        ..Index::default()
    };
    index.init_from(&last_column);

    tracing::debug!(
        len = index.len(),
        alphabet = index.alphabet.len(),
        max_depth = config.max_depth,
        "built index"
    );

    index
}

impl Index {
    /// An empty index: no rows, every lookup returns nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair an externally computed last column with its suffix array.
    ///
    /// Fails when the two have different lengths; nothing else is checked here (see
    /// [`verify_index`](crate::verify_index) for the full set of invariants).
    pub fn from_parts<T: AsSymbols + ?Sized>(
        last_column: &T,
        suffix_array: Vec<usize>,
    ) -> Result<Self, IndexError> {
        let mut index = Index {
            suffix_array,
            ..Index::default()
        };
        index.init_from(last_column);

        if index.last_column.len() != index.suffix_array.len() {
            return Err(IndexError::LengthMismatch {
                last_column: index.last_column.len(),
                suffix_array: index.suffix_array.len(),
            });
        }
        Ok(index)
    }

    /// Use `sentinel` as the end-of-text marker (only [`invert`](Self::invert) and
    /// verification look at it).
    pub fn with_sentinel(mut self, sentinel: char) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// (Re)derive the occurrence and first-occurrence tables from `last_column`.
    ///
    /// The suffix array is left untouched.
    pub fn init_from<T: AsSymbols + ?Sized>(&mut self, last_column: &T) {
        let last_column = last_column.as_symbols().into_owned();
        let (alphabet, last_ids) = Alphabet::discover(&last_column);

        let n = last_column.len();
        let stride = n + 1;
        let sigma = alphabet.len();

        // Copy every running count forward, one row per position.
        let mut occ = vec![0usize; sigma * stride];
        let mut running = vec![0usize; sigma];
        for (i, id) in last_ids.iter().enumerate() {
            running[id.index()] += 1;
            for (symbol, &count) in running.iter().enumerate() {
                occ[symbol * stride + i + 1] = count;
            }
        }

        // Row of the first `c` in the sorted first column = number of symbols below `c`.
        let mut first = Vec::with_capacity(sigma);
        let mut below = 0usize;
        for &total in &running {
            first.push(below);
            below += total;
        }

        self.last_column = last_column;
        self.last_ids = last_ids;
        self.alphabet = alphabet;
        self.occ = occ;
        self.first = first;

        contracts::check_occurrence_tables(self);
    }

    /// Number of rows (text length including the sentinel).
    pub fn len(&self) -> usize {
        self.last_column.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_column.is_empty()
    }

    pub fn last_column(&self) -> &[char] {
        &self.last_column
    }

    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    /// Occurrence counts of `symbol`: entry `i` counts it in `last_column[0..i)`.
    pub fn occurrences(&self, symbol: char) -> Option<&[usize]> {
        let id = self.alphabet.id_of(symbol)?;
        let stride = self.stride();
        self.occ.get(id.index() * stride..(id.index() + 1) * stride)
    }

    /// Row at which `symbol` first appears in the sorted first column.
    pub fn first_occurrence(&self, symbol: char) -> Option<usize> {
        let id = self.alphabet.id_of(symbol)?;
        self.first.get(id.index()).copied()
    }

    /// Reconstruct the indexed text (without sentinel) from the last column.
    ///
    /// Starts at the row whose rotation begins with the sentinel and walks the
    /// LF-mapping backwards through the text.
    pub fn invert(&self) -> Result<Vec<char>, IndexError> {
        let sentinel = self.sentinel;
        let id = self
            .alphabet
            .id_of(sentinel)
            .ok_or(IndexError::MissingSentinel { sentinel })?;

        let count = self.occ(id, self.len());
        if count > 1 {
            return Err(IndexError::RepeatedSentinel { sentinel, count });
        }

        let mut row = self.first[id.index()];
        let mut text = Vec::with_capacity(self.len() - 1);
        for _ in 1..self.len() {
            text.push(self.last_column[row]);
            row = self.lf(self.last_ids[row], row);
        }
        text.reverse();
        Ok(text)
    }

    #[inline]
    pub(crate) fn stride(&self) -> usize {
        self.last_column.len() + 1
    }

    /// Count of `id` in `last_column[0..row)`.
    #[inline]
    pub(crate) fn occ(&self, id: SymbolId, row: usize) -> usize {
        self.occ[id.index() * self.stride() + row]
    }

    /// LF-mapping: the row reached by prepending symbol `id` to row `row`.
    #[inline]
    pub(crate) fn lf(&self, id: SymbolId, row: usize) -> usize {
        self.first[id.index()] + self.occ(id, row)
    }
}
