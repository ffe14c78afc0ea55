// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Alphabet discovery: one pass over the last column assigns every distinct symbol a
//! dense [`SymbolId`].
//!
//! Ids follow ascending code-point order. That ordering is what lets the C-array be a
//! plain prefix sum over per-symbol totals.
//!
//! ```text
//! last column: s m n p b n n a a a a a $ a
//! alphabet:    $ a b m n p s
//! ids:         0 1 2 3 4 5 6
//! ```

use crate::types::SymbolId;

/// Code points below this resolve through a direct table instead of a binary search.
const ASCII_LIMIT: usize = 128;

/// The sorted set of distinct symbols in an indexed text.
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// Distinct symbols, ascending. `symbols[id]` is the symbol for `SymbolId(id)`.
    symbols: Vec<char>,
    /// Direct id lookup for ASCII symbols.
    ascii: [Option<SymbolId>; ASCII_LIMIT],
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            ascii: [None; ASCII_LIMIT],
        }
    }
}

impl Alphabet {
    /// Discover the alphabet of `symbols` and encode them in the same pass.
    ///
    /// Returns the alphabet together with `symbols` rewritten as ids.
    pub fn discover(symbols: &[char]) -> (Self, Vec<SymbolId>) {
        let mut distinct = symbols.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        let mut ascii = [None; ASCII_LIMIT];
        for (id, &symbol) in distinct.iter().enumerate() {
            if (symbol as usize) < ASCII_LIMIT {
                ascii[symbol as usize] = Some(SymbolId::from(id));
            }
        }

        // Every symbol is present in `distinct`, so the search always lands on Ok.
        let encoded = symbols
            .iter()
            .map(|symbol| SymbolId::from(distinct.binary_search(symbol).unwrap_or_else(|pos| pos)))
            .collect();

        (
            Self {
                symbols: distinct,
                ascii,
            },
            encoded,
        )
    }

    /// Id of `symbol`, or `None` if it never occurs in the indexed text.
    #[inline]
    pub fn id_of(&self, symbol: char) -> Option<SymbolId> {
        let code = symbol as usize;
        if code < ASCII_LIMIT {
            return self.ascii[code];
        }
        self.symbols
            .binary_search(&symbol)
            .ok()
            .map(SymbolId::from)
    }

    /// Symbol for `id`, if the id is in range.
    #[inline]
    pub fn symbol(&self, id: SymbolId) -> Option<char> {
        self.symbols.get(id.index()).copied()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.id_of(symbol).is_some()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Distinct symbols in ascending order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}
