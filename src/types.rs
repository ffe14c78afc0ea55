// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by every stage of the index.
//!
//! Text is handled as a sequence of Unicode code points (`char`). Whatever the caller
//! hands us (a `&str`, raw UTF-8 bytes, or an explicit `[char]` slice) is normalized
//! once at the boundary through [`AsSymbols`], so the rotation sorter, the table
//! builder and both matchers only ever see `[char]`.
//!
//! # Invariants
//!
//! - **Sentinel**: appended exactly once, at the end of the text. It must not occur in
//!   the input. A collision is not detected during construction and yields silently
//!   wrong answers; `verify::verify_index` reports it after the fact.
//!
//! - **SymbolId**: dense, assigned in ascending code-point order, so comparing ids is
//!   the same as comparing the symbols they stand for.

use std::borrow::Cow;

/// End-of-text marker (U+0003, ETX) appended to every indexed text.
///
/// Without it, "line" would match the query "eli" through the wraparound rotation
/// "eline".
pub const SENTINEL: char = '\u{3}';

/// Dense identifier of a symbol within an [`Alphabet`](crate::Alphabet).
///
/// Indexes the flat occurrence and first-position tables directly, so the hot path of
/// backward search never touches a hash map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Position of this symbol's row in the per-symbol tables.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for SymbolId {
    #[inline]
    fn from(id: usize) -> Self {
        SymbolId(id as u32)
    }
}

/// Anything that can be read as an ordered sequence of code points.
///
/// Bytes are decoded as UTF-8; invalid sequences become U+FFFD, one per maximal
/// invalid subsequence, exactly like [`String::from_utf8_lossy`].
///
/// ```
/// use bwtex::AsSymbols;
///
/// assert_eq!(&*"añb".as_symbols(), &['a', 'ñ', 'b']);
/// assert_eq!(&*b"ab".as_symbols(), &['a', 'b']);
/// assert_eq!(&*['x', 'y'].as_symbols(), &['x', 'y']);
/// ```
pub trait AsSymbols {
    /// Borrow or decode the code points of `self`.
    fn as_symbols(&self) -> Cow<'_, [char]>;
}

impl AsSymbols for str {
    fn as_symbols(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl AsSymbols for String {
    fn as_symbols(&self) -> Cow<'_, [char]> {
        self.as_str().as_symbols()
    }
}

impl AsSymbols for [u8] {
    fn as_symbols(&self) -> Cow<'_, [char]> {
        Cow::Owned(String::from_utf8_lossy(self).chars().collect())
    }
}

impl AsSymbols for Vec<u8> {
    fn as_symbols(&self) -> Cow<'_, [char]> {
        self.as_slice().as_symbols()
    }
}

impl<const N: usize> AsSymbols for [u8; N] {
    fn as_symbols(&self) -> Cow<'_, [char]> {
        self.as_slice().as_symbols()
    }
}

impl AsSymbols for [char] {
    fn as_symbols(&self) -> Cow<'_, [char]> {
        Cow::Borrowed(self)
    }
}

impl AsSymbols for Vec<char> {
    fn as_symbols(&self) -> Cow<'_, [char]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<const N: usize> AsSymbols for [char; N] {
    fn as_symbols(&self) -> Cow<'_, [char]> {
        Cow::Borrowed(self.as_slice())
    }
}
