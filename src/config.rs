// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction settings.
//!
//! Every field has a default, so a config file only needs to name what it changes:
//!
//! ```json
//! { "max_depth": 32 }
//! ```

use serde::{Deserialize, Serialize};

use crate::types::SENTINEL;

/// How an index is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Rotation sort depth. `0` compares full rotations; `d >= 1` compares only the
    /// first `d` symbols of each rotation followed by its last symbol, once the text
    /// (with sentinel) is longer than `d`.
    pub max_depth: usize,
    /// End-of-text marker appended to the text. Must not occur in the input.
    pub sentinel: char,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_depth: 0,
            sentinel: SENTINEL,
        }
    }
}

impl IndexConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_sentinel(mut self, sentinel: char) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Depth the rotation sorter actually truncates to for a text of `len` symbols
    /// (sentinel included), or `None` when full rotations are compared.
    pub fn effective_depth(&self, len: usize) -> Option<usize> {
        (self.max_depth >= 1 && len > self.max_depth).then_some(self.max_depth)
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, crate::verify::IndexError> {
        Ok(serde_json::from_str(json)?)
    }
}
