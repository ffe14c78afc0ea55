// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for indexes assembled from untrusted parts.
//!
//! Whatever the last column and suffix array, verification must return an error
//! instead of panicking, and an index that passes must answer queries.

#![no_main]

use bwtex::{Index, WellFormedIndex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|parts: (String, Vec<u16>, char)| {
    let (last_column, suffix_array, sentinel) = parts;
    let last_column: String = last_column.chars().take(128).collect();
    let suffix_array: Vec<usize> = suffix_array.into_iter().take(128).map(usize::from).collect();

    let Ok(index) = Index::from_parts(&last_column, suffix_array) else {
        return;
    };
    if let Ok(index) = WellFormedIndex::new(index.with_sentinel(sentinel)) {
        let text: String = index.invert().unwrap_or_default().into_iter().collect();
        let probe: String = text.chars().take(3).collect();
        if !probe.is_empty() {
            assert!(index.count(&probe) >= 1);
        }
    }
});
