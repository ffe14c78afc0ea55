// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for exact and mismatch lookups.
//!
//! Builds an index over arbitrary text and checks every query against the linear-scan
//! oracles in `bwtex::testing`.

#![no_main]

use arbitrary::Arbitrary;
use bwtex::testing::{cyclic_mismatch_offsets, naive_occurrences, sorted};
use bwtex::{build, verify_index, SENTINEL};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    pattern: String,
    threshold: u8,
}

fuzz_target!(|input: Input| {
    // Sorting is quadratic in the worst case; keep inputs small.
    let text: String = input.text.chars().take(256).collect();
    let pattern: String = input.pattern.chars().take(8).collect();
    if text.contains(SENTINEL) || pattern.contains(SENTINEL) {
        return;
    }
    let threshold = usize::from(input.threshold % 4);

    let index = build(&text, 0);

    // INVARIANT 1: every built index is well formed
    assert!(verify_index(&index).is_ok(), "text {:?}", text);

    // INVARIANT 2: exact lookup equals a scan
    assert_eq!(
        sorted(index.lookup(&pattern)),
        naive_occurrences(&text, &pattern),
        "pattern {:?}",
        pattern
    );

    // INVARIANT 3: mismatch lookup equals the cyclic window scan
    if threshold > 0 {
        assert_eq!(
            sorted(index.lookup_mismatches(&pattern, threshold)),
            cyclic_mismatch_offsets(&text, &pattern, threshold),
            "pattern {:?} threshold {}",
            pattern,
            threshold
        );
    }
});
