// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: fallible invariant checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Checked wrappers** (`verify_index`, `WellFormedIndex`) for indexes assembled
//!    from outside data. They return an `IndexError` instead of trusting the input.
//!
//! 2. **Runtime contracts** that panic in debug builds when construction breaks an
//!    invariant. Zero-cost in release, but they catch algorithmic errors when tests run.

pub mod contracts;
mod types;

pub use types::*;
