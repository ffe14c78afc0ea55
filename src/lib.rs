//! Burrows-Wheeler full-text index with exact and substitution-tolerant search.
//!
//! This crate builds a static FM-Index over one text and answers "where does this
//! pattern occur?" either exactly or with up to `k` substituted symbols. Text is a
//! sequence of Unicode code points; offsets are code-point offsets.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ rotation.rs │────▶│   index.rs   │────▶│  search.rs   │  exact
//! │  (rotate)   │     │ (init_from,  │     │  (lookup)    │
//! │ last column,│     │  occ, first) │     └──────────────┘
//! │ suffix array│     └──────────────┘     ┌──────────────┐
//! └─────────────┘            │        ────▶│ mismatch.rs  │  k substitutions
//!        │                   │             └──────────────┘
//!        ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      verify/                        │
//! │  (IndexError, verify_index, WellFormedIndex,        │
//! │   debug contracts on construction)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! | Module      | Role                                       |
//! |-------------|--------------------------------------------|
//! | `types`     | `AsSymbols` input adapter, sentinel        |
//! | `rotation`  | Rotation sort → last column, suffix array  |
//! | `alphabet`  | Symbol → dense id                          |
//! | `index`     | Occurrence and first-position tables       |
//! | `search`    | Exact backward search                      |
//! | `mismatch`  | Backward search with substitutions         |
//! | `verify`    | Errors, invariant checks, contracts        |
//! | `config`    | Construction settings                      |
//!
//! # Usage
//!
//! ```
//! use bwtex::build;
//!
//! let index = build("panamabananas", 0);
//!
//! let mut exact = index.lookup("ana");
//! exact.sort_unstable();
//! assert_eq!(exact, vec![1, 7, 9]);
//!
//! let mut close = index.lookup_mismatches("ana", 1);
//! close.sort_unstable();
//! assert_eq!(close, vec![1, 3, 5, 7, 9]);
//! ```
//!
//! A built index is never mutated by queries, so it can be shared across threads
//! behind a plain `&Index` or `Arc<Index>`.

// Module declarations
mod alphabet;
mod config;
mod index;
mod mismatch;
mod rotation;
mod search;
mod types;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use alphabet::Alphabet;
pub use config::IndexConfig;
pub use index::{build, build_with, Index};
pub use mismatch::MismatchHit;
pub use rotation::{rotate, rotate_with};
pub use types::{AsSymbols, SymbolId, SENTINEL};
pub use verify::{verify_index, IndexError, WellFormedIndex};
