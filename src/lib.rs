//! # Deferred-Removal Vectors
//!
//! *Pay for removal only once it has piled up.*
//!
//! ## Intuition First
//!
//! Removing from the middle of an ordinary dynamic array means left-shifting
//! every trailing element: O(n) per removal. Imagine instead leaving the seat
//! empty and keeping a short guest list of empty seats; anyone asking for
//! "the third occupied seat" walks the guest list to skip the gaps. Once the
//! gaps pile up past a small bound, reseat everyone in one pass and throw the
//! list away.
//!
//! ## The Problem
//!
//! The classic trade-off for ordered sequences with deletion:
//! - **Eager shifting** (`Vec::remove`): O(n) per removal, storage stays
//!   dense, access stays O(1).
//! - **Pure tombstoning**: O(1) removal, but every later access pays to skip
//!   the dead cells and the space is never reclaimed.
//!
//! This crate takes the middle road: removals tombstone, accesses translate
//! logical indices through an ordered set of vacated positions whose size is
//! bounded by a *refresh threshold*, and a periodic flatten pass reclaims
//! everything at once.
//!
//! ## Complexity Analysis
//!
//! With k pending removals and refresh threshold R (default 10):
//! - `remove`: O(k) translation + O(k) bookkeeping, with k <= R.
//! - `get`: O(k).
//! - flatten: O(n), charged once every R + 1 removals.
//!
//! The amortization holds when removals are frequent relative to accesses.
//! A get-heavy workload wants a small R (translation stays short); for a
//! remove-heavy one a larger R amortizes more flatten work.
//!
//! ## What Could Go Wrong
//!
//! 1. **Get-heavy workloads**: every access pays the O(k) walk, so the plain
//!    dense vector can win outright. Measure with the bundled benchmarks.
//! 2. **Logical indices are not stable**: a removal shifts the logical view
//!    exactly like `Vec::remove` does; only the cost moves.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`TombVec`**: the deferred-removal vector.
//! - **`ShiftVec`**: the eager baseline used by benchmarks and tests.
//!
//! ## References
//!
//! - Knuth, D. E. *The Art of Computer Programming*, Vol. 3: lazy deletion
//!   in search structures.
//! - Bender, M. A., & Hu, H. (2007). "An adaptive packed-memory array."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod baseline;
pub mod error;
mod tombstones;
pub mod vec;

pub use baseline::ShiftVec;
pub use error::{Error, Result};
pub use vec::TombVec;
