//! # Prefix Sums
//!
//! *Point updates and prefix sums, both in $O(\log n)$.*
//!
//! ## Intuition First
//!
//! Picture a ledger of daily takings. You keep amending individual days, and
//! you keep being asked "what was the running total up to Thursday?" Writing
//! down every running total makes amendments slow (each one shifts all later
//! totals). Writing down only the days makes questions slow (each one re-adds
//! the whole week).
//!
//! A Fenwick tree keeps partial totals over power-of-two sized stretches of
//! days. Any running total is the sum of about $\log_2 n$ of those
//! stretches, and any amendment lands in about as many.
//!
//! ## Historical Context
//!
//! ```text
//! 1989  Ryabko     Fast enumeration of combinatorial objects (same structure)
//! 1994  Fenwick    "A new data structure for cumulative frequency tables"
//! ```
//!
//! ## Mathematical Formulation
//!
//! For a logical array $a_1, \dots, a_n$ and $\mathrm{lowbit}(i) = i \,\&\, (-i)$,
//! the tree stores
//!
//! $$T_i = \sum_{j = i - \mathrm{lowbit}(i) + 1}^{i} a_j .$$
//!
//! - `update(i, d)` adds $d$ to $T_p$ for $p = i, i + \mathrm{lowbit}(i), \dots \le n$.
//! - `query(i)` returns $\sum T_p$ for $p = i, i - \mathrm{lowbit}(i), \dots > 0$.
//!
//! (Positions here are 1-based; the public API is 0-based.)
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(\log n)$ per update and per query; $O(n)$ bulk build.
//! - **Space**: $n + 1$ accumulators, no auxiliary index.
//!
//! ## What Could Go Wrong
//!
//! 1. **Unchecked positions**: the raw walks silently no-op (update) or read
//!    garbage (query) outside `[0, n)`. Every entry point validates first.
//! 2. **Overflow**: accumulators hold sums of many deltas. Additions are
//!    checked and a failing update leaves the tree untouched.
//! 3. **Sharing**: `update` needs `&mut self`. Concurrent callers must wrap
//!    the tree in their own lock.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`FenwickTree`**: the indexed sum store.
//! - **`PrefixArray`**: the linear-time baseline with identical semantics.
//!
//! ## References
//!
//! - Fenwick, P. M. (1994). "A new data structure for cumulative frequency tables."
//! - Ryabko, B. Ya. (1989). "A fast on-line code."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accumulator;
pub mod error;
pub mod fenwick;
pub mod implicit;

pub use accumulator::Accumulator;
pub use error::{Error, Result};
pub use fenwick::FenwickTree;
pub use implicit::PrefixArray;
