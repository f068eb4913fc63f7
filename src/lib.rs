//! # setkit
//!
//! An unordered collection of unique values with set algebra, functional
//! combinators and an opt-in thread-safe variant.
//!
//! ## Overview
//!
//! - **[`Set`](collection::Set)**: a hash-backed set for single-threaded use.
//!   No locking, no synchronisation cost.
//! - **`ConcurrentSet`**: the same API behind a
//!   reader/writer lock. Many readers or one writer at a time.
//! - **Set algebra**: [`union`](collection::union),
//!   [`intersection`](collection::intersection), the symmetric
//!   [`difference`](collection::difference) and
//!   [`relative_complement`](collection::relative_complement). They work on
//!   either kind of set and never modify their operands.
//! - **Combinators**: `map`, `filter`, `pop`, `subset`.
//!
//! Iteration order is unspecified and may differ between two calls on the
//! same set.
//!
//! ## Feature Flags
//!
//! - `concurrent` (default): `ConcurrentSet`
//! - `fxhash`: use `rustc-hash` as the default hasher
//! - `ahash`: use `ahash` as the default hasher
//! - `tracing`: trace-level events from the collection internals
//! - `loom`: model-checkable lock for the concurrent set
//! - `full`: `concurrent` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let colors = set!["red", "blue", "green"];
//! let others = set!["red", "yellow", "purple", "black", "blue"];
//!
//! assert_eq!(intersection(&colors, &others).size(), 2);
//! assert_eq!(difference(&colors, &others).size(), 4);
//! assert_eq!(union(&colors, &others).size(), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set types, the [`UnorderedSet`](collection::UnorderedSet)
/// trait, the algebra functions and the [`set!`] macro.
///
/// # Usage
///
/// ```rust
/// use setkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
    pub use crate::set;
}

pub mod collection;
