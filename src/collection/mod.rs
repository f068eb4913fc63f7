//! Unordered set collections.
//!
//! This module provides two set types sharing one API:
//!
//! - [`Set`]: hash-backed set with no synchronisation
//! - `ConcurrentSet`: a [`Set`] guarded by a reader/writer lock
//!   (requires the `concurrent` feature)
//!
//! and free functions implementing set algebra over anything that
//! implements [`UnorderedSet`]:
//!
//! - [`union`]: elements in either operand
//! - [`intersection`]: elements in both operands
//! - [`difference`]: elements in exactly one operand (symmetric)
//! - [`relative_complement`]: elements in the left operand only
//! - [`is_disjoint`]: no common elements
//!
//! # Examples
//!
//! ## `Set`
//!
//! ```rust
//! use setkit::collection::Set;
//!
//! let mut set = Set::new();
//! set.add("blue");
//! set.add("red");
//! set.add("blue");
//!
//! assert_eq!(set.size(), 2);
//! assert!(set.contains("blue"));
//!
//! set.remove("blue");
//! assert!(!set.contains("blue"));
//! ```
//!
//! ## Algebra
//!
//! ```rust
//! use setkit::collection::{Set, difference, intersection, union};
//!
//! let multiples_of_two: Set<i32> = (1..=10).map(|n| n * 2).collect();
//! let multiples_of_three: Set<i32> = (1..=7).map(|n| n * 3).collect();
//!
//! let both = intersection(&multiples_of_two, &multiples_of_three);
//! assert_eq!(both.size(), 3); // 6, 12, 18
//!
//! let either = union(&multiples_of_two, &multiples_of_three);
//! assert_eq!(either.size(), 14);
//!
//! // Symmetric: 11 values belong to exactly one of the two sets.
//! assert_eq!(difference(&multiples_of_two, &multiples_of_three).size(), 11);
//! ```

use std::hash::Hash;

mod algebra;
#[cfg(feature = "concurrent")]
mod concurrent;
mod error;
mod instrument;
mod set;
mod set_macro;
#[cfg(feature = "concurrent")]
mod sync;

pub use algebra::{difference, intersection, is_disjoint, relative_complement, union};
#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentSet;
pub use error::EmptySetError;
pub use set::{IntoIter, Iter, Set};

// =============================================================================
// Default Hasher Selection
// =============================================================================

/// The hasher used by [`Set::new`] and `ConcurrentSet::new`.
///
/// Selected at compile time: `rustc_hash::FxBuildHasher` with the `fxhash`
/// feature, `ahash::RandomState` with the `ahash` feature, and
/// [`std::collections::hash_map::RandomState`] otherwise. `fxhash` wins when
/// both are enabled.
#[cfg(feature = "fxhash")]
pub type DefaultHashState = rustc_hash::FxBuildHasher;

/// The hasher used by [`Set::new`] and `ConcurrentSet::new`.
///
/// Selected at compile time: `rustc_hash::FxBuildHasher` with the `fxhash`
/// feature, `ahash::RandomState` with the `ahash` feature, and
/// [`std::collections::hash_map::RandomState`] otherwise. `fxhash` wins when
/// both are enabled.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashState = ahash::RandomState;

/// The hasher used by [`Set::new`] and `ConcurrentSet::new`.
///
/// Selected at compile time: `rustc_hash::FxBuildHasher` with the `fxhash`
/// feature, `ahash::RandomState` with the `ahash` feature, and
/// [`std::collections::hash_map::RandomState`] otherwise. `fxhash` wins when
/// both are enabled.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashState = std::collections::hash_map::RandomState;

// =============================================================================
// UnorderedSet Trait
// =============================================================================

/// Read access shared by every set kind in this crate.
///
/// The algebra functions ([`union`], [`intersection`], ...) are written
/// against this trait, so a [`Set`] and a `ConcurrentSet` can be combined
/// freely. Results are built as the left operand's [`Output`](Self::Output).
///
/// # Locking
///
/// Implementations must not hold an internal lock while running the
/// predicate passed to [`collect_where`](Self::collect_where). This lets the
/// predicate query any set, including the receiver, without deadlocking.
///
/// # Examples
///
/// ```rust
/// use setkit::collection::{Set, UnorderedSet};
///
/// fn describe<S: UnorderedSet<Value = i32>>(set: &S) -> String {
///     if set.is_empty() {
///         "empty".to_string()
///     } else {
///         format!("{} values", set.size())
///     }
/// }
///
/// let set: Set<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(describe(&set), "3 values");
/// ```
pub trait UnorderedSet {
    /// The element type.
    type Value: Hash + Eq + Clone;

    /// The collection kind built by the algebra functions when `Self` is
    /// the left operand.
    type Output: UnorderedSet<Value = Self::Value> + FromIterator<Self::Value>;

    /// Returns `true` if `value` is a member.
    fn contains(&self, value: &Self::Value) -> bool;

    /// Returns the number of members.
    fn size(&self) -> usize;

    /// Returns `true` if there are no members.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Clones every member for which `predicate` returns `true`.
    ///
    /// The order of the returned values is unspecified.
    fn collect_where<P>(&self, predicate: P) -> Vec<Self::Value>
    where
        P: FnMut(&Self::Value) -> bool;

    /// Returns every member in an arbitrary order.
    ///
    /// The returned vector is independent of the set.
    fn enumerate(&self) -> Vec<Self::Value> {
        self.collect_where(|_| true)
    }

    /// Returns `true` if every member of `self` is also a member of `other`.
    ///
    /// The empty set is a subset of every set.
    fn subset<O>(&self, other: &O) -> bool
    where
        O: UnorderedSet<Value = Self::Value> + ?Sized,
    {
        self.collect_where(|value| !other.contains(value)).is_empty()
    }
}
