//! Hash-backed unordered set.
//!
//! This module provides [`Set`], a mutable collection of unique values
//! stored in an [`indexmap::IndexSet`]. Members live in a dense entry
//! vector indexed by a hash table, so `pop` removes the last entry and
//! `remove` swaps the last entry into the vacated slot. Neither scans.
//!
//! # Overview
//!
//! - O(1) expected `add`, `remove`, `contains` and `pop`
//! - O(1) `size` and `is_empty`
//! - O(n) `enumerate`, `map`, `filter`, `subset` and `clear`
//!
//! `Set` performs no synchronisation. Wrap it in a
//! `ConcurrentSet` to share it between threads.
//!
//! # Examples
//!
//! ```rust
//! use setkit::collection::Set;
//!
//! let mut set = Set::from_values([1, 2, 3, 5, 7, 11]);
//! assert_eq!(set.size(), 6);
//!
//! let doubled = set.map(|value| value * 2);
//! assert!(doubled.contains(&22));
//!
//! let odd = set.filter(|value| value % 2 == 1);
//! assert_eq!(odd.size(), 5);
//!
//! while let Some(value) = set.pop() {
//!     assert!(!set.contains(&value));
//! }
//! assert!(set.is_empty());
//! ```
//!
//! Values without `Hash` are rejected when the program is compiled:
//!
//! ```compile_fail
//! use setkit::collection::Set;
//!
//! struct Reading(f64);
//!
//! let mut set = Set::new();
//! set.add(Reading(0.5));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;
use indexmap::set;

use super::instrument::trace_event;
use super::{DefaultHashState, EmptySetError, UnorderedSet};

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique values.
///
/// The value type must implement [`Hash`] and [`Eq`]. Iteration order is
/// unspecified and may change between calls on the same set.
///
/// # Time Complexity
///
/// | Operation   | Complexity        |
/// |-------------|-------------------|
/// | `new`       | O(1)              |
/// | `add`       | O(1) expected     |
/// | `remove`    | O(1) expected     |
/// | `contains`  | O(1) expected     |
/// | `pop`       | O(1) expected     |
/// | `size`      | O(1)              |
/// | `enumerate` | O(n)              |
/// | `map`       | O(n)              |
/// | `filter`    | O(n)              |
/// | `subset`    | O(n)              |
///
/// # Examples
///
/// ```rust
/// use setkit::collection::Set;
///
/// let mut set = Set::new();
/// set.add("one");
/// set.add("two");
/// set.add("one");
///
/// assert_eq!(set.size(), 2);
/// ```
#[derive(Clone)]
pub struct Set<V, S = DefaultHashState> {
    inner: IndexSet<V, S>,
}

impl<V> Set<V, DefaultHashState> {
    /// Creates a new empty set using the [`DefaultHashState`] hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashState::default())
    }
}

impl<V: Hash + Eq> Set<V, DefaultHashState> {
    /// Creates a set holding every supplied value.
    ///
    /// Duplicates in `values` collapse, so the size of the result is the
    /// number of distinct values supplied. An empty input yields an empty,
    /// usable set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    ///
    /// let set = Set::from_values(["english", "spanish", "english"]);
    /// assert_eq!(set.size(), 2);
    ///
    /// let empty = Set::<i32>::from_values([]);
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        values.into_iter().collect()
    }
}

impl<V, S> Set<V, S> {
    /// Creates a new empty set which will use `hasher` to hash values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut set = Set::with_hasher(RandomState::new());
    /// set.add(42);
    /// assert!(set.contains(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: IndexSet::with_hasher(hasher),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    ///
    /// let set = Set::from_values(["one", "two", "three"]);
    /// assert_eq!(set.size(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the elements in an arbitrary order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    ///
    /// let set = Set::from_values([1, 2, 3]);
    /// let total: i32 = set.iter().sum();
    /// assert_eq!(total, 6);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    #[cfg(feature = "concurrent")]
    pub(super) fn hasher(&self) -> &S {
        self.inner.hasher()
    }
}

impl<V: Hash + Eq, S: BuildHasher> Set<V, S> {
    /// Adds `value` to the set.
    ///
    /// Adding a value that is already present leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    ///
    /// let mut set = Set::new();
    /// set.add(4);
    /// set.add(4);
    /// assert_eq!(set.size(), 1);
    /// ```
    #[inline]
    pub fn add(&mut self, value: V) {
        self.inner.insert(value);
    }

    /// Removes `value` from the set.
    ///
    /// Removing a value that is not present is a no-op.
    ///
    /// The value may be any borrowed form of the set's value type, but
    /// `Hash` and `Eq` on the borrowed form must match those for the
    /// value type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    ///
    /// let mut set = Set::from_values(["one".to_string(), "two".to_string()]);
    /// set.remove("one");
    /// set.remove("unknown");
    ///
    /// assert_eq!(set.size(), 1);
    /// assert!(!set.contains("one"));
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, value: &Q)
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.swap_remove(value);
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// The value may be any borrowed form of the set's value type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    ///
    /// let set = Set::from_values(["English".to_string()]);
    /// assert!(set.contains("English"));
    /// assert!(!set.contains("english"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(value)
    }

    /// Removes every element.
    ///
    /// Keeps the allocated capacity for reuse.
    pub fn clear(&mut self) {
        trace_event!(removed = self.inner.len(), "clearing set");
        self.inner.clear();
    }

    /// Removes and returns an arbitrary element.
    ///
    /// Returns `None` when the set is empty. Because any value, including a
    /// type's default, may be a legitimate member, absence is never encoded
    /// as a value.
    ///
    /// Each call takes constant expected time, so draining a set with
    /// repeated `pop` calls is linear in its size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    ///
    /// let mut set = Set::from_values([0]);
    /// assert_eq!(set.pop(), Some(0));
    /// assert_eq!(set.pop(), None);
    /// assert!(set.is_empty());
    /// ```
    pub fn pop(&mut self) -> Option<V> {
        let popped = self.inner.pop();
        if popped.is_none() {
            trace_event!("pop requested on an empty set");
        }
        popped
    }

    /// Removes and returns an arbitrary element, failing on an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySetError`] if the set has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::{EmptySetError, Set};
    ///
    /// fn drain_one(set: &mut Set<&'static str>) -> Result<usize, EmptySetError> {
    ///     let value = set.try_pop()?;
    ///     Ok(value.len())
    /// }
    ///
    /// let mut set = Set::from_values(["ken"]);
    /// assert_eq!(drain_one(&mut set), Ok(3));
    /// assert_eq!(drain_one(&mut set), Err(EmptySetError));
    /// ```
    pub fn try_pop(&mut self) -> Result<V, EmptySetError> {
        self.pop().ok_or(EmptySetError)
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// The empty set is a subset of every set, including itself.
    /// `other` may be any [`UnorderedSet`] with the same value type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    ///
    /// let small = Set::from_values([1, 2]);
    /// let large = Set::from_values([1, 2, 3]);
    ///
    /// assert!(small.subset(&large));
    /// assert!(!large.subset(&small));
    /// ```
    #[must_use]
    pub fn subset<O>(&self, other: &O) -> bool
    where
        O: UnorderedSet<Value = V> + ?Sized,
    {
        self.inner.iter().all(|value| other.contains(value))
    }
}

impl<V: Hash + Eq + Clone, S: BuildHasher> Set<V, S> {
    /// Returns every element in an arbitrary order.
    ///
    /// The returned vector is a copy; changing it does not affect the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    ///
    /// let set = Set::from_values(["english", "spanish"]);
    /// let mut values = set.enumerate();
    /// values.sort_unstable();
    /// assert_eq!(values, vec!["english", "spanish"]);
    /// ```
    #[must_use]
    pub fn enumerate(&self) -> Vec<V> {
        self.inner.iter().cloned().collect()
    }
}

impl<V: Hash + Eq, S: BuildHasher + Default> Set<V, S> {
    /// Returns the set of distinct results of applying `function` to every
    /// element.
    ///
    /// Results that compare equal collapse, so the output is never larger
    /// than `self`. `self` is not modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    ///
    /// let set = Set::from_values([1, 2, 3, 4]);
    ///
    /// let doubled = set.map(|value| value * 2);
    /// assert_eq!(doubled.size(), 4);
    /// assert!(doubled.contains(&8));
    ///
    /// let constant = set.map(|_| 0);
    /// assert_eq!(constant.size(), 1);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> Set<U, S>
    where
        U: Hash + Eq,
        F: FnMut(&V) -> U,
    {
        self.inner.iter().map(function).collect()
    }

    /// Returns a new set holding exactly the elements for which `predicate`
    /// returns `true`. `self` is not modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::Set;
    ///
    /// let names = Set::from_values(["ken", "brad", "jeff", "ryan", "tim", "greg", "scott"]);
    /// let four_letters = names.filter(|name| name.len() == 4);
    ///
    /// assert_eq!(four_letters.size(), 4);
    /// assert!(four_letters.contains("brad"));
    /// assert!(!four_letters.contains("scott"));
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        V: Clone,
        P: FnMut(&V) -> bool,
    {
        self.inner
            .iter()
            .filter(|value| predicate(value))
            .cloned()
            .collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the elements of a [`Set`].
///
/// Created by [`Set::iter`]. Yields elements in an arbitrary order.
pub struct Iter<'a, V> {
    inner: set::Iter<'a, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of a [`Set`].
///
/// Created by [`IntoIterator::into_iter`]. Yields elements in an arbitrary
/// order.
pub struct IntoIter<V> {
    inner: set::IntoIter<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<V, S: Default> Default for Set<V, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<V: Hash + Eq, S: BuildHasher + Default> FromIterator<V> for Set<V, S> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<V: Hash + Eq, S: BuildHasher> Extend<V> for Set<V, S> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<V: Hash + Eq, const N: usize> From<[V; N]> for Set<V, DefaultHashState> {
    fn from(values: [V; N]) -> Self {
        Self::from_values(values)
    }
}

impl<V, S> IntoIterator for Set<V, S> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, V, S> IntoIterator for &'a Set<V, S> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug, S> fmt::Debug for Set<V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<V: fmt::Display, S> fmt::Display for Set<V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

impl<V, S> UnorderedSet for Set<V, S>
where
    V: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    type Value = V;
    type Output = Self;

    #[inline]
    fn contains(&self, value: &V) -> bool {
        self.inner.contains(value)
    }

    #[inline]
    fn size(&self) -> usize {
        self.inner.len()
    }

    fn collect_where<P>(&self, mut predicate: P) -> Vec<V>
    where
        P: FnMut(&V) -> bool,
    {
        self.inner
            .iter()
            .filter(|value| predicate(value))
            .cloned()
            .collect()
    }

    fn subset<O>(&self, other: &O) -> bool
    where
        O: UnorderedSet<Value = V> + ?Sized,
    {
        self.inner.iter().all(|value| other.contains(value))
    }
}
