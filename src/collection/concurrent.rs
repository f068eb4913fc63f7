//! Thread-safe unordered set.
//!
//! This module provides [`ConcurrentSet`], a [`Set`] guarded by a
//! reader/writer lock. Every operation takes `&self`, so the set can be
//! shared through an `Arc` without further wrapping.
//!
//! # Locking
//!
//! | Operations                                         | Lock  |
//! |----------------------------------------------------|-------|
//! | `contains`, `size`, `is_empty`, `enumerate`        | read  |
//! | `map`, `filter`, `snapshot`, `with_read`           | read  |
//! | `add`, `remove`, `clear`, `pop`, `take`, `with_write` | write |
//!
//! Each operation acquires its lock once and releases it before returning,
//! including when a caller-supplied closure panics. Operations on the same
//! set are sequentially consistent with respect to each other.
//!
//! No lock is held across two sets. The algebra functions
//! ([`union`](super::union) and friends) read each operand independently,
//! so when another thread mutates an operand mid-computation the result
//! reflects some interleaving rather than an instantaneous snapshot of both.
//! Callers needing a joint snapshot must synchronise externally.
//!
//! # Re-entry
//!
//! `map`, `filter` and [`UnorderedSet::collect_where`] copy the elements out
//! under the read lock and run their closure after releasing it, so those
//! closures may read or modify the same set. The closures given to
//! `with_read` and `with_write` run while the lock is held and must not
//! touch the same set through `&self`; the lock is not re-entrant, and a
//! nested acquisition can block behind a waiting writer.
//!
//! # Examples
//!
//! ```rust
//! use setkit::collection::ConcurrentSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let set = Arc::new(ConcurrentSet::from_values(["english", "spanish"]));
//!
//! let reader = {
//!     let set = Arc::clone(&set);
//!     thread::spawn(move || set.contains("english"))
//! };
//! set.add("french");
//!
//! assert!(reader.join().unwrap());
//! assert_eq!(set.size(), 3);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::instrument::trace_event;
use super::sync::{ReadGuard, RwLock, WriteGuard};
use super::{DefaultHashState, EmptySetError, Set, UnorderedSet};

// =============================================================================
// ConcurrentSet Definition
// =============================================================================

/// A [`Set`] guarded by a reader/writer lock.
///
/// Many threads may read at once; a writer has exclusive access. The lock
/// lives exactly as long as the set.
///
/// # Thread Safety
///
/// `ConcurrentSet<V, S>` is `Send` and `Sync` when `V` and `S` are.
///
/// # Examples
///
/// ```rust
/// use setkit::collection::ConcurrentSet;
///
/// let set = ConcurrentSet::new();
/// set.add(1);
/// set.add(2);
///
/// assert!(set.pop().is_some());
/// assert_eq!(set.size(), 1);
/// ```
pub struct ConcurrentSet<V, S = DefaultHashState> {
    lock: RwLock<Set<V, S>>,
}

static_assertions::assert_impl_all!(ConcurrentSet<String>: Send, Sync);
static_assertions::assert_impl_all!(ConcurrentSet<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(ConcurrentSet<std::rc::Rc<i32>>: Send, Sync);

impl<V> ConcurrentSet<V, DefaultHashState> {
    /// Creates a new empty set using the
    /// [`DefaultHashState`](super::DefaultHashState) hasher.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from(Set::new())
    }
}

impl<V: Hash + Eq> ConcurrentSet<V, DefaultHashState> {
    /// Creates a set holding every supplied value; duplicates collapse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::ConcurrentSet;
    ///
    /// let set = ConcurrentSet::from_values([1, 2, 2, 3]);
    /// assert_eq!(set.size(), 3);
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::from(Set::from_values(values))
    }
}

impl<V, S> ConcurrentSet<V, S> {
    /// Creates a new empty set which will use `hasher` to hash values.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self::from(Set::with_hasher(hasher))
    }

    /// Consumes the set and returns its contents without copying them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::ConcurrentSet;
    ///
    /// let set = ConcurrentSet::from_values(["a", "b"]);
    /// let inner = set.into_inner();
    /// assert_eq!(inner.size(), 2);
    /// ```
    #[must_use]
    pub fn into_inner(self) -> Set<V, S> {
        self.lock.into_inner()
    }

    #[inline]
    fn read(&self) -> ReadGuard<'_, Set<V, S>> {
        self.lock.read()
    }

    #[inline]
    fn write(&self) -> WriteGuard<'_, Set<V, S>> {
        self.lock.write()
    }

    /// Returns the number of elements in the set.
    #[must_use]
    pub fn size(&self) -> usize {
        self.read().size()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Runs `function` against the set under a single read lock.
    ///
    /// Use this when several reads must observe the same state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::ConcurrentSet;
    ///
    /// let set = ConcurrentSet::from_values([1, 2, 3]);
    /// let (size, has_two) = set.with_read(|inner| (inner.size(), inner.contains(&2)));
    ///
    /// assert_eq!(size, 3);
    /// assert!(has_two);
    /// ```
    pub fn with_read<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&Set<V, S>) -> R,
    {
        function(&self.read())
    }

    /// Runs `function` against the set under a single write lock.
    ///
    /// Use this when several mutations must appear atomic to other threads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::ConcurrentSet;
    ///
    /// let set = ConcurrentSet::from_values(["draft"]);
    /// let promoted = set.with_write(|inner| {
    ///     if inner.contains("draft") {
    ///         inner.remove("draft");
    ///         inner.add("published");
    ///         true
    ///     } else {
    ///         false
    ///     }
    /// });
    ///
    /// assert!(promoted);
    /// assert!(set.contains("published"));
    /// ```
    pub fn with_write<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&mut Set<V, S>) -> R,
    {
        function(&mut self.write())
    }
}

impl<V: Hash + Eq, S: BuildHasher> ConcurrentSet<V, S> {
    /// Adds `value` to the set. Adding a present value is a no-op.
    pub fn add(&self, value: V) {
        self.write().add(value);
    }

    /// Removes `value` from the set. Removing an absent value is a no-op.
    pub fn remove<Q>(&self, value: &Q)
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.write().remove(value);
    }

    /// Returns `true` if the set contains `value`.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read().contains(value)
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Removes and returns an arbitrary element, or `None` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::ConcurrentSet;
    ///
    /// let set = ConcurrentSet::from_values(["only"]);
    /// assert_eq!(set.pop(), Some("only"));
    /// assert_eq!(set.pop(), None);
    /// ```
    pub fn pop(&self) -> Option<V> {
        self.write().pop()
    }

    /// Removes and returns an arbitrary element, failing on an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySetError`] if the set has no elements.
    pub fn try_pop(&self) -> Result<V, EmptySetError> {
        self.pop().ok_or(EmptySetError)
    }
}

impl<V: Hash + Eq + Clone, S: BuildHasher> ConcurrentSet<V, S> {
    /// Returns every element in an arbitrary order.
    ///
    /// The elements are copied out under the read lock; the returned vector
    /// can be used freely while other threads mutate the set.
    #[must_use]
    pub fn enumerate(&self) -> Vec<V> {
        self.read().enumerate()
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// `self` is copied out under its read lock first, and `other` is then
    /// queried without that lock held, so `other` may be `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::{ConcurrentSet, Set};
    ///
    /// let subset = ConcurrentSet::from_values([1, 2]);
    /// let superset = Set::from_values([1, 2, 3]);
    ///
    /// assert!(subset.subset(&superset));
    /// assert!(subset.subset(&subset));
    /// ```
    #[must_use]
    pub fn subset<O>(&self, other: &O) -> bool
    where
        O: UnorderedSet<Value = V> + ?Sized,
    {
        self.enumerate().iter().all(|value| other.contains(value))
    }
}

impl<V: Hash + Eq + Clone, S: BuildHasher + Default> ConcurrentSet<V, S> {
    /// Returns a new set of the distinct results of applying `function` to
    /// every element.
    ///
    /// The elements are copied out under the read lock and `function` runs
    /// after it is released, so `function` may query or modify this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::ConcurrentSet;
    ///
    /// let set = ConcurrentSet::from_values([1, 2, 3, 4]);
    /// let halves = set.map(|value| value / 2);
    ///
    /// assert_eq!(halves.size(), 3); // 0, 1, 2
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> ConcurrentSet<U, S>
    where
        U: Hash + Eq,
        F: FnMut(&V) -> U,
    {
        let members = self.enumerate();
        members.iter().map(function).collect()
    }

    /// Returns a new set holding the elements for which `predicate` returns
    /// `true`.
    ///
    /// Like [`map`](Self::map), `predicate` runs without the lock held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::ConcurrentSet;
    ///
    /// let set = ConcurrentSet::from_values([1, 2, 3, 5, 8]);
    /// let with_successor = set.filter(|value| set.contains(&(value + 1)));
    ///
    /// assert_eq!(with_successor.size(), 2); // 1, 2
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&V) -> bool,
    {
        self.collect_where(predicate).into_iter().collect()
    }
}

impl<V: Hash + Eq + Clone, S: BuildHasher + Clone> ConcurrentSet<V, S> {
    /// Copies the current contents into an unsynchronised [`Set`].
    ///
    /// The copy is taken under one read lock, so it is a consistent view of
    /// this set at a single point in time.
    #[must_use]
    pub fn snapshot(&self) -> Set<V, S> {
        self.read().clone()
    }

    /// Moves every element out into an unsynchronised [`Set`], leaving this
    /// set empty. Happens under one write lock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::collection::ConcurrentSet;
    ///
    /// let set = ConcurrentSet::from_values([1, 2, 3]);
    /// let drained = set.take();
    ///
    /// assert_eq!(drained.size(), 3);
    /// assert!(set.is_empty());
    /// ```
    pub fn take(&self) -> Set<V, S> {
        let mut guard = self.write();
        let fresh = Set::with_hasher(guard.hasher().clone());
        let taken = std::mem::replace(&mut *guard, fresh);
        drop(guard);
        trace_event!(taken = taken.size(), "took every element out of concurrent set");
        taken
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<V, S> From<Set<V, S>> for ConcurrentSet<V, S> {
    fn from(set: Set<V, S>) -> Self {
        Self {
            lock: RwLock::new(set),
        }
    }
}

impl<V, S: Default> Default for ConcurrentSet<V, S> {
    fn default() -> Self {
        Self::from(Set::default())
    }
}

impl<V: Clone, S: Clone> Clone for ConcurrentSet<V, S> {
    fn clone(&self) -> Self {
        Self::from(self.read().clone())
    }
}

impl<V: Hash + Eq, S: BuildHasher + Default> FromIterator<V> for ConcurrentSet<V, S> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Set<V, S>>())
    }
}

impl<V: fmt::Debug, S> fmt::Debug for ConcurrentSet<V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read();
        formatter.debug_set().entries(guard.iter()).finish()
    }
}

impl<V, S> UnorderedSet for ConcurrentSet<V, S>
where
    V: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    type Value = V;
    type Output = Self;

    fn contains(&self, value: &V) -> bool {
        self.read().contains(value)
    }

    fn size(&self) -> usize {
        self.read().size()
    }

    fn collect_where<P>(&self, mut predicate: P) -> Vec<V>
    where
        P: FnMut(&V) -> bool,
    {
        let members = self.read().enumerate();
        members.into_iter().filter(|value| predicate(value)).collect()
    }

    fn enumerate(&self) -> Vec<V> {
        self.read().enumerate()
    }

    fn subset<O>(&self, other: &O) -> bool
    where
        O: UnorderedSet<Value = V> + ?Sized,
    {
        self.enumerate().iter().all(|value| other.contains(value))
    }
}
