//! Set algebra over any two [`UnorderedSet`]s.
//!
//! Every function here builds a fresh collection of the left operand's
//! [`Output`](UnorderedSet::Output) kind and leaves both operands untouched.
//! Each operand is read through [`UnorderedSet::collect_where`] and
//! [`UnorderedSet::contains`] only, so no two locks are ever held at once
//! and passing the same set on both sides is always safe.
//!
//! # Complexity
//!
//! | Function              | Complexity        |
//! |-----------------------|-------------------|
//! | `union`               | O(n + m)          |
//! | `intersection`        | O(m)              |
//! | `difference`          | O(n + m)          |
//! | `relative_complement` | O(n)              |
//! | `is_disjoint`         | O(min(n, m))      |
//!
//! where n and m are the sizes of the left and right operands.

use super::UnorderedSet;
use super::instrument::trace_event;

/// Returns every element that is in `left`, `right`, or both.
///
/// # Examples
///
/// ```rust
/// use setkit::collection::{Set, union};
///
/// let left = Set::from_values(["red", "blue", "green"]);
/// let right = Set::from_values(["red", "yellow", "purple", "black"]);
///
/// let both = union(&left, &right);
/// assert_eq!(both.size(), 6);
/// assert_eq!(left.size(), 3);
/// assert_eq!(right.size(), 4);
/// ```
#[must_use]
pub fn union<L, R>(left: &L, right: &R) -> L::Output
where
    L: UnorderedSet + ?Sized,
    R: UnorderedSet<Value = L::Value> + ?Sized,
{
    let result: L::Output = left
        .enumerate()
        .into_iter()
        .chain(right.enumerate())
        .collect();
    trace_event!(
        left = left.size(),
        right = right.size(),
        result = result.size(),
        "computed union"
    );
    result
}

/// Returns the elements present in both `left` and `right`.
///
/// # Examples
///
/// ```rust
/// use setkit::collection::{Set, intersection};
///
/// let left = Set::from_values(["red", "blue", "green"]);
/// let right = Set::from_values(["red", "yellow", "purple", "black", "blue"]);
///
/// let common = intersection(&left, &right);
/// assert_eq!(common.size(), 2);
/// assert!(common.contains("red"));
/// assert!(common.contains("blue"));
/// ```
#[must_use]
pub fn intersection<L, R>(left: &L, right: &R) -> L::Output
where
    L: UnorderedSet + ?Sized,
    R: UnorderedSet<Value = L::Value> + ?Sized,
{
    let result: L::Output = right
        .collect_where(|value| left.contains(value))
        .into_iter()
        .collect();
    trace_event!(
        left = left.size(),
        right = right.size(),
        result = result.size(),
        "computed intersection"
    );
    result
}

/// Returns the symmetric difference: elements in exactly one of `left`
/// and `right`.
///
/// This is not "left minus right"; see [`relative_complement`] for that.
/// `difference(a, b)` and `difference(b, a)` hold the same elements.
///
/// # Examples
///
/// ```rust
/// use setkit::collection::{Set, difference};
///
/// let left = Set::from_values(["red", "blue", "green"]);
/// let right = Set::from_values(["red", "yellow", "purple", "black", "blue"]);
///
/// let exclusive = difference(&left, &right);
/// assert_eq!(exclusive.size(), 4);
/// assert!(exclusive.contains("green"));
/// assert!(exclusive.contains("yellow"));
/// assert!(!exclusive.contains("red"));
/// ```
#[must_use]
pub fn difference<L, R>(left: &L, right: &R) -> L::Output
where
    L: UnorderedSet + ?Sized,
    R: UnorderedSet<Value = L::Value> + ?Sized,
{
    let only_right = right.collect_where(|value| !left.contains(value));
    let only_left = left.collect_where(|value| !right.contains(value));
    let result: L::Output = only_right.into_iter().chain(only_left).collect();
    trace_event!(
        left = left.size(),
        right = right.size(),
        result = result.size(),
        "computed symmetric difference"
    );
    result
}

/// Returns the elements of `left` that are not in `right`.
///
/// # Examples
///
/// ```rust
/// use setkit::collection::{Set, relative_complement};
///
/// let left = Set::from_values([1, 2, 3]);
/// let right = Set::from_values([2, 3, 4]);
///
/// let remainder = relative_complement(&left, &right);
/// assert_eq!(remainder.size(), 1);
/// assert!(remainder.contains(&1));
/// ```
#[must_use]
pub fn relative_complement<L, R>(left: &L, right: &R) -> L::Output
where
    L: UnorderedSet + ?Sized,
    R: UnorderedSet<Value = L::Value> + ?Sized,
{
    let result: L::Output = left
        .collect_where(|value| !right.contains(value))
        .into_iter()
        .collect();
    trace_event!(
        left = left.size(),
        right = right.size(),
        result = result.size(),
        "computed relative complement"
    );
    result
}

/// Returns `true` if `left` and `right` have no element in common.
///
/// # Examples
///
/// ```rust
/// use setkit::collection::{Set, is_disjoint};
///
/// let odd = Set::from_values([1, 3, 5]);
/// let even = Set::from_values([2, 4, 6]);
///
/// assert!(is_disjoint(&odd, &even));
/// assert!(!is_disjoint(&odd, &odd));
/// ```
#[must_use]
pub fn is_disjoint<L, R>(left: &L, right: &R) -> bool
where
    L: UnorderedSet + ?Sized,
    R: UnorderedSet<Value = L::Value> + ?Sized,
{
    if left.size() <= right.size() {
        left.collect_where(|value| right.contains(value)).is_empty()
    } else {
        right.collect_where(|value| left.contains(value)).is_empty()
    }
}
