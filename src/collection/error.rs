//! Errors reported by set operations.

use std::fmt;

/// Error returned when an element is requested from an empty set.
///
/// Returned by [`Set::try_pop`](super::Set::try_pop) and
/// `ConcurrentSet::try_pop`.
/// [`Set::pop`](super::Set::pop) reports the same condition as `None`.
///
/// # Examples
///
/// ```rust
/// use setkit::collection::{EmptySetError, Set};
///
/// let mut set: Set<i32> = Set::new();
/// assert_eq!(set.try_pop(), Err(EmptySetError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySetError;

impl fmt::Display for EmptySetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "set is empty: no element available")
    }
}

impl std::error::Error for EmptySetError {}
