//! Reader/writer lock used by [`ConcurrentSet`](super::ConcurrentSet).
//!
//! Normally this is `parking_lot::RwLock`, which never poisons. With the
//! `loom` feature it is `loom::sync::RwLock` behind the same
//! `read`/`write` surface, so the concurrent set can be explored by
//! `loom::model`. Poisoned loom locks are recovered, matching the
//! `parking_lot` behaviour.

#[cfg(not(feature = "loom"))]
pub(super) use parking_lot::{
    RwLock, RwLockReadGuard as ReadGuard, RwLockWriteGuard as WriteGuard,
};

#[cfg(feature = "loom")]
pub(super) use self::model::{ReadGuard, RwLock, WriteGuard};

#[cfg(feature = "loom")]
mod model {
    use std::sync::PoisonError;

    pub(in crate::collection) type ReadGuard<'a, T> = loom::sync::RwLockReadGuard<'a, T>;
    pub(in crate::collection) type WriteGuard<'a, T> = loom::sync::RwLockWriteGuard<'a, T>;

    pub(in crate::collection) struct RwLock<T> {
        inner: loom::sync::RwLock<T>,
    }

    impl<T> RwLock<T> {
        pub(in crate::collection) fn new(value: T) -> Self {
            Self {
                inner: loom::sync::RwLock::new(value),
            }
        }

        pub(in crate::collection) fn into_inner(self) -> T {
            self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
        }

        pub(in crate::collection) fn read(&self) -> ReadGuard<'_, T> {
            self.inner.read().unwrap_or_else(PoisonError::into_inner)
        }

        pub(in crate::collection) fn write(&self) -> WriteGuard<'_, T> {
            self.inner.write().unwrap_or_else(PoisonError::into_inner)
        }
    }
}
