//! Model-checked concurrency tests for ConcurrentSet.
//!
//! With the `loom` feature the set's lock is `loom::sync::RwLock`, so
//! `loom::model` explores every interleaving of the threads below.
//!
//! # Running these tests
//!
//! ```bash
//! cargo test --release --test concurrent_set_loom_tests --features loom
//! ```

#![cfg(feature = "loom")]

use loom::sync::Arc;
use loom::thread;
use setkit::collection::{ConcurrentSet, union};

#[test]
fn test_concurrent_adds_are_not_lost() {
    loom::model(|| {
        let set = Arc::new(ConcurrentSet::new());

        let other = Arc::clone(&set);
        let handle = thread::spawn(move || {
            other.add(1);
        });
        set.add(2);
        handle.join().unwrap();

        assert_eq!(set.size(), 2);
        assert!(set.contains(&1));
        assert!(set.contains(&2));
    });
}

#[test]
fn test_duplicate_adds_collapse_in_every_interleaving() {
    loom::model(|| {
        let set = Arc::new(ConcurrentSet::new());

        let other = Arc::clone(&set);
        let handle = thread::spawn(move || {
            other.add("same");
        });
        set.add("same");
        handle.join().unwrap();

        assert_eq!(set.size(), 1);
    });
}

#[test]
fn test_racing_pops_take_distinct_values() {
    loom::model(|| {
        let set = Arc::new(ConcurrentSet::from_values([1, 2]));

        let other = Arc::clone(&set);
        let handle = thread::spawn(move || other.pop());
        let mine = set.pop();
        let theirs = handle.join().unwrap();

        assert!(mine.is_some());
        assert!(theirs.is_some());
        assert_ne!(mine, theirs);
        assert!(set.is_empty());
    });
}

#[test]
fn test_pop_on_last_value_has_single_winner() {
    loom::model(|| {
        let set = Arc::new(ConcurrentSet::from_values([7]));

        let other = Arc::clone(&set);
        let handle = thread::spawn(move || other.pop());
        let mine = set.pop();
        let theirs = handle.join().unwrap();

        assert_eq!(mine.xor(theirs), Some(7));
    });
}

#[test]
fn test_contains_sees_before_or_after_remove() {
    loom::model(|| {
        let set = Arc::new(ConcurrentSet::from_values([1, 2]));

        let other = Arc::clone(&set);
        let handle = thread::spawn(move || {
            other.remove(&1);
        });
        let seen = set.contains(&1);
        let size = set.size();
        handle.join().unwrap();

        assert!(size == 1 || size == 2);
        if !seen {
            assert_eq!(size, 1);
        }
        assert_eq!(set.size(), 1);
    });
}

#[test]
fn test_union_with_itself_while_writer_runs() {
    loom::model(|| {
        let set = Arc::new(ConcurrentSet::from_values([1]));

        let other = Arc::clone(&set);
        let handle = thread::spawn(move || {
            other.add(2);
        });
        let merged = union(set.as_ref(), set.as_ref());
        handle.join().unwrap();

        assert!(merged.contains(&1));
        assert!(merged.size() <= 2);
    });
}
