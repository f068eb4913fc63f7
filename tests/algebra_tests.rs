//! Integration tests for the set algebra functions.
//!
//! Covers the worked examples for union, intersection and the symmetric
//! difference, plus operands of different set kinds.

use rstest::{fixture, rstest};
use setkit::collection::{
    Set, UnorderedSet, difference, intersection, is_disjoint, relative_complement, union,
};
use setkit::set;

struct Colors {
    group_one: Set<&'static str>,
    group_two: Set<&'static str>,
}

#[fixture]
fn colors() -> Colors {
    Colors {
        group_one: set!["red", "blue", "green"],
        group_two: set!["red", "yellow", "purple", "black", "blue"],
    }
}

// =============================================================================
// Union
// =============================================================================

#[rstest]
fn test_union_of_identical_sets(colors: Colors) {
    let result = union(&colors.group_one, &colors.group_one);
    assert_eq!(result.size(), colors.group_one.size());
}

#[rstest]
fn test_union_with_one_common_item() {
    let set_one = set!["red", "blue", "green"];
    let set_two = set!["red", "yellow", "purple", "black"];

    let result = union(&set_one, &set_two);

    assert_eq!(set_one.size(), 3);
    assert_eq!(set_two.size(), 4);
    assert_eq!(result.size(), set_one.size() + set_two.size() - 1);
    for color in set_one.iter().chain(set_two.iter()) {
        assert!(result.contains(color), "union missing {color}");
    }
}

#[rstest]
fn test_union_has_six_colors(colors: Colors) {
    assert_eq!(union(&colors.group_one, &colors.group_two).size(), 6);
}

// =============================================================================
// Intersection
// =============================================================================

#[rstest]
fn test_intersection_of_identical_sets(colors: Colors) {
    let result = intersection(&colors.group_one, &colors.group_one);
    assert_eq!(result.size(), colors.group_one.size());
}

#[rstest]
fn test_intersection_keeps_common_colors(colors: Colors) {
    let result = intersection(&colors.group_one, &colors.group_two);

    assert_eq!(colors.group_one.size(), 3);
    assert_eq!(colors.group_two.size(), 5);
    assert_eq!(result.size(), 2);
    for color in ["red", "blue"] {
        assert!(result.contains(color));
    }
    for color in ["green", "yellow", "purple", "black"] {
        assert!(!result.contains(color));
    }
}

#[rstest]
fn test_intersection_with_empty_is_empty(colors: Colors) {
    let empty: Set<&'static str> = Set::new();
    assert!(intersection(&colors.group_one, &empty).is_empty());
    assert!(intersection(&empty, &colors.group_one).is_empty());
}

// =============================================================================
// Difference (symmetric)
// =============================================================================

#[rstest]
fn test_difference_of_identical_sets_is_empty(colors: Colors) {
    assert_eq!(difference(&colors.group_one, &colors.group_one).size(), 0);
}

#[rstest]
fn test_difference_is_symmetric(colors: Colors) {
    let result = difference(&colors.group_one, &colors.group_two);

    assert_eq!(colors.group_one.size(), 3);
    assert_eq!(colors.group_two.size(), 5);
    assert_eq!(result.size(), 4);
    for color in ["green", "yellow", "purple", "black"] {
        assert!(result.contains(color), "difference missing {color}");
    }
    for color in ["red", "blue"] {
        assert!(!result.contains(color), "difference has common {color}");
    }
}

#[rstest]
fn test_difference_with_empty_is_identity(colors: Colors) {
    let empty: Set<&'static str> = Set::new();
    let result = difference(&empty, &colors.group_two);
    assert!(result.subset(&colors.group_two));
    assert!(colors.group_two.subset(&result));
}

// =============================================================================
// Relative Complement and Disjointness
// =============================================================================

#[rstest]
fn test_relative_complement_keeps_left_only(colors: Colors) {
    let left_only = relative_complement(&colors.group_one, &colors.group_two);
    let right_only = relative_complement(&colors.group_two, &colors.group_one);

    assert_eq!(left_only.enumerate(), vec!["green"]);
    assert_eq!(right_only.size(), 3);
    assert!(!right_only.contains("green"));
}

#[rstest]
fn test_symmetric_difference_is_union_of_complements(colors: Colors) {
    let left_only = relative_complement(&colors.group_one, &colors.group_two);
    let right_only = relative_complement(&colors.group_two, &colors.group_one);
    let combined = union(&left_only, &right_only);
    let symmetric = difference(&colors.group_one, &colors.group_two);

    assert!(combined.subset(&symmetric));
    assert!(symmetric.subset(&combined));
}

#[rstest]
#[case(&[1, 2, 3], &[4, 5], true)]
#[case(&[1, 2, 3], &[3, 4], false)]
#[case(&[], &[1], true)]
fn test_is_disjoint(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: bool) {
    let left = Set::from_values(left.iter().copied());
    let right = Set::from_values(right.iter().copied());
    assert_eq!(is_disjoint(&left, &right), expected);
}

// =============================================================================
// Generic Use
// =============================================================================

fn common_count<A, B>(left: &A, right: &B) -> usize
where
    A: UnorderedSet,
    B: UnorderedSet<Value = A::Value>,
{
    intersection(left, right).size()
}

#[rstest]
fn test_algebra_through_trait_bounds(colors: Colors) {
    assert_eq!(common_count(&colors.group_one, &colors.group_two), 2);
}

#[rstest]
fn test_multiples_example() {
    let multiples_of_two: Set<i32> = (1..=10).map(|n| n * 2).collect();
    let multiples_of_three: Set<i32> = (1..=7).map(|n| n * 3).collect();

    let mut both = intersection(&multiples_of_two, &multiples_of_three).enumerate();
    both.sort_unstable();

    assert_eq!(both, vec![6, 12, 18]);
}

#[cfg(all(feature = "concurrent", not(feature = "loom")))]
mod mixed_kinds {
    use super::*;
    use setkit::collection::ConcurrentSet;

    #[rstest]
    fn test_plain_left_concurrent_right_builds_plain_set(colors: Colors) {
        let right = ConcurrentSet::from_values(colors.group_two.iter().copied());
        let result: Set<&'static str> = intersection(&colors.group_one, &right);
        assert_eq!(result.size(), 2);
        assert_eq!(right.size(), 5);
    }

    #[rstest]
    fn test_concurrent_left_builds_concurrent_set(colors: Colors) {
        let left = ConcurrentSet::from_values(colors.group_one.iter().copied());
        let result: ConcurrentSet<&'static str> = difference(&left, &colors.group_two);
        assert_eq!(result.size(), 4);
        assert_eq!(left.size(), 3);
    }

    #[rstest]
    fn test_concurrent_same_operand_on_both_sides() {
        let set = ConcurrentSet::from_values([1, 2, 3]);
        assert_eq!(union(&set, &set).size(), 3);
        assert_eq!(intersection(&set, &set).size(), 3);
        assert!(difference(&set, &set).is_empty());
        assert!(set.subset(&set));
    }
}
