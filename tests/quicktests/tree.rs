use parentless::Tree;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::logging;

/// Builds a tree by inserting `xs` in order.
fn build(xs: &[i8]) -> Tree {
    logging::init();
    xs.iter().map(|x| i32::from(*x)).collect()
}

/// In a tree that has only seen inserts, the lowest common ancestor of `a` and `b` is the first
/// value inserted between them: everything inserted before it went to one side of both.
fn first_inserted_between(xs: &[i8], a: i8, b: i8) -> Option<i32> {
    let (low, high) = (a.min(b), a.max(b));
    xs.iter()
        .find(|x| low <= **x && **x <= high)
        .map(|x| i32::from(*x))
}

#[test]
fn reference_scenario() {
    logging::init();
    let mut tree = Tree::new();
    for value in [5, 3, 2, 4, 7, 6, 8] {
        tree.insert(value);
    }

    assert!(tree.contains(5) && tree.contains(7) && tree.contains(2));
    assert!(!tree.contains(9) && !tree.contains(0) && !tree.contains(-7));

    tree.remove(3);
    assert!(tree.contains(5) && tree.contains(7) && tree.contains(2));
    assert!(!tree.contains(9) && !tree.contains(3) && !tree.contains(-7));

    assert_eq!(tree.ancestor(6, 8).map(|n| n.value()), Some(7));
    assert_eq!(tree.ancestor(2, 8).map(|n| n.value()), Some(5));
    assert!(tree.ancestor(2, 20).is_none());
    assert!(tree.ancestor(50, 60).is_none());
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains((*x).into()))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains((*x).into()))
}

#[quickcheck]
fn duplicate_inserts_change_nothing(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let before = format!("{:?}", tree);

    let none_added = xs.iter().all(|x| !tree.insert((*x).into()));
    none_added && format!("{:?}", tree) == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        tree.remove((*delete).into());
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains((*x).into()))
        && still_present.iter().all(|x| tree.contains((*x).into()))
}

#[quickcheck]
fn remove_twice_is_remove_once(xs: Vec<i8>, x: i8) -> bool {
    let mut once = build(&xs);
    let mut twice = build(&xs);

    once.remove(x.into());
    twice.remove(x.into());
    let second = twice.remove(x.into());

    !second && format!("{:?}", once) == format!("{:?}", twice)
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.min() == xs.iter().min().map(|x| i32::from(*x))
        && tree.max() == xs.iter().max().map(|x| i32::from(*x))
}

#[quickcheck]
fn ancestor_of_members(xs: Vec<i8>, i: usize, j: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let tree = build(&xs);
    let (a, b) = (xs[i % xs.len()], xs[j % xs.len()]);

    let found = tree.ancestor(a.into(), b.into()).map(|n| n.value());
    TestResult::from_bool(found == first_inserted_between(&xs, a, b))
}

#[quickcheck]
fn ancestor_of_anything(xs: Vec<i8>, a: i8, b: i8) -> bool {
    let tree = build(&xs);

    let expected = if xs.contains(&a) && xs.contains(&b) {
        first_inserted_between(&xs, a, b)
    } else {
        None
    };
    tree.ancestor(a.into(), b.into()).map(|n| n.value()) == expected
}

#[quickcheck]
fn ancestor_of_removed_value(xs: Vec<i8>, i: usize) -> TestResult {
    if xs.is_empty() {
        return TestResult::discard();
    }
    let mut tree = build(&xs);
    let gone = xs[i % xs.len()];
    tree.remove(gone.into());

    let none_found = xs
        .iter()
        .all(|x| tree.ancestor(gone.into(), (*x).into()).is_none());
    TestResult::from_bool(none_found)
}
