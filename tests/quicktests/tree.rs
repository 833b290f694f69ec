use ordtree::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::{init_tracing_for_test, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Clone + Ord + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                assert_eq!(bst.remove(x), set.take(x));
            }
            Op::Iter => {
                assert!(bst.iter().eq(set.iter()));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_tracing_for_test();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.check_invariants().is_ok() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x) && tree.find(x) != tree.end())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == tree.end())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    tree.check_invariants().is_ok()
        && deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn sorted_without_duplicates(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let sorted: Vec<_> = tree.iter().collect();

    sorted.len() == tree.len() && sorted.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.insert(x);
    let before: Vec<_> = tree.iter().copied().collect();

    !tree.insert(x) && tree.iter().copied().eq(before)
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.find_min().ok() == xs.iter().min() && tree.find_max().ok() == xs.iter().max()
}

#[quickcheck]
fn copy_is_independent(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let original: Tree<_> = xs.into_iter().collect();
    let before: Vec<_> = original.iter().copied().collect();

    let mut copy = original.clone();
    for delete in &deletes {
        copy.remove(delete);
    }
    copy.insert(i8::MIN);

    copy.check_invariants().is_ok() && original.iter().copied().eq(before)
}

#[quickcheck]
fn sorted_output_matches_iteration(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut out = Vec::new();
    tree.write_sorted(&mut out).unwrap();

    let expected: String = tree.iter().map(|x| format!("{}\n", x)).collect();
    out == expected.into_bytes()
}
