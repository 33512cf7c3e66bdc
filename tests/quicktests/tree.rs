use plain_bst::{Error, Node, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::{is_ordered, Op};

/// Applies a set of operations to a tree and a multiset.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, counts: &mut BTreeMap<T, usize>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                *counts.entry(v.clone()).or_default() += 1;
            }
            Op::Remove(v) => {
                let expected = match counts.get_mut(v) {
                    Some(count) => {
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(v);
                        }
                        Ok(v.clone())
                    }
                    None => Err(Error::NotFound),
                };
                if bst.delete(v) != expected {
                    return false;
                }
            }
        }
        if !is_ordered(bst.root(), None, None) {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    let ok = do_ops(&ops, &mut tree, &mut counts);
    let expected = counts
        .iter()
        .flat_map(|(v, count)| std::iter::repeat(v).take(*count));

    ok && tree.iter().eq(expected)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.delete(delete).is_ok() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && is_ordered(tree.root(), None, None)
}

#[quickcheck]
fn min_and_max_match_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => {
            tree.min().map(|n| n.value()) == Ok(min) && tree.max().map(|n| n.value()) == Ok(max)
        }
        _ => {
            tree.min().err() == Some(Error::EmptyTree) && tree.max().err() == Some(Error::EmptyTree)
        }
    }
}

/// The values of the subtree in pre-order, with `None` for every empty child slot. Two subtrees
/// with the same shape and values produce the same output.
fn shape(node: Option<&Node<i8>>, out: &mut Vec<Option<i8>>) {
    match node {
        None => out.push(None),
        Some(n) => {
            out.push(Some(*n.value()));
            shape(n.left(), out);
            shape(n.right(), out);
        }
    }
}

#[quickcheck]
fn missing_delete_never_mutates(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != missing).collect();
    let mut before = Vec::new();
    shape(tree.root(), &mut before);

    let missed = tree.delete(&missing) == Err(Error::NotFound)
        && tree.delete(&missing) == Err(Error::NotFound);

    let mut after = Vec::new();
    shape(tree.root(), &mut after);
    missed && after == before
}
