use plain_bst::Node;
use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the tree
    Insert(T),
    /// Remove one copy of the value from the tree
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}

/// Whether every value in the subtree is in `[lower, upper)` and the same holds, recursively, for
/// the left subtree below each node's value and the right subtree at or above it.
pub(crate) fn is_ordered<T: Ord>(
    node: Option<&Node<T>>,
    lower: Option<&T>,
    upper: Option<&T>,
) -> bool {
    match node {
        None => true,
        Some(n) => {
            lower.map_or(true, |lower| n.value() >= lower)
                && upper.map_or(true, |upper| n.value() < upper)
                && is_ordered(n.left(), lower, Some(n.value()))
                && is_ordered(n.right(), Some(n.value()), upper)
        }
    }
}
