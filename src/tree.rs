//! An unbalanced BST that mutates itself in place. Nothing is ever rotated so the shape of the
//! tree is exactly the shape produced by the order of the inserts (and deletes) applied to it.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//! assert_eq!(tree.min().err(), Some(Error::EmptyTree));
//!
//! tree.insert(5);
//! tree.insert(3);
//! tree.insert(8);
//! assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
//!
//! // Deleting a value hands it back.
//! assert_eq!(tree.delete(&3), Ok(3));
//! assert!(tree.find(&3).is_none());
//!
//! // Deleting it again is reported, not fatal.
//! assert_eq!(tree.delete(&3), Err(Error::NotFound));
//! ```

use std::mem;

use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::pyramid::Pyramid;

/// The slot a `Node` lives in. This is either the tree's root slot or one of a parent's child
/// slots - the algorithms below don't need to know which.
type Link<T> = Option<Box<Node<T>>>;

/// Which child of a `Node` to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The subtree holding values strictly less than the node's value.
    Left,
    /// The subtree holding values greater than or equal to the node's value.
    Right,
}

impl Side {
    /// The side of a node holding `node_value` that `value` belongs on. Equal values go right.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Side;
    ///
    /// assert_eq!(Side::of(&1, &2), Side::Left);
    /// assert_eq!(Side::of(&2, &2), Side::Right);
    /// assert_eq!(Side::of(&3, &2), Side::Right);
    /// ```
    pub fn of<T: Ord>(value: &T, node_value: &T) -> Self {
        if value < node_value {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// A single value in the tree along with the (possibly empty) subtrees to its left and right.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The root of the subtree on the given side, if any.
    pub fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    fn child_link_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The node with the smallest value in the subtree rooted here.
    pub fn min(&self) -> &Self {
        match self.left() {
            Some(left) => left.min(),
            None => self,
        }
    }

    /// The node with the largest value in the subtree rooted here. With duplicates this is the
    /// last one inserted.
    pub fn max(&self) -> &Self {
        match self.right() {
            Some(right) => right.max(),
            None => self,
        }
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of 0.
    pub fn height(&self) -> isize {
        height(self.left()).max(height(self.right())) + 1
    }

    fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        if *value == self.value {
            return Some(self);
        }
        self.child(Side::of(value, &self.value))
            .and_then(|n| n.find(value))
    }
}

/// The height of a possibly empty subtree. An empty subtree has a height of -1 so that a single
/// leaf has a height of 0.
///
/// # Examples
///
/// ```
/// use plain_bst::{tree::height, Tree};
///
/// let mut tree = Tree::new();
/// assert_eq!(height(tree.root()), -1);
///
/// tree.insert(1);
/// assert_eq!(height(tree.root()), 0);
/// ```
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(-1, Node::height)
}

/// An unbalanced Binary Search Tree. Values that compare less than a node live to its left,
/// everything else (including equal values) lives to its right.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the value into the tree. The value is attached as a new leaf at the first empty
    /// slot on its search path so inserting never fails and duplicates are all kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &2]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        insert_at(&mut self.root, value, 0);
    }

    /// Deletes one node holding the given value and returns the value it held. If no node holds
    /// the value, [`Error::NotFound`] is returned and the tree is untouched.
    ///
    /// A node with two children isn't unlinked. Instead it takes over the value of its in-order
    /// successor (the smallest node in its right subtree) and that successor, which never has a
    /// left child, is unlinked in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Error, Tree};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&5), Ok(5));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(7));
    /// assert_eq!(tree.delete(&5), Err(Error::NotFound));
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<T>
    where
        T: Ord,
    {
        let deleted = delete_at(&mut self.root, value);
        if deleted.is_err() {
            warn!("delete: value not found, tree unchanged");
        }
        deleted
    }

    /// Potentially finds the node holding the given value. If no node holds it, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root().and_then(|root| root.find(value))
    }

    /// Whether some node holds the given value.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The node with the smallest value, or [`Error::EmptyTree`] if there are no nodes.
    pub fn min(&self) -> Result<&Node<T>> {
        self.root().map(Node::min).ok_or(Error::EmptyTree)
    }

    /// The node with the largest value, or [`Error::EmptyTree`] if there are no nodes.
    pub fn max(&self) -> Result<&Node<T>> {
        self.root().map(Node::max).ok_or(Error::EmptyTree)
    }

    /// The height of the whole tree. See [`height`].
    pub fn height(&self) -> isize {
        height(self.root())
    }

    /// Drops every node in the tree.
    pub fn clear(&mut self) {
        if self.root.take().is_some() {
            debug!("clear: dropped all nodes");
        }
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// Every level of the tree from the root down to the deepest leaf. Each level has twice as
    /// many slots as the one above it and a slot is `None` wherever the parent slot has no child
    /// on that side (or is `None` itself), so siblings line up across levels.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 3].into_iter().collect();
    /// let levels = tree
    ///     .levels()
    ///     .into_iter()
    ///     .map(|level| level.into_iter().map(|slot| slot.map(|n| *n.value())).collect())
    ///     .collect::<Vec<Vec<_>>>();
    ///
    /// assert_eq!(levels, [vec![Some(2)], vec![None, Some(3)]]);
    /// ```
    pub fn levels(&self) -> Vec<Vec<Option<&Node<T>>>> {
        let Some(root) = self.root() else {
            return Vec::new();
        };

        let mut levels = Vec::new();
        let mut current = vec![Some(root)];
        for _ in 0..=root.height() {
            let next = current
                .iter()
                .copied()
                .flat_map(|slot| match slot {
                    Some(node) => [node.left(), node.right()],
                    None => [None, None],
                })
                .collect();
            levels.push(mem::replace(&mut current, next));
        }

        levels
    }

    /// Lays the tree out as a text pyramid. Returns `None` for an empty tree.
    pub fn pyramid(&self) -> Option<Pyramid>
    where
        T: std::fmt::Display,
    {
        Pyramid::new(self)
    }

    /// Prints the tree's [`pyramid`][Tree::pyramid] to stdout. Prints nothing for an empty tree.
    pub fn print(&self)
    where
        T: std::fmt::Display,
    {
        if let Some(pyramid) = self.pyramid() {
            print!("{pyramid}");
        }
    }
}

fn insert_at<T: Ord>(link: &mut Link<T>, value: T, depth: usize) {
    match link {
        Some(node) => {
            let side = Side::of(&value, &node.value);
            insert_at(node.child_link_mut(side), value, depth + 1);

            if cfg!(debug_assertions) {
                if let Some(left) = node.left() {
                    assert!(left.value < node.value);
                }
                if let Some(right) = node.right() {
                    assert!(right.value >= node.value);
                }
            }
        }
        None => {
            trace!("insert: new leaf at depth {depth}");
            *link = Some(Node::new_boxed(value));
        }
    }
}

fn delete_at<T: Ord>(link: &mut Link<T>, value: &T) -> Result<T> {
    let node = link.as_mut().ok_or(Error::NotFound)?;
    if *value != node.value {
        let side = Side::of(value, &node.value);
        return delete_at(node.child_link_mut(side), value);
    }

    if node.left.is_some() && node.right.is_some() {
        // The successor is the minimum of the right subtree so it always has a free left slot.
        let successor = take_min(&mut node.right).ok_or(Error::NotFound)?;
        debug!("delete: promoted in-order successor into a node with two children");
        return Ok(mem::replace(&mut node.value, successor));
    }

    splice_out(link).ok_or(Error::NotFound)
}

/// Unlinks the smallest node below `link` and returns its value.
fn take_min<T>(link: &mut Link<T>) -> Option<T> {
    match link {
        Some(node) if node.left.is_some() => take_min(&mut node.left),
        _ => splice_out(link),
    }
}

/// Replaces the node in `link` with its only child (or nothing, for a leaf) and returns the
/// removed node's value. The node must not have two children.
fn splice_out<T>(link: &mut Link<T>) -> Option<T> {
    let Node { value, left, right } = *link.take()?;
    debug_assert!(left.is_none() || right.is_none());
    *link = left.or(right);
    Some(value)
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the values of a [`Tree`]. It keeps its own stack of the nodes whose
/// left subtrees are being visited rather than recursing.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

/// Whether every value below `node` is within `[lower, upper)`, recursively.
#[cfg(test)]
fn is_ordered<T: Ord>(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) -> bool {
    let Some(node) = node else {
        return true;
    };
    lower.map_or(true, |lower| node.value() >= lower)
        && upper.map_or(true, |upper| node.value() < upper)
        && is_ordered(node.left(), lower, Some(node.value()))
        && is_ordered(node.right(), Some(node.value()), upper)
}
