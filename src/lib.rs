//! This crate exposes an unbalanced Binary Search Tree (BST) that is mutated in place, along
//! with a small text renderer for looking at the shape it ends up in.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of this BST are:
//!
//! 1. For every `Node` in the BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Duplicates are kept, to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree never rebalances so its height depends
//! entirely on insertion order: inserting already-sorted values produces a chain with a height of
//! `N - 1`. BSTs also naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! ## Logging
//!
//! Diagnostics (such as deleting a value that isn't in the tree) are emitted through the [`log`]
//! facade. Install any logger in the embedding program to see them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod pyramid;
pub mod tree;


pub use error::{Error, Result};
pub use pyramid::{Legend, Pyramid};
pub use tree::{Iter, Node, Side, Tree};
