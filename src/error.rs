//! The ways an operation on a [`Tree`][crate::Tree] can fail.

use thiserror::Error;

/// Errors surfaced by [`Tree`][crate::Tree] operations. Neither of these leave the tree in a
/// different state than it was before the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested value is not stored in the tree.
    #[error("value not found in tree")]
    NotFound,

    /// A minimum or maximum was requested from a tree with no nodes.
    #[error("tree is empty")]
    EmptyTree,
}

/// Shorthand for results of [`Tree`][crate::Tree] operations.
pub type Result<T> = std::result::Result<T, Error>;
