use thiserror::Error;

/// Failures reported by [`Tree`][crate::Tree] operations.
///
/// Looking for an element that isn't there is never an error: [`Tree::find`][crate::Tree::find]
/// returns the end cursor and [`Tree::remove`][crate::Tree::remove] returns `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The tree has no elements to answer the query with.
    #[error("The tree is empty.")]
    Underflow,
    /// The cursor is past the end of the tree and has no element.
    #[error("The cursor is at the end of the tree.")]
    EndCursor,
    /// The cursor refers to a node that has since been removed from the tree.
    #[error("The cursor refers to a removed node.")]
    StaleCursor,
    /// Some node's element is not strictly between the bounds set by its ancestors.
    #[error("Elements are not in search tree order.")]
    OutOfOrder,
    /// Some node's parent does not list it as a child, or a child does not point back.
    #[error("Parent and child links disagree.")]
    BrokenParentLink,
    /// The number of nodes reachable from the root differs from the recorded length.
    #[error("Tree records {expected} elements but {found} are reachable.")]
    LengthMismatch {
        /// The length the tree reports.
        expected: usize,
        /// The number of nodes actually reachable from the root.
        found: usize,
    },
}
