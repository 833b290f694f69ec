//! This crate exposes an ordered container of unique elements built on a plain (never rebalanced)
//! Binary Search Tree whose nodes link back to their parents.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree makes no attempt to bound its height:
//! elements inserted in sorted order produce a tree that is a single long path, and everything
//! becomes linear. Balanced input gives `O(lg N)`.
//!
//! ## Parent links
//!
//! Every `Node` also knows its parent, so the next or previous element in sorted order can be
//! reached from any `Node` by walking up and down the tree. [`Cursor`]s are built on this: a cursor
//! is a position that can be moved in both directions and used to read or update the element
//! under it. [`Iter`] uses the same walk for `for x in &tree` loops.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut tree: Tree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
//!
//! tree.remove(&50);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [20, 30, 40, 60, 70, 80]);
//!
//! let cursor = tree.find(&40);
//! let next = tree.successor(cursor).unwrap();
//! assert_eq!(tree.get(next), Ok(&60));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod cursor;
mod error;
mod iter;
mod render;
mod tree;

pub use cursor::Cursor;
pub use error::TreeError;
pub use iter::Iter;
pub use tree::Tree;
