//! An unbalanced BST whose nodes keep a link to their parent. The parent links let any node find
//! its in-order successor and predecessor without a stack, which is what drives [`Cursor`]s and
//! [`Iter`][crate::Iter].
//!
//! # Examples
//!
//! ```
//! use ordtree::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.find_min(), Err(TreeError::Underflow));
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert_eq!(tree.find_min(), Ok(&1));
//! assert_eq!(tree.find_max(), Ok(&3));
//!
//! // Duplicates are ignored.
//! assert!(!tree.insert(2));
//! assert_eq!(tree.len(), 3);
//!
//! // Removing a node returns its element.
//! assert_eq!(tree.remove(&2), Some(2));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::arena::{Arena, NodeId};
use crate::cursor::Cursor;
use crate::error::TreeError;
use crate::iter::Iter;

/// A Binary Search Tree of unique elements. It never rebalances: inserting elements in sorted
/// order builds a tree as deep as it is long, and every operation below is `O(height)`.
pub struct Tree<T> {
    arena: Arena<T>,
    root: Option<NodeId>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy. The copy gets its own nodes (packed into fresh slots) with every parent link
/// pointing into the copy, so cursors taken from `self` mean nothing to it.
impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut arena = Arena::with_capacity(self.len);
        let root = self.root.map(|root| {
            let new_root = arena.alloc(self.arena.node(root).value.clone(), None);
            let mut stack = vec![(root, new_root)];

            while let Some((old, new)) = stack.pop() {
                let node = self.arena.node(old);
                if let Some(left) = node.left {
                    let new_left = arena.alloc(self.arena.node(left).value.clone(), Some(new));
                    arena.node_mut(new).left = Some(new_left);
                    stack.push((left, new_left));
                }
                if let Some(right) = node.right {
                    let new_right = arena.alloc(self.arena.node(right).value.clone(), Some(new));
                    arena.node_mut(new).right = Some(new_right);
                    stack.push((right, new_right));
                }
            }

            new_root
        });
        debug!(len = self.len, "cloned tree");

        Self {
            arena,
            root,
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they hold the same elements, whatever their shapes.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest path from the root down to a leaf. An empty tree has height
    /// 0 and a tree built from sorted input has height equal to its length.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let balanced: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let degenerate: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(balanced.height(), 2);
    /// assert_eq!(degenerate.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.arena.node(id);
            stack.extend(node.left.into_iter().chain(node.right).map(|c| (c, depth + 1)));
        }

        height
    }

    /// Removes every element. Cursors into the tree all go stale.
    pub fn clear(&mut self) {
        debug!(len = self.len, "clearing tree");
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// The smallest element, or [`TreeError::Underflow`] if the tree is empty.
    pub fn find_min(&self) -> Result<&T, TreeError> {
        self.root
            .map(|root| &self.arena.node(self.leftmost(root)).value)
            .ok_or(TreeError::Underflow)
    }

    /// The largest element, or [`TreeError::Underflow`] if the tree is empty.
    pub fn find_max(&self) -> Result<&T, TreeError> {
        self.root
            .map(|root| &self.arena.node(self.rightmost(root)).value)
            .ok_or(TreeError::Underflow)
    }

    /// Iterates over the elements in ascending order. The iterator is double ended, so `.rev()`
    /// walks them in descending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub(crate) fn arena(&self) -> &Arena<T> {
        &self.arena
    }

    pub(crate) fn arena_mut(&mut self) -> &mut Arena<T> {
        &mut self.arena
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The minimum of the subtree rooted at `id`.
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena.node(id).left {
            id = left;
        }
        id
    }

    /// The maximum of the subtree rooted at `id`.
    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.arena.node(id).right {
            id = right;
        }
        id
    }

    /// The node holding the next larger element: the minimum of the right subtree if there is
    /// one, otherwise the first ancestor reached from its left side. `None` for the maximum.
    pub(crate) fn successor_of(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.arena.node(id).right {
            return Some(self.leftmost(right));
        }

        let mut current = id;
        while let Some(parent) = self.arena.node(current).parent {
            if self.arena.node(parent).left == Some(current) {
                return Some(parent);
            }
            current = parent;
        }

        None
    }

    /// Mirror of [`Tree::successor_of`]. `None` for the minimum.
    pub(crate) fn predecessor_of(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self.arena.node(id).left {
            return Some(self.rightmost(left));
        }

        let mut current = id;
        while let Some(parent) = self.arena.node(current).parent {
            if self.arena.node(parent).right == Some(current) {
                return Some(parent);
            }
            current = parent;
        }

        None
    }

    /// Points whatever held `old` (its parent's child slot, or the root) at `new` instead. Does
    /// not touch `new`'s parent link.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => {
                debug_assert_eq!(self.root, Some(old));
                self.root = new;
            }
            Some(parent) => {
                let parent = self.arena.node_mut(parent);
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    debug_assert_eq!(parent.right, Some(old));
                    parent.right = new;
                }
            }
        }
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts `value` unless an equal element is already present. Returns whether a new node was
    /// created; an existing equal element is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let Some(mut current) = self.root else {
            self.root = Some(self.arena.alloc(value, None));
            self.len = 1;
            trace!("inserted root");
            return true;
        };

        let (parent, side) = loop {
            let node = self.arena.node(current);
            let ordering = value.cmp(&node.value);
            let next = match ordering {
                Ordering::Less => node.left,
                Ordering::Equal => return false,
                Ordering::Greater => node.right,
            };
            match next {
                Some(child) => current = child,
                None => break (current, ordering),
            }
        };

        let id = self.arena.alloc(value, Some(parent));
        let parent_node = self.arena.node_mut(parent);
        if side == Ordering::Less {
            parent_node.left = Some(id);
        } else {
            parent_node.right = Some(id);
        }
        self.len += 1;
        trace!(len = self.len, "inserted leaf");

        if cfg!(debug_assertions) {
            self.assert_links(parent);
        }
        true
    }

    /// Removes the element equal to `value` and returns it. If there is no such element, nothing
    /// happens.
    ///
    /// A node with two children is replaced by its successor node, which moves into the hole
    /// keeping its identity: cursors to the successor stay valid. Only cursors to the removed
    /// element go stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree: Tree<_> = [50, 30, 70].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&50), Some(50));
    /// assert_eq!(tree.remove(&50), None);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [30, 70]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let id = self.locate(value)?;
        let node = self.arena.node(id);
        let (left, right, parent) = (node.left, node.right, node.parent);

        match (left, right) {
            (None, None) => {
                trace!(root = parent.is_none(), "removing leaf");
                self.replace_child(parent, id, None);
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!(root = parent.is_none(), "removing node with one child");
                self.replace_child(parent, id, Some(child));
                self.arena.node_mut(child).parent = parent;
                if cfg!(debug_assertions) {
                    self.assert_links(child);
                }
            }
            (Some(_), Some(right)) => {
                trace!(root = parent.is_none(), "removing node with two children");
                let successor = self.leftmost(right);
                self.detach(successor);

                // Detaching rewires our right link when the successor was our right child.
                let node = self.arena.node(id);
                let (left, right) = (node.left, node.right);
                let graft = self.arena.node_mut(successor);
                graft.parent = parent;
                graft.left = left;
                graft.right = right;
                for child in left.into_iter().chain(right) {
                    self.arena.node_mut(child).parent = Some(successor);
                }
                self.replace_child(parent, id, Some(successor));

                if cfg!(debug_assertions) {
                    self.assert_links(successor);
                }
            }
        }

        if cfg!(debug_assertions) {
            if let Some(parent) = parent {
                self.assert_links(parent);
            }
        }
        self.len -= 1;
        Some(self.arena.free(id).value)
    }

    /// A cursor at the element equal to `value`, or the end cursor if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_ne!(tree.find(&2), tree.end());
    /// assert_eq!(tree.get(tree.find(&2)), Ok(&2));
    /// assert_eq!(tree.find(&4), tree.end());
    /// ```
    pub fn find(&self, value: &T) -> Cursor {
        Cursor::new(self.locate(value))
    }

    /// Whether an element equal to `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.locate(value).is_some()
    }

    /// The elements immediately below and above `value` in sorted order. `value` itself need not
    /// be in the tree; if it is, it is not its own neighbour.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [20, 10, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.neighbors(&20), (Some(&10), Some(&30)));
    /// assert_eq!(tree.neighbors(&25), (Some(&20), Some(&30)));
    /// assert_eq!(tree.neighbors(&5), (None, Some(&10)));
    /// ```
    pub fn neighbors(&self, value: &T) -> (Option<&T>, Option<&T>) {
        let (mut below, mut above) = (None, None);
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.arena.node(id);
            current = match value.cmp(&node.value) {
                Ordering::Less => {
                    above = Some(id);
                    node.left
                }
                Ordering::Equal => {
                    below = self.predecessor_of(id);
                    above = self.successor_of(id);
                    break;
                }
                Ordering::Greater => {
                    below = Some(id);
                    node.right
                }
            };
        }

        let value_of = |id: NodeId| &self.arena.node(id).value;
        (below.map(value_of), above.map(value_of))
    }

    /// The element in the parent node of the element equal to `value`. `None` if `value` is not
    /// in the tree or sits at the root.
    pub fn parent_of(&self, value: &T) -> Option<&T> {
        let id = self.locate(value)?;
        let parent = self.arena.node(id).parent?;
        Some(&self.arena.node(parent).value)
    }

    /// Walks every node and checks the search tree ordering, that every parent and child agree on
    /// their link, and that the recorded length matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree: Tree<_> = (0..100).rev().collect();
    /// for x in (0..100).step_by(3) {
    ///     tree.remove(&x);
    /// }
    ///
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), TreeError> {
        let Some(root) = self.root else {
            return match self.len {
                0 => Ok(()),
                expected => Err(TreeError::LengthMismatch { expected, found: 0 }),
            };
        };

        let root_node = self.arena.get(root).ok_or(TreeError::BrokenParentLink)?;
        if root_node.parent.is_some() {
            return Err(TreeError::BrokenParentLink);
        }

        let mut found = 0;
        let mut stack: Vec<(NodeId, Option<&T>, Option<&T>)> = vec![(root, None, None)];
        while let Some((id, low, high)) = stack.pop() {
            found += 1;
            let node = self.arena.get(id).ok_or(TreeError::BrokenParentLink)?;
            if low.map_or(false, |low| *low >= node.value)
                || high.map_or(false, |high| *high <= node.value)
            {
                return Err(TreeError::OutOfOrder);
            }

            for (child, low, high) in [
                (node.left, low, Some(&node.value)),
                (node.right, Some(&node.value), high),
            ] {
                let Some(child) = child else {
                    continue;
                };
                let child_node = self.arena.get(child).ok_or(TreeError::BrokenParentLink)?;
                if child_node.parent != Some(id) {
                    return Err(TreeError::BrokenParentLink);
                }
                stack.push((child, low, high));
            }
        }

        if found == self.len {
            Ok(())
        } else {
            Err(TreeError::LengthMismatch {
                expected: self.len,
                found,
            })
        }
    }

    pub(crate) fn locate(&self, value: &T) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.arena.node(id);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }

        None
    }

    /// Unhooks the leftmost node of some right subtree, splicing its right child (it has no left
    /// one) up into its place.
    fn detach(&mut self, successor: NodeId) {
        let node = self.arena.node(successor);
        debug_assert!(node.left.is_none(), "successor has a left child");
        let parent = node.parent.expect("successor lies below the removed node");
        let right = node.right;

        self.replace_child(Some(parent), successor, right);
        if let Some(right) = right {
            self.arena.node_mut(right).parent = Some(parent);
        }
    }

    /// Asserts the ordering and parent links between `id` and its direct neighbours.
    fn assert_links(&self, id: NodeId) {
        let node = self.arena.node(id);
        if let Some(left) = node.left {
            let left = self.arena.node(left);
            assert!(left.value < node.value);
            assert_eq!(left.parent, Some(id));
        }
        if let Some(right) = node.right {
            let right = self.arena.node(right);
            assert!(right.value > node.value);
            assert_eq!(right.parent, Some(id));
        }
        match node.parent {
            Some(parent) => {
                let parent = self.arena.node(parent);
                assert!((parent.left == Some(id)) != (parent.right == Some(id)));
            }
            None => assert_eq!(self.root, Some(id)),
        }
    }
}
