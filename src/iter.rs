use std::iter::FusedIterator;

use crate::arena::NodeId;
use crate::tree::Tree;

/// An iterator over the elements of a [`Tree`] in ascending order, created by [`Tree::iter`].
///
/// Each step follows parent links to the successor (or predecessor, from the back), so it needs no
/// stack however deep the tree is.
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

/// Manual implementation of `Clone` so we don't require `T: Clone` to clone a borrow.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self {
            tree,
            front: tree.root().map(|root| tree.leftmost(root)),
            back: tree.root().map(|root| tree.rightmost(root)),
            remaining: tree.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = self.tree.successor_of(id);
        Some(&self.tree.arena().node(id).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = self.tree.predecessor_of(id);
        Some(&self.tree.arena().node(id).value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Visits every node root first, then the left subtree, then the right subtree, yielding each
/// element with its depth (0 for the root).
pub(crate) struct PreOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<(NodeId, usize)>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self {
            tree,
            stack: tree.root().map(|root| (root, 0)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let node = self.tree.arena().node(id);
        // Right goes on first so the left subtree comes out first.
        if let Some(right) = node.right {
            self.stack.push((right, depth + 1));
        }
        if let Some(left) = node.left {
            self.stack.push((left, depth + 1));
        }
        Some((depth, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meets_in_the_middle() {
        let tree: Tree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
        let mut iter = tree.iter();

        assert_eq!(iter.len(), 7);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&7));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&6));
        assert_eq!(iter.len(), 3);

        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest, [&3, &4, &5]);
        assert_eq!(iter.rev().collect::<Vec<_>>(), [&5, &4, &3]);
    }

    #[test]
    fn empty() {
        let tree = Tree::<i32>::new();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.iter().next_back(), None);
        assert_eq!(PreOrder::new(&tree).next(), None);
    }

    #[test]
    fn for_loop_over_reference() {
        let tree: Tree<_> = ["pear", "apple", "fig"].into_iter().collect();
        let mut seen = Vec::new();
        for fruit in &tree {
            seen.push(*fruit);
        }
        assert_eq!(seen, ["apple", "fig", "pear"]);
    }

    #[test]
    fn pre_order_depths() {
        let tree: Tree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
        let visited: Vec<_> = PreOrder::new(&tree).map(|(d, v)| (d, *v)).collect();

        assert_eq!(
            visited,
            [
                (0, 50),
                (1, 30),
                (2, 20),
                (2, 40),
                (1, 70),
                (2, 60),
                (2, 80)
            ]
        );
    }
}
