//! Positions in a [`Tree`] that can step forwards and backwards through its elements.
//!
//! A [`Cursor`] doesn't borrow the tree. It is a plain position (a node, or the end) and every
//! operation takes the tree it came from. That keeps a cursor around across mutations, e.g. to
//! bump a counter stored inside an element found with [`Tree::find`].
//!
//! Removing the element a cursor points at invalidates that cursor. Using it afterwards reports
//! [`TreeError::StaleCursor`] rather than reading some other element. Cursors to other elements are
//! unaffected by the removal. Using a cursor with a tree it didn't come from gives unspecified
//! (but memory safe) results.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Tree, TreeError};
//!
//! let tree: Tree<_> = [2, 1, 3].into_iter().collect();
//!
//! let mut cursor = tree.begin();
//! let mut seen = Vec::new();
//! while cursor != tree.end() {
//!     seen.push(*tree.get(cursor)?);
//!     cursor.advance(&tree)?;
//! }
//! assert_eq!(seen, [1, 2, 3]);
//!
//! // Stepping back from the end lands on the largest element.
//! cursor.retreat(&tree)?;
//! assert_eq!(tree.get(cursor), Ok(&3));
//! # Ok::<(), TreeError>(())
//! ```

use crate::arena::NodeId;
use crate::error::TreeError;
use crate::tree::Tree;

/// A position in a [`Tree`]: either at a node or at the end, one past the largest element.
///
/// Cursors compare equal when they are at the same node, or both at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    node: Option<NodeId>,
}

impl Cursor {
    pub(crate) fn new(node: Option<NodeId>) -> Self {
        Self { node }
    }

    /// Whether this cursor is at the end, with no element under it.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Moves to the next larger element, or to the end after the largest one.
    ///
    /// ## Errors
    ///
    /// [`TreeError::EndCursor`] when already at the end and [`TreeError::StaleCursor`] when the
    /// current element has been removed. The cursor doesn't move in either case.
    pub fn advance<T>(&mut self, tree: &Tree<T>) -> Result<(), TreeError> {
        *self = tree.successor(*self)?;
        Ok(())
    }

    /// Moves to the next smaller element. From the end this is the largest element; from the
    /// smallest element it is the end.
    ///
    /// ## Errors
    ///
    /// [`TreeError::StaleCursor`] when the current element has been removed.
    pub fn retreat<T>(&mut self, tree: &Tree<T>) -> Result<(), TreeError> {
        *self = tree.predecessor(*self)?;
        Ok(())
    }
}

impl<T> Tree<T> {
    /// A cursor at the smallest element, or the end cursor if the tree is empty.
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.root().map(|root| self.leftmost(root)))
    }

    /// The end cursor. It is the same for every tree and never refers to an element.
    pub fn end(&self) -> Cursor {
        Cursor::new(None)
    }

    /// The element under `cursor`.
    ///
    /// ## Errors
    ///
    /// [`TreeError::EndCursor`] for the end cursor and [`TreeError::StaleCursor`] when the element
    /// has been removed.
    pub fn get(&self, cursor: Cursor) -> Result<&T, TreeError> {
        let id = cursor.node.ok_or(TreeError::EndCursor)?;
        self.arena()
            .get(id)
            .map(|node| &node.value)
            .ok_or(TreeError::StaleCursor)
    }

    /// Mutable access to the element under `cursor`, e.g. to update a count kept next to the key
    /// the element is ordered by. Changing the element so that it compares differently to the
    /// others is a logic error: the tree won't panic or leak, but lookups may miss elements and
    /// [`Tree::check_invariants`] will report [`TreeError::OutOfOrder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use ordtree::Tree;
    ///
    /// /// A word and how often it was seen, ordered by the word alone.
    /// struct Row {
    ///     word: String,
    ///     count: usize,
    /// }
    ///
    /// impl Row {
    ///     fn new(word: &str) -> Self {
    ///         Self { word: word.to_string(), count: 1 }
    ///     }
    /// }
    ///
    /// impl PartialEq for Row {
    ///     fn eq(&self, other: &Self) -> bool {
    ///         self.word == other.word
    ///     }
    /// }
    /// impl Eq for Row {}
    /// impl PartialOrd for Row {
    ///     fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    ///         Some(self.cmp(other))
    ///     }
    /// }
    /// impl Ord for Row {
    ///     fn cmp(&self, other: &Self) -> Ordering {
    ///         self.word.cmp(&other.word)
    ///     }
    /// }
    ///
    /// let mut table = Tree::new();
    /// for word in "the cat saw the dog".split_whitespace() {
    ///     let row = Row::new(word);
    ///     match table.get_mut(table.find(&row)) {
    ///         Ok(existing) => existing.count += 1,
    ///         Err(_) => {
    ///             table.insert(row);
    ///         }
    ///     }
    /// }
    ///
    /// let counts: Vec<_> = table.iter().map(|r| (r.word.as_str(), r.count)).collect();
    /// assert_eq!(counts, [("cat", 1), ("dog", 1), ("saw", 1), ("the", 2)]);
    /// ```
    ///
    /// ## Errors
    ///
    /// The same as [`Tree::get`].
    pub fn get_mut(&mut self, cursor: Cursor) -> Result<&mut T, TreeError> {
        let id = cursor.node.ok_or(TreeError::EndCursor)?;
        self.arena_mut()
            .get_mut(id)
            .map(|node| &mut node.value)
            .ok_or(TreeError::StaleCursor)
    }

    /// A cursor at the element following the one under `cursor`, or the end cursor if `cursor` is
    /// at the largest element.
    ///
    /// ## Errors
    ///
    /// [`TreeError::EndCursor`] when `cursor` is the end cursor and [`TreeError::StaleCursor`] when
    /// its element has been removed.
    pub fn successor(&self, cursor: Cursor) -> Result<Cursor, TreeError> {
        let id = self.resolve(cursor)?.ok_or(TreeError::EndCursor)?;
        Ok(Cursor::new(self.successor_of(id)))
    }

    /// A cursor at the element preceding the one under `cursor`. That is the end cursor when
    /// `cursor` is at the smallest element, and the largest element when `cursor` is the end
    /// cursor (the end cursor again if the tree is empty).
    ///
    /// ## Errors
    ///
    /// [`TreeError::StaleCursor`] when the element under `cursor` has been removed.
    pub fn predecessor(&self, cursor: Cursor) -> Result<Cursor, TreeError> {
        match self.resolve(cursor)? {
            Some(id) => Ok(Cursor::new(self.predecessor_of(id))),
            None => Ok(Cursor::new(self.root().map(|root| self.rightmost(root)))),
        }
    }

    /// The live node under `cursor`, `None` for the end cursor.
    fn resolve(&self, cursor: Cursor) -> Result<Option<NodeId>, TreeError> {
        match cursor.node {
            Some(id) if self.arena().get(id).is_none() => Err(TreeError::StaleCursor),
            node => Ok(node),
        }
    }
}
