//! Writing a [`Tree`]'s elements out as text.

use std::fmt::Display;
use std::io::{self, Write};

use crate::iter::PreOrder;
use crate::tree::Tree;

impl<T> Tree<T>
where
    T: Display,
{
    /// Writes the elements in ascending order, one per line. An empty tree writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [2, 3, 1].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.write_sorted(&mut out)?;
    ///
    /// assert_eq!(out, b"1\n2\n3\n");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_sorted<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        for value in self {
            writeln!(out, "{}", value)?;
        }
        Ok(())
    }

    /// Writes the shape of the tree for debugging: each element on its own line, root first,
    /// followed by its left then right subtree, indented one tab per level. An empty tree writes
    /// `Empty tree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [2, 3, 1].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.write_structure(&mut out)?;
    ///
    /// assert_eq!(out, b"2\n\t1\n\t3\n");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_structure<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        if self.is_empty() {
            return writeln!(out, "Empty tree");
        }

        for (depth, value) in PreOrder::new(self) {
            for _ in 0..depth {
                out.write_all(b"\t")?;
            }
            writeln!(out, "{}", value)?;
        }
        Ok(())
    }
}
