use std::fmt;

use crate::map;

/// A single node of the AVL tree backing an `AVLSet`
#[derive(PartialEq, Eq)]
pub struct Node<'a, T> {
    inner: &'a map::Node<T, ()>,
}

impl<'a, T> Clone for Node<'a, T> {
    fn clone(&self) -> Self {
        Self {..*self}
    }
}

impl<'a, T> Copy for Node<'a, T> {}

impl<'a, T> fmt::Debug for Node<'a, T>
    where T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", self.value())
            .field("height", &self.height())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<'a, T> Node<'a, T> {
    pub(super) fn new(inner: &'a map::Node<T, ()>) -> Self {
        Self {inner}
    }

    /// Returns the value of this node
    pub fn value(&self) -> &'a T {
        self.inner.key()
    }

    /// Returns the cached height of the subtree rooted at this node
    pub fn height(&self) -> usize {
        self.inner.height()
    }

    /// Returns the height of the left subtree minus the height of the right subtree
    pub fn balance_factor(&self) -> isize {
        self.inner.balance_factor()
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.inner.has_left()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.inner.has_right()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<Self> {
        self.inner.left().map(Self::new)
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<Self> {
        self.inner.right().map(Self::new)
    }
}
