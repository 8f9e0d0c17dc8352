use std::mem;
use std::cmp::Ordering;
use std::borrow::Borrow;

use tracing::trace;

/// An owned link to a subtree, or `None` for the empty subtree
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single node of the AVL tree
///
/// Each node exclusively owns its left and right subtrees and caches the height of the subtree
/// rooted at it. A leaf has height 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) height: usize,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
}

/// Returns the height of the given subtree, or 0 if the subtree is empty
///
/// This never walks the tree. It reads the height cached in the node.
///
/// # Examples
///
/// ```
/// use avl::{AVLMap, height};
///
/// let mut map = AVLMap::new();
/// assert_eq!(height(map.root()), 0);
/// map.insert(1, "a");
/// assert_eq!(height(map.root()), 1);
/// ```
pub fn height<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |node| node.height)
}

/// Returns the balance factor (left height minus right height) of the given subtree, or 0 if the
/// subtree is empty
///
/// # Examples
///
/// ```
/// use avl::{AVLMap, balance_factor};
///
/// let mut map = AVLMap::new();
/// map.insert(2, ());
/// map.insert(1, ());
/// assert_eq!(balance_factor(map.root()), 1);
/// ```
pub fn balance_factor<K, V>(node: Option<&Node<K, V>>) -> isize {
    node.map_or(0, Node::balance_factor)
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Returns the cached height of the subtree rooted at this node
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the height of the left subtree minus the height of the right subtree
    ///
    /// Always in `-1..=1` once a public operation on the tree has completed.
    pub fn balance_factor(&self) -> isize {
        height(self.left()) as isize - height(self.right()) as isize
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// Recomputes the cached height from the heights of the children
    ///
    /// Must be called whenever the children of this node change, before its balance factor is read
    fn update_height(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
    }

    /// Promotes the left child into the position of this node
    ///
    /// ```text
    ///       y            x
    ///      / \          / \
    ///     x   C  ==>   A   y
    ///    / \              / \
    ///   A   B            B   C
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut x = match self.left.take() {
            Some(x) => x,
            None => {
                debug_assert!(false, "bug: right rotation without a left child");
                return self;
            },
        };

        self.left = x.right.take();
        // `self` is now below `x`, so its height must be fixed first
        self.update_height();
        x.right = Some(self);
        x.update_height();

        x
    }

    /// Promotes the right child into the position of this node
    ///
    /// ```text
    ///     x                y
    ///    / \              / \
    ///   A   y    ==>     x   C
    ///      / \          / \
    ///     B   C        A   B
    /// ```
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut y = match self.right.take() {
            Some(y) => y,
            None => {
                debug_assert!(false, "bug: left rotation without a right child");
                return self;
            },
        };

        self.right = y.left.take();
        self.update_height();
        y.left = Some(self);
        y.update_height();

        y
    }

    /// Updates the height of this node and applies at most one (single or double) rotation so
    /// that its balance factor is back in `-1..=1`
    ///
    /// Both subtrees must already be balanced and have correct heights.
    fn rebalance(mut self: Box<Self>) -> Box<Self> {
        self.update_height();

        let balance = self.balance_factor();
        if balance > 1 {
            if balance_factor(self.left()) >= 0 {
                trace!(case = "left-left", height = self.height, "rotating subtree");
            } else {
                trace!(case = "left-right", height = self.height, "rotating subtree");
                self.left = self.left.take().map(Self::rotate_left);
            }

            self.rotate_right()

        } else if balance < -1 {
            if balance_factor(self.right()) <= 0 {
                trace!(case = "right-right", height = self.height, "rotating subtree");
            } else {
                trace!(case = "right-left", height = self.height, "rotating subtree");
                self.right = self.right.take().map(Self::rotate_right);
            }

            self.rotate_left()

        } else {
            self
        }
    }

    /// Removes the minimum node of the given subtree, rebalancing every node on the way back up
    ///
    /// Returns the remaining subtree and the detached node.
    fn remove_min(mut node: Box<Self>) -> (Link<K, V>, Box<Self>) {
        match node.left.take() {
            Some(left) => {
                let (left, min) = Self::remove_min(left);
                node.left = left;
                (Some(node.rebalance()), min)
            },

            // The minimum has no left child, so it is replaced by its right subtree
            None => {
                let right = node.right.take();
                node.height = 1;
                (right, node)
            },
        }
    }
}

impl<K: Ord, V> Node<K, V> {
    /// Inserts a key into the given subtree, returning the new root of the subtree
    ///
    /// If the key is already present, the tree structure and the stored key are left untouched and
    /// only the value is replaced. The previous value is returned in that case.
    pub(crate) fn insert(node: Link<K, V>, key: K, value: V) -> (Box<Self>, Option<V>) {
        let mut node = match node {
            Some(node) => node,
            None => return (Box::new(Self::new(key, value)), None),
        };

        let prev_value = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, prev_value) = Self::insert(node.left.take(), key, value);
                node.left = Some(left);
                prev_value
            },

            Ordering::Greater => {
                let (right, prev_value) = Self::insert(node.right.take(), key, value);
                node.right = Some(right);
                prev_value
            },

            Ordering::Equal => {
                let prev_value = mem::replace(&mut node.value, value);
                return (node, Some(prev_value));
            },
        };

        (node.rebalance(), prev_value)
    }

    /// Removes a key from the given subtree, returning the new root of the subtree (if any) and the
    /// removed entry
    ///
    /// Removing a key that is not present returns the subtree unchanged.
    pub(crate) fn remove<Q>(node: Link<K, V>, key: &Q) -> (Link<K, V>, Option<(K, V)>)
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut node = match node {
            Some(node) => node,
            None => return (None, None),
        };

        let removed = match key.cmp(node.key.borrow()) {
            Ordering::Less => {
                let (left, removed) = Self::remove(node.left.take(), key);
                node.left = left;
                removed
            },

            Ordering::Greater => {
                let (right, removed) = Self::remove(node.right.take(), key);
                node.right = right;
                removed
            },

            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => return (right, Some(node.into_entry())),
                (left, None) => return (left, Some(node.into_entry())),

                // Two children: the in-order successor takes the place of this node's entry
                (Some(left), Some(right)) => {
                    let (right, successor) = Self::remove_min(right);
                    node.left = Some(left);
                    node.right = right;

                    let (key, value) = successor.into_entry();
                    let removed_key = mem::replace(&mut node.key, key);
                    let removed_value = mem::replace(&mut node.value, value);
                    Some((removed_key, removed_value))
                },
            },
        };

        (Some(node.rebalance()), removed)
    }
}
