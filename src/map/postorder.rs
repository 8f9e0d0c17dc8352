use std::ptr;
use std::iter::FusedIterator;

use super::Node;

/// Iterator over the entries of an `AVLMap`, visiting each node after both of its subtrees
///
/// This is the order in which the recursive insert and remove operations fix up heights.
#[derive(Debug, Clone)]
pub struct IterPostorder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> IterPostorder<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.descend(root);
        iter
    }

    /// Walks down the left spine starting at `current`, leaving each node on the stack just above
    /// its right child
    fn descend(&mut self, mut current: Option<&'a Node<K, V>>) {
        while let Some(node) = current {
            self.stack.extend(node.right());
            self.stack.push(node);
            current = node.left();
        }
    }

    /// Returns true if the top of the stack is exactly `node` (compared by address)
    fn is_top(&self, node: &Node<K, V>) -> bool {
        self.stack.last().map_or(false, |&top| ptr::eq(top, node))
    }
}

impl<'a, K, V> Iterator for IterPostorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node.right() {
                // The right subtree has not been visited yet: revisit `node` once it has been
                Some(right) if self.is_top(right) => {
                    self.stack.pop();
                    self.stack.push(node);
                    self.descend(Some(right));
                },

                _ => {
                    self.remaining -= 1;
                    return Some((node.key(), node.value()));
                },
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for IterPostorder<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterPostorder<'a, K, V> {}
