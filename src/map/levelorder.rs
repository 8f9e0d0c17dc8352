use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::Node;

/// Breadth-first iterator over the nodes of an `AVLMap`
///
/// Yields `(depth, node)` pairs, the root being at depth 0. Nodes at the same depth are yielded
/// from left to right.
#[derive(Debug, Clone)]
pub struct IterLevelorder<'a, K, V> {
    queue: VecDeque<(usize, &'a Node<K, V>)>,
    remaining: usize,
}

impl<'a, K, V> IterLevelorder<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        Self {
            queue: root.map(|root| (0, root)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, K, V> Iterator for IterLevelorder<'a, K, V> {
    type Item = (usize, &'a Node<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.queue.pop_front()?;
        self.queue.extend(node.left().map(|left| (depth + 1, left)));
        self.queue.extend(node.right().map(|right| (depth + 1, right)));
        self.remaining -= 1;

        Some((depth, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for IterLevelorder<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterLevelorder<'a, K, V> {}
