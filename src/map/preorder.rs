use std::iter::FusedIterator;

use super::Node;

/// Iterator over the entries of an `AVLMap`, visiting each node before its subtrees
#[derive(Debug, Clone)]
pub struct IterPreorder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> IterPreorder<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, K, V> Iterator for IterPreorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so the left subtree comes out first
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;

        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for IterPreorder<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterPreorder<'a, K, V> {}
