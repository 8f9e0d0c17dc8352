use std::iter::FusedIterator;

use crate::map;

/// Defines a set iterator that wraps the map iterator of the same traversal order and drops the
/// `()` values
macro_rules! set_iter {
    ($(#[$attr:meta])* $name:ident, $iter_method:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone)]
        pub struct $name<'a, T> {
            inner: map::$name<'a, T, ()>,
        }

        impl<'a, T: Ord> $name<'a, T> {
            pub(super) fn new(map: &'a map::AVLMap<T, ()>) -> Self {
                Self {
                    inner: map.$iter_method(),
                }
            }
        }

        impl<'a, T> Iterator for $name<'a, T> {
            type Item = &'a T;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|(value, ())| value)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<'a, T> ExactSizeIterator for $name<'a, T> {}

        impl<'a, T> FusedIterator for $name<'a, T> {}
    };
}

set_iter!(
    /// Iterator over the values of an `AVLSet`, visiting each node before its subtrees
    IterPreorder, iter_preorder
);
set_iter!(
    /// Iterator over the values of an `AVLSet` in ascending order
    IterInorder, iter_inorder
);
set_iter!(
    /// Iterator over the values of an `AVLSet`, visiting each node after both of its subtrees
    IterPostorder, iter_postorder
);

/// Breadth-first iterator over the nodes of an `AVLSet`, yielding `(depth, node)` pairs
#[derive(Debug, Clone)]
pub struct IterLevelorder<'a, T> {
    inner: map::IterLevelorder<'a, T, ()>,
}

impl<'a, T: Ord> IterLevelorder<'a, T> {
    pub(super) fn new(map: &'a map::AVLMap<T, ()>) -> Self {
        Self {
            inner: map.iter_levelorder(),
        }
    }
}

impl<'a, T> Iterator for IterLevelorder<'a, T> {
    type Item = (usize, super::Node<'a, T>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(depth, node)| (depth, super::Node::new(node)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for IterLevelorder<'a, T> {}

impl<'a, T> FusedIterator for IterLevelorder<'a, T> {}
