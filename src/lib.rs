//! Self-balancing binary search trees (AVL trees)
//!
//! [`AVLMap`] maps keys to values and [`AVLSet`] stores unique values. Both keep the heights of the
//! two subtrees of every node within one of each other by rotating on the way back up from every
//! insertion and removal, so lookups, insertions and removals all take `O(log n)` time.
//!
//! ```
//! use avl::AVLSet;
//!
//! let mut set = AVLSet::new();
//! for value in [10, 20, 30, 40, 50, 25].iter().copied() {
//!     set.insert(value);
//! }
//! assert_eq!(set.inorder(), vec![10, 20, 25, 30, 40, 50]);
//! assert_eq!(set.root().map(|node| *node.value()), Some(30));
//!
//! set.remove(&50);
//! assert_eq!(set.inorder(), vec![10, 20, 25, 30, 40]);
//! ```

#![allow(clippy::upper_case_acronyms)]

pub mod map;
pub mod set;

pub use map::{AVLMap, InvariantError, height, balance_factor};
pub use set::AVLSet;

#[macro_export(local_inner_macros)]
macro_rules! avlmap {
    // trailing comma case
    ($($key:expr => $value:expr,)+) => (avlmap!($($key => $value),+));

    ( $($key:expr => $value:expr),* ) => {
        {
            let mut _map = $crate::AVLMap::new();
            $(
                let _ = _map.insert($key, $value);
            )*
            _map
        }
    };
}

#[macro_export(local_inner_macros)]
macro_rules! avlset {
    ($($key:expr,)+) => { avlset!($($key),+) };
    ($($key:expr),*) => {
        {
            let mut _set = $crate::AVLSet::new();
            $(
                let _ = _set.insert($key);
            )*
            _set
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn avlmap_macro() {
        let map = avlmap! {
            1 => 2,
            3 => 4,
            2 => 3, // trailing comma
        };

        let pairs: Vec<(_, _)> = map.iter_inorder()
            .map(|(&key, &value)| (key, value))
            .collect();
        assert_eq!(&pairs, &[(1, 2), (2, 3), (3, 4)]);

        // Later entries replace earlier ones
        let map = avlmap![3 => 4, 3 => 5];
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&3), Some(&5));

        // Zero items
        let map = avlmap!();

        let pairs: Vec<(i32, i32)> = map.iter_inorder()
            .map(|(&key, &value)| (key, value))
            .collect();
        assert_eq!(&pairs, &[]);
    }

    #[test]
    fn avlset_macro() {
        let set = avlset! {
            1,
            3,
            2, // trailing comma
        };
        assert_eq!(set.inorder(), vec![1, 2, 3]);

        // No trailing comma, with a duplicate
        let set = avlset![99, 99];
        assert_eq!(set.inorder(), vec![99]);

        // Zero items
        let set = avlset!();

        let items: Vec<i32> = set.iter_inorder().copied().collect();
        assert_eq!(&items, &[]);
    }
}
