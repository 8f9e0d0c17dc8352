use std::collections::BTreeSet;

use proptest::prelude::*;

use avl::{AVLMap, AVLSet, balance_factor, height};

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Remove(i16),
}

fn op() -> impl Strategy<Value = Op> {
    // A narrow key range so removals and duplicate inserts actually hit existing keys
    prop_oneof![
        3 => (-200i16..200).prop_map(Op::Insert),
        2 => (-200i16..200).prop_map(Op::Remove),
    ]
}

fn apply(set: &mut AVLSet<i16>, expected: &mut BTreeSet<i16>, op: &Op) {
    match *op {
        Op::Insert(key) => assert_eq!(set.insert(key), expected.insert(key)),
        Op::Remove(key) => assert_eq!(set.remove(&key), expected.remove(&key)),
    }
}

/// Checks the height and balance of every node through the public node API
fn check_node(node: Option<avl::set::Node<'_, i16>>) -> Result<(), TestCaseError> {
    let node = match node {
        Some(node) => node,
        None => return Ok(()),
    };

    let left = node.left().map_or(0, |left| left.height());
    let right = node.right().map_or(0, |right| right.height());
    prop_assert_eq!(node.height(), 1 + left.max(right), "stale height");
    prop_assert!(node.balance_factor().abs() <= 1, "unbalanced node");

    check_node(node.left())?;
    check_node(node.right())
}

proptest! {
    #[test]
    fn invariants_hold_after_every_operation(ops in proptest::collection::vec(op(), 0..400)) {
        let mut set = AVLSet::new();
        let mut expected = BTreeSet::new();

        for op in &ops {
            apply(&mut set, &mut expected, op);

            prop_assert_eq!(set.validate(), Ok(()));
            prop_assert_eq!(set.len(), expected.len());
        }

        check_node(set.root())?;
        prop_assert!(set.iter_inorder().eq(expected.iter()), "in-order traversal differs");
    }

    #[test]
    fn inorder_is_strictly_ascending(keys in proptest::collection::vec(any::<i32>(), 0..300)) {
        let set: AVLSet<_> = keys.iter().copied().collect();
        let values = set.inorder();

        prop_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(values.len(), keys.iter().collect::<BTreeSet<_>>().len());
    }

    #[test]
    fn height_is_logarithmic(keys in proptest::collection::vec(any::<u16>(), 1..1000)) {
        let set: AVLSet<_> = keys.into_iter().collect();

        // An AVL tree with n nodes has height < 1.4405 * log2(n + 2) - 0.3277
        let bound = 1.45 * ((set.len() + 2) as f64).log2();
        prop_assert!((set.height() as f64) < bound, "height {} for {} nodes", set.height(), set.len());
    }

    #[test]
    fn insert_is_idempotent(
        keys in proptest::collection::vec(-100i32..100, 0..100),
        key in -100i32..100,
    ) {
        let mut once: AVLSet<_> = keys.iter().copied().collect();
        once.insert(key);

        let mut twice = once.clone();
        prop_assert!(!twice.insert(key));

        prop_assert_eq!(once.inorder(), twice.inorder());
        prop_assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn size_changes_by_one(
        keys in proptest::collection::vec(-100i32..100, 0..100),
        key in -100i32..100,
    ) {
        let mut set: AVLSet<_> = keys.iter().copied().collect();
        let len = set.len();

        if set.contains(&key) {
            prop_assert!(set.remove(&key));
            prop_assert_eq!(set.len(), len - 1);
            // Removing again is a no-op
            prop_assert!(!set.remove(&key));
            prop_assert_eq!(set.len(), len - 1);
        } else {
            prop_assert!(set.insert(key));
            prop_assert_eq!(set.len(), len + 1);
        }
    }

    #[test]
    fn insert_then_remove_round_trips(
        keys in proptest::collection::vec(-100i32..100, 0..100),
        key in -100i32..100,
    ) {
        let mut set: AVLSet<_> = keys.iter().copied().collect();
        prop_assume!(!set.contains(&key));
        let before = set.inorder();

        set.insert(key);
        set.remove(&key);

        prop_assert_eq!(set.inorder(), before);
        prop_assert_eq!(set.validate(), Ok(()));
    }

    #[test]
    fn removing_absent_key_keeps_structure(
        keys in proptest::collection::vec(0i32..1000, 0..200),
        key in 1000i32..2000,
    ) {
        let mut set: AVLSet<_> = keys.iter().copied().collect();
        let preorder: Vec<_> = set.iter_preorder().copied().collect();

        prop_assert!(!set.remove(&key));

        // Pre-order fixes the shape of a BST, so an identical sequence means an identical tree
        let after: Vec<_> = set.iter_preorder().copied().collect();
        prop_assert_eq!(after, preorder);
    }

    #[test]
    fn map_nodes_are_balanced(keys in proptest::collection::vec(any::<u8>(), 0..300)) {
        let map: AVLMap<_, _> = keys.iter().map(|&key| (key, ())).collect();

        let mut visited = 0;
        let mut stack: Vec<_> = map.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            visited += 1;
            prop_assert_eq!(node.height(), 1 + height(node.left()).max(height(node.right())));
            prop_assert_eq!(balance_factor(Some(node)), node.balance_factor());
            prop_assert!(balance_factor(Some(node)).abs() <= 1);

            stack.extend(node.left());
            stack.extend(node.right());
        }
        prop_assert_eq!(visited, map.len());
    }
}
