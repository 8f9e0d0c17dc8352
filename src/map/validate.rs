use thiserror::Error;

use super::{Node, height};

/// An invariant of the AVL tree that does not hold
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("key at in-order position {position} is not greater than the key before it")]
    Unordered {
        position: usize,
    },

    #[error("node at depth {depth} has balance factor {balance_factor}")]
    Unbalanced {
        depth: usize,
        balance_factor: isize,
    },

    #[error("node at depth {depth} caches height {cached} but its subtree has height {actual}")]
    StaleHeight {
        depth: usize,
        cached: usize,
        actual: usize,
    },

    #[error("tree reports {len} entries but contains {nodes} nodes")]
    LenMismatch {
        len: usize,
        nodes: usize,
    },
}

pub(crate) fn validate<K: Ord, V>(root: Option<&Node<K, V>>, len: usize) -> Result<(), InvariantError> {
    let nodes = check_shape(root, 0)?;
    if nodes != len {
        return Err(InvariantError::LenMismatch {len, nodes});
    }

    check_order(root)
}

/// Checks the cached height and balance factor of every node, returning the number of nodes
fn check_shape<K, V>(node: Option<&Node<K, V>>, depth: usize) -> Result<usize, InvariantError> {
    let node = match node {
        Some(node) => node,
        None => return Ok(0),
    };

    let left_nodes = check_shape(node.left(), depth + 1)?;
    let right_nodes = check_shape(node.right(), depth + 1)?;

    // Children were checked first, so their cached heights can be trusted here
    let actual = 1 + height(node.left()).max(height(node.right()));
    if node.height() != actual {
        return Err(InvariantError::StaleHeight {depth, cached: node.height(), actual});
    }

    let balance_factor = node.balance_factor();
    if balance_factor.abs() > 1 {
        return Err(InvariantError::Unbalanced {depth, balance_factor});
    }

    Ok(1 + left_nodes + right_nodes)
}

/// Checks that the in-order sequence of keys is strictly ascending
fn check_order<K: Ord, V>(root: Option<&Node<K, V>>) -> Result<(), InvariantError> {
    fn walk<'a, K, V>(node: Option<&'a Node<K, V>>, keys: &mut Vec<&'a K>) {
        if let Some(node) = node {
            walk(node.left(), keys);
            keys.push(node.key());
            walk(node.right(), keys);
        }
    }

    let mut keys = Vec::new();
    walk(root, &mut keys);

    match keys.windows(2).position(|pair| pair[0] >= pair[1]) {
        Some(position) => Err(InvariantError::Unordered {position: position + 1}),
        None => Ok(()),
    }
}
