use std::fmt;

use super::{Node, IterLevelorder};

/// Prints a tree one level per line, along with the height and balance factor of each node
///
/// ```text
/// Level 0: 30 (h=3, bf=0)
/// Level 1: 20 (h=2, bf=0)  40 (h=2, bf=-1)
/// Level 2: 10 (h=1, bf=0)  25 (h=1, bf=0)  50 (h=1, bf=0)
/// ```
///
/// An empty tree prints `<empty tree>`. Only the keys are printed.
#[derive(Debug)]
pub struct DisplayLevels<'a, K, V> {
    root: Option<&'a Node<K, V>>,
    len: usize,
}

impl<'a, K, V> DisplayLevels<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        Self {root, len}
    }
}

impl<'a, K: fmt::Display, V> fmt::Display for DisplayLevels<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root.is_none() {
            return writeln!(f, "<empty tree>");
        }

        let mut current_depth = None;
        for (depth, node) in IterLevelorder::new(self.root, self.len) {
            if current_depth != Some(depth) {
                if current_depth.is_some() {
                    writeln!(f)?;
                }
                write!(f, "Level {}: ", depth)?;
                current_depth = Some(depth);
            } else {
                write!(f, "  ")?;
            }

            write!(f, "{} (h={}, bf={})", node.key(), node.height(), node.balance_factor())?;
        }

        writeln!(f)
    }
}
