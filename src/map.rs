use std::cmp::Ordering;
use std::borrow::Borrow;
use std::iter::FromIterator;

mod node;
mod preorder;
mod inorder;
mod postorder;
mod levelorder;
mod display;
mod validate;

pub use node::*;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;
pub use levelorder::*;
pub use display::*;
pub use validate::InvariantError;

use node::Link;

/// A self-balancing binary search tree (AVL tree) mapping keys to values
///
/// BST properties: For each node with key `k`:
/// - The key of each node in the left subtree is less than `k`
/// - The key of each node in the right subtree is greater than `k`
///
/// AVL property: for each node, the heights of its left and right subtrees differ by at most one.
/// Insertion and removal restore this property on the way back up from the modified node, so
/// every operation runs in `O(log n)`.
///
/// Duplicate keys are not allowed. Inserting a key that already exists replaces its value but keeps
/// the key that is already stored.
#[derive(Debug, Clone)]
pub struct AVLMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for AVLMap<K, V> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<K: Ord + PartialEq, V: PartialEq> PartialEq for AVLMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees with the same entries may still be shaped differently depending on the order
        // of insertions and removals. In-order traversal produces the entries in sorted order
        // regardless of shape, so that is what gets compared.

        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().zip(other.iter_inorder()).all(|((k1, v1), (k2, v2))| {
            k1.eq(k2) && v1.eq(v2)
        })
    }
}

impl<K: Ord + Eq, V: Eq> Eq for AVLMap<K, V> {}

impl<K: Ord, V> AVLMap<K, V> {
    /// Creates an empty `AVLMap`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    /// let mut map: AVLMap<&str, i32> = AVLMap::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries in the map (i.e. the number of nodes in the tree)
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// let mut map = AVLMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Returns the height of the tree, or 0 if the tree is empty
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// // Sorted insertions would produce a linked list in an unbalanced tree
    /// let map: AVLMap<_, _> = (0..1023).map(|i| (i, i)).collect();
    /// assert_eq!(map.height(), 10);
    /// ```
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// let mut map = AVLMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Returns a reference to the value corresponding to the given key, or `None` if no such key
    /// exists in the tree
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// let mut map = AVLMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.get_entry(key).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value corresponding to the given key, or `None` if no
    /// such key exists in the tree
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// let mut map = AVLMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// assert_eq!(map.get_mut(&2), None);
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current.take() {
            match key.cmp(node.key().borrow()) {
                Ordering::Less => current = node.left_mut(),
                Ordering::Greater => current = node.right_mut(),
                Ordering::Equal => return Some(node.value_mut()),
            }
        }

        None
    }

    /// Returns the key-value pair corresponding to the given key, or `None` if no such key exists
    /// in the tree
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// let mut map = AVLMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get_entry(&1), Some((&1, &"a")));
    /// assert_eq!(map.get_entry(&2), None);
    /// ```
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(node.key().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some((node.key(), node.value())),
            }
        }

        None
    }

    /// Inserts a new value into the tree, rebalancing as needed
    ///
    /// Returns the previous value if the key was already present in an existing node or `None` if
    /// a new node was inserted. When the key was already present, the stored key is not updated.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// let mut map = AVLMap::new();
    /// # assert!(map.is_empty());
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert!(!map.is_empty());
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map.get(&37), Some(&"c"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, prev_value) = Node::insert(self.root.take(), key, value);
        self.root = Some(root);

        if prev_value.is_none() {
            self.len += 1;
        }

        prev_value
    }

    /// Removes a key from the map, returning the value at the key if the key was previously in the
    /// map
    ///
    /// Removing a key that is not in the map leaves the tree untouched.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// let mut map = AVLMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if the key was previously in
    /// the map
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// let mut map = AVLMap::new();
    /// map.insert(String::from("a"), 1);
    /// assert_eq!(map.remove_entry("a"), Some((String::from("a"), 1)));
    /// assert_eq!(map.remove_entry("a"), None);
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let (root, removed) = Node::remove(self.root.take(), key);
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
        }

        removed
    }

    /// Clears the map, removing all elements
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// let mut map = AVLMap::new();
    /// map.insert(1, "a");
    /// assert!(!map.is_empty());
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns the keys of the map in ascending order
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// let map: AVLMap<_, _> = vec![(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    /// assert_eq!(map.inorder(), vec![1, 2, 3]);
    /// ```
    pub fn inorder(&self) -> Vec<K>
        where K: Clone,
    {
        self.iter_inorder().map(|(key, _)| key.clone()).collect()
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<K, V> {
        IterPreorder::new(self.root(), self.len)
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<K, V> {
        IterInorder::new(self.root(), self.len)
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<K, V> {
        IterPostorder::new(self.root(), self.len)
    }

    /// Performs a level-order (breadth-first) traversal of the tree
    ///
    /// Each node is yielded along with its depth. The root is at depth 0.
    pub fn iter_levelorder(&self) -> IterLevelorder<K, V> {
        IterLevelorder::new(self.root(), self.len)
    }

    /// Returns an adapter that prints the tree one level per line, along with the height and
    /// balance factor of every node
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// let map: AVLMap<_, _> = vec![(2, ()), (1, ()), (3, ())].into_iter().collect();
    /// assert_eq!(
    ///     map.display_levels().to_string(),
    ///     "Level 0: 2 (h=2, bf=0)\nLevel 1: 1 (h=1, bf=0)  3 (h=1, bf=0)\n",
    /// );
    /// ```
    pub fn display_levels(&self) -> DisplayLevels<K, V> {
        DisplayLevels::new(self.root(), self.len)
    }

    /// Checks every invariant of the tree, returning the first violation found
    ///
    /// This walks the entire tree, so it takes `O(n)` time. The public operations never leave the
    /// tree in an invalid state, so this is mostly useful in tests and debug assertions.
    pub fn validate(&self) -> Result<(), InvariantError> {
        validate::validate(self.root(), self.len)
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// Note that the root can be **any** node inserted into the tree. It changes as the tree
    /// rotates to stay balanced. For a guaranteed ordering, use the various iteration methods.
    ///
    /// This is a low-level API meant to be used for implementing traversals.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLMap;
    ///
    /// let mut map = AVLMap::new();
    /// for key in 1..=3 {
    ///     map.insert(key, ());
    /// }
    /// // Inserting 3 rotated the tree to the left
    /// assert_eq!(map.root().map(|node| *node.key()), Some(2));
    /// ```
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }
}

impl<K: Ord, V> Extend<(K, V)> for AVLMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AVLMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
