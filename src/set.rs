mod node;
mod iter;

pub use node::*;
pub use iter::*;

use std::fmt;
use std::borrow::Borrow;
use std::iter::FromIterator;

use crate::map::{AVLMap, DisplayLevels, InvariantError};

/// A self-balancing binary search tree (AVL tree) of unique values
///
/// BST properties: For each node with value `v`:
/// - The value of each node in the left subtree is less than `v`
/// - The value of each node in the right subtree is greater than `v`
///
/// AVL property: for each node, the heights of its two subtrees differ by at most one.
///
/// Duplicate values are not allowed. Inserting a value that already exists in the set does not
/// modify the set.
#[derive(Clone)]
pub struct AVLSet<T> {
    items: AVLMap<T, ()>,
}

impl<T> Default for AVLSet<T> {
    fn default() -> Self {
        Self {
            items: Default::default(),
        }
    }
}

impl<T> fmt::Debug for AVLSet<T>
    where T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter_inorder()).finish()
    }
}

impl<T: Ord + PartialEq> PartialEq for AVLSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.eq(&other.items)
    }
}

impl<T: Ord + Eq> Eq for AVLSet<T> {}

impl<T: Ord> AVLSet<T> {
    /// Creates an empty `AVLSet`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLSet;
    /// let mut set: AVLSet<&str> = AVLSet::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of items in the set (i.e. the number of nodes in the tree)
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLSet;
    ///
    /// let mut set = AVLSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the set is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the height of the tree, or 0 if the set is empty
    pub fn height(&self) -> usize {
        self.items.height()
    }

    /// Returns `true` if the set contains the specified value.
    ///
    /// The value may be any borrowed form of the set's value type, but the ordering on the borrowed
    /// form must match the ordering on the value type.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLSet;
    ///
    /// let mut set = AVLSet::new();
    /// # assert!(!set.contains(&1));
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.items.contains_key(value)
    }

    /// Returns a reference to the value in the set, or `None` if no such value exists
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLSet;
    ///
    /// let mut set = AVLSet::new();
    /// set.insert(String::from("abc"));
    /// assert_eq!(set.get("abc"), Some(&String::from("abc")));
    /// assert_eq!(set.get("def"), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.items.get_entry(value).map(|(value, ())| value)
    }

    /// Inserts a new value into the set, rebalancing as needed
    ///
    /// If the set did not have this value present, `true` is returned.
    ///
    /// If the set did have this value present, `false` is returned, and neither the stored value
    /// nor the shape of the tree is updated.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLSet;
    ///
    /// let mut set = AVLSet::new();
    /// # assert!(set.is_empty());
    /// assert!(set.insert(37));
    /// assert!(!set.is_empty());
    ///
    /// assert!(!set.insert(37));
    /// assert!(set.contains(&37));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.items.insert(value, ()).is_none()
    }

    /// Removes a value from the set, rebalancing as needed. Returns whether the value was present
    /// in the set.
    ///
    /// Removing a value that is not in the set leaves the tree untouched.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLSet;
    ///
    /// let mut set = AVLSet::new();
    /// set.insert(String::from("abc"));
    /// assert!(set.remove("abc"));
    /// assert!(!set.remove("def"));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the value in the set, if any, that is equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLSet;
    ///
    /// let mut set = AVLSet::new();
    /// set.insert(String::from("abc"));
    /// assert_eq!(set.take("abc"), Some(String::from("abc")));
    /// assert_eq!(set.take("def"), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.items.remove_entry(value).map(|(value, ())| value)
    }

    /// Clears the set, removing all elements
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the values of the set in ascending order
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLSet;
    ///
    /// let set: AVLSet<_> = vec![10, 20, 30, 40, 50, 25].into_iter().collect();
    /// assert_eq!(set.inorder(), vec![10, 20, 25, 30, 40, 50]);
    /// ```
    pub fn inorder(&self) -> Vec<T>
        where T: Clone,
    {
        self.items.inorder()
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<T> {
        IterPreorder::new(&self.items)
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<T> {
        IterInorder::new(&self.items)
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<T> {
        IterPostorder::new(&self.items)
    }

    /// Performs a level-order (breadth-first) traversal of the tree
    pub fn iter_levelorder(&self) -> IterLevelorder<T> {
        IterLevelorder::new(&self.items)
    }

    /// Returns an adapter that prints the tree one level per line, along with the height and
    /// balance factor of every node
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AVLSet;
    ///
    /// let set: AVLSet<_> = vec![1, 2].into_iter().collect();
    /// assert_eq!(
    ///     set.display_levels().to_string(),
    ///     "Level 0: 1 (h=2, bf=-1)\nLevel 1: 2 (h=1, bf=0)\n",
    /// );
    /// ```
    pub fn display_levels(&self) -> DisplayLevels<T, ()> {
        self.items.display_levels()
    }

    /// Checks every invariant of the tree, returning the first violation found
    pub fn validate(&self) -> Result<(), InvariantError> {
        self.items.validate()
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// Note that the root can be **any** value inserted into the set. It changes as the tree
    /// rotates to stay balanced. For a guaranteed ordering, use the various iteration methods.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{AVLSet, set::Node};
    ///
    /// #[derive(Debug, PartialOrd, Ord, PartialEq, Eq)]
    /// struct Person {
    ///     pub name: String,
    /// }
    ///
    /// // Custom traversal through the values in the set
    /// fn find_name<'a>(node: Option<Node<'a, Person>>, target_name: &str) -> Option<Node<'a, Person>> {
    ///     let node = node?;
    ///     if node.value().name == target_name {
    ///         Some(node)
    ///     } else {
    ///         find_name(node.left(), target_name)
    ///             .or_else(|| find_name(node.right(), target_name))
    ///     }
    /// }
    ///
    /// let mut set = AVLSet::new();
    /// set.insert(Person {name: String::from("Manish")});
    /// set.insert(Person {name: String::from("Jane")});
    ///
    /// assert!(find_name(set.root(), "Jane").is_some());
    /// assert!(find_name(set.root(), "Bob").is_none());
    /// ```
    pub fn root(&self) -> Option<Node<T>> {
        self.items.root().map(Node::new)
    }
}

impl<T: Ord> Extend<T> for AVLSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(|value| (value, ())))
    }
}

impl<T: Ord> FromIterator<T> for AVLSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|value| (value, ())).collect(),
        }
    }
}
