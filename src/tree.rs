//! An unbalanced BST whose order comes from a [`Comparator`] instead of requiring `K: Ord`.
//!
//! Nothing is ever rotated, so the shape of the tree (and the cost of every operation) depends on
//! the order keys were added in. Keys comparing equal are all kept: a key equal to one already in
//! the tree is placed in that node's right subtree.
//!
//! # Examples
//!
//! ```
//! use cmp_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.min(), None);
//!
//! for key in [18, 4, 32, 5, 1] {
//!     tree.add(key);
//! }
//! assert_eq!(tree.min(), Some(&1));
//! assert_eq!(tree.max(), Some(&32));
//!
//! // Removing reports whether the key was there.
//! assert!(tree.remove(&4));
//! assert!(!tree.remove(&4));
//!
//! let mut sorted = Vec::new();
//! tree.in_order(|key| sorted.push(*key));
//! assert_eq!(sorted, [1, 5, 18, 32]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::comparator::{Comparator, Natural};
use crate::traverse::{self, Order};

/// An owning child slot. Either a node's `left`/`right` or the tree's root.
type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree storing keys of type `K` in the order defined by `C`.
///
/// The comparator is chosen once, at construction, and used for every operation afterwards.
pub struct Tree<K, C = Natural> {
    root: Link<K>,
    comparator: C,
    len: usize,
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree` ordering keys by their [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Drop for Tree<K, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, C> Clone for Tree<K, C>
where
    K: Clone,
    C: Comparator<K> + Clone,
{
    /// Adding the keys again in pre-order puts every key back exactly where it was, so the clone
    /// has the same shape as the original.
    fn clone(&self) -> Self {
        let mut tree = Self::with_comparator(self.comparator.clone());
        self.pre_order(|key| tree.add(key.clone()));
        tree
    }
}

impl<K, C> fmt::Debug for Tree<K, C>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = Vec::with_capacity(self.len);
        self.in_order(|key| keys.push(key));

        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("keys", &keys)
            .finish()
    }
}

impl<K, C> Tree<K, C> {
    /// Generates a new, empty `Tree` that orders its keys with `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.add(1);
    /// tree.add(3);
    /// tree.add(2);
    ///
    /// // Largest first.
    /// assert_eq!(tree.min(), Some(&3));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            len: 0,
        }
    }

    /// The comparator this tree was built with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// How many keys are stored. Keys that compare equal are counted separately.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        // Taking the children off each node before it's dropped keeps `Box`'s drop glue from
        // recursing all the way down a long chain of nodes.
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// The smallest key according to the comparator, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.add(2);
    /// tree.add(1);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&K> {
        self.root.as_deref().map(|root| &root.leftmost().key)
    }

    /// The largest key according to the comparator, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.add(1);
    /// tree.add(2);
    /// assert_eq!(tree.max(), Some(&2));
    /// ```
    pub fn max(&self) -> Option<&K> {
        self.root.as_deref().map(|root| &root.rightmost().key)
    }

    /// Calls `visit` with every key in the tree, in the given [`Order`].
    pub fn traverse<'a>(&'a self, order: Order, visit: impl FnMut(&'a K)) {
        traverse::walk(self.root.as_deref(), order, visit);
    }

    /// Calls `visit` with every key, smallest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 3, 1] {
    ///     tree.add(key);
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.in_order(|key| keys.push(key));
    /// assert_eq!(keys, [&1, &2, &3]);
    /// ```
    pub fn in_order<'a>(&'a self, visit: impl FnMut(&'a K)) {
        self.traverse(Order::InOrder, visit);
    }

    /// Calls `visit` with each node's key before the keys of its left and then right subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 3, 1] {
    ///     tree.add(key);
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.pre_order(|key| keys.push(*key));
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn pre_order<'a>(&'a self, visit: impl FnMut(&'a K)) {
        self.traverse(Order::PreOrder, visit);
    }

    /// Calls `visit` with each node's key after the keys of its left and then right subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 3, 1] {
    ///     tree.add(key);
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.post_order(|key| keys.push(*key));
    /// assert_eq!(keys, [1, 3, 2]);
    /// ```
    pub fn post_order<'a>(&'a self, visit: impl FnMut(&'a K)) {
        self.traverse(Order::PostOrder, visit);
    }
}

impl<K, C> Tree<K, C>
where
    C: Comparator<K>,
{
    /// Adds `key` to the tree as a new leaf. This always succeeds: a key equal to one already
    /// stored is kept as well and goes into the right subtree of the equal node.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    /// tree.add(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, key: K) {
        if self.root.is_none() {
            log::trace!("adding the first key as the root");
        }

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match self.comparator.compare(&key, &node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        *slot = Some(Node::new_boxed(key));
        self.len += 1;
    }

    /// Whether a key comparing equal to `key` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(75);
    ///
    /// assert!(tree.contains(&75));
    /// assert!(!tree.contains(&87));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the stored key comparing equal to `key`. Mostly useful with comparators that only
    /// look at part of a key, see [`by_key`][crate::by_key].
    pub fn get(&self, key: &K) -> Option<&K> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match self.comparator.compare(key, &node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Removes a key comparing equal to `key` from the tree. Returns `false`, leaving the tree
    /// untouched, if there is no such key. If several keys compare equal, only the one closest to
    /// the root is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmp_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [50, 25, 75, 10, 30, 90] {
    ///     tree.add(key);
    /// }
    ///
    /// assert!(tree.remove(&50));
    /// assert!(!tree.remove(&50));
    ///
    /// let mut keys = Vec::new();
    /// tree.in_order(|key| keys.push(*key));
    /// assert_eq!(keys, [10, 25, 30, 75, 90]);
    /// ```
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(slot) = slot_of(&mut self.root, key, &self.comparator) else {
            log::trace!("key to remove is not in the tree");
            return false;
        };
        let Some(mut removed) = slot.take() else {
            return false;
        };

        *slot = match (removed.left.take(), removed.right.take()) {
            (None, None) => {
                log::trace!("removing a leaf");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                log::trace!("removing a node with one child, moving the child up");
                Some(child)
            }
            (Some(left), Some(right)) => {
                log::trace!("removing a node with two children, promoting its successor");
                Some(Node::promote_successor(left, right))
            }
        };

        if cfg!(debug_assertions) {
            if let Some(node) = slot.as_deref() {
                node.assert_children_ordered(&self.comparator);
            }
        }

        self.len -= 1;
        true
    }
}

/// Walks down from `slot` and returns the slot owning the first node comparing equal to `key`.
fn slot_of<'a, K, C>(mut slot: &'a mut Link<K>, key: &K, comparator: &C) -> Option<&'a mut Link<K>>
where
    C: Comparator<K>,
{
    loop {
        let ordering = comparator.compare(key, &slot.as_ref()?.key);
        slot = match ordering {
            Ordering::Less => &mut slot.as_mut()?.left,
            Ordering::Equal => return Some(slot),
            Ordering::Greater => &mut slot.as_mut()?.right,
        };
    }
}

pub(crate) struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Builds the subtree that replaces a removed node which had both a `left` and a `right`
    /// subtree. The removed node's in-order successor (the leftmost node of `right`) becomes the
    /// new subtree root.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      removed                 succ
    ///      /     \                /    \
    ///   left     right    ->   left    right
    ///            /                     /
    ///          ...                   ...
    ///          /                     /
    ///       succ                  succ.right
    ///          \
    ///       succ.right
    /// ```
    fn promote_successor(left: Box<Self>, mut right: Box<Self>) -> Box<Self> {
        let mut successor = match Self::take_leftmost(&mut right.left) {
            Some(mut successor) => {
                successor.right = Some(right);
                successor
            }
            // `right` has no left child so it's the successor itself and keeps its right subtree.
            None => right,
        };
        successor.left = Some(left);
        successor
    }

    /// Detaches the leftmost node under `slot`, moving that node's right subtree into the gap it
    /// leaves behind.
    fn take_leftmost(mut slot: &mut Link<K>) -> Link<K> {
        while slot.as_ref().is_some_and(|node| node.left.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.left;
            }
        }

        let mut leftmost = slot.take()?;
        *slot = leftmost.right.take();
        Some(leftmost)
    }

    fn assert_children_ordered<C>(&self, comparator: &C)
    where
        C: Comparator<K>,
    {
        if let Some(left) = self.left() {
            assert_eq!(comparator.compare(&left.key, &self.key), Ordering::Less);
        }
        if let Some(right) = self.right() {
            assert_ne!(comparator.compare(&right.key, &self.key), Ordering::Less);
        }
    }
}
