//! This crate exposes a Binary Search Tree (BST) whose keys are ordered by a pluggable
//! [`Comparator`] rather than by `Ord` alone.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! add, find, and remove stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the key
//! that was added and will sometimes have child `Node`s. The most important
//! invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key
//!    ordered before its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    ordered after its own key, or equal to it.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). This tree never rebalances
//! itself, so its height depends entirely on the order keys are added in:
//! adding already sorted keys produces a tree that is really a linked list.
//! BSTs also naturally support sorted traversal by visiting the left subtree,
//! then the subtree root, then the right subtree.
//!
//! ## Ordering
//!
//! "Before" and "after" above are decided by the tree's [`Comparator`]. By default that's
//! [`Natural`], which uses `Ord`. Any `Fn(&K, &K) -> Ordering` closure works too, as does
//! [`by_key`] for ordering by a single field:
//!
//! ```
//! use cmp_bst::{by_key, Tree};
//!
//! let mut words = Tree::with_comparator(by_key(|word: &&str| word.len()));
//! for word in ["three", "a", "to"] {
//!     words.add(word);
//! }
//!
//! let mut shortest_first = Vec::new();
//! words.in_order(|word| shortest_first.push(*word));
//! assert_eq!(shortest_first, ["a", "to", "three"]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod comparator;
mod traverse;
pub mod tree;


pub use comparator::{by_key, ByKey, Comparator, Natural};
pub use traverse::Order;
pub use tree::Tree;
