//! The walk behind [`Tree::traverse`][crate::Tree::traverse] and friends.
//!
//! All three orders are driven by the same explicit stack instead of recursion, so a tree that
//! degenerated into a long chain (e.g. from sorted inserts) can be walked without running out of
//! call stack.

use crate::tree::Node;

/// The order in which a traversal hands keys to its callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Yields keys sorted by the comparator.
    InOrder,
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
}

enum Step<'a, K> {
    /// Still has to be broken into its key and children.
    Expand(&'a Node<K>),
    Visit(&'a K),
}

/// Calls `visit` once for every key under `root`, in the given `order`.
pub(crate) fn walk<'a, K>(root: Option<&'a Node<K>>, order: Order, mut visit: impl FnMut(&'a K)) {
    let mut stack: Vec<_> = root.map(Step::Expand).into_iter().collect();

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Visit(key) => {
                visit(key);
                continue;
            }
            Step::Expand(node) => node,
        };

        let left = node.left().map(Step::Expand);
        let right = node.right().map(Step::Expand);
        let key = Some(Step::Visit(node.key()));

        // Pushed back to front so they come off the stack in order.
        let steps = match order {
            Order::InOrder => [right, key, left],
            Order::PreOrder => [right, left, key],
            Order::PostOrder => [key, right, left],
        };
        stack.extend(steps.into_iter().flatten());
    }
}
