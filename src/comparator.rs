//! Orderings for keys stored in a [`Tree`][crate::Tree].
//!
//! A `Tree` never inspects its keys directly. Every decision about where a key goes (or where to
//! look for it) is made by asking a [`Comparator`] how two keys relate. The comparator is handed to
//! the tree once at construction and then used for every operation.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use cmp_bst::{by_key, Comparator, Natural};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//!
//! // Any closure taking two keys works too.
//! let reversed = |a: &i32, b: &i32| b.cmp(a);
//! assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
//!
//! // Or order by a single field.
//! let by_len = by_key(|s: &&str| s.len());
//! assert_eq!(by_len.compare(&"bb", &"a"), Ordering::Greater);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A total order over keys of type `K`.
///
/// Implementations must be consistent for the whole lifetime of the tree using them: if
/// `compare(a, b)` returns `Less` once it must keep doing so. A comparator that is not a total
/// order leaves the tree in an unspecified (but memory safe) state.
pub trait Comparator<K: ?Sized> {
    /// Returns how `a` orders relative to `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K, F> Comparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// The default comparator. Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by a value projected out of them, usually a single field. Two keys with equal
/// projections compare `Equal` even if the keys themselves differ.
///
/// Built with [`by_key`].
#[derive(Clone, Copy)]
pub struct ByKey<F> {
    project: F,
}

/// Builds a comparator ordering keys by `project(key)`.
///
/// # Examples
///
/// ```
/// use cmp_bst::{by_key, Tree};
///
/// struct Person {
///     name: &'static str,
///     age: u32,
/// }
///
/// let mut people = Tree::with_comparator(by_key(|p: &Person| p.age));
/// people.add(Person { name: "Ada", age: 36 });
/// people.add(Person { name: "Alan", age: 41 });
///
/// // Only the age is looked at.
/// assert!(people.contains(&Person { name: "someone else", age: 41 }));
/// assert_eq!(people.min().map(|p| p.name), Some("Ada"));
/// ```
pub fn by_key<K, T, F>(project: F) -> ByKey<F>
where
    K: ?Sized,
    T: Ord,
    F: Fn(&K) -> T,
{
    ByKey { project }
}

impl<K, T, F> Comparator<K> for ByKey<F>
where
    K: ?Sized,
    T: Ord,
    F: Fn(&K) -> T,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.project)(a).cmp(&(self.project)(b))
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}
