//! Key ordering used by the tree.
//!
//! The engine never looks at keys directly: every left/right decision goes
//! through a [`Comparator`]. Any closure of shape `Fn(&K, &K) -> Ordering` is a
//! comparator, and [`NaturalOrder`] covers the common `K: Ord` case.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use linked_bst::{Comparator, NaturalOrder, Reverse};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reverse(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"xy"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over keys of type `K`.
///
/// Implementations must be consistent: two calls with the same arguments
/// never disagree. `Less`, `Equal` and `Greater` play the role of a negative,
/// zero and positive result respectively.
pub trait Comparator<K: ?Sized> {
    /// Compares `a` against `b`.
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

/// Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<K, C> Comparator<K> for Reverse<C>
where
    K: ?Sized,
    C: Comparator<K>,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}
