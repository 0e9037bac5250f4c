//! This crate exposes an in-memory, parent-linked Binary Search Tree (BST)
//! supporting insertion, deletion, point lookup, ordered traversal and
//! navigation to the minimum, maximum, successor and predecessor of a node.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. Every `Node` stores a key, a
//! payload, up to two children and a link back to its parent. The invariants
//! this crate maintains are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key greater
//!    than or equal to its own key. Duplicate keys are therefore kept, to the
//!    right of the first copy.
//! 3. Every `Node` except the root has a parent link pointing at the `Node`
//!    that holds it as a child.
//!
//! Searching takes `O(height)`. This tree never rebalances itself, so the
//! height depends on insertion order: sorted input builds a tree shaped like a
//! linked list. [`Bst::is_balanced`] reports whether the current shape happens
//! to be balanced. Visiting the left subtree, then the node, then the right
//! subtree yields the keys in sorted order.
//!
//! ## Layout
//!
//! Nodes live in an arena owned by the [`Tree`] and refer to each other by
//! [`NodeId`]. Parent links are plain ids, so nothing ever forms an ownership
//! cycle, and an id held on to after its node was deleted is reported as
//! absent rather than aliasing a newer node.
//!
//! The [`Bst`] engine wraps a `Tree` together with a [`Comparator`] and is the
//! only thing that reshapes it.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Bst, Node};
//!
//! let mut bst = Bst::new();
//! for (key, data) in [(4, 10), (2, 8), (6, 7), (1, 5)] {
//!     bst.insert(Node::new(key, data));
//! }
//!
//! assert_eq!(bst.in_order_walk(), [&1, &2, &4, &6]);
//!
//! let root = bst.tree().root().unwrap();
//! assert_eq!(bst.tree().key(bst.successor(root).unwrap()), Some(&6));
//! assert_eq!(bst.tree().key(bst.predecessor(root).unwrap()), Some(&2));
//!
//! // The root has two children, so its successor takes its place.
//! bst.delete(bst.search(&4));
//! assert_eq!(bst.tree().key(bst.tree().root().unwrap()), Some(&6));
//! assert_eq!(bst.in_order_walk(), [&1, &2, &6]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
pub mod bst;
pub mod compare;
pub mod error;
pub mod node;
pub mod tree;

pub use arena::NodeId;
pub use bst::Bst;
pub use compare::{Comparator, NaturalOrder, Reverse};
pub use error::Error;
pub use node::Node;
pub use tree::{Iter, Tree};
