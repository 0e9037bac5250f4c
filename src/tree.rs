//! The node container and its structural primitives.
//!
//! A [`Tree`] owns its nodes and knows how to navigate them: descend to the
//! smallest or largest key, step to the in-order successor or predecessor
//! through `parent` links, and walk the whole tree in the three classic
//! orders. It does not decide where keys go; that is the job of the
//! [`Bst`](crate::Bst) engine, which is the only thing that mutates a tree.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Bst, Node};
//!
//! let mut bst = Bst::new();
//! for key in [4, 2, 6, 1] {
//!     bst.insert(Node::new(key, key * 10));
//! }
//!
//! let tree = bst.tree();
//! assert_eq!(tree.in_order_walk(), [&1, &2, &4, &6]);
//! assert_eq!(tree.pre_order_walk(), [&4, &2, &1, &6]);
//! assert_eq!(tree.post_order_walk(), [&1, &2, &6, &4]);
//!
//! let min = tree.minimum().unwrap();
//! assert_eq!(tree.key(min), Some(&1));
//! assert_eq!(tree.successor(min).and_then(|id| tree.key(id)), Some(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::arena::Arena;
use crate::{Comparator, Node, NodeId};

/// An ordered, parent-linked binary tree.
///
/// The tree exclusively owns every node through its arena. Children are owned
/// by the node that links to them; `parent` links never own anything.
#[derive(Clone)]
pub struct Tree<K, V> {
    pub(crate) nodes: Arena<Node<K, V>>,
    pub(crate) root: Option<NodeId>,
    pub(crate) size: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root)
            .field("size", &self.size)
            .field(
                "entries",
                &self.iter().map(|(_, k, v)| (k, v)).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            size: 0,
        }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// True when the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The node named by `id`, or `None` if it is not (or no longer) in the tree.
    pub fn node(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.nodes.get(id)
    }

    /// Shorthand for the key of [`Tree::node`].
    pub fn key(&self, id: NodeId) -> Option<&K> {
        self.node(id).map(Node::key)
    }

    /// Shorthand for the payload of [`Tree::node`].
    pub fn data(&self, id: NodeId) -> Option<&V> {
        self.node(id).map(Node::data)
    }

    /// Mutable access to a node's payload.
    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.nodes.get_mut(id).map(Node::data_mut)
    }

    /// True when `id` names a live node of this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// Releases every node. Ids handed out before the call become stale.
    pub fn clear(&mut self) {
        debug!(size = self.size, "clearing tree");
        self.nodes.clear();
        self.root = None;
        self.size = 0;
    }

    /// The node with the smallest key.
    pub fn minimum(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost(root))
    }

    /// The node with the largest key.
    pub fn maximum(&self) -> Option<NodeId> {
        self.root.map(|root| self.rightmost(root))
    }

    /// The node with the smallest key in the subtree rooted at `id`.
    pub fn subtree_minimum(&self, id: NodeId) -> Option<NodeId> {
        self.contains(id).then(|| self.leftmost(id))
    }

    /// The node with the largest key in the subtree rooted at `id`.
    pub fn subtree_maximum(&self, id: NodeId) -> Option<NodeId> {
        self.contains(id).then(|| self.rightmost(id))
    }

    /// The node that follows `id` in sorted order.
    ///
    /// With a right subtree this is that subtree's minimum. Otherwise it is
    /// the first ancestor reached from a left child. `None` when `id` is the
    /// maximum or is not in the tree.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(id)?;
        if let Some(right) = node.right {
            return Some(self.leftmost(right));
        }

        let mut child = id;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let up = &self.nodes[p];
            if up.right != Some(child) {
                return Some(p);
            }
            child = p;
            parent = up.parent;
        }
        None
    }

    /// The node that precedes `id` in sorted order. Mirror of
    /// [`Tree::successor`].
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(id)?;
        if let Some(left) = node.left {
            return Some(self.rightmost(left));
        }

        let mut child = id;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let up = &self.nodes[p];
            if up.left != Some(child) {
                return Some(p);
            }
            child = p;
            parent = up.parent;
        }
        None
    }

    /// Keys in ascending order (left, node, right).
    pub fn in_order_walk(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.size);
        let mut stack = Vec::new();
        let mut current = self.root;

        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id].left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            let node = &self.nodes[id];
            keys.push(node.key());
            current = node.right;
        }

        keys
    }

    /// Keys in pre-order (node, left, right).
    pub fn pre_order_walk(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.size);
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            keys.push(node.key());
            stack.extend(node.right);
            stack.extend(node.left);
        }

        keys
    }

    /// Keys in post-order (left, right, node).
    pub fn post_order_walk(&self) -> Vec<&K> {
        // Collect node, right, left and reverse it.
        let mut keys = Vec::with_capacity(self.size);
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            keys.push(node.key());
            stack.extend(node.left);
            stack.extend(node.right);
        }

        keys.reverse();
        keys
    }

    /// Finds the first node on the search path whose key compares equal to
    /// `key` under `comparator`, which must be the ordering the tree was
    /// built with. With duplicate keys this is the one closest to the root.
    ///
    /// [`Bst::search`](crate::Bst::search) calls this with the engine's own
    /// comparator.
    pub fn get<C>(&self, key: &K, comparator: &C) -> Option<NodeId>
    where
        C: Comparator<K>,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match comparator.compare(key, node.key()) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Iterates over `(id, key, data)` in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: self,
            front: self.minimum(),
            back: self.maximum(),
            remaining: self.size,
        }
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.iter().map(|(_, key, _)| key)
    }

    /// Rewires the slot `a` occupies (a child slot of its parent, or the root)
    /// to hold `b`, and points `b` back at `a`'s parent. `a`'s own links are
    /// left untouched.
    pub(crate) fn transplant(&mut self, a: NodeId, b: Option<NodeId>) {
        let parent = self.nodes[a].parent;
        match parent {
            None => self.root = b,
            Some(p) => {
                let up = &mut self.nodes[p];
                if up.left == Some(a) {
                    up.left = b;
                } else {
                    up.right = b;
                }
            }
        }
        if let Some(b) = b {
            self.nodes[b].parent = parent;
        }
        trace!(node = %a, replacement = ?b, parent = ?parent, "transplanted subtree");
    }

    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        id
    }
}

/// In-order iterator over a [`Tree`], stepping with
/// [`successor`](Tree::successor) and [`predecessor`](Tree::predecessor).
pub struct Iter<'a, K, V> {
    tree: &'a Tree<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (NodeId, &'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        let node = &self.tree.nodes[id];
        self.remaining -= 1;
        self.front = self.tree.successor(id);
        Some((id, node.key(), node.data()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        let node = &self.tree.nodes[id];
        self.remaining -= 1;
        self.back = self.tree.predecessor(id);
        Some((id, node.key(), node.data()))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (NodeId, &'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
