//! The Binary Search Tree engine.
//!
//! [`Bst`] owns one [`Tree`] and one [`Comparator`] and is the only way to
//! change the shape of a tree. Keys are placed by comparator-guided descent:
//! smaller keys go left, equal or greater keys go right. Nothing is ever
//! rebalanced, so the shape depends entirely on insertion order.
//! [`Bst::is_balanced`] only reports on the current shape.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Bst, Node};
//!
//! let mut bst = Bst::new();
//!
//! // Nothing in here yet.
//! assert_eq!(bst.search(&4), None);
//!
//! let four = bst.insert(Node::new(4, "four")).unwrap();
//! bst.insert(Node::new(2, "two"));
//! bst.insert(Node::new(6, "six"));
//!
//! // Search hands back the very node that was inserted.
//! assert_eq!(bst.search(&4), Some(four));
//!
//! // Deleting a node detaches it and returns it.
//! let deleted = bst.delete(four).unwrap();
//! assert_eq!(deleted.into_parts(), (4, "four"));
//! assert_eq!(bst.search(&4), None);
//! assert_eq!(bst.len(), 2);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

use tracing::trace;

use crate::{Comparator, Error, NaturalOrder, Node, NodeId, Tree};

/// Insert, delete and search over a [`Tree`], ordered by a [`Comparator`].
#[derive(Clone, Debug)]
pub struct Bst<K, V, C = NaturalOrder> {
    tree: Tree<K, V>,
    comparator: C,
}

impl<K, V> Default for Bst<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Bst<K, V>
where
    K: Ord,
{
    /// An engine over a new, empty tree, ordering keys naturally.
    pub fn new() -> Self {
        Self::with_tree(Tree::new())
    }

    /// An engine over an existing tree, ordering keys naturally.
    pub fn with_tree(tree: Tree<K, V>) -> Self {
        Self::from_parts(tree, NaturalOrder)
    }
}

impl<K, V, C> Bst<K, V, C>
where
    C: Comparator<K>,
{
    /// An engine over a new, empty tree, ordering keys with `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::from_parts(Tree::new(), comparator)
    }

    /// An engine over `tree`, ordering keys with `comparator`. The tree must
    /// already be ordered by the same comparator.
    pub fn from_parts(tree: Tree<K, V>, comparator: C) -> Self {
        Self { tree, comparator }
    }

    /// The tree this engine operates on.
    pub fn tree(&self) -> &Tree<K, V> {
        &self.tree
    }

    /// The comparator ordering the keys.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Gives back the tree.
    pub fn into_tree(self) -> Tree<K, V> {
        self.tree
    }

    /// Gives back the tree and the comparator.
    pub fn into_parts(self) -> (Tree<K, V>, C) {
        (self.tree, self.comparator)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// True when the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Mutable access to a node's payload.
    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.tree.data_mut(id)
    }

    /// Inserts a node and returns its id.
    ///
    /// Whatever links the node carried are discarded. Keys equal to an
    /// existing key go into that key's right subtree, so duplicates are kept.
    /// Passing `None` does nothing and returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Bst, Node};
    ///
    /// let mut bst = Bst::new();
    /// let root = bst.insert(Node::new(4, ())).unwrap();
    /// let left = bst.insert(Node::new(2, ())).unwrap();
    ///
    /// assert_eq!(bst.tree().root(), Some(root));
    /// assert_eq!(bst.tree().node(root).unwrap().left(), Some(left));
    /// assert_eq!(bst.insert(None::<Node<i32, ()>>), None);
    /// ```
    pub fn insert<N>(&mut self, node: N) -> Option<NodeId>
    where
        N: Into<Option<Node<K, V>>>,
    {
        node.into().map(|node| self.attach(node))
    }

    /// Shorthand for inserting `Node::new(key, data)`.
    pub fn insert_entry(&mut self, key: K, data: V) -> NodeId {
        self.attach(Node::new(key, data))
    }

    /// Inserts a key and payload that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming whichever of `key` or `data`
    /// is `None`. The tree is left untouched in that case.
    pub fn try_insert(&mut self, key: Option<K>, data: Option<V>) -> Result<NodeId, Error> {
        let key = key.ok_or(Error::InvalidArgument("key"))?;
        let data = data.ok_or(Error::InvalidArgument("data"))?;
        Ok(self.insert_entry(key, data))
    }

    fn attach(&mut self, mut node: Node<K, V>) -> NodeId {
        node.detach();

        let mut parent = None;
        let mut goes_left = false;
        let mut current = self.tree.root;
        while let Some(id) = current {
            let here = &self.tree.nodes[id];
            // The same comparison decides the final attach side.
            goes_left = self.comparator.compare(node.key(), here.key()) == Ordering::Less;
            parent = Some(id);
            current = if goes_left { here.left } else { here.right };
        }

        node.parent = parent;
        let id = self.tree.nodes.insert(node);
        match parent {
            None => self.tree.root = Some(id),
            Some(p) if goes_left => self.tree.nodes[p].left = Some(id),
            Some(p) => self.tree.nodes[p].right = Some(id),
        }
        self.tree.size += 1;

        if cfg!(debug_assertions) {
            let node = &self.tree.nodes[id];
            assert!(node.is_leaf());
            match node.parent {
                None => assert_eq!(self.tree.root, Some(id)),
                Some(p) => {
                    let up = &self.tree.nodes[p];
                    assert!(up.left == Some(id) || up.right == Some(id));
                }
            }
        }

        trace!(node = %id, parent = ?parent, size = self.tree.size, "inserted node");
        id
    }

    /// Detaches a node from the tree and returns it.
    ///
    /// A node with at most one child is replaced by that child. A node with
    /// two children is replaced by its successor, the minimum of its right
    /// subtree, which has no left child and so can always be spliced out.
    /// The returned node's links describe where it used to be and are stale.
    ///
    /// Passing `None`, or the id of a node that is not in the tree, does
    /// nothing and returns `None`.
    pub fn delete<I>(&mut self, id: I) -> Option<Node<K, V>>
    where
        I: Into<Option<NodeId>>,
    {
        let id = id.into()?;
        let node = self.tree.nodes.get(id)?;
        let (left, right, parent) = (node.left, node.right, node.parent);

        let replacement = match (left, right) {
            (None, _) => {
                self.tree.transplant(id, right);
                right
            }
            (Some(_), None) => {
                self.tree.transplant(id, left);
                left
            }
            (Some(left), Some(right)) => {
                let successor = self.tree.leftmost(right);
                if self.tree.nodes[successor].parent != Some(id) {
                    let successor_right = self.tree.nodes[successor].right;
                    self.tree.transplant(successor, successor_right);
                    self.tree.nodes[successor].right = Some(right);
                    self.tree.nodes[right].parent = Some(successor);
                }
                self.tree.transplant(id, Some(successor));
                self.tree.nodes[successor].left = Some(left);
                self.tree.nodes[left].parent = Some(successor);
                Some(successor)
            }
        };
        self.tree.size -= 1;

        if cfg!(debug_assertions) {
            if let Some(r) = replacement {
                assert_eq!(self.tree.nodes[r].parent, parent);
            }
            match parent {
                None => assert_eq!(self.tree.root, replacement),
                Some(p) => {
                    let up = &self.tree.nodes[p];
                    assert_ne!(up.left, Some(id));
                    assert_ne!(up.right, Some(id));
                    assert!(up.left == replacement || up.right == replacement);
                }
            }
        }

        trace!(node = %id, size = self.tree.size, "deleted node");
        self.tree.nodes.try_remove(id)
    }

    /// Like [`Bst::delete`] but reports an id that is not in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] when `id` is stale or belongs to another
    /// tree's id space.
    pub fn try_delete(&mut self, id: NodeId) -> Result<Node<K, V>, Error> {
        self.delete(id).ok_or(Error::UnknownNode(id))
    }

    /// Deletes the node [`Bst::search`] finds for `key`.
    pub fn delete_key(&mut self, key: &K) -> Option<Node<K, V>> {
        let id = self.search(key);
        self.delete(id)
    }

    /// Finds the first node on the search path whose key compares equal to
    /// `key`. With duplicates, that is the one closest to the root, which
    /// may change as nodes are deleted.
    pub fn search(&self, key: &K) -> Option<NodeId> {
        self.tree.get(key, &self.comparator)
    }

    /// Looks up `key` with this engine's comparator. Same as [`Bst::search`].
    pub fn get(&self, key: &K) -> Option<NodeId> {
        self.search(key)
    }

    /// True when some node's key compares equal to `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// See [`Tree::node`].
    pub fn node(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.tree.node(id)
    }

    /// See [`Tree::minimum`].
    pub fn minimum(&self) -> Option<NodeId> {
        self.tree.minimum()
    }

    /// See [`Tree::maximum`].
    pub fn maximum(&self) -> Option<NodeId> {
        self.tree.maximum()
    }

    /// See [`Tree::successor`].
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.tree.successor(id)
    }

    /// See [`Tree::predecessor`].
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.tree.predecessor(id)
    }

    /// See [`Tree::in_order_walk`].
    pub fn in_order_walk(&self) -> Vec<&K> {
        self.tree.in_order_walk()
    }

    /// See [`Tree::pre_order_walk`].
    pub fn pre_order_walk(&self) -> Vec<&K> {
        self.tree.pre_order_walk()
    }

    /// See [`Tree::post_order_walk`].
    pub fn post_order_walk(&self) -> Vec<&K> {
        self.tree.post_order_walk()
    }

    /// Length of the shortest path from the root to a free child slot,
    /// counted in nodes. Zero for an empty tree.
    pub fn min_depth(&self) -> usize {
        self.min_depth_of(self.tree.root)
    }

    /// Length of the longest path from the root to a leaf, counted in nodes.
    /// Zero for an empty tree.
    pub fn max_depth(&self) -> usize {
        self.max_depth_of(self.tree.root)
    }

    /// `1 + min(min_depth(left), min_depth(right))`, with an absent (or
    /// stale) node counting as 0.
    pub fn min_depth_of(&self, node: Option<NodeId>) -> usize {
        let Some(start) = node.filter(|&id| self.tree.contains(id)) else {
            return 0;
        };

        // Breadth first: the first node missing a child is the shallowest.
        let mut queue = VecDeque::from([(start, 1)]);
        while let Some((id, depth)) = queue.pop_front() {
            match (self.tree.nodes[id].left, self.tree.nodes[id].right) {
                (Some(left), Some(right)) => {
                    queue.push_back((left, depth + 1));
                    queue.push_back((right, depth + 1));
                }
                _ => return depth,
            }
        }
        unreachable!("a finite subtree always has a free child slot")
    }

    /// `1 + max(max_depth(left), max_depth(right))`, with an absent (or
    /// stale) node counting as 0.
    pub fn max_depth_of(&self, node: Option<NodeId>) -> usize {
        let Some(start) = node.filter(|&id| self.tree.contains(id)) else {
            return 0;
        };

        let mut depth = 0;
        let mut level = vec![start];
        while !level.is_empty() {
            depth += 1;
            level = level
                .iter()
                .flat_map(|&id| {
                    let node = &self.tree.nodes[id];
                    node.left.into_iter().chain(node.right)
                })
                .collect();
        }
        depth
    }

    /// Whether the longest and shortest root paths differ by at most one.
    /// An empty tree is not balanced. This is a snapshot; nothing is rotated.
    pub fn is_balanced(&self) -> bool {
        self.tree.root.is_some() && self.max_depth() - self.min_depth() <= 1
    }

    /// Checks every structural invariant of the tree.
    ///
    /// # Errors
    ///
    /// - [`Error::BrokenParentLink`] when a child does not point back at the
    ///   node holding it, or the root has a parent.
    /// - [`Error::SizeMismatch`] when the recorded size is not the number of
    ///   reachable nodes.
    /// - [`Error::OutOfOrder`] when a left subtree holds a key that is not
    ///   smaller, or the in-order walk is not sorted.
    /// - [`Error::UnknownNode`] when the root id no longer names a live node.
    pub fn check_invariants(&self) -> Result<(), Error> {
        let tree = &self.tree;
        let size = tree.size;

        let mut stack = Vec::new();
        if let Some(root) = tree.root {
            let node = tree.nodes.get(root).ok_or(Error::UnknownNode(root))?;
            if node.parent.is_some() {
                return Err(Error::BrokenParentLink(root));
            }
            stack.push(root);
        }

        let mut found = 0;
        while let Some(id) = stack.pop() {
            found += 1;
            if found > tree.nodes.len() {
                // Only possible when the links form a cycle.
                return Err(Error::SizeMismatch { expected: size, found });
            }
            let node = &tree.nodes[id];
            for child in node.left.into_iter().chain(node.right) {
                match tree.nodes.get(child) {
                    Some(c) if c.parent == Some(id) => stack.push(child),
                    _ => return Err(Error::BrokenParentLink(child)),
                }
            }
            if let Some(left) = node.left {
                let largest_left = tree.rightmost(left);
                if self.comparator.compare(tree.nodes[largest_left].key(), node.key())
                    != Ordering::Less
                {
                    return Err(Error::OutOfOrder);
                }
            }
        }
        if found != size || tree.nodes.len() != size {
            return Err(Error::SizeMismatch {
                expected: size,
                found,
            });
        }

        let keys = tree.in_order_walk();
        if keys
            .windows(2)
            .any(|pair| self.comparator.compare(pair[0], pair[1]) == Ordering::Greater)
        {
            return Err(Error::OutOfOrder);
        }
        Ok(())
    }
}

impl<K, V, C> Extend<(K, V)> for Bst<K, V, C>
where
    C: Comparator<K>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, data) in iter {
            self.insert_entry(key, data);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Bst<K, V>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut bst = Self::new();
        bst.extend(iter);
        bst
    }
}
