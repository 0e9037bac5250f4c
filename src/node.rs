//! The element stored in a [`Tree`](crate::Tree).

use std::fmt;

use crate::NodeId;

/// A key, its payload, and the node's position in the tree.
///
/// A `Node` built with [`Node::new`] is detached: it has no parent and no
/// children. Only the tree writes the links. A node handed back by
/// [`Bst::delete`](crate::Bst::delete) keeps the links it had when it was
/// detached; they are stale and are cleared again if the node is re-inserted.
#[derive(Clone, PartialEq, Eq)]
pub struct Node<K, V> {
    key: K,
    data: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    /// Non-owning back reference. Only used for navigation and transplanting.
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// Creates a detached node.
    pub fn new(key: K, data: V) -> Self {
        Self {
            key,
            data,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// The key used to order this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The payload stored with the key.
    pub fn data(&self) -> &V {
        &self.data
    }

    /// Mutable access to the payload. The key can't be changed in place since
    /// that could break the ordering of the tree.
    pub fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    /// Left child, holding smaller keys.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child, holding greater or equal keys.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The node holding this one as a child. `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// True when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Splits the node into its key and payload.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.data)
    }

    /// Forgets every link so the node can be attached somewhere new.
    pub(crate) fn detach(&mut self) {
        self.left = None;
        self.right = None;
        self.parent = None;
    }
}

impl<K, V> From<(K, V)> for Node<K, V> {
    fn from((key, data): (K, V)) -> Self {
        Self::new(key, data)
    }
}

impl<K, V> fmt::Debug for Node<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("data", &self.data)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("parent", &self.parent)
            .finish()
    }
}
