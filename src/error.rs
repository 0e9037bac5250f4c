//! Errors reported by the tree.
//!
//! Absence is not an error: lookups, navigation and the plain `insert` and
//! `delete` entry points all report "nothing there" with `None`. The variants
//! below are reserved for the checked entry points and for invariant checks.

use thiserror::Error;

use crate::NodeId;

/// The crate's error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A required argument, such as a key or payload, was missing.
    #[error("{0} cannot be missing")]
    InvalidArgument(&'static str),
    /// The id does not name a live node of this tree.
    #[error("node {0} does not belong to this tree")]
    UnknownNode(NodeId),
    /// An in-order walk produced a key smaller than the one before it.
    #[error("in-order walk is not sorted")]
    OutOfOrder,
    /// A node's parent link does not point at the node holding it as a child.
    #[error("parent link of node {0} is inconsistent")]
    BrokenParentLink(NodeId),
    /// The recorded size differs from the number of reachable nodes.
    #[error("tree records {expected} nodes but {found} are reachable")]
    SizeMismatch {
        /// Size recorded by the tree.
        expected: usize,
        /// Nodes actually reachable from the root.
        found: usize,
    },
}
