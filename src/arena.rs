//! Slot storage for tree nodes.
//!
//! Every node of a [`Tree`](crate::Tree) lives in one [`Arena`]. Links between
//! nodes are [`NodeId`]s rather than pointers, so the owning direction
//! (arena to node) never forms a cycle and a `parent` link is just a number.
//!
//! Ids carry a generation counter. Removing a node bumps the generation of its
//! slot, so an id kept around after a delete is detected as stale instead of
//! silently naming whatever node reuses the slot later.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Handle to a node stored in a [`Tree`](crate::Tree).
///
/// Ids are cheap to copy and compare. Two ids are equal exactly when they name
/// the same stored node, which makes them the crate's notion of node identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// The slot this id points at.
    pub const fn index(self) -> u32 {
        self.index
    }

    /// The generation of the slot when this id was handed out.
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

#[derive(Clone, Debug)]
enum Entry<T> {
    Vacant { next: u32, generation: u32 },
    Occupied { value: T, generation: u32 },
}

impl<T> Entry<T> {
    const fn generation(&self) -> u32 {
        match *self {
            Entry::Vacant { generation, .. } | Entry::Occupied { generation, .. } => generation,
        }
    }
}

/// Generational slot storage. Vacant slots form a free list threaded through
/// `next` so removal and reuse are both O(1).
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    entries: Vec<Entry<T>>,
    len: usize,
    /// Head of the free list. Equal to `entries.len()` when there is none.
    next: u32,
    /// Generation given to freshly pushed slots. Raised by `clear` so ids from
    /// before the clear can't alias new nodes.
    watermark: u32,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
            len: 0,
            next: 0,
            watermark: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        match self.entries.get(id.index as usize) {
            Some(Entry::Occupied { value, generation }) if *generation == id.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.entries.get_mut(id.index as usize) {
            Some(Entry::Occupied { value, generation }) if *generation == id.generation => {
                Some(value)
            }
            _ => None,
        }
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Stores `value` in the first free slot.
    ///
    /// # Panics
    ///
    /// Panics if the arena would grow beyond `u32::MAX` slots.
    pub(crate) fn insert(&mut self, value: T) -> NodeId {
        let index = self.next;
        let slot = index as usize;
        self.len += 1;

        if slot == self.entries.len() {
            assert!(
                self.entries.len() < u32::MAX as usize,
                "arena exceeded maximum capacity of {} nodes",
                u32::MAX
            );
            let generation = self.watermark;
            self.entries.push(Entry::Occupied { value, generation });
            self.next = index + 1;
            NodeId { index, generation }
        } else {
            let generation = self.entries[slot].generation();
            self.next = match self.entries[slot] {
                Entry::Vacant { next, .. } => next,
                Entry::Occupied { .. } => unreachable!("free list points at an occupied slot"),
            };
            self.entries[slot] = Entry::Occupied { value, generation };
            NodeId { index, generation }
        }
    }

    /// Removes the value named by `id`. Returns `None` for stale ids.
    pub(crate) fn try_remove(&mut self, id: NodeId) -> Option<T> {
        let slot = id.index as usize;
        match self.entries.get(slot) {
            Some(Entry::Occupied { generation, .. }) if *generation == id.generation => {}
            _ => return None,
        }

        let vacant = Entry::Vacant {
            next: self.next,
            generation: id.generation.wrapping_add(1),
        };
        match std::mem::replace(&mut self.entries[slot], vacant) {
            Entry::Occupied { value, .. } => {
                self.len -= 1;
                self.next = id.index;
                Some(value)
            }
            Entry::Vacant { .. } => unreachable!("slot checked as occupied above"),
        }
    }

    /// Drops every value. Ids handed out before the clear stay stale forever.
    pub(crate) fn clear(&mut self) {
        let highest = self
            .entries
            .iter()
            .map(Entry::generation)
            .max()
            .unwrap_or(self.watermark);
        self.watermark = highest.max(self.watermark).wrapping_add(1);
        self.entries.clear();
        self.len = 0;
        self.next = 0;
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("stale node id {id}"),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[track_caller]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("stale node id {id}"),
        }
    }
}
