//! The node primitive shared by every container, and the arena that owns it.

use std::ops::{Index, IndexMut};

/// Index of a node inside its container's [`NodeArena`].
pub(crate) type NodeId = usize;

/// A linked cell. Singly-linked containers leave `prev` as `None`.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value,
            prev: None,
            next: None,
        }
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Live(Node<T>),
    Free { next_free: Option<NodeId> },
}

// ---------------------------------------------------------------------------
// NodeArena
// ---------------------------------------------------------------------------

/// Slot storage for nodes. Released slots are threaded onto a free list and
/// reused by the next allocation, so node ids stay stable while live.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    live: usize,
}

impl<T> NodeArena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            live: 0,
        }
    }

    /// Store `node` and return its id.
    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        self.live += 1;
        match self.free {
            Some(id) => {
                if let Slot::Free { next_free } = self.slots[id] {
                    self.free = next_free;
                }
                self.slots[id] = Slot::Live(node);
                id
            }
            None => {
                self.slots.push(Slot::Live(node));
                self.slots.len() - 1
            }
        }
    }

    /// Remove the node at `id` and hand it back.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<T> {
        let slot = std::mem::replace(
            &mut self.slots[id],
            Slot::Free {
                next_free: self.free,
            },
        );
        match slot {
            Slot::Live(node) => {
                self.free = Some(id);
                self.live -= 1;
                node
            }
            Slot::Free { .. } => panic!("node {id} released twice"),
        }
    }

    /// Drop every node and forget all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.live = 0;
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) fn live(&self) -> usize {
        self.live
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id] {
            Slot::Live(node) => node,
            Slot::Free { .. } => panic!("node {id} is not live"),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id] {
            Slot::Live(node) => node,
            Slot::Free { .. } => panic!("node {id} is not live"),
        }
    }
}
