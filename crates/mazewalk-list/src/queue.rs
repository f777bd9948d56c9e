//! [`Queue`]: a singly-linked FIFO.

use std::fmt;

use crate::error::ListError;
use crate::node::{Node, NodeArena, NodeId};

/// A first-in, first-out queue. `head` is the oldest element, `tail` the
/// newest.
#[derive(Clone)]
pub struct Queue<T> {
    arena: NodeArena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Append `value` at the tail.
    pub fn enqueue(&mut self, value: T) {
        let id = self.arena.alloc(Node::new(value));
        match self.tail {
            Some(tail) => self.arena[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Remove and return the head value.
    pub fn dequeue(&mut self) -> Result<T, ListError> {
        let head = self.head.ok_or(ListError::EmptyCollection)?;
        let node = self.arena.release(head);
        self.head = node.next;
        if self.head.is_none() {
            self.clear();
        }
        Ok(node.value)
    }

    /// The head value, left in place.
    pub fn front(&self) -> Result<&T, ListError> {
        let head = self.head.ok_or(ListError::EmptyCollection)?;
        Ok(&self.arena[head].value)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arena.live()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterate from the front to the back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let arena = &self.arena;
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = &arena[cursor?];
            cursor = node.next;
            Some(&node.value)
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}
