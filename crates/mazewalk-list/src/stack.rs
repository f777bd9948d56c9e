//! [`Stack`]: a singly-linked LIFO.

use std::fmt;

use crate::error::ListError;
use crate::node::{Node, NodeArena, NodeId};

/// A last-in, first-out stack. `head` is always the most recent push.
#[derive(Clone)]
pub struct Stack<T> {
    arena: NodeArena<T>,
    head: Option<NodeId>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
        }
    }

    /// Push `value` on top.
    pub fn push(&mut self, value: T) {
        let mut node = Node::new(value);
        node.next = self.head;
        self.head = Some(self.arena.alloc(node));
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> Result<T, ListError> {
        let head = self.head.ok_or(ListError::EmptyCollection)?;
        let node = self.arena.release(head);
        self.head = node.next;
        if self.head.is_none() {
            self.arena.clear();
        }
        Ok(node.value)
    }

    /// The top value, left in place.
    pub fn top(&self) -> Result<&T, ListError> {
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
    }

    /// Iterate from the top down.
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

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Push every item in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for value in iter {
            stack.push(value);
        }
        stack
    }
}
