//! [`Sequence`]: a doubly-linked list with 1-indexed positional access,
//! value-based access, ascending insertion and a stable rebuild sort.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::ListError;
use crate::node::{Node, NodeArena, NodeId};

/// How an operation addresses its target node.
enum Target<'a, T> {
    /// 1-indexed position from the head.
    Position(usize),
    /// First node, in head-to-tail order, whose value equals this one.
    Value(&'a T),
}

/// A doubly-linked list.
///
/// Positions are 1-indexed: position 1 is the head and position
/// [`len`](Self::len) is the tail. Lookups walk from the head.
///
/// Value-based operations (`find`, `replace`, `remove_value`, ...) act on the
/// *first* matching node only.
#[derive(Clone)]
pub struct Sequence<T> {
    arena: NodeArena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    /// Create an empty sequence.
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Prepend `value`.
    pub fn add_first(&mut self, value: T) {
        let id = self.arena.alloc(Node::new(value));
        self.link_front(id);
    }

    /// Append `value`.
    pub fn add_last(&mut self, value: T) {
        let id = self.arena.alloc(Node::new(value));
        self.link_back(id);
    }

    pub fn get_first(&self) -> Result<&T, ListError> {
        let head = self.head.ok_or(ListError::EmptyCollection)?;
        Ok(&self.arena[head].value)
    }

    pub fn get_last(&self) -> Result<&T, ListError> {
        let tail = self.tail.ok_or(ListError::EmptyCollection)?;
        Ok(&self.arena[tail].value)
    }

    /// Replace the head value, returning the previous one.
    pub fn set_first(&mut self, value: T) -> Result<T, ListError> {
        let head = self.head.ok_or(ListError::EmptyCollection)?;
        Ok(std::mem::replace(&mut self.arena[head].value, value))
    }

    /// Replace the tail value, returning the previous one.
    pub fn set_last(&mut self, value: T) -> Result<T, ListError> {
        let tail = self.tail.ok_or(ListError::EmptyCollection)?;
        Ok(std::mem::replace(&mut self.arena[tail].value, value))
    }

    /// Detach the head and return its value.
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        let head = self.head.ok_or(ListError::EmptyCollection)?;
        Ok(self.unlink(head))
    }

    /// Detach the tail and return its value.
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        let tail = self.tail.ok_or(ListError::EmptyCollection)?;
        Ok(self.unlink(tail))
    }

    /// Iterate from head to tail. The iterator is double-ended.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    // -----------------------------------------------------------------------
    // Linking primitives. Each takes an allocated, unlinked node.
    // -----------------------------------------------------------------------

    fn link_front(&mut self, id: NodeId) {
        match self.head {
            Some(head) => {
                self.arena[id].next = Some(head);
                self.arena[head].prev = Some(id);
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    fn link_back(&mut self, id: NodeId) {
        match self.tail {
            Some(tail) => {
                self.arena[id].prev = Some(tail);
                self.arena[tail].next = Some(id);
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    fn link_after(&mut self, anchor: NodeId, id: NodeId) {
        let Some(next) = self.arena[anchor].next else {
            return self.link_back(id);
        };
        self.arena[id].prev = Some(anchor);
        self.arena[id].next = Some(next);
        self.arena[next].prev = Some(id);
        self.arena[anchor].next = Some(id);
        self.len += 1;
    }

    fn link_before(&mut self, anchor: NodeId, id: NodeId) {
        let Some(prev) = self.arena[anchor].prev else {
            return self.link_front(id);
        };
        self.arena[id].prev = Some(prev);
        self.arena[id].next = Some(anchor);
        self.arena[prev].next = Some(id);
        self.arena[anchor].prev = Some(id);
        self.len += 1;
    }

    /// Detach a linked node, repairing its neighbours (or the ends) around
    /// the gap. Emptying the list resets it outright.
    fn unlink(&mut self, id: NodeId) -> T {
        let node = self.arena.release(id);
        match node.prev {
            Some(prev) => self.arena[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.arena[next].prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        if self.len == 0 {
            self.clear();
        }
        node.value
    }
}

// ---------------------------------------------------------------------------
// Positional and value-based access
// ---------------------------------------------------------------------------

impl<T: PartialEq> Sequence<T> {
    /// Resolve `target` to a node. Every addressed operation goes through
    /// here so they all fail the same way.
    fn locate(&self, target: Target<'_, T>) -> Result<NodeId, ListError> {
        let head = self.head.ok_or(ListError::EmptyCollection)?;
        match target {
            Target::Position(position) => {
                if position < 1 {
                    return Err(ListError::InvalidArgument { position });
                }
                if position > self.len {
                    return Err(ListError::OutOfRange {
                        position,
                        len: self.len,
                    });
                }
                let mut id = head;
                for _ in 1..position {
                    id = self.arena[id].next.ok_or(ListError::OutOfRange {
                        position,
                        len: self.len,
                    })?;
                }
                Ok(id)
            }
            Target::Value(value) => {
                let mut cursor = Some(head);
                while let Some(id) = cursor {
                    if self.arena[id].value == *value {
                        return Ok(id);
                    }
                    cursor = self.arena[id].next;
                }
                Err(ListError::NotFound)
            }
        }
    }

    /// Value at a 1-indexed `position`.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyCollection`] when empty,
    /// [`ListError::InvalidArgument`] for position 0 and
    /// [`ListError::OutOfRange`] past the tail.
    pub fn get(&self, position: usize) -> Result<&T, ListError> {
        let id = self.locate(Target::Position(position))?;
        Ok(&self.arena[id].value)
    }

    /// The first stored value equal to `value`.
    pub fn find(&self, value: &T) -> Result<&T, ListError> {
        let id = self.locate(Target::Value(value))?;
        Ok(&self.arena[id].value)
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.locate(Target::Value(value)).is_ok()
    }

    /// Replace the value at `position`, returning the previous one.
    pub fn set(&mut self, value: T, position: usize) -> Result<T, ListError> {
        let id = self.locate(Target::Position(position))?;
        Ok(std::mem::replace(&mut self.arena[id].value, value))
    }

    /// Replace the first element equal to `old`, returning it.
    pub fn replace(&mut self, value: T, old: &T) -> Result<T, ListError> {
        let id = self.locate(Target::Value(old))?;
        Ok(std::mem::replace(&mut self.arena[id].value, value))
    }

    /// Remove and return the value at `position`.
    pub fn remove(&mut self, position: usize) -> Result<T, ListError> {
        let id = self.locate(Target::Position(position))?;
        Ok(self.unlink(id))
    }

    /// Remove and return the first element equal to `value`.
    pub fn remove_value(&mut self, value: &T) -> Result<T, ListError> {
        let id = self.locate(Target::Value(value))?;
        Ok(self.unlink(id))
    }

    /// Insert `value` right after the node at `position`.
    pub fn add_after(&mut self, value: T, position: usize) -> Result<(), ListError> {
        let anchor = self.locate(Target::Position(position))?;
        let id = self.arena.alloc(Node::new(value));
        self.link_after(anchor, id);
        Ok(())
    }

    /// Insert `value` right after the first element equal to `old`.
    pub fn add_after_value(&mut self, value: T, old: &T) -> Result<(), ListError> {
        let anchor = self.locate(Target::Value(old))?;
        let id = self.arena.alloc(Node::new(value));
        self.link_after(anchor, id);
        Ok(())
    }

    /// Insert `value` right before the node at `position`.
    pub fn add_before(&mut self, value: T, position: usize) -> Result<(), ListError> {
        let anchor = self.locate(Target::Position(position))?;
        let id = self.arena.alloc(Node::new(value));
        self.link_before(anchor, id);
        Ok(())
    }

    /// Insert `value` right before the first element equal to `old`.
    pub fn add_before_value(&mut self, value: T, old: &T) -> Result<(), ListError> {
        let anchor = self.locate(Target::Value(old))?;
        let id = self.arena.alloc(Node::new(value));
        self.link_before(anchor, id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Ordered insertion
// ---------------------------------------------------------------------------

impl<T: Ord> Sequence<T> {
    /// Insert `value` before the first element not less than it, or at the
    /// tail when every element is smaller. Lands ahead of equal elements.
    pub fn insert(&mut self, value: T) {
        let id = self.arena.alloc(Node::new(value));
        self.insert_node(id);
    }

    /// Sort ascending by detaching every node and re-inserting it.
    ///
    /// Nodes are relinked in place; no value is moved or cloned. They are
    /// re-inserted tail first, which together with [`insert`](Self::insert)
    /// placing values ahead of their equals keeps the sort stable.
    pub fn sort_ascending(&mut self) {
        let mut cursor = self.tail.take();
        self.head = None;
        self.len = 0;
        while let Some(id) = cursor {
            let node = &mut self.arena[id];
            cursor = node.prev.take();
            node.next = None;
            self.insert_node(id);
        }
    }

    fn insert_node(&mut self, id: NodeId) {
        let mut cursor = self.head;
        while let Some(current) = cursor {
            if self.arena[current].value >= self.arena[id].value {
                return self.link_before(current, id);
            }
            cursor = self.arena[current].next;
        }
        self.link_back(id);
    }
}

// ---------------------------------------------------------------------------
// Iteration
// ---------------------------------------------------------------------------

/// Borrowing iterator over a [`Sequence`], head to tail.
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rand::seq::SliceRandom;

    /// Walk the chain both ways and check every link invariant.
    fn assert_links<T>(seq: &Sequence<T>) {
        if seq.len == 0 {
            assert!(seq.head.is_none() && seq.tail.is_none());
            return;
        }
        let head = seq.head.unwrap();
        let tail = seq.tail.unwrap();
        assert!(seq.arena[head].prev.is_none());
        assert!(seq.arena[tail].next.is_none());

        let mut count = 0;
        let mut prev = None;
        let mut cursor = Some(head);
        while let Some(id) = cursor {
            assert_eq!(seq.arena[id].prev, prev);
            count += 1;
            prev = Some(id);
            cursor = seq.arena[id].next;
        }
        assert_eq!(prev, Some(tail));
        assert_eq!(count, seq.len);
        assert_eq!(seq.arena.live(), seq.len);
    }

    fn values<T: Clone>(seq: &Sequence<T>) -> Vec<T> {
        seq.iter().cloned().collect()
    }

    fn seq_of(values: &[i32]) -> Sequence<i32> {
        values.iter().copied().collect()
    }

    /// Ordered by `id` only, so `name` tracks stability.
    #[derive(Debug, Clone, Copy)]
    struct Badge {
        id: u32,
        name: &'static str,
    }

    impl PartialEq for Badge {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl Eq for Badge {}

    impl PartialOrd for Badge {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Badge {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.id.cmp(&other.id)
        }
    }

    const fn badge(id: u32, name: &'static str) -> Badge {
        Badge { id, name }
    }

    #[test]
    fn new_is_empty() {
        let seq: Sequence<i32> = Sequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.get_first(), Err(ListError::EmptyCollection));
        assert_eq!(seq.get_last(), Err(ListError::EmptyCollection));
        assert_links(&seq);
    }

    #[test]
    fn add_first_and_last() {
        let mut seq = Sequence::new();
        seq.add_last(2);
        seq.add_first(1);
        seq.add_last(3);
        assert_eq!(values(&seq), vec![1, 2, 3]);
        assert_eq!(seq.get_first(), Ok(&1));
        assert_eq!(seq.get_last(), Ok(&3));
        assert_links(&seq);
    }

    #[test]
    fn set_first_and_last_return_previous() {
        let mut seq = seq_of(&[1, 2, 3]);
        assert_eq!(seq.set_first(10), Ok(1));
        assert_eq!(seq.set_last(30), Ok(3));
        assert_eq!(values(&seq), vec![10, 2, 30]);

        let mut empty: Sequence<i32> = Sequence::new();
        assert_eq!(empty.set_first(1), Err(ListError::EmptyCollection));
        assert_eq!(empty.set_last(1), Err(ListError::EmptyCollection));
    }

    #[test]
    fn add_then_remove_round_trips() {
        let mut seq = seq_of(&[5, 6]);
        seq.add_last(7);
        assert_eq!(seq.remove_last(), Ok(7));
        assert_eq!(seq.len(), 2);
        seq.add_first(4);
        assert_eq!(seq.remove_first(), Ok(4));
        assert_eq!(values(&seq), vec![5, 6]);
        assert_links(&seq);

        let mut single = Sequence::new();
        single.add_last('x');
        assert_eq!(single.remove_last(), Ok('x'));
        assert!(single.is_empty());
        assert_links(&single);
        single.add_first('y');
        assert_eq!(single.remove_first(), Ok('y'));
        assert!(single.is_empty());
        assert_links(&single);
    }

    #[test]
    fn remove_from_empty_fails() {
        let mut seq: Sequence<i32> = Sequence::new();
        assert_eq!(seq.remove_first(), Err(ListError::EmptyCollection));
        assert_eq!(seq.remove_last(), Err(ListError::EmptyCollection));
        assert_eq!(seq.remove(1), Err(ListError::EmptyCollection));
        assert_eq!(seq.remove_value(&1), Err(ListError::EmptyCollection));
    }

    #[test]
    fn get_by_position_matches_traversal() {
        let seq = seq_of(&[10, 20, 30, 40]);
        for (i, v) in seq.iter().enumerate() {
            assert_eq!(seq.get(i + 1), Ok(v));
        }
        assert_eq!(seq.get(0), Err(ListError::InvalidArgument { position: 0 }));
        assert_eq!(
            seq.get(5),
            Err(ListError::OutOfRange {
                position: 5,
                len: 4
            })
        );
    }

    #[test]
    fn positional_errors_are_uniform() {
        let mut empty: Sequence<i32> = Sequence::new();
        assert_eq!(empty.get(1), Err(ListError::EmptyCollection));
        assert_eq!(empty.set(1, 1), Err(ListError::EmptyCollection));
        assert_eq!(empty.add_after(1, 1), Err(ListError::EmptyCollection));
        assert_eq!(empty.add_before(1, 1), Err(ListError::EmptyCollection));

        let mut seq = seq_of(&[1, 2]);
        let invalid = ListError::InvalidArgument { position: 0 };
        let beyond = ListError::OutOfRange {
            position: 3,
            len: 2,
        };
        assert_eq!(seq.set(9, 0), Err(invalid));
        assert_eq!(seq.remove(3), Err(beyond));
        assert_eq!(seq.add_after(9, 3), Err(beyond));
        assert_eq!(seq.add_before(9, 0), Err(invalid));
        assert_eq!(values(&seq), vec![1, 2]);
        assert_links(&seq);
    }

    #[test]
    fn set_by_position() {
        let mut seq = seq_of(&[1, 2, 3]);
        assert_eq!(seq.set(20, 2), Ok(2));
        assert_eq!(values(&seq), vec![1, 20, 3]);
    }

    #[test]
    fn remove_by_position_relinks_neighbours() {
        let mut seq = seq_of(&[1, 2, 3, 4, 5]);
        assert_eq!(seq.remove(3), Ok(3));
        assert_links(&seq);
        assert_eq!(seq.remove(1), Ok(1));
        assert_links(&seq);
        assert_eq!(seq.remove(3), Ok(5));
        assert_links(&seq);
        assert_eq!(values(&seq), vec![2, 4]);
        assert_eq!(seq.remove(1), Ok(2));
        assert_eq!(seq.remove(1), Ok(4));
        assert!(seq.is_empty());
        assert_links(&seq);
    }

    #[test]
    fn add_after_and_before_position() {
        let mut seq = seq_of(&[1, 3]);
        seq.add_after(2, 1).unwrap();
        seq.add_after(4, 3).unwrap();
        seq.add_before(0, 1).unwrap();
        seq.add_before(35, 4).unwrap();
        assert_eq!(values(&seq), vec![0, 1, 2, 35, 3, 4]);
        assert_eq!(seq.get_first(), Ok(&0));
        assert_eq!(seq.get_last(), Ok(&4));
        assert_links(&seq);
    }

    #[test]
    fn find_returns_first_match() {
        let seq: Sequence<Badge> = [badge(1, "ann"), badge(2, "bob"), badge(2, "cid")]
            .into_iter()
            .collect();
        assert_eq!(seq.find(&badge(2, "")).unwrap().name, "bob");
        assert_eq!(seq.find(&badge(9, "")), Err(ListError::NotFound));
        assert!(seq.contains(&badge(1, "")));
        assert!(!seq.contains(&badge(3, "")));
    }

    #[test]
    fn value_based_operations() {
        let mut seq = seq_of(&[1, 2, 3, 2]);
        assert_eq!(seq.replace(20, &2), Ok(2));
        assert_eq!(values(&seq), vec![1, 20, 3, 2]);

        seq.add_after_value(25, &20).unwrap();
        seq.add_before_value(0, &1).unwrap();
        seq.add_after_value(9, &2).unwrap();
        assert_eq!(values(&seq), vec![0, 1, 20, 25, 3, 2, 9]);

        assert_eq!(seq.remove_value(&3), Ok(3));
        assert_eq!(seq.remove_value(&0), Ok(0));
        assert_eq!(seq.remove_value(&9), Ok(9));
        assert_eq!(values(&seq), vec![1, 20, 25, 2]);
        assert_links(&seq);

        assert_eq!(seq.remove_value(&42), Err(ListError::NotFound));
        assert_eq!(seq.add_before_value(1, &42), Err(ListError::NotFound));
        assert_eq!(seq.replace(1, &42), Err(ListError::NotFound));
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn remove_value_only_removes_first_duplicate() {
        let mut seq = seq_of(&[7, 1, 7, 7]);
        assert_eq!(seq.remove_value(&7), Ok(7));
        assert_eq!(values(&seq), vec![1, 7, 7]);
        assert_links(&seq);
    }

    #[test]
    fn insert_keeps_ascending_order() {
        let mut seq = Sequence::new();
        for v in [5, 1, 4, 1, 9, 2, 6] {
            seq.insert(v);
            assert_links(&seq);
        }
        assert_eq!(values(&seq), vec![1, 1, 2, 4, 5, 6, 9]);
    }

    #[test]
    fn insert_places_new_value_before_equals() {
        let mut seq = Sequence::new();
        seq.insert(badge(2, "first"));
        seq.insert(badge(1, "low"));
        seq.insert(badge(2, "second"));
        seq.insert(badge(3, "high"));
        let names: Vec<_> = seq.iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["low", "second", "first", "high"]);
    }

    #[test]
    fn sort_ascending_is_stable() {
        let mut seq: Sequence<Badge> = [
            badge(3, "c1"),
            badge(1, "a1"),
            badge(3, "c2"),
            badge(2, "b1"),
            badge(1, "a2"),
            badge(3, "c3"),
        ]
        .into_iter()
        .collect();
        seq.sort_ascending();
        let names: Vec<_> = seq.iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["a1", "a2", "b1", "c1", "c2", "c3"]);
        assert_links(&seq);
    }

    #[test]
    fn sort_ascending_handles_trivial_lists() {
        let mut empty: Sequence<i32> = Sequence::new();
        empty.sort_ascending();
        assert!(empty.is_empty());
        assert_links(&empty);

        let mut single = seq_of(&[4]);
        single.sort_ascending();
        assert_eq!(values(&single), vec![4]);
        assert_links(&single);
    }

    #[test]
    fn sort_shuffled_inputs_preserves_multiset() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [2usize, 5, 16, 40] {
            let mut input: Vec<i32> = (0..len as i32).map(|v| v % 6).collect();
            input.shuffle(&mut rng);

            let mut seq = seq_of(&input);
            seq.sort_ascending();
            assert_links(&seq);

            let mut expected = input.clone();
            expected.sort();
            assert_eq!(values(&seq), expected);
        }
    }

    #[test]
    fn sort_reuses_nodes_after_mutation() {
        let mut seq = seq_of(&[4, 3, 2, 1]);
        seq.remove(2).unwrap();
        seq.add_before(8, 1).unwrap();
        seq.sort_ascending();
        assert_eq!(values(&seq), vec![1, 2, 4, 8]);
        seq.insert(3);
        assert_eq!(values(&seq), vec![1, 2, 3, 4, 8]);
        assert_links(&seq);
    }

    #[test]
    fn iterates_both_directions() {
        let seq = seq_of(&[1, 2, 3, 4]);
        let back: Vec<_> = seq.iter().rev().copied().collect();
        assert_eq!(back, vec![4, 3, 2, 1]);

        let mut it = seq.iter();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut seq = seq_of(&[1, 2, 3]);
        seq.clear();
        assert!(seq.is_empty());
        assert_links(&seq);
        seq.add_last(9);
        assert_eq!(values(&seq), vec![9]);
    }

    #[test]
    fn debug_lists_values() {
        let seq = seq_of(&[1, 2]);
        assert_eq!(format!("{seq:?}"), "[1, 2]");
    }

    /// Expected outcome of addressing `position` in a list of `len` values.
    fn position_check(len: usize, position: usize) -> Result<(), ListError> {
        if len == 0 {
            Err(ListError::EmptyCollection)
        } else if position < 1 {
            Err(ListError::InvalidArgument { position })
        } else if position > len {
            Err(ListError::OutOfRange { position, len })
        } else {
            Ok(())
        }
    }

    #[test]
    fn random_operations_match_vec_model() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seq = Sequence::new();
        let mut model: Vec<i32> = Vec::new();

        for _ in 0..4000 {
            let v = rng.random_range(0..20);
            let position = rng.random_range(0..=model.len() + 1);
            match rng.random_range(0..9) {
                0 => {
                    seq.add_first(v);
                    model.insert(0, v);
                }
                1 => {
                    seq.add_last(v);
                    model.push(v);
                }
                2 => {
                    let expected = position_check(model.len(), position);
                    assert_eq!(seq.add_after(v, position), expected);
                    if expected.is_ok() {
                        model.insert(position, v);
                    }
                }
                3 => {
                    let expected = position_check(model.len(), position);
                    assert_eq!(seq.add_before(v, position), expected);
                    if expected.is_ok() {
                        model.insert(position - 1, v);
                    }
                }
                4 => {
                    let expected = position_check(model.len(), position)
                        .map(|()| model.remove(position - 1));
                    assert_eq!(seq.remove(position), expected);
                }
                5 => {
                    let expected = match model.iter().position(|&x| x == v) {
                        Some(i) => Ok(model.remove(i)),
                        None if model.is_empty() => Err(ListError::EmptyCollection),
                        None => Err(ListError::NotFound),
                    };
                    assert_eq!(seq.remove_value(&v), expected);
                }
                6 => {
                    seq.insert(v);
                    let at = model.iter().position(|&x| x >= v).unwrap_or(model.len());
                    model.insert(at, v);
                }
                7 => {
                    let expected = if model.is_empty() {
                        Err(ListError::EmptyCollection)
                    } else {
                        Ok(model.remove(0))
                    };
                    assert_eq!(seq.remove_first(), expected);
                }
                _ => {
                    let expected = model.pop().ok_or(ListError::EmptyCollection);
                    assert_eq!(seq.remove_last(), expected);
                }
            }
            assert_links(&seq);
            assert_eq!(values(&seq), model);
        }
    }
}
