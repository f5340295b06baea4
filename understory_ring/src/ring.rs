// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core ring implementation: arena slots, linking, traversal.

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::ControlFlow;

use crate::types::{Direction, NodeId};

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    next: usize,
    prev: usize,
    value: T,
}

/// Circular doubly-linked list stored in a dense arena.
///
/// Links are slot indices rather than references, so there is no ownership
/// between nodes: the list owns every node and nodes are peers.
///
/// ## Invariants
///
/// - Empty if and only if [`head`](Self::head) is `None`.
/// - A list of one node is its own `next` and `previous`.
/// - From any node, following `next` (or `previous`) [`len`](Self::len) times
///   returns to that node.
#[derive(Clone)]
pub struct RingList<T> {
    slots: Vec<Option<Slot<T>>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    head: Option<usize>,
    len: usize,
}

impl<T> core::fmt::Debug for RingList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RingList")
            .field("len", &self.len)
            .field("slots_total", &self.slots.len())
            .field("free_list", &self.free_list.len())
            .field("head", &self.head())
            .finish_non_exhaustive()
    }
}

impl<T> Default for RingList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RingList<T> {
    /// Create a new empty ring.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Create an empty ring with room for `n` nodes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            slots: Vec::with_capacity(n),
            generations: Vec::with_capacity(n),
            free_list: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Number of linked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the ring has no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The head node, where forward traversal starts by default.
    pub fn head(&self) -> Option<NodeId> {
        self.head.map(|idx| self.id_at(idx))
    }

    /// The node just before the head (the most recently appended one).
    pub fn tail(&self) -> Option<NodeId> {
        self.head.map(|idx| self.id_at(self.slot(idx).prev))
    }

    /// Returns true if `id` refers to a linked node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.resolve(id).is_some()
    }

    /// Borrow a node's value.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let idx = self.resolve(id)?;
        Some(&self.slot(idx).value)
    }

    /// Mutably borrow a node's value.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let idx = self.resolve(id)?;
        Some(&mut self.slot_mut(idx).value)
    }

    /// The node after `id`.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.step(id, Direction::Forward)
    }

    /// The node before `id`.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.step(id, Direction::Backward)
    }

    /// The neighbour of `id` in `direction`.
    pub fn step(&self, id: NodeId, direction: Direction) -> Option<NodeId> {
        let idx = self.resolve(id)?;
        Some(self.id_at(self.link(idx, direction)))
    }

    /// Append a node at the tail, i.e. just before the head.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let idx = self.alloc(value);
        match self.head {
            None => self.head = Some(idx),
            Some(head) => {
                let tail = self.slot(head).prev;
                self.link_between(tail, idx, head);
            }
        }
        self.len += 1;
        self.id_at(idx)
    }

    /// Insert a node right after `anchor`.
    ///
    /// Returns `None` (and drops nothing into the ring) if `anchor` is stale.
    pub fn insert_after(&mut self, anchor: NodeId, value: T) -> Option<NodeId> {
        let anchor = self.resolve(anchor)?;
        let next = self.slot(anchor).next;
        let idx = self.alloc(value);
        self.link_between(anchor, idx, next);
        self.len += 1;
        Some(self.id_at(idx))
    }

    /// Unlink a node and return its value.
    ///
    /// Removing the head moves the head to its successor; removing the last
    /// node empties the ring.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let idx = self.resolve(id)?;
        if self.len == 1 {
            self.head = None;
        } else {
            let (prev, next) = {
                let slot = self.slot(idx);
                (slot.prev, slot.next)
            };
            self.slot_mut(prev).next = next;
            self.slot_mut(next).prev = prev;
            if self.head == Some(idx) {
                self.head = Some(next);
            }
        }
        self.len -= 1;
        self.retire_or_free(idx);
        self.slots[idx].take().map(|slot| slot.value)
    }

    /// Remove every node whose value matches `pred`. Returns how many were removed.
    ///
    /// Matches are collected in one pass first, so several equal entries are all removed.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let doomed: Vec<NodeId> = self
            .iter()
            .filter(|(_, value)| pred(value))
            .map(|(id, _)| id)
            .collect();
        for id in &doomed {
            self.remove(*id);
        }
        doomed.len()
    }

    /// Remove all nodes. Previously issued ids stay stale.
    pub fn clear(&mut self) {
        for idx in 0..self.slots.len() {
            if self.slots[idx].take().is_some() {
                self.retire_or_free(idx);
            }
        }
        self.head = None;
        self.len = 0;
    }

    /// First node from the head (forward) whose value matches `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<NodeId> {
        self.iter()
            .find(|(_, value)| pred(value))
            .map(|(id, _)| id)
    }

    /// Iterate forward from the head, visiting each node once.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
            direction: Direction::Forward,
        }
    }

    /// Iterate from `start` in `direction`, visiting each node once.
    ///
    /// A stale `start` yields an empty iterator.
    pub fn iter_from(&self, start: NodeId, direction: Direction) -> Iter<'_, T> {
        let cursor = self.resolve(start);
        Iter {
            list: self,
            cursor,
            remaining: if cursor.is_some() { self.len } else { 0 },
            direction,
        }
    }

    /// Visit nodes from `from` (or the head) in `direction` until `body` breaks.
    ///
    /// Returns the break value, or `None` if the whole ring was visited.
    pub fn traverse<B>(
        &self,
        from: Option<NodeId>,
        direction: Direction,
        mut body: impl FnMut(NodeId, &T) -> ControlFlow<B>,
    ) -> Option<B> {
        let start = match from {
            Some(id) => id,
            None => self.head()?,
        };
        for (id, value) in self.iter_from(start, direction) {
            if let ControlFlow::Break(b) = body(id, value) {
                return Some(b);
            }
        }
        None
    }

    /// Like [`traverse`](Self::traverse), with mutable access to each value.
    ///
    /// Links cannot change during the walk, so it always ends after at most
    /// [`len`](Self::len) steps.
    pub fn traverse_mut<B>(
        &mut self,
        from: Option<NodeId>,
        direction: Direction,
        mut body: impl FnMut(NodeId, &mut T) -> ControlFlow<B>,
    ) -> Option<B> {
        let mut cursor = match from {
            Some(id) => self.resolve(id)?,
            None => self.head?,
        };
        for _ in 0..self.len {
            let id = self.id_at(cursor);
            let slot = self.slot_mut(cursor);
            if let ControlFlow::Break(b) = body(id, &mut slot.value) {
                return Some(b);
            }
            cursor = self.link(cursor, direction);
        }
        None
    }

    // --- internals ---

    fn alloc(&mut self, value: T) -> usize {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx] + 1;
            self.generations[idx] = generation;
            self.slots[idx] = Some(Slot {
                generation,
                next: idx,
                prev: idx,
                value,
            });
            idx
        } else {
            let idx = self.slots.len();
            self.slots.push(Some(Slot {
                generation: 1,
                next: idx,
                prev: idx,
                value,
            }));
            self.generations.push(1);
            idx
        }
    }

    /// Queue a freed slot for reuse, unless its generation is exhausted.
    ///
    /// A slot at `u32::MAX` is never handed out again, so no id can alias.
    fn retire_or_free(&mut self, idx: usize) {
        if self.generations[idx] < u32::MAX {
            self.free_list.push(idx);
        }
    }

    fn link_between(&mut self, prev: usize, idx: usize, next: usize) {
        {
            let slot = self.slot_mut(idx);
            slot.prev = prev;
            slot.next = next;
        }
        self.slot_mut(prev).next = idx;
        self.slot_mut(next).prev = idx;
    }

    fn resolve(&self, id: NodeId) -> Option<usize> {
        let slot = self.slots.get(id.idx())?.as_ref()?;
        (slot.generation == id.1).then_some(id.idx())
    }

    fn link(&self, idx: usize, direction: Direction) -> usize {
        let slot = self.slot(idx);
        match direction {
            Direction::Forward => slot.next,
            Direction::Backward => slot.prev,
        }
    }

    fn id_at(&self, idx: usize) -> NodeId {
        NodeId::new(idx, self.slot(idx).generation)
    }

    /// Linked slots only ever point at linked slots.
    fn slot(&self, idx: usize) -> &Slot<T> {
        self.slots[idx].as_ref().expect("ring link points at a free slot")
    }

    fn slot_mut(&mut self, idx: usize) -> &mut Slot<T> {
        self.slots[idx].as_mut().expect("ring link points at a free slot")
    }
}

impl<T> FromIterator<T> for RingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut ring = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            ring.push_back(value);
        }
        ring
    }
}

impl<T> Extend<T> for RingList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a RingList<T> {
    type Item = (NodeId, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(NodeId, &T)` pairs, visiting each node of the ring once.
///
/// Created by [`RingList::iter`] and [`RingList::iter_from`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    list: &'a RingList<T>,
    cursor: Option<usize>,
    remaining: usize,
    direction: Direction,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.cursor?;
        let list = self.list;
        let slot = list.slot(idx);
        self.remaining -= 1;
        self.cursor = Some(list.link(idx, self.direction));
        Some((NodeId::new(idx, slot.generation), &slot.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
