// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring of `(start, end)` ranges.

use core::ops::ControlFlow;

use kurbo::Point;
use understory_ring::{Direction, RingList};

use crate::types::{Endpoint, RangeId};

/// A selectable arc from `start` clockwise to `end`.
///
/// `end < start` is a range that crosses the seam. `meta` is caller data
/// (colour, category) that the model carries but never reads.
#[derive(Clone, Debug, PartialEq)]
pub struct RingRange<M = ()> {
    /// Start value.
    pub start: f64,
    /// End value.
    pub end: f64,
    /// Caller data.
    pub meta: M,
    /// Whether the range currently shows its thumbs.
    pub show_thumb: bool,
    /// Last laid-out centre of the start thumb.
    pub start_thumb_center: Point,
    /// Last laid-out centre of the end thumb.
    pub end_thumb_center: Point,
}

impl<M> RingRange<M> {
    /// Create a range with thumbs shown and centres not yet laid out.
    pub fn new(start: f64, end: f64, meta: M) -> Self {
        Self {
            start,
            end,
            meta,
            show_thumb: true,
            start_thumb_center: Point::ORIGIN,
            end_thumb_center: Point::ORIGIN,
        }
    }

    /// Value of one end.
    pub fn endpoint(&self, endpoint: Endpoint) -> f64 {
        match endpoint {
            Endpoint::Start => self.start,
            Endpoint::End => self.end,
        }
    }

    /// Set the value of one end.
    pub fn set_endpoint(&mut self, endpoint: Endpoint, value: f64) {
        match endpoint {
            Endpoint::Start => self.start = value,
            Endpoint::End => self.end = value,
        }
    }

    /// Laid-out centre of one end's thumb.
    pub fn thumb_center(&self, endpoint: Endpoint) -> Point {
        match endpoint {
            Endpoint::Start => self.start_thumb_center,
            Endpoint::End => self.end_thumb_center,
        }
    }
}

/// Circular list of [`RingRange`]s in caller order.
///
/// Ranges are never re-sorted. Push resolution assumes the caller's order is
/// the clockwise order of the ranges around the circle.
#[derive(Clone, Debug)]
pub struct RangeRing<M = ()> {
    ring: RingList<RingRange<M>>,
}

impl<M> Default for RangeRing<M> {
    fn default() -> Self {
        Self {
            ring: RingList::new(),
        }
    }
}

impl<M> RangeRing<M> {
    /// Create an empty ring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ranges.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// True if there are no ranges.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// First range in ring order.
    pub fn head(&self) -> Option<RangeId> {
        self.ring.head().map(RangeId)
    }

    /// Append at the tail.
    pub fn append(&mut self, range: RingRange<M>) -> RangeId {
        RangeId(self.ring.push_back(range))
    }

    /// Insert right after `anchor`. `None` if `anchor` is stale.
    pub fn insert_after(&mut self, anchor: RangeId, range: RingRange<M>) -> Option<RangeId> {
        self.ring.insert_after(anchor.0, range).map(RangeId)
    }

    /// Remove a range.
    pub fn remove(&mut self, id: RangeId) -> Option<RingRange<M>> {
        self.ring.remove(id.0)
    }

    /// Remove every range whose bounds equal `(start, end)`. Returns how many went.
    pub fn remove_where(&mut self, start: f64, end: f64) -> usize {
        self.ring.remove_where(|r| r.start == start && r.end == end)
    }

    /// Remove every range.
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Borrow a range.
    pub fn get(&self, id: RangeId) -> Option<&RingRange<M>> {
        self.ring.get(id.0)
    }

    /// Mutably borrow a range.
    pub fn get_mut(&mut self, id: RangeId) -> Option<&mut RingRange<M>> {
        self.ring.get_mut(id.0)
    }

    /// True if `id` refers to a range in this ring.
    pub fn contains(&self, id: RangeId) -> bool {
        self.ring.contains(id.0)
    }

    /// Next range in ring order.
    pub fn next(&self, id: RangeId) -> Option<RangeId> {
        self.ring.next(id.0).map(RangeId)
    }

    /// Previous range in ring order.
    pub fn prev(&self, id: RangeId) -> Option<RangeId> {
        self.ring.prev(id.0).map(RangeId)
    }

    /// First range from the head whose start equals `value`.
    pub fn find_by_start(&self, value: f64) -> Option<RangeId> {
        self.ring.find(|r| r.start == value).map(RangeId)
    }

    /// First range from the head whose end equals `value`.
    pub fn find_by_end(&self, value: f64) -> Option<RangeId> {
        self.ring.find(|r| r.end == value).map(RangeId)
    }

    /// Iterate from the head.
    pub fn iter(&self) -> impl Iterator<Item = (RangeId, &RingRange<M>)> + '_ {
        self.ring.iter().map(|(id, r)| (RangeId(id), r))
    }

    /// Iterate from `start` in `direction`.
    pub fn iter_from(
        &self,
        start: RangeId,
        direction: Direction,
    ) -> impl Iterator<Item = (RangeId, &RingRange<M>)> + '_ {
        self.ring
            .iter_from(start.0, direction)
            .map(|(id, r)| (RangeId(id), r))
    }

    /// Visit ranges from `from` (or the head) in `direction` until `body` breaks.
    pub fn traverse<B>(
        &self,
        from: Option<RangeId>,
        direction: Direction,
        mut body: impl FnMut(RangeId, &RingRange<M>) -> ControlFlow<B>,
    ) -> Option<B> {
        self.ring
            .traverse(from.map(|id| id.0), direction, |id, r| body(RangeId(id), r))
    }

    /// Like [`traverse`](Self::traverse), with mutable access.
    pub fn traverse_mut<B>(
        &mut self,
        from: Option<RangeId>,
        direction: Direction,
        mut body: impl FnMut(RangeId, &mut RingRange<M>) -> ControlFlow<B>,
    ) -> Option<B> {
        self.ring
            .traverse_mut(from.map(|id| id.0), direction, |id, r| {
                body(RangeId(id), r)
            })
    }
}

impl<M> FromIterator<RingRange<M>> for RangeRing<M> {
    fn from_iter<I: IntoIterator<Item = RingRange<M>>>(iter: I) -> Self {
        Self {
            ring: iter.into_iter().collect(),
        }
    }
}
