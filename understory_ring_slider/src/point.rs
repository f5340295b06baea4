// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring of scalar points.

use core::ops::ControlFlow;

use understory_ring::{Direction, NodeId, RingList};

use crate::types::{PointFlags, PointId, RangeEndpoint};

/// One draggable position on the circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingPoint {
    /// Position in the order the ring was built, starting at 0.
    pub index: usize,
    /// Value in `[min, max)` of the slider's interval.
    pub value: f64,
    /// Seam and wrap markers.
    pub flags: PointFlags,
    /// The range endpoint this point was flattened from, if any.
    pub source: Option<RangeEndpoint>,
}

/// Outcome of [`PointRing::update_cross_status`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossScan {
    /// Number of adjacent pairs whose values run against the ring order.
    pub crossings: usize,
    /// Point flagged [`PointFlags::CROSS`], when there is exactly one crossing.
    pub wrap: Option<PointId>,
}

impl CrossScan {
    /// True if the ring winds around the circle at most once.
    pub fn is_consistent(&self) -> bool {
        self.crossings <= 1
    }
}

/// Circular list of [`RingPoint`]s.
///
/// Traversal order is spatial order: following `next` from any point visits
/// the others clockwise.
#[derive(Clone, Debug, Default)]
pub struct PointRing {
    ring: RingList<RingPoint>,
}

impl PointRing {
    /// Create an empty ring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ring of free points, flagging the first `START` and the last `END`.
    pub fn from_values(values: &[f64]) -> Self {
        let mut ring = Self::new();
        let last = values.len().saturating_sub(1);
        for (i, &value) in values.iter().enumerate() {
            let mut flags = PointFlags::empty();
            flags.set(PointFlags::START, i == 0);
            flags.set(PointFlags::END, i == last);
            ring.append(value, flags, None);
        }
        ring
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// True if there are no points.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// First appended point still in the ring.
    pub fn head(&self) -> Option<PointId> {
        self.ring.head().map(PointId)
    }

    /// Append a point at the tail. Its `index` is the ring length before the append.
    pub fn append(
        &mut self,
        value: f64,
        flags: PointFlags,
        source: Option<RangeEndpoint>,
    ) -> PointId {
        let index = self.ring.len();
        PointId(self.ring.push_back(RingPoint {
            index,
            value,
            flags,
            source,
        }))
    }

    /// Borrow a point.
    pub fn get(&self, id: PointId) -> Option<&RingPoint> {
        self.ring.get(id.0)
    }

    /// Mutably borrow a point.
    pub fn get_mut(&mut self, id: PointId) -> Option<&mut RingPoint> {
        self.ring.get_mut(id.0)
    }

    /// Value of a point.
    pub fn value(&self, id: PointId) -> Option<f64> {
        self.get(id).map(|p| p.value)
    }

    /// Clockwise neighbour.
    pub fn next(&self, id: PointId) -> Option<PointId> {
        self.ring.next(id.0).map(PointId)
    }

    /// Counterclockwise neighbour.
    pub fn prev(&self, id: PointId) -> Option<PointId> {
        self.ring.prev(id.0).map(PointId)
    }

    /// Neighbour in `direction`.
    pub fn step(&self, id: PointId, direction: Direction) -> Option<PointId> {
        self.ring.step(id.0, direction).map(PointId)
    }

    /// Iterate from the head.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &RingPoint)> + '_ {
        self.ring.iter().map(|(id, p)| (PointId(id), p))
    }

    /// Iterate from `start` in `direction`.
    pub fn iter_from(
        &self,
        start: PointId,
        direction: Direction,
    ) -> impl Iterator<Item = (PointId, &RingPoint)> + '_ {
        self.ring
            .iter_from(start.0, direction)
            .map(|(id, p)| (PointId(id), p))
    }

    /// Values from the head, in ring order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.ring.iter().map(|(_, p)| p.value)
    }

    /// Visit points from `from` (or the head) until `body` breaks.
    pub fn traverse<B>(
        &self,
        from: Option<PointId>,
        direction: Direction,
        mut body: impl FnMut(PointId, &RingPoint) -> ControlFlow<B>,
    ) -> Option<B> {
        self.ring
            .traverse(from.map(|id| id.0), direction, |id, p| body(PointId(id), p))
    }

    /// First point flagged `START`.
    pub fn find_start(&self) -> Option<PointId> {
        self.ring
            .find(|p| p.flags.contains(PointFlags::START))
            .map(PointId)
    }

    /// First point flagged `END`.
    pub fn find_end(&self) -> Option<PointId> {
        self.ring
            .find(|p| p.flags.contains(PointFlags::END))
            .map(PointId)
    }

    /// Point with the given build index.
    pub fn find_index(&self, index: usize) -> Option<PointId> {
        self.ring.find(|p| p.index == index).map(PointId)
    }

    /// Remove a point.
    pub fn remove(&mut self, id: PointId) -> Option<RingPoint> {
        self.ring.remove(id.0)
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Recompute `CROSS` flags for movement in `direction`.
    ///
    /// Walking clockwise, values rise everywhere except across the seam. The point
    /// whose edge in `direction` runs against that trend is flagged. More than one
    /// such edge means the ring winds more than once; that is reported, not repaired.
    pub fn update_cross_status(&mut self, direction: Direction) -> CrossScan {
        let pairs: Vec<(NodeId, bool)> = self
            .ring
            .iter()
            .map(|(id, p)| {
                let next = self.ring.step(id, direction).unwrap_or(id);
                let next_value = self.ring.get(next).map_or(p.value, |n| n.value);
                let against = match direction {
                    Direction::Forward => p.value > next_value,
                    Direction::Backward => p.value < next_value,
                };
                (id, against)
            })
            .collect();

        let mut crossings = 0;
        let mut wrap = None;
        for (id, against) in pairs {
            let Some(point) = self.ring.get_mut(id) else {
                continue;
            };
            point.flags.set(PointFlags::CROSS, against);
            if against {
                crossings += 1;
                wrap = Some(PointId(id));
            }
        }
        if crossings > 1 {
            log::warn!("point ring crosses the seam {crossings} times, order is inconsistent");
            wrap = None;
        }
        CrossScan { crossings, wrap }
    }
}
