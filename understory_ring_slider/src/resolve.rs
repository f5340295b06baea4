// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Push resolution: move one point, shift its neighbours to keep them apart.
//!
//! ## Unwrapped frame
//!
//! The cascade measures every gap on the ring as it was before the drag and lays
//! the points out on a straight line starting at the dragged point's old value.
//! Positions are compared on that line and only wrapped into `[min, max)` when
//! written back, so the seam never needs special cases.
//!
//! ## Required gaps
//!
//! The separation a gap needs depends on the point it leaves clockwise:
//!
//! - a free point, or the start of a range: `D`;
//! - the end of a range: `0` (adjacent ranges may touch).
//!
//! A gap that was already narrower than that before the drag only has to keep
//! its old width. Together with the cascade stopping at the dragged point, this
//! keeps the clockwise order of the ring intact on every update.

use understory_ring::Direction;

use crate::geometry::MovementDirection;
use crate::interval::Interval;
use crate::point::{CrossScan, PointRing, RingPoint};
use crate::types::{Endpoint, PointId};

/// What a call to [`Resolver::resolve`] did.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// Committed value of the dragged point.
    pub value: f64,
    /// Direction the cascade ran in, `None` if the value did not change.
    pub direction: Option<Direction>,
    /// Neighbours that were pushed, in cascade order.
    pub pushed: Vec<PointId>,
    /// Wrap bookkeeping after the update.
    pub cross: CrossScan,
}

/// Range a point may be dragged within when pushing is disabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MovableWindow {
    /// Anywhere on the circle.
    Full,
    /// The clockwise arc of `length` starting at `start`.
    Arc {
        /// First allowed value.
        start: f64,
        /// Clockwise extent.
        length: f64,
    },
}

impl MovableWindow {
    /// True if `value` may be taken.
    pub fn contains(&self, interval: &Interval, value: f64) -> bool {
        match *self {
            Self::Full => true,
            Self::Arc { start, length } => interval.forward_distance(start, value) <= length,
        }
    }
}

/// Moves points on a [`PointRing`] while keeping them `min_distance` apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolver {
    interval: Interval,
    min_distance: Option<f64>,
}

impl Resolver {
    /// Create a resolver. `None` disables spacing: dragged points move alone.
    pub const fn new(interval: Interval, min_distance: Option<f64>) -> Self {
        Self {
            interval,
            min_distance,
        }
    }

    /// The value domain.
    pub const fn interval(&self) -> &Interval {
        &self.interval
    }

    /// The minimum separation, if enforced.
    pub const fn min_distance(&self) -> Option<f64> {
        self.min_distance
    }

    /// Move `dragged` to `candidate` and push neighbours out of the way.
    ///
    /// The candidate is wrapped into the interval first. The cascade runs in the
    /// direction of the shortest change from the old value. `movement`, the
    /// rotation of the touch sample, is only logged when it disagrees. At most
    /// `len - 1` neighbours are visited and the walk stops at the first gap that
    /// is wide enough.
    ///
    /// Returns `None` if `dragged` is not in `points`.
    pub fn resolve(
        &self,
        points: &mut PointRing,
        dragged: PointId,
        candidate: f64,
        movement: MovementDirection,
    ) -> Option<Resolution> {
        let old = points.value(dragged)?;
        let target = self.interval.wrap(candidate);
        let delta = self.interval.shortest_delta(old, target);
        let direction = cascade_direction(delta, movement);
        if let Some(point) = points.get_mut(dragged) {
            point.value = target;
        }

        let pushed = match (direction, self.min_distance) {
            (Some(direction), Some(distance)) => {
                self.push(points, dragged, old, delta, distance, direction)
            }
            _ => Vec::new(),
        };
        if !pushed.is_empty() {
            log::debug!(
                "moved point to {target}, pushed {} neighbour(s) {direction:?}",
                pushed.len()
            );
        }
        let cross = points.update_cross_status(direction.unwrap_or_default());
        Some(Resolution {
            value: target,
            direction,
            pushed,
            cross,
        })
    }

    fn push(
        &self,
        points: &mut PointRing,
        dragged: PointId,
        old: f64,
        delta: f64,
        distance: f64,
        direction: Direction,
    ) -> Vec<PointId> {
        let sign = match direction {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        };
        let mut pushed = Vec::new();
        let mut cursor = dragged;
        // Old and new position of `cursor` in the unwrapped frame.
        let mut cursor_old = old;
        let mut position = old + delta;

        for _ in 1..points.len() {
            let Some(neighbor) = points.step(cursor, direction) else {
                break;
            };
            if neighbor == dragged {
                break;
            }
            let (Some(&current), Some(&next)) = (points.get(cursor), points.get(neighbor)) else {
                break;
            };
            // `next.value` is still pre-drag: every point is written at most once.
            let (gap, leaving) = match direction {
                Direction::Forward => (
                    self.interval.forward_distance(cursor_old, next.value),
                    current,
                ),
                Direction::Backward => (
                    self.interval.forward_distance(next.value, cursor_old),
                    next,
                ),
            };
            let required = required_gap(&leaving, distance).min(gap);
            let neighbor_old = cursor_old + sign * gap;
            let clearance = sign * (neighbor_old - position);
            log::trace!("gap {gap}, clearance {clearance}, required {required}");
            if clearance >= required {
                break;
            }
            position += sign * required;
            if let Some(point) = points.get_mut(neighbor) {
                point.value = self.interval.wrap(position);
            }
            pushed.push(neighbor);
            cursor = neighbor;
            cursor_old = neighbor_old;
        }
        pushed
    }

    /// Where `id` may move without pushing.
    ///
    /// With a minimum distance `D`: from `previous + D` to `next - D`. Without: from
    /// `previous` to `next`. A lone point may go anywhere. If the neighbours
    /// leave no room the window is the point's current value.
    pub fn movable_window(&self, points: &PointRing, id: PointId) -> Option<MovableWindow> {
        let value = points.value(id)?;
        if points.len() == 1 {
            return Some(MovableWindow::Full);
        }
        let prev_id = points.prev(id)?;
        let next_id = points.next(id)?;
        let prev = points.value(prev_id)?;
        let next = points.value(next_id)?;
        let room = if prev_id == next_id {
            self.interval.span()
        } else {
            self.interval.forward_distance(prev, next)
        };
        let margin = self.min_distance.unwrap_or(0.0);
        let length = room - 2.0 * margin;
        if length < 0.0 {
            return Some(MovableWindow::Arc { start: value, length: 0.0 });
        }
        Some(MovableWindow::Arc {
            start: self.interval.wrap(prev + margin),
            length,
        })
    }
}

fn required_gap(leaving: &RingPoint, distance: f64) -> f64 {
    match leaving.source {
        Some(source) if source.endpoint == Endpoint::End => 0.0,
        _ => distance,
    }
}

fn cascade_direction(delta: f64, movement: MovementDirection) -> Option<Direction> {
    let by_value = if delta > 0.0 {
        Direction::Forward
    } else if delta < 0.0 {
        Direction::Backward
    } else {
        return None;
    };
    let by_touch = match movement {
        MovementDirection::Clockwise => Some(Direction::Forward),
        MovementDirection::Counterclockwise => Some(Direction::Backward),
        MovementDirection::Stationary => None,
    };
    if by_touch.is_some_and(|d| d != by_value) {
        log::debug!("touch moved {movement:?} but value moved {by_value:?}, following the value");
    }
    Some(by_value)
}
