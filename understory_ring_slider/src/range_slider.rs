// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring slider over `(start, end)` ranges.

use core::ops::ControlFlow;
use core::time::Duration;

use kurbo::Point;
use understory_ring::Direction;

use crate::config::SliderConfig;
use crate::convert::{Span, points_to_ranges, ranges_to_points, spans};
use crate::error::ConfigError;
use crate::geometry::{Circle, classify_movement, thumb_contains};
use crate::interval::Interval;
use crate::range::{RangeRing, RingRange};
use crate::resolve::Resolver;
use crate::session::{DragSession, SliderEvent};
use crate::types::{Endpoint, RangeEndpoint, RangeId};

/// A ring slider whose thumbs are the two ends of each range.
///
/// Dragging an end pushes the ranges ahead of it: a range keeps at least
/// `min_distance` between its start and end, while neighbouring ranges may
/// touch but not overlap.
#[derive(Clone, Debug)]
pub struct RangeSlider<M = ()> {
    config: SliderConfig,
    interval: Interval,
    resolver: Resolver,
    ranges: RangeRing<M>,
}

impl<M> RangeSlider<M> {
    /// Create an empty slider.
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        let interval = config.validate()?;
        Ok(Self {
            resolver: config.resolver(interval),
            interval,
            config,
            ranges: RangeRing::new(),
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Replace the configuration. Stored values are left as they are.
    pub fn set_config(&mut self, config: SliderConfig) -> Result<(), ConfigError> {
        let interval = config.validate()?;
        self.resolver = config.resolver(interval);
        self.interval = interval;
        self.config = config;
        Ok(())
    }

    /// Enable or disable touch and tap handling.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// The value domain.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// The ranges, in caller order.
    pub fn ranges(&self) -> &RangeRing<M> {
        &self.ranges
    }

    /// Replace all ranges. Values are wrapped into the interval.
    pub fn set_ranges(
        &mut self,
        ranges: impl IntoIterator<Item = (f64, f64, M)>,
    ) -> Vec<SliderEvent> {
        let interval = self.interval;
        self.ranges = ranges
            .into_iter()
            .map(|(start, end, meta)| {
                RingRange::new(interval.wrap(start), interval.wrap(end), meta)
            })
            .collect();
        vec![SliderEvent::ValueChanged]
    }

    /// Recompute every thumb centre from its value.
    pub fn layout_thumbs(&mut self, circle: &Circle) {
        let interval = self.interval;
        let _: Option<()> = self.ranges.traverse_mut(None, Direction::Forward, |_, range| {
            range.start_thumb_center = circle.point_at_value(&interval, range.start);
            range.end_thumb_center = circle.point_at_value(&interval, range.end);
            ControlFlow::Continue(())
        });
    }

    /// The thumb under `touch`, using the last laid-out centres.
    ///
    /// Ranges are tried in ring order, the start thumb before the end thumb.
    pub fn hit_thumb(&self, circle: &Circle, touch: Point) -> Option<RangeEndpoint> {
        let hit = |center: Point| {
            thumb_contains(
                circle.origin(),
                center,
                self.config.thumb_radius,
                self.config.angular_tolerance_degrees,
                touch,
            )
        };
        self.ranges.iter().find_map(|(range, r)| {
            [Endpoint::Start, Endpoint::End]
                .into_iter()
                .find(|&endpoint| hit(r.thumb_center(endpoint)))
                .map(|endpoint| RangeEndpoint { range, endpoint })
        })
    }

    /// Start a drag if `touch` grabs a thumb.
    pub fn touch_begin(
        &mut self,
        session: &mut DragSession<RangeEndpoint>,
        circle: &Circle,
        touch: Point,
        now: Duration,
    ) -> Vec<SliderEvent> {
        if !self.config.enabled {
            return Vec::new();
        }
        self.layout_thumbs(circle);
        match self.hit_thumb(circle, touch) {
            Some(thumb) => {
                session.arm(thumb, now, touch);
                vec![SliderEvent::EditingBegan]
            }
            None => Vec::new(),
        }
    }

    /// Follow the finger with the grabbed thumb, pushing neighbours as needed.
    pub fn touch_move(
        &mut self,
        session: &mut DragSession<RangeEndpoint>,
        circle: &Circle,
        touch: Point,
        now: Duration,
    ) -> Vec<SliderEvent> {
        let Some(sample) = session.sample(now, touch, self.config.settle_delay) else {
            return Vec::new();
        };
        let thumb = sample.selected;
        let Some(old) = self.ranges.get(thumb.range).map(|r| r.endpoint(thumb.endpoint)) else {
            log::debug!("grabbed range no longer exists");
            session.end();
            return Vec::new();
        };
        let raw = self.interval.value_from_touch(old, touch, circle.origin());
        let candidate = self.config.quantize(&self.interval, raw);
        let movement = classify_movement(sample.previous_touch, touch, circle.origin());

        let Some((mut points, dragged)) =
            ranges_to_points(&self.ranges, thumb.range, thumb.endpoint)
        else {
            return Vec::new();
        };
        if self
            .resolver
            .resolve(&mut points, dragged, candidate, movement)
            .is_none()
        {
            return Vec::new();
        }
        points_to_ranges(&points, &mut self.ranges);
        self.layout_thumbs(circle);
        vec![SliderEvent::ValueChanged]
    }

    /// Release the grabbed thumb.
    pub fn touch_end(&mut self, session: &mut DragSession<RangeEndpoint>) -> Vec<SliderEvent> {
        if session.end() {
            vec![SliderEvent::EditingEnded]
        } else {
            Vec::new()
        }
    }

    /// Show the thumbs of the range under `point` and hide all others.
    pub fn tap(&mut self, circle: &Circle, point: Point) -> Vec<SliderEvent> {
        if !self.config.enabled {
            return Vec::new();
        }
        let Some(target) = self.range_at(circle, point) else {
            return Vec::new();
        };
        let _: Option<()> = self.ranges.traverse_mut(None, Direction::Forward, |id, range| {
            range.show_thumb = id == target;
            ControlFlow::Continue(())
        });
        vec![SliderEvent::ValueChanged]
    }

    /// First range whose arc on the track contains `point`.
    pub fn range_at(&self, circle: &Circle, point: Point) -> Option<RangeId> {
        self.ranges
            .iter()
            .find(|(_, r)| {
                circle.arc_contains(&self.interval, r.start, r.end, self.config.track_width, point)
            })
            .map(|(id, _)| id)
    }

    /// Ranges in ring order, with the uncovered gaps between them if asked.
    pub fn spans(&self, include_gaps: bool) -> Vec<Span<M>>
    where
        M: Clone,
    {
        spans(&self.ranges, include_gaps)
    }
}
