// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring slider over free points.

use core::time::Duration;

use kurbo::Point;

use crate::config::{CollisionPolicy, SliderConfig};
use crate::error::ConfigError;
use crate::geometry::{Circle, classify_movement, thumb_contains};
use crate::interval::Interval;
use crate::point::PointRing;
use crate::resolve::{MovableWindow, Resolver};
use crate::session::{DragSession, SliderEvent};
use crate::types::PointId;

/// A ring slider with one thumb per value.
#[derive(Clone, Debug)]
pub struct MultiPointSlider {
    config: SliderConfig,
    interval: Interval,
    resolver: Resolver,
    points: PointRing,
}

impl MultiPointSlider {
    /// Create a slider with no points.
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        let interval = config.validate()?;
        Ok(Self {
            resolver: config.resolver(interval),
            interval,
            config,
            points: PointRing::new(),
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

    /// Enable or disable touch handling.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// The value domain.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// The points in the order they were given.
    pub fn points(&self) -> &PointRing {
        &self.points
    }

    /// Current values in the order they were given.
    pub fn values(&self) -> Vec<f64> {
        self.points.values().collect()
    }

    /// Replace all points. Values are wrapped into the interval.
    ///
    /// More than `max_thumb_count` values is an error and keeps the old points.
    pub fn set_values(&mut self, values: &[f64]) -> Result<Vec<SliderEvent>, ConfigError> {
        if values.len() > self.config.max_thumb_count {
            return Err(ConfigError::TooManyThumbs {
                count: values.len(),
                max: self.config.max_thumb_count,
            });
        }
        let wrapped: Vec<f64> = values.iter().map(|&v| self.interval.wrap(v)).collect();
        self.points = PointRing::from_values(&wrapped);
        Ok(vec![SliderEvent::ValueChanged])
    }

    /// Where `id` may be dragged under [`CollisionPolicy::Clamp`].
    pub fn movable_window(&self, id: PointId) -> Option<MovableWindow> {
        self.resolver.movable_window(&self.points, id)
    }

    /// The thumb under `touch`; points are tried in ring order.
    pub fn hit_thumb(&self, circle: &Circle, touch: Point) -> Option<PointId> {
        self.points
            .iter()
            .find(|(_, p)| {
                thumb_contains(
                    circle.origin(),
                    circle.point_at_value(&self.interval, p.value),
                    self.config.thumb_radius,
                    self.config.angular_tolerance_degrees,
                    touch,
                )
            })
            .map(|(id, _)| id)
    }

    /// Start a drag if `touch` grabs a thumb.
    pub fn touch_begin(
        &mut self,
        session: &mut DragSession<PointId>,
        circle: &Circle,
        touch: Point,
        now: Duration,
    ) -> Vec<SliderEvent> {
        if !self.config.enabled {
            return Vec::new();
        }
        match self.hit_thumb(circle, touch) {
            Some(id) => {
                session.arm(id, now, touch);
                vec![SliderEvent::EditingBegan]
            }
            None => Vec::new(),
        }
    }

    /// Follow the finger with the grabbed thumb.
    pub fn touch_move(
        &mut self,
        session: &mut DragSession<PointId>,
        circle: &Circle,
        touch: Point,
        now: Duration,
    ) -> Vec<SliderEvent> {
        let Some(sample) = session.sample(now, touch, self.config.settle_delay) else {
            return Vec::new();
        };
        let id = sample.selected;
        let Some(old) = self.points.value(id) else {
            session.end();
            return Vec::new();
        };
        let raw = self.interval.value_from_touch(old, touch, circle.origin());
        let candidate = self.config.quantize(&self.interval, raw);
        let movement = classify_movement(sample.previous_touch, touch, circle.origin());

        match self.config.collision {
            CollisionPolicy::Push => {
                if self
                    .resolver
                    .resolve(&mut self.points, id, candidate, movement)
                    .is_none()
                {
                    return Vec::new();
                }
            }
            CollisionPolicy::Clamp => {
                let inside = self
                    .movable_window(id)
                    .is_some_and(|w| w.contains(&self.interval, candidate));
                if !inside {
                    log::trace!("sample {candidate} outside the movable window, ignored");
                    return Vec::new();
                }
                let passthrough = Resolver::new(self.interval, None);
                passthrough.resolve(&mut self.points, id, candidate, movement);
            }
        }
        vec![SliderEvent::ValueChanged]
    }

    /// Release the grabbed thumb.
    pub fn touch_end(&mut self, session: &mut DragSession<PointId>) -> Vec<SliderEvent> {
        if session.end() {
            vec![SliderEvent::EditingEnded]
        } else {
            Vec::new()
        }
    }
}
