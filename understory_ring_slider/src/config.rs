// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration.

use core::time::Duration;

use crate::error::ConfigError;
use crate::interval::Interval;
use crate::resolve::Resolver;

/// What happens when a dragged point reaches a neighbour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollisionPolicy {
    /// Shift neighbours ahead of the drag to keep them `min_distance` apart.
    #[default]
    Push,
    /// Stop the dragged point at its neighbours; samples outside the
    /// [`MovableWindow`](crate::MovableWindow) are ignored.
    Clamp,
}

/// Configuration shared by both slider kinds.
///
/// | Field | Default |
/// |---|---|
/// | `minimum_value` | `0.0` |
/// | `maximum_value` | `1.0` |
/// | `rounds` | `1` |
/// | `step` | `None` |
/// | `min_distance` | `None` |
/// | `settle_delay` | zero |
/// | `thumb_radius` | `15.0` |
/// | `angular_tolerance_degrees` | `15.0` |
/// | `track_width` | `10.0` |
/// | `max_thumb_count` | `usize::MAX` |
/// | `collision` | [`CollisionPolicy::Push`] |
/// | `enabled` | `true` |
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Lower bound of the value domain.
    pub minimum_value: f64,
    /// Upper bound; the same circular position as `minimum_value`.
    pub maximum_value: f64,
    /// Turns of the circle the domain spans.
    pub rounds: u32,
    /// Candidate values snap to multiples of this.
    pub step: Option<f64>,
    /// Minimum separation between adjacent points; `None` lets points pass each other.
    pub min_distance: Option<f64>,
    /// Touch moves this soon after touch-begin are not resolved.
    pub settle_delay: Duration,
    /// Half-size of a thumb's hit square.
    pub thumb_radius: f64,
    /// Angular slack for grabbing a thumb, in degrees.
    pub angular_tolerance_degrees: f64,
    /// Width of the track, for tap hit testing.
    pub track_width: f64,
    /// Most points a multi-point slider accepts.
    pub max_thumb_count: usize,
    /// Push or clamp on collision.
    pub collision: CollisionPolicy,
    /// A disabled slider ignores touches and taps.
    pub enabled: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum_value: 0.0,
            maximum_value: 1.0,
            rounds: 1,
            step: None,
            min_distance: None,
            settle_delay: Duration::ZERO,
            thumb_radius: 15.0,
            angular_tolerance_degrees: 15.0,
            track_width: 10.0,
            max_thumb_count: usize::MAX,
            collision: CollisionPolicy::Push,
            enabled: true,
        }
    }
}

impl SliderConfig {
    /// A config over `[minimum, maximum)` with every other field defaulted.
    pub fn with_bounds(minimum_value: f64, maximum_value: f64) -> Self {
        Self {
            minimum_value,
            maximum_value,
            ..Self::default()
        }
    }

    /// Check every field and return the value interval.
    pub fn validate(&self) -> Result<Interval, ConfigError> {
        let interval = Interval::new(self.minimum_value, self.maximum_value, self.rounds)?;
        if let Some(step) = self.step.filter(|s| *s <= 0.0 || s.is_nan()) {
            return Err(ConfigError::NonPositiveStep(step));
        }
        if let Some(distance) = self.min_distance.filter(|d| *d < 0.0 || d.is_nan()) {
            return Err(ConfigError::NegativeMinDistance(distance));
        }
        if self.thumb_radius < 0.0 || self.thumb_radius.is_nan() {
            return Err(ConfigError::NegativeThumbRadius(self.thumb_radius));
        }
        Ok(interval)
    }

    /// Resolver for a validated interval.
    pub(crate) fn resolver(&self, interval: Interval) -> Resolver {
        Resolver::new(interval, self.min_distance)
    }

    /// Snap `value` to the step grid, if any.
    pub(crate) fn quantize(&self, interval: &Interval, value: f64) -> f64 {
        match self.step {
            Some(step) => interval.quantize(value, step),
            None => interval.wrap(value),
        }
    }
}
