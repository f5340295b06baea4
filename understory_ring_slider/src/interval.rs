// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value domain and the value ↔ angle mapping.

use core::f64::consts::{PI, TAU};

use kurbo::Point;

use crate::error::IntervalError;
use crate::geometry::TOP_ANGLE;

/// A value domain `[min, max)` laid around the circle `rounds` times.
///
/// `max` and `min` denote the same circular position; stored values are
/// normalised onto `min` by [`wrap`](Self::wrap).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
    rounds: u32,
}

impl Interval {
    /// One turn of the circle in radians.
    pub const ANGLE: Self = Self {
        min: 0.0,
        max: TAU,
        rounds: 1,
    };

    /// Create an interval.
    pub fn new(min: f64, max: f64, rounds: u32) -> Result<Self, IntervalError> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(IntervalError::InvertedBounds { min, max });
        }
        if rounds == 0 {
            return Err(IntervalError::ZeroRounds);
        }
        Ok(Self { min, max, rounds })
    }

    /// Lower bound.
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound, the same circular position as [`min`](Self::min).
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// How many turns of the circle the domain spans.
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Amount of value covered by one turn of the circle.
    pub fn turn(&self) -> f64 {
        self.span() / f64::from(self.rounds)
    }

    /// Bring `value` into `[min, max)`.
    pub fn wrap(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return self.min;
        }
        let wrapped = self.min + (value - self.min).rem_euclid(span);
        // rem_euclid can round up to `span` for tiny negative inputs.
        if wrapped >= self.max {
            self.min
        } else {
            wrapped
        }
    }

    /// Round `value` to the nearest multiple of `step`, then wrap.
    ///
    /// The grid is anchored at zero, not at `min`.
    pub fn quantize(&self, value: f64, step: f64) -> f64 {
        self.wrap((value / step).round() * step)
    }

    /// Clockwise distance in `[0, span)` from `from` to `to`.
    pub fn forward_distance(&self, from: f64, to: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        (to - from).rem_euclid(span)
    }

    /// Signed shortest change from `from` to `to`, positive when clockwise.
    ///
    /// The result lies in `(-span / 2, span / 2]`.
    pub fn shortest_delta(&self, from: f64, to: f64) -> f64 {
        let span = self.span();
        let forward = self.forward_distance(from, to);
        if forward > span / 2.0 {
            forward - span
        } else {
            forward
        }
    }

    /// True if `value` lies on the clockwise arc from `start` to `end`, bounds included.
    pub fn arc_contains(&self, start: f64, end: f64, value: f64) -> bool {
        self.forward_distance(start, value) <= self.forward_distance(start, end)
    }

    /// Angle in `[0, 2π]` of `value`, clockwise from the start of the domain.
    pub fn to_angle(&self, value: f64) -> f64 {
        scale_value(value, self, &Self::ANGLE)
    }

    /// Value of an angle measured clockwise from the start of the domain.
    pub fn from_angle(&self, angle: f64) -> f64 {
        scale_value(angle, &Self::ANGLE, self)
    }

    /// New value for a thumb at `old` after the finger moved to `touch`.
    ///
    /// The thumb follows the finger by the shortest rotation, so a drag
    /// across 12 o'clock keeps counting instead of jumping back a whole turn.
    pub fn value_from_touch(&self, old: f64, touch: Point, center: Point) -> f64 {
        let touch_angle = ((touch - center).atan2() - TOP_ANGLE).rem_euclid(TAU);
        let old_angle = self.to_angle(old).rem_euclid(TAU);
        let delta = shortest_angular_delta(old_angle, touch_angle);
        self.wrap(old + delta / TAU * self.turn())
    }
}

/// Map `value` from `source` into `destination`.
///
/// The exact bounds map to the exact bounds. Anything else is reduced modulo
/// one turn of `source` and rescaled onto one turn of `destination`.
pub fn scale_value(value: f64, source: &Interval, destination: &Interval) -> f64 {
    if value == source.min {
        return destination.min;
    }
    if value == source.max {
        return destination.max;
    }
    let source_turn = source.turn();
    if source_turn <= 0.0 {
        return destination.min;
    }
    let offset = (value - source.min).rem_euclid(source_turn);
    destination.min + offset / source_turn * destination.turn()
}

/// Minimal signed rotation from angle `from` to angle `to`, in `(-π, π]`.
///
/// Positive is clockwise.
pub fn shortest_angular_delta(from: f64, to: f64) -> f64 {
    let d = (to - from).rem_euclid(TAU);
    if d > PI { d - TAU } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: f64 = 86_400.0;

    fn day() -> Interval {
        Interval::new(0.0, DAY, 1).unwrap()
    }

    #[test]
    fn rejects_invalid_bounds() {
        assert_eq!(
            Interval::new(5.0, 1.0, 1),
            Err(IntervalError::InvertedBounds { min: 5.0, max: 1.0 })
        );
        assert_eq!(Interval::new(0.0, 1.0, 0), Err(IntervalError::ZeroRounds));
        assert!(Interval::new(f64::NAN, 1.0, 1).is_err(), "NaN bounds are inverted");
    }

    #[test]
    fn bounds_map_exactly() {
        let i = day();
        assert_eq!(i.to_angle(0.0), 0.0);
        assert_eq!(i.to_angle(DAY), TAU);
        assert_eq!(i.from_angle(TAU), DAY);
        assert!((i.to_angle(DAY / 4.0) - TAU / 4.0).abs() < 1e-12);
    }

    #[test]
    fn rounds_divide_the_turn() {
        let two_days = Interval::new(0.0, 2.0 * DAY, 2).unwrap();
        let a = two_days.to_angle(DAY / 2.0);
        let b = two_days.to_angle(DAY + DAY / 2.0);
        assert!((a - PI).abs() < 1e-12, "half a day is half a turn, got {a}");
        assert!((b - PI).abs() < 1e-12, "second round lands on the same angle, got {b}");
    }

    #[test]
    fn wrap_normalises_max_to_min() {
        let i = Interval::new(10.0, 20.0, 1).unwrap();
        assert_eq!(i.wrap(20.0), 10.0);
        assert_eq!(i.wrap(21.0), 11.0);
        assert_eq!(i.wrap(9.0), 19.0);
    }

    #[test]
    fn quantize_rounds_to_step() {
        let i = day();
        assert_eq!(i.quantize(1_790.0, 900.0), 1_800.0);
        assert_eq!(i.quantize(86_300.0, 900.0), 0.0, "rounding up to max wraps");
    }

    #[test]
    fn quantize_grid_ignores_the_lower_bound() {
        let i = Interval::new(1.0, 101.0, 1).unwrap();
        assert_eq!(i.quantize(52.4, 5.0), 50.0, "nearest multiple of the step");
        assert_eq!(i.quantize(98.0, 5.0), 100.0, "100 is inside [1, 101)");
        assert_eq!(i.quantize(102.0, 5.0), 100.0, "100 is inside [1, 101)");
        assert_eq!(i.quantize(1.2, 5.0), 100.0, "0 lies below min and wraps to 100");
    }

    #[test]
    fn shortest_angular_delta_picks_the_short_way() {
        let d = shortest_angular_delta(0.1, TAU - 0.1);
        assert!((d + 0.2).abs() < 1e-12, "going back over 12 o'clock, got {d}");
        let d = shortest_angular_delta(TAU - 0.1, 0.1);
        assert!((d - 0.2).abs() < 1e-12, "going forward over 12 o'clock, got {d}");
        assert_eq!(shortest_angular_delta(1.0, 1.0), 0.0);
        assert!((shortest_angular_delta(0.0, PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn shortest_value_delta_wraps() {
        let i = day();
        assert_eq!(i.shortest_delta(86_000.0, 400.0), 800.0);
        assert_eq!(i.shortest_delta(400.0, 86_000.0), -800.0);
        assert_eq!(i.forward_distance(400.0, 86_000.0), 85_600.0);
    }

    #[test]
    fn arc_contains_is_wrap_aware() {
        let i = day();
        assert!(i.arc_contains(80_000.0, 3_600.0, 0.0));
        assert!(i.arc_contains(80_000.0, 3_600.0, 3_600.0));
        assert!(!i.arc_contains(80_000.0, 3_600.0, 40_000.0));
    }

    #[test]
    fn value_from_touch_follows_the_finger() {
        let i = day();
        let center = Point::new(100.0, 100.0);
        // 3 o'clock is a quarter of the day.
        let v = i.value_from_touch(0.0, Point::new(200.0, 100.0), center);
        assert!((v - DAY / 4.0).abs() < 1e-6, "got {v}");
        // Just left of 12 o'clock from a value just right of it goes backwards over the seam.
        let v = i.value_from_touch(600.0, Point::new(99.0, 0.0), center);
        assert!(v > 85_000.0, "wrapped back over the seam, got {v}");
    }
}
