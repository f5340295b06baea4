// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-space geometry of the slider track.
//!
//! Coordinates are y-down (screen space), so a growing `atan2` angle turns clockwise.
//! Values start at 12 o'clock, see [`TOP_ANGLE`].

use core::f64::consts::TAU;

use kurbo::{Point, Rect, Vec2};

use crate::error::CircleError;
use crate::interval::Interval;

/// Screen angle of the 12 o'clock position, where the value domain starts.
pub const TOP_ANGLE: f64 = -core::f64::consts::FRAC_PI_2;

/// The slider track: a circle in the widget's coordinate space.
///
/// Supplied by the caller's layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    origin: Point,
    radius: f64,
}

impl Circle {
    /// Create a circle. Negative radii are rejected.
    pub fn new(origin: Point, radius: f64) -> Result<Self, CircleError> {
        if radius < 0.0 || radius.is_nan() {
            return Err(CircleError::NegativeRadius(radius));
        }
        Ok(Self { origin, radius })
    }

    /// Centre of the track.
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Radius of the track's centre line.
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Point on the track at a screen angle (0 is 3 o'clock).
    pub fn point_at_angle(&self, angle: f64) -> Point {
        self.origin + Vec2::from_angle(angle) * self.radius
    }

    /// Point on the track where `value` is drawn.
    pub fn point_at_value(&self, interval: &Interval, value: f64) -> Point {
        self.point_at_angle(interval.to_angle(value) + TOP_ANGLE)
    }

    /// Clockwise angle in `[0, 2π)` from 12 o'clock to `point`.
    pub fn angle_from_top(&self, point: Point) -> f64 {
        ((point - self.origin).atan2() - TOP_ANGLE).rem_euclid(TAU)
    }

    /// True if `point` lies on the arc of the track between two values.
    ///
    /// The band is `radius ± width / 2`. The arc runs clockwise from `start` to
    /// `end` and may cross 12 o'clock.
    pub fn arc_contains(
        &self,
        interval: &Interval,
        start: f64,
        end: f64,
        width: f64,
        point: Point,
    ) -> bool {
        let distance = (point - self.origin).hypot();
        let half = width / 2.0;
        if distance < self.radius - half || distance > self.radius + half {
            return false;
        }
        let angle = self.angle_from_top(point);
        let start_angle = interval.to_angle(start).rem_euclid(TAU);
        let end_angle = interval.to_angle(end).rem_euclid(TAU);
        if start_angle < end_angle {
            angle >= start_angle && angle <= end_angle
        } else {
            angle >= start_angle || angle <= end_angle
        }
    }
}

/// Clockwise angle in `[0, 2π)` from `first` to `second`, seen from `center`.
pub fn angle_between(center: Point, first: Point, second: Point) -> f64 {
    ((second - center).atan2() - (first - center).atan2()).rem_euclid(TAU)
}

/// True if `touch` grabs a thumb centred at `thumb`.
///
/// The touch either falls inside the thumb's square of half-size `thumb_radius`,
/// or lies within `tolerance_degrees` of the thumb's direction from `center`.
pub fn thumb_contains(
    center: Point,
    thumb: Point,
    thumb_radius: f64,
    tolerance_degrees: f64,
    touch: Point,
) -> bool {
    let rect = Rect::from_center_size(thumb, (thumb_radius * 2.0, thumb_radius * 2.0));
    if rect.contains(touch) {
        return true;
    }
    let degrees = angle_between(center, thumb, touch).to_degrees();
    degrees < tolerance_degrees || degrees > 360.0 - tolerance_degrees
}

/// Rotation sense of a drag between two touch samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovementDirection {
    /// Angle grew on screen.
    Clockwise,
    /// Angle shrank on screen.
    Counterclockwise,
    /// Same angle (or the touch sits on the centre).
    Stationary,
}

/// Classify the rotation from `old` to `new` around `center`.
///
/// Only the screen angles of the two samples matter, not the values they map to.
pub fn classify_movement(old: Point, new: Point, center: Point) -> MovementDirection {
    let old_angle = (old - center).atan2().to_degrees();
    let new_angle = (new - center).atan2().to_degrees();
    let mut change = new_angle - old_angle;
    if change > 180.0 {
        change -= 360.0;
    } else if change <= -180.0 {
        change += 360.0;
    }
    if change > 0.0 {
        MovementDirection::Clockwise
    } else if change < 0.0 {
        MovementDirection::Counterclockwise
    } else {
        MovementDirection::Stationary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_degrees(deg: f64) -> Point {
        let r = deg.to_radians();
        Point::new(100.0 * r.cos(), 100.0 * r.sin())
    }

    #[test]
    fn classify_small_turns() {
        let c = Point::ORIGIN;
        assert_eq!(
            classify_movement(at_degrees(10.0), at_degrees(20.0), c),
            MovementDirection::Clockwise
        );
        assert_eq!(
            classify_movement(at_degrees(10.0), at_degrees(350.0), c),
            MovementDirection::Counterclockwise
        );
        assert_eq!(
            classify_movement(at_degrees(10.0), at_degrees(10.0), c),
            MovementDirection::Stationary
        );
    }

    #[test]
    fn classify_across_the_atan2_seam() {
        let c = Point::ORIGIN;
        assert_eq!(
            classify_movement(at_degrees(175.0), at_degrees(185.0), c),
            MovementDirection::Clockwise,
            "crossing 180° must not flip the sign"
        );
        assert_eq!(
            classify_movement(at_degrees(185.0), at_degrees(175.0), c),
            MovementDirection::Counterclockwise
        );
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert_eq!(
            Circle::new(Point::ORIGIN, -1.0),
            Err(CircleError::NegativeRadius(-1.0))
        );
        assert!(Circle::new(Point::ORIGIN, 0.0).is_ok());
    }

    #[test]
    fn angle_from_top_runs_clockwise() {
        let circle = Circle::new(Point::new(50.0, 50.0), 40.0).unwrap();
        let top = circle.angle_from_top(Point::new(50.0, 10.0));
        let right = circle.angle_from_top(Point::new(90.0, 50.0));
        let left = circle.angle_from_top(Point::new(10.0, 50.0));
        assert!(top.abs() < 1e-12, "12 o'clock is zero, got {top}");
        assert!((right - TAU / 4.0).abs() < 1e-12, "3 o'clock is a quarter turn");
        assert!((left - 3.0 * TAU / 4.0).abs() < 1e-12, "9 o'clock is three quarters");
    }

    #[test]
    fn point_at_value_starts_at_top() {
        let circle = Circle::new(Point::ORIGIN, 10.0).unwrap();
        let interval = Interval::new(0.0, 24.0, 1).unwrap();
        let top = circle.point_at_value(&interval, 0.0);
        assert!((top - Point::new(0.0, -10.0)).hypot() < 1e-9, "got {top:?}");
        let six = circle.point_at_value(&interval, 6.0);
        assert!((six - Point::new(10.0, 0.0)).hypot() < 1e-9, "got {six:?}");
    }

    #[test]
    fn arc_contains_handles_wrapping_arcs() {
        let circle = Circle::new(Point::ORIGIN, 100.0).unwrap();
        let interval = Interval::new(0.0, 24.0, 1).unwrap();
        // 22h..2h wraps over 12 o'clock.
        let top = Point::new(0.0, -100.0);
        assert!(circle.arc_contains(&interval, 22.0, 2.0, 10.0, top));
        assert!(!circle.arc_contains(&interval, 2.0, 22.0, 10.0, top));
        let off_band = Point::new(0.0, -120.0);
        assert!(!circle.arc_contains(&interval, 22.0, 2.0, 10.0, off_band));
    }

    #[test]
    fn thumb_hit_by_rect_or_angle() {
        let c = Point::ORIGIN;
        let thumb = Point::new(0.0, -100.0);
        assert!(thumb_contains(c, thumb, 15.0, 15.0, Point::new(10.0, -95.0)));
        // Far out along the same ray: outside the square, inside the angular tolerance.
        assert!(thumb_contains(c, thumb, 15.0, 15.0, Point::new(5.0, -300.0)));
        assert!(!thumb_contains(c, thumb, 15.0, 15.0, Point::new(100.0, 0.0)));
    }
}
