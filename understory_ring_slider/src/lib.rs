// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ring_slider --heading-base-level=0

//! Understory Ring Slider: the model behind circular range and multi-point sliders.
//!
//! ## Overview
//!
//! A ring slider maps a value domain `[min, max)` onto one or more turns of a circle.
//! Thumbs sit on the circle and are dragged by touch. Because the domain wraps, `max`
//! and `min` are the same position, and every neighbour relation is circular.
//!
//! This crate owns the state and the rules; it draws nothing.
//!
//! - [`RangeSlider`] holds `(start, end)` ranges, such as sleep windows on a 24h clock.
//! - [`MultiPointSlider`] holds free points.
//! - [`Resolver`] moves one point and pushes the neighbours ahead of it so that every gap
//!   keeps its minimum separation, without ever reordering the ring.
//! - [`DragSession`] tracks one gesture; the caller owns it and supplies timestamps.
//!
//! ## Workflow
//!
//! 1) Build a [`SliderConfig`] and create a slider. Configuration is checked up front.
//! 2) Lay out a [`Circle`] in your view coordinates.
//! 3) Feed touch-begin, touch-move and touch-end to the slider with a [`DragSession`].
//!    Each handler returns the [`SliderEvent`]s to forward to your observers.
//! 4) Read values back with [`RangeSlider::spans`] or [`MultiPointSlider::values`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_ring_slider::{Circle, DragSession, RangeSlider, SliderConfig, SliderEvent};
//!
//! const H: f64 = 3_600.0;
//! let config = SliderConfig {
//!     min_distance: Some(H),
//!     ..SliderConfig::with_bounds(0.0, 24.0 * H)
//! };
//! let mut slider: RangeSlider = RangeSlider::new(config).unwrap();
//! slider.set_ranges([(H, 3.0 * H, ()), (8.0 * H, 12.0 * H, ())]);
//!
//! let circle = Circle::new(Point::new(100.0, 100.0), 80.0).unwrap();
//! let grab = circle.point_at_value(slider.interval(), 3.0 * H);
//! let drop = circle.point_at_value(slider.interval(), 9.0 * H);
//!
//! let mut session = DragSession::new();
//! assert_eq!(
//!     slider.touch_begin(&mut session, &circle, grab, Duration::ZERO),
//!     [SliderEvent::EditingBegan]
//! );
//! slider.touch_move(&mut session, &circle, drop, Duration::ZERO);
//! slider.touch_end(&mut session);
//!
//! // The second range was pushed to start where the first now ends.
//! let spans = slider.spans(false);
//! assert!((spans[1].start() - 9.0 * H).abs() < 1e-6);
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: pushes and phase changes at
//! `debug`, an inconsistent ring at `warn`. Install any logger in the host application.

pub mod config;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod interval;
pub mod multi_point;
pub mod point;
pub mod range;
pub mod range_slider;
pub mod resolve;
pub mod session;
pub mod types;

pub use config::{CollisionPolicy, SliderConfig};
pub use convert::{Span, TimeRange, points_to_ranges, ranges_to_points, spans};
pub use error::{CircleError, ConfigError, IntervalError};
pub use geometry::{Circle, MovementDirection, angle_between, classify_movement, thumb_contains};
pub use interval::{Interval, scale_value, shortest_angular_delta};
pub use multi_point::MultiPointSlider;
pub use point::{CrossScan, PointRing, RingPoint};
pub use range::{RangeRing, RingRange};
pub use range_slider::RangeSlider;
pub use resolve::{MovableWindow, Resolution, Resolver};
pub use session::{DragPhase, DragSession, Sample, SliderEvent};
pub use types::{Endpoint, PointFlags, PointId, RangeEndpoint, RangeId};

pub use understory_ring::Direction;
