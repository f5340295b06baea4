// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! Only precondition violations are errors. Degenerate geometry at runtime
//! (a ring too small to collide, a value sitting on the wrap seam, a stationary
//! touch) is handled silently by the model.

use thiserror::Error;

/// A domain interval could not be built.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum IntervalError {
    /// `min` is greater than `max`.
    #[error("interval minimum {min} is greater than maximum {max}")]
    InvertedBounds {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The interval must span at least one turn of the circle.
    #[error("interval must span at least one round")]
    ZeroRounds,
}

/// A circle could not be built.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CircleError {
    /// Radius below zero.
    #[error("circle radius {0} is negative")]
    NegativeRadius(f64),
}

/// A [`SliderConfig`](crate::SliderConfig) or data assignment was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The value bounds or round count are invalid.
    #[error(transparent)]
    Interval(#[from] IntervalError),
    /// `step` must be strictly positive when set.
    #[error("step {0} must be positive")]
    NonPositiveStep(f64),
    /// `min_distance` must not be negative when set.
    #[error("minimum distance {0} is negative")]
    NegativeMinDistance(f64),
    /// Thumb radius below zero.
    #[error("thumb radius {0} is negative")]
    NegativeThumbRadius(f64),
    /// More thumbs were supplied than the slider allows.
    #[error("{count} thumbs exceed the maximum of {max}")]
    TooManyThumbs {
        /// Number of values supplied.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
}
