// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-drag state and the notifications touch handlers return.
//!
//! ## Lifecycle
//!
//! `Idle → Armed → Dragging → Idle`
//!
//! - Touch-begin on a thumb arms the session with that thumb.
//! - Moves before `settle_delay` has elapsed only track the finger.
//! - The first move after it starts dragging; from then on every move is resolved.
//! - Touch-end returns to idle. Nothing is rolled back.
//!
//! The caller owns the [`DragSession`] and passes it to each handler, so a slider
//! holds no per-gesture state of its own.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_ring_slider::{DragPhase, DragSession};
//!
//! let settle = Duration::from_millis(50);
//! let mut s: DragSession<u8> = DragSession::new();
//! s.arm(7, Duration::ZERO, Point::new(0.0, -10.0));
//! assert!(s.sample(Duration::from_millis(10), Point::new(1.0, -10.0), settle).is_none());
//! let sample = s.sample(Duration::from_millis(60), Point::new(2.0, -10.0), settle).unwrap();
//! assert_eq!(sample.selected, 7);
//! assert_eq!(sample.previous_touch, Point::new(1.0, -10.0));
//! assert_eq!(s.phase(), DragPhase::Dragging);
//! ```

use core::time::Duration;

use kurbo::Point;

/// Notification produced by a slider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SliderEvent {
    /// A thumb was grabbed.
    EditingBegan,
    /// Values or selection changed; redraw.
    ValueChanged,
    /// The grabbed thumb was released.
    EditingEnded,
}

/// Where a session is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No thumb grabbed.
    Idle,
    /// Thumb grabbed, waiting for the settle delay.
    Armed,
    /// Moves are being resolved.
    Dragging,
}

/// A move the slider should resolve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample<H> {
    /// The grabbed thumb.
    pub selected: H,
    /// Touch position of the previous sample, for direction classification.
    pub previous_touch: Point,
}

/// State of one drag gesture over thumbs identified by `H`.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<H> {
    selected: Option<H>,
    phase: DragPhase,
    started_at: Duration,
    last_touch: Point,
}

impl<H> Default for DragSession<H> {
    fn default() -> Self {
        Self {
            selected: None,
            phase: DragPhase::Idle,
            started_at: Duration::ZERO,
            last_touch: Point::ORIGIN,
        }
    }
}

impl<H: Copy> DragSession<H> {
    /// An idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// The grabbed thumb, if any.
    pub fn selected(&self) -> Option<H> {
        self.selected
    }

    /// True unless idle.
    pub fn is_active(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    /// When the thumb was grabbed.
    pub fn started_at(&self) -> Duration {
        self.started_at
    }

    /// Last touch position seen.
    pub fn last_touch(&self) -> Point {
        self.last_touch
    }

    /// Grab `selected` at time `now`.
    pub fn arm(&mut self, selected: H, now: Duration, touch: Point) {
        self.selected = Some(selected);
        self.phase = DragPhase::Armed;
        self.started_at = now;
        self.last_touch = touch;
        log::debug!("drag armed at {now:?}");
    }

    /// Record a touch move.
    ///
    /// Returns the sample to resolve once the session is dragging, `None` while
    /// idle or still settling.
    pub fn sample(
        &mut self,
        now: Duration,
        touch: Point,
        settle_delay: Duration,
    ) -> Option<Sample<H>> {
        let selected = self.selected?;
        let previous_touch = self.last_touch;
        self.last_touch = touch;
        if self.phase == DragPhase::Armed {
            if now.saturating_sub(self.started_at) < settle_delay {
                return None;
            }
            self.phase = DragPhase::Dragging;
            log::debug!("drag settled after {:?}", now.saturating_sub(self.started_at));
        }
        Some(Sample {
            selected,
            previous_touch,
        })
    }

    /// Release the thumb. Returns true if a thumb was grabbed.
    pub fn end(&mut self) -> bool {
        let was_active = self.is_active();
        self.selected = None;
        self.phase = DragPhase::Idle;
        self.started_at = Duration::ZERO;
        was_active
    }
}
