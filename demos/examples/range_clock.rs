// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range slider on a 24h clock.
//!
//! Drag the end of an overnight range past noon with a stream of synthetic touch
//! samples, then list the day with its free gaps.
//!
//! Run:
//! - `RUST_LOG=understory_ring_slider=debug cargo run -p understory_demos --example range_clock`

use core::time::Duration;

use kurbo::Point;
use understory_ring_slider::{Circle, DragSession, RangeSlider, SliderConfig, Span};

const H: f64 = 3_600.0;
const FRAME: Duration = Duration::from_millis(16);

fn hours(v: f64) -> String {
    let minutes = (v / 60.0).round() as u32;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn main() {
    env_logger::init();

    let config = SliderConfig {
        min_distance: Some(H),
        step: Some(H / 4.0),
        settle_delay: Duration::from_millis(30),
        ..SliderConfig::with_bounds(0.0, 24.0 * H)
    };
    let mut slider = RangeSlider::new(config).unwrap();
    slider.set_ranges([(22.0 * H, 6.0 * H, "sleep"), (12.0 * H, 13.0 * H, "lunch")]);

    let circle = Circle::new(Point::new(160.0, 160.0), 120.0).unwrap();
    let interval = *slider.interval();

    // Grab the end of `sleep` and sweep it to 12:30 in quarter-hour samples.
    let mut session = DragSession::new();
    let mut now = Duration::ZERO;
    let grab = circle.point_at_value(&interval, 6.0 * H);
    let events = slider.touch_begin(&mut session, &circle, grab, now);
    println!("touch begin: {events:?}");
    for k in 1..=26 {
        now += FRAME;
        let v = 6.0 * H + f64::from(k) * H / 4.0;
        let touch = circle.point_at_value(&interval, v);
        let events = slider.touch_move(&mut session, &circle, touch, now);
        if events.is_empty() {
            log::info!("sample {k} at {} not applied", hours(v));
        }
    }
    println!("touch end: {:?}", slider.touch_end(&mut session));

    println!("== Day ==");
    for span in slider.spans(true) {
        match span {
            Span::Range(r) => println!("  {} - {}  {}", hours(r.start), hours(r.end), r.meta),
            Span::Gap { start, end } => println!("  {} - {}  (free)", hours(start), hours(end)),
        }
    }

    let ranges = slider.spans(false);
    assert!((ranges[0].end() - 12.5 * H).abs() < 1e-6, "sleep ends at 12:30");
    assert!((ranges[1].start() - 12.5 * H).abs() < 1e-6, "lunch was pushed to start at 12:30");
    assert!((ranges[1].end() - 13.5 * H).abs() < 1e-6, "lunch keeps its hour");
}
