// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-point slider: push versus clamp.
//!
//! The same drag is replayed against both collision policies.
//!
//! Run:
//! - `cargo run -p understory_demos --example multi_point`

use core::time::Duration;

use kurbo::Point;
use understory_ring_slider::{Circle, CollisionPolicy, DragSession, MultiPointSlider, SliderConfig};

const H: f64 = 3_600.0;

fn drag(policy: CollisionPolicy) -> Vec<f64> {
    let config = SliderConfig {
        min_distance: Some(2.0 * H),
        collision: policy,
        ..SliderConfig::with_bounds(0.0, 24.0 * H)
    };
    let mut slider = MultiPointSlider::new(config).unwrap();
    slider.set_values(&[2.0 * H, 6.0 * H, 9.0 * H]).unwrap();

    let circle = Circle::new(Point::new(0.0, 0.0), 100.0).unwrap();
    let interval = *slider.interval();
    let mut session = DragSession::new();
    let grab = circle.point_at_value(&interval, 2.0 * H);
    slider.touch_begin(&mut session, &circle, grab, Duration::ZERO);
    if let Some(id) = session.selected() {
        println!("  window: {:?}", slider.movable_window(id));
    }
    for k in 1..=12_u32 {
        let touch = circle.point_at_value(&interval, 2.0 * H + f64::from(k) * H / 4.0);
        slider.touch_move(&mut session, &circle, touch, Duration::from_millis(16 * u64::from(k)));
    }
    slider.touch_end(&mut session);
    slider.values()
}

fn main() {
    env_logger::init();

    println!("== Push ==");
    let pushed = drag(CollisionPolicy::Push);
    println!("  values (h): {:?}", pushed.iter().map(|v| v / H).collect::<Vec<_>>());

    println!("== Clamp ==");
    let clamped = drag(CollisionPolicy::Clamp);
    println!("  values (h): {:?}", clamped.iter().map(|v| v / H).collect::<Vec<_>>());

    assert!((pushed[0] - 5.0 * H).abs() < 1e-6, "push follows the finger");
    assert!((pushed[1] - 7.0 * H).abs() < 1e-6, "neighbour pushed to keep 2h");
    assert!((pushed[2] - 9.0 * H).abs() < 1e-6, "third point had room");

    assert!(clamped[0] <= 4.0 * H + 1e-6, "clamp stops 2h before the neighbour");
    assert_eq!(clamped[1], 6.0 * H, "clamp never pushes");
}
