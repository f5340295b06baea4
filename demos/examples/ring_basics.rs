// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring list basics.
//!
//! Build a ring, walk it both ways, and show that removed handles go stale.
//!
//! Run:
//! - `cargo run -p understory_demos --example ring_basics`

use core::ops::ControlFlow;

use understory_ring::{Direction, RingList};

fn main() {
    let mut ring: RingList<&str> = ["12", "3", "6", "9"].into_iter().collect();
    let twelve = ring.head().unwrap();
    let six = ring.find(|v| *v == "6").unwrap();

    let cw: Vec<_> = ring.iter_from(six, Direction::Forward).map(|(_, v)| *v).collect();
    let ccw: Vec<_> = ring.iter_from(six, Direction::Backward).map(|(_, v)| *v).collect();
    println!("clockwise from 6: {cw:?}");
    println!("counterclockwise from 6: {ccw:?}");
    assert_eq!(cw, ["6", "9", "12", "3"]);
    assert_eq!(ccw, ["6", "3", "12", "9"]);

    // Stop at the first odd hour walking backward from 12.
    let odd = ring.traverse(Some(twelve), Direction::Backward, |id, v| {
        if v.parse::<u32>().is_ok_and(|h| h % 2 == 1) {
            ControlFlow::Break(id)
        } else {
            ControlFlow::Continue(())
        }
    });
    println!("first odd hour before 12: {:?}", odd.and_then(|id| ring.get(id)));

    ring.remove(six);
    let half = ring.push_back("6:30");
    assert_eq!(ring.get(six), None, "removed handle is stale");
    assert_ne!(six, half, "slot reuse bumps the generation");
    println!("after edit: {:?}", ring.iter().map(|(_, v)| *v).collect::<Vec<_>>());
}
