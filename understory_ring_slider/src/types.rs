// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by the rings: handles, point flags, and endpoint roles.

use understory_ring::NodeId;

/// Handle of a point in a [`PointRing`](crate::PointRing).
///
/// Generational: a handle to a removed point never resolves to a later one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PointId(pub(crate) NodeId);

/// Handle of a range in a [`RangeRing`](crate::RangeRing).
///
/// Points built from a range carry its `RangeId`, which is how the resolved
/// values find their way back.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RangeId(pub(crate) NodeId);

bitflags::bitflags! {
    /// Seam and wrap markers of a point.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PointFlags: u8 {
        /// First point of a flattened order.
        const START = 0b0000_0001;
        /// Last point of a flattened order.
        const END   = 0b0000_0010;
        /// The edge from this point to its neighbour in the current direction
        /// of movement crosses the `max → min` seam.
        const CROSS = 0b0000_0100;
    }
}

/// Which end of a range.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Endpoint {
    /// The `start` of a range.
    Start,
    /// The `end` of a range, reached clockwise from `start`.
    End,
}

/// One endpoint of one range: the thumb a range slider drags.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RangeEndpoint {
    /// The range.
    pub range: RangeId,
    /// Which of its ends.
    pub endpoint: Endpoint,
}
