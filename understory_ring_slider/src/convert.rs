// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between the range ring, the flattened point ring, and span lists.
//!
//! Push resolution works on points, so a range drag first flattens the ranges
//! into a [`PointRing`] anchored at the dragged endpoint, resolves, and then
//! writes the points back.

use understory_ring::Direction;

use crate::point::PointRing;
use crate::range::{RangeRing, RingRange};
use crate::types::{Endpoint, PointFlags, PointId, RangeEndpoint, RangeId};

/// Flatten `ranges` into points, starting at `anchor`'s `dragged` end.
///
/// Every range contributes its start and its end, in clockwise order. The
/// returned [`PointId`] is the dragged endpoint, which is always the first
/// point (index 0).
///
/// - Dragging a start: `S1 E1 S2 E2 … Sn En`, `S1` flagged `START` and `En` flagged `END`.
/// - Dragging an end: `E1 S2 E2 … Sn En S1`, `E1` flagged `END` and `S1` flagged `START`.
///
/// In both layouts the `START` point is the first of a whole pair when the ring
/// is read forward from it, which is what [`points_to_ranges`] relies on.
///
/// Returns `None` if `anchor` is not in `ranges`.
pub fn ranges_to_points<M>(
    ranges: &RangeRing<M>,
    anchor: RangeId,
    dragged: Endpoint,
) -> Option<(PointRing, PointId)> {
    if !ranges.contains(anchor) {
        return None;
    }
    let last = ranges.len() - 1;
    let mut points = PointRing::new();
    let mut dragged_id = None;
    let mut seam_start = None;

    for (i, (id, range)) in ranges.iter_from(anchor, Direction::Forward).enumerate() {
        let start = RangeEndpoint {
            range: id,
            endpoint: Endpoint::Start,
        };
        let end = RangeEndpoint {
            range: id,
            endpoint: Endpoint::End,
        };
        match (i, dragged) {
            (0, Endpoint::Start) => {
                dragged_id = Some(points.append(range.start, PointFlags::START, Some(start)));
                let flags = if last == 0 {
                    PointFlags::END
                } else {
                    PointFlags::empty()
                };
                points.append(range.end, flags, Some(end));
            }
            (0, Endpoint::End) => {
                dragged_id = Some(points.append(range.end, PointFlags::END, Some(end)));
                seam_start = Some((range.start, start));
            }
            (i, Endpoint::Start) if i == last => {
                points.append(range.start, PointFlags::empty(), Some(start));
                points.append(range.end, PointFlags::END, Some(end));
            }
            _ => {
                points.append(range.start, PointFlags::empty(), Some(start));
                points.append(range.end, PointFlags::empty(), Some(end));
            }
        }
    }
    if let Some((value, source)) = seam_start {
        points.append(value, PointFlags::START, Some(source));
    }
    dragged_id.map(|id| (points, id))
}

/// Write resolved point values back into `ranges`.
///
/// Walks forward from the `START` point, taking two points at a time as one
/// range's `(start, end)`. A pair whose points come from different ranges, or
/// from the wrong ends, is skipped. Returns how many ranges were written.
pub fn points_to_ranges<M>(points: &PointRing, ranges: &mut RangeRing<M>) -> usize {
    let Some(first) = points.find_start() else {
        return 0;
    };
    let ordered: Vec<_> = points
        .iter_from(first, Direction::Forward)
        .map(|(_, p)| (p.value, p.source))
        .collect();

    let mut written = 0;
    for pair in ordered.chunks_exact(2) {
        let (start, start_source) = pair[0];
        let (end, end_source) = pair[1];
        let (Some(a), Some(b)) = (start_source, end_source) else {
            continue;
        };
        if a.range != b.range || a.endpoint != Endpoint::Start || b.endpoint != Endpoint::End {
            log::warn!("point pair does not form a range, skipping write-back");
            continue;
        }
        if let Some(range) = ranges.get_mut(a.range) {
            range.start = start;
            range.end = end;
            written += 1;
        }
    }
    written
}

/// A user range as reported by [`spans`].
#[derive(Clone, Debug, PartialEq)]
pub struct TimeRange<M = ()> {
    /// Start value.
    pub start: f64,
    /// End value.
    pub end: f64,
    /// Caller data.
    pub meta: M,
    /// Whether the range shows its thumbs.
    pub show_thumb: bool,
}

/// One piece of the circle.
#[derive(Clone, Debug, PartialEq)]
pub enum Span<M = ()> {
    /// A range the caller supplied.
    Range(TimeRange<M>),
    /// Uncovered arc between two ranges ("free time").
    Gap {
        /// Where the previous range ends.
        start: f64,
        /// Where the next range starts.
        end: f64,
    },
}

impl<M> Span<M> {
    /// Start value.
    pub fn start(&self) -> f64 {
        match self {
            Self::Range(r) => r.start,
            Self::Gap { start, .. } => *start,
        }
    }

    /// End value.
    pub fn end(&self) -> f64 {
        match self {
            Self::Range(r) => r.end,
            Self::Gap { end, .. } => *end,
        }
    }

    /// True for synthesised gaps.
    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap { .. })
    }
}

/// List the ranges, optionally with the gaps between them.
///
/// Without gaps the ranges come in ring order from the head. With gaps the list
/// starts at the range with the smallest start (the last one in ring order on a
/// tie) and a gap follows every range whose successor does not start where it ends.
pub fn spans<M: Clone>(ranges: &RangeRing<M>, include_gaps: bool) -> Vec<Span<M>> {
    let as_span = |range: &RingRange<M>| {
        Span::Range(TimeRange {
            start: range.start,
            end: range.end,
            meta: range.meta.clone(),
            show_thumb: range.show_thumb,
        })
    };
    if !include_gaps {
        return ranges.iter().map(|(_, r)| as_span(r)).collect();
    }

    let mut first: Option<(RangeId, f64)> = None;
    for (id, range) in ranges.iter() {
        if first.is_none_or(|(_, min)| range.start <= min) {
            first = Some((id, range.start));
        }
    }
    let Some((first, _)) = first else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(ranges.len() * 2);
    for (id, range) in ranges.iter_from(first, Direction::Forward) {
        out.push(as_span(range));
        let next_start = ranges
            .next(id)
            .and_then(|n| ranges.get(n))
            .map_or(range.end, |n| n.start);
        if next_start != range.end {
            out.push(Span::Gap {
                start: range.end,
                end: next_start,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 3600.0;

    fn ring(pairs: &[(f64, f64)]) -> RangeRing {
        pairs
            .iter()
            .map(|&(s, e)| RingRange::new(s, e, ()))
            .collect()
    }

    fn flat(points: &PointRing, from: PointId) -> Vec<(f64, PointFlags)> {
        points
            .iter_from(from, Direction::Forward)
            .map(|(_, p)| (p.value, p.flags))
            .collect()
    }

    #[test]
    fn flatten_from_a_dragged_start() {
        let r = ring(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
        let anchor = r.find_by_start(3.0).unwrap();
        let (points, dragged) = ranges_to_points(&r, anchor, Endpoint::Start).unwrap();
        let e = PointFlags::empty();
        assert_eq!(
            flat(&points, dragged),
            [
                (3.0, PointFlags::START),
                (4.0, e),
                (5.0, e),
                (6.0, e),
                (1.0, e),
                (2.0, PointFlags::END),
            ]
        );
        assert_eq!(points.get(dragged).map(|p| p.index), Some(0));
    }

    #[test]
    fn flatten_from_a_dragged_end() {
        let r = ring(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
        let anchor = r.find_by_start(3.0).unwrap();
        let (points, dragged) = ranges_to_points(&r, anchor, Endpoint::End).unwrap();
        let e = PointFlags::empty();
        assert_eq!(
            flat(&points, dragged),
            [
                (4.0, PointFlags::END),
                (5.0, e),
                (6.0, e),
                (1.0, e),
                (2.0, e),
                (3.0, PointFlags::START),
            ]
        );
        let source = points.get(dragged).and_then(|p| p.source).unwrap();
        assert_eq!(source.range, anchor);
        assert_eq!(source.endpoint, Endpoint::End);
    }

    #[test]
    fn flatten_single_range_both_ways() {
        let r = ring(&[(22.0, 2.0)]);
        let anchor = r.head().unwrap();
        let (points, dragged) = ranges_to_points(&r, anchor, Endpoint::Start).unwrap();
        assert_eq!(
            flat(&points, dragged),
            [(22.0, PointFlags::START), (2.0, PointFlags::END)]
        );
        let (points, dragged) = ranges_to_points(&r, anchor, Endpoint::End).unwrap();
        assert_eq!(
            flat(&points, dragged),
            [(2.0, PointFlags::END), (22.0, PointFlags::START)]
        );
    }

    #[test]
    fn identity_round_trip() {
        for dragged in [Endpoint::Start, Endpoint::End] {
            let mut r = ring(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
            let anchor = r.find_by_start(5.0).unwrap();
            let (points, _) = ranges_to_points(&r, anchor, dragged).unwrap();
            assert_eq!(points_to_ranges(&points, &mut r), 3);
            let pairs: Vec<(f64, f64)> = r.iter().map(|(_, x)| (x.start, x.end)).collect();
            assert_eq!(pairs, [(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)], "{dragged:?}");
        }
    }

    #[test]
    fn write_back_follows_point_values() {
        let mut r = ring(&[(1.0, 2.0), (3.0, 4.0)]);
        let anchor = r.head().unwrap();
        let (mut points, dragged) = ranges_to_points(&r, anchor, Endpoint::End).unwrap();
        points.get_mut(dragged).unwrap().value = 2.5;
        points_to_ranges(&points, &mut r);
        assert_eq!(r.get(anchor).map(|x| x.end), Some(2.5));
    }

    #[test]
    fn stale_anchor_flattens_to_nothing() {
        let mut r = ring(&[(1.0, 2.0), (3.0, 4.0)]);
        let anchor = r.head().unwrap();
        r.remove(anchor);
        assert!(ranges_to_points(&r, anchor, Endpoint::Start).is_none());
    }

    #[test]
    fn gaps_fill_the_circle() {
        let r = ring(&[(8.0 * H, 12.0 * H), (H, 3.0 * H)]);
        let out = spans(&r, true);
        let bounds: Vec<(f64, f64, bool)> =
            out.iter().map(|s| (s.start(), s.end(), s.is_gap())).collect();
        assert_eq!(
            bounds,
            [
                (H, 3.0 * H, false),
                (3.0 * H, 8.0 * H, true),
                (8.0 * H, 12.0 * H, false),
                (12.0 * H, H, true),
            ]
        );
    }

    #[test]
    fn touching_ranges_have_no_gap() {
        let r = ring(&[(0.0, 10.0), (10.0, 0.0)]);
        assert!(spans(&r, true).iter().all(|s| !s.is_gap()));
    }

    #[test]
    fn spans_without_gaps_keep_ring_order() {
        let r = ring(&[(8.0, 12.0), (1.0, 3.0)]);
        let starts: Vec<f64> = spans(&r, false).iter().map(Span::start).collect();
        assert_eq!(starts, [8.0, 1.0]);
        assert!(spans(&RangeRing::<()>::new(), true).is_empty());
    }

    #[test]
    fn equal_minimum_starts_pick_the_last() {
        let r: RangeRing<u8> = [
            RingRange::new(1.0, 2.0, 1),
            RingRange::new(1.0, 3.0, 2),
        ]
        .into_iter()
        .collect();
        let out = spans(&r, true);
        match &out[0] {
            Span::Range(first) => assert_eq!(first.meta, 2),
            Span::Gap { .. } => panic!("first span must be a range"),
        }
    }
}
