// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the ring: node identifiers and traversal direction.

/// Identifier for a node in a [`RingList`](crate::RingList).
///
/// This is a small, copyable handle that stays stable while the node is linked
/// and becomes invalid once the node is removed.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
/// - A slot whose generation reaches `u32::MAX` is retired instead of reused.
///
/// Use [`RingList::contains`](crate::RingList::contains) to check whether a `NodeId`
/// still refers to a linked node. Stale ids never alias a different node because the
/// generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeId uses 32-bit indices by design."
    )]
    pub(crate) const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Direction of travel around the ring.
///
/// `Forward` follows `next` links (the order nodes were appended in),
/// `Backward` follows `previous` links.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Follow `next` links.
    #[default]
    Forward,
    /// Follow `previous` links.
    Backward,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

impl core::ops::Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.reverse()
    }
}
