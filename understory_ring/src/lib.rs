// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ring --heading-base-level=0

//! Understory Ring: an arena-backed circular doubly-linked list.
//!
//! Understory Ring is a reusable building block for controls whose entries live on a circle,
//! such as ring sliders, radial menus, and clock faces.
//!
//! - Append, insert after an anchor, and remove nodes in O(1).
//! - Walk the ring forward or backward from any node, with early exit.
//! - Address nodes with small generational handles instead of references.
//!
//! Links are stored as slot indices in a dense arena, so there are no reference cycles and no
//! back-reference bookkeeping. A removed node's [`NodeId`] never aliases a later node.
//!
//! # Example
//!
//! ```rust
//! use core::ops::ControlFlow;
//! use understory_ring::{Direction, RingList};
//!
//! let mut ring = RingList::new();
//! let a = ring.push_back(10_u32);
//! let b = ring.push_back(20);
//! let c = ring.push_back(30);
//!
//! // The tail wraps back to the head.
//! assert_eq!(ring.next(c), Some(a));
//!
//! // Walk backward from `b`, stopping at the first value above 25.
//! let found = ring.traverse(Some(b), Direction::Backward, |id, v| {
//!     if *v > 25 { ControlFlow::Break(id) } else { ControlFlow::Continue(()) }
//! });
//! assert_eq!(found, Some(c));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod ring;
pub mod types;

pub use ring::{Iter, RingList};
pub use types::{Direction, NodeId};
