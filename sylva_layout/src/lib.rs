// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sylva Layout: fractal radial placement for curriculum trees.
//!
//! This crate maps a [`ContentTree`](sylva_content::ContentTree) to world-space
//! positions. It is a pure function of its inputs: no caching, no interaction
//! state, no rendering. Callers that lay out on every frame are expected to
//! memoize the result themselves.
//!
//! ## Placement
//!
//! - Modules sit on concentric rings around [`LayoutParams::center`]. Modules
//!   marked [`Ring::Primary`](sylva_content::Ring::Primary) use the inner ring,
//!   the rest the outer ring, which is rotated by half a step so the two rings
//!   interleave.
//! - Every placed node has a *heading*: for modules the ray from the center,
//!   for everything else the ray from its parent. Children fan out on an arc
//!   around their parent, centered on that heading, so clusters always point
//!   away from the center and never fold back across their parent.
//! - The angle between neighbouring siblings is the level's configured
//!   [`LevelParams::spread`] or, if larger, the smallest angle at which the
//!   sibling discs do not touch, enlarged by
//!   [`LayoutParams::spread_enlargement`] for breathing room. A fan never
//!   spans more than [`LayoutParams::max_fan_arc`] (at most half a turn);
//!   siblings that need more room get a narrower step on a larger orbit.
//! - A lone child sits exactly on its parent's heading.
//!
//! [`ViewMode::Overview`] shrinks every radius and drops the deep levels;
//! nodes missing from the returned [`Layout`] are simply not drawn.
//!
//! ## Minimal example
//!
//! ```rust
//! use sylva_content::{ContentNode, NodeKind};
//! use sylva_layout::{LayoutParams, ViewMode, compute_layout};
//!
//! let nodes = [
//!     ContentNode::new("m1", NodeKind::Module).with_children(["b1", "b2"]),
//!     ContentNode::new("b1", NodeKind::Branch).with_parent("m1"),
//!     ContentNode::new("b2", NodeKind::Branch).with_parent("m1"),
//! ];
//! let layout = compute_layout(&nodes, ViewMode::Detailed, &LayoutParams::default()).unwrap();
//!
//! let m1 = layout.get("m1").unwrap().position;
//! let b1 = layout.get("b1").unwrap().position;
//! let b2 = layout.get("b2").unwrap().position;
//! assert!((m1.distance(b1) - m1.distance(b2)).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod layout;
mod params;
mod radial;

pub use layout::{Layout, LayoutError, PositionedNode};
pub use params::{LayoutParams, LevelParams, ViewMode};
pub use radial::{compute_layout, compute_tree_layout};
