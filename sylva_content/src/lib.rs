// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sylva Content: the curriculum tree consumed by the explorer.
//!
//! Curriculum content arrives from an external service as a flat list of
//! [`ContentNode`]s. Each node is one of four [`NodeKind`]s and the kinds nest
//! strictly:
//!
//! ```text
//! module → branch → unit → lesson
//! ```
//!
//! This crate does not fetch or cache anything. It turns a snapshot of nodes
//! into a [`ContentTree`], checking the structural rules the rest of Sylva
//! relies on:
//!
//! - Ids are unique.
//! - Only modules are roots; every other node names an existing parent of the
//!   immediately shallower kind.
//! - Parent and child links agree in both directions, and a parent's
//!   `children` list fixes the order of its children.
//!
//! Because every parent is exactly one level shallower than its child, a
//! tree that passes validation cannot contain a cycle and every ancestor walk
//! ends within [`MAX_DEPTH`] steps.
//!
//! ## Minimal example
//!
//! ```rust
//! use sylva_content::{ContentNode, ContentTree, NodeKind};
//!
//! let tree = ContentTree::new([
//!     ContentNode::new("m1", NodeKind::Module).with_children(["b1"]),
//!     ContentNode::new("b1", NodeKind::Branch).with_parent("m1"),
//! ])
//! .unwrap();
//!
//! let path = tree.path_to_root("b1");
//! let path: Vec<&str> = path.iter().map(|id| id.as_str()).collect();
//! assert_eq!(path, ["b1", "m1"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod node;
mod tree;

pub use node::{ContentNode, DisplayMetrics, NodeId, NodeKind, NodeStatus, Ring};
pub use tree::{Ancestors, ContentTree, MAX_DEPTH, TreeError, TreeErrorKind};
