// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sylva Interaction: what the learner is pointing at, reading and opening.
//!
//! [`NodeInteraction`] turns node-level events into [`InteractionState`]:
//!
//! - Hover and touch on a node show its detail card (unless the node is
//!   locked) and highlight the path from the node up to its module.
//! - Activating a module expands or collapses it. Activating anything else
//!   selects it and asks the [`Navigator`] to start it. Locked nodes ignore
//!   activation.
//! - An activation outside every node and card dismisses all cards at once.
//!
//! It does not hit test and does not interpret raw input; the explorer
//! resolves targets and forwards taps here.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use sylva_content::{ContentNode, ContentTree, NodeId, NodeKind};
//! use sylva_interaction::{Activation, NodeInteraction};
//!
//! let tree = ContentTree::new([
//!     ContentNode::new("m1", NodeKind::Module).with_children(["b1"]),
//!     ContentNode::new("b1", NodeKind::Branch).with_parent("m1"),
//! ])
//! .unwrap();
//! let mut nodes = NodeInteraction::new(Arc::new(tree));
//!
//! nodes.on_node_enter("b1");
//! assert!(nodes.state().has_card("b1"));
//! assert!(nodes.state().is_highlighted("m1"));
//!
//! let mut started = Vec::new();
//! let outcome = nodes.on_node_activate("b1", &mut |id: &NodeId, _: NodeKind| started.push(id.clone()));
//! assert_eq!(outcome, Activation::Started);
//! assert_eq!(started, [NodeId::from("b1")]);
//!
//! nodes.on_outside_activate();
//! assert!(nodes.state().visible_cards().is_empty());
//! assert!(nodes.state().is_selected("b1"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod machine;
mod state;

pub use machine::{Activation, Navigator, NodeInteraction};
pub use state::InteractionState;
