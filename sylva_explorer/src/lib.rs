// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sylva Explorer: a pannable, zoomable curriculum tree.
//!
//! [`Explorer`] glues the Sylva crates together for one host surface:
//!
//! - `sylva_layout` places modules on rings and fans their descendants out
//!   radially. The layout is recomputed only when the content, the view mode
//!   or the layout parameters change.
//! - `sylva_view2d` holds the camera. Buttons, wheel, drag and pinch all end
//!   up as zoom and pan on the same [`Viewport2D`].
//! - `sylva_event_state` classifies raw pointer, touch and wheel input into
//!   pans, zooms and taps.
//! - `sylva_interaction` tracks hover, cards, highlighted paths, expansion
//!   and selection.
//!
//! The host forwards input, then paints [`Explorer::scene`]: edges, nodes and
//! cards, already culled to the visible region. Painting, icons, text and the
//! shell around the tree are the host's business.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use sylva_content::{ContentNode, NodeId, NodeKind};
//! use sylva_explorer::{Activation, Explorer, ExplorerConfig, PointerId};
//!
//! let mut started: Vec<NodeId> = Vec::new();
//! let mut explorer = Explorer::new(
//!     ExplorerConfig::default(),
//!     Size::new(800.0, 600.0),
//!     |id: &NodeId, _: NodeKind| started.push(id.clone()),
//! );
//! explorer
//!     .set_content(vec![
//!         ContentNode::new("m1", NodeKind::Module).with_children(["b1"]),
//!         ContentNode::new("b1", NodeKind::Branch).with_parent("m1"),
//!     ])
//!     .unwrap();
//! explorer.fit_to_screen();
//!
//! // Tap the branch where it is drawn.
//! let b1 = explorer.layout().get("b1").unwrap().position;
//! let at = explorer.viewport().world_to_view_point(b1);
//! explorer.pointer_down(PointerId::Touch(1), at, 0);
//! explorer.pointer_up(PointerId::Touch(1), at, 80);
//! assert!(explorer.interaction().is_selected("b1"));
//!
//! assert_eq!(explorer.activate("m1"), Activation::Expanded);
//!
//! let scene = explorer.scene();
//! assert_eq!(scene.nodes.len(), 2);
//! drop(scene);
//! drop(explorer);
//! assert_eq!(started, [NodeId::from("b1")]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod explorer;
mod scene;

pub use config::{CardParams, ExplorerConfig};
pub use explorer::Explorer;
pub use scene::{NodeFlags, Scene, SceneCard, SceneEdge, SceneNode, locked_fill, neutral_fill};

pub use sylva_event_state::{Gesture, GestureMode, HitTarget, Modifiers, PointerId};
pub use sylva_interaction::{Activation, InteractionState, Navigator};
pub use sylva_layout::{Layout, LayoutError, PositionedNode, ViewMode};
