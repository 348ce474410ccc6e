// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sylva View 2D: the viewport transform controller.
//!
//! [`Viewport2D`] is the single owner of the explorer's camera: a uniform
//! zoom factor and a pan offset mapping world space (where the layout places
//! nodes) into a device-space view rectangle. Every change goes through one
//! of its operations, so the zoom bounds always hold:
//!
//! - [`Viewport2D::zoom_by`] multiplies the zoom, clamps it into
//!   [`ZoomLimits`], and keeps the world point under an optional pivot fixed
//!   on screen. Zoom and pan are assigned together.
//! - [`Viewport2D::pan_by`] moves the view freely; there are no pan bounds.
//! - [`Viewport2D::reset`] returns to zoom `1.0` and no pan.
//! - [`Viewport2D::fit_to_content`] frames a world rectangle with a margin.
//!
//! The controller does not paint and does not interpret input. Renderers read
//! [`Viewport2D::transform`] or the cached affine transforms; gesture layers
//! call the operations above.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use sylva_view2d::Viewport2D;
//!
//! let mut view = Viewport2D::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! // Zoom in around the cursor; the world point under it stays put.
//! let cursor = Point::new(200.0, 150.0);
//! let before = view.view_to_world_point(cursor);
//! view.zoom_by(2.0, Some(cursor));
//! let after = view.view_to_world_point(cursor);
//! assert!((before - after).hypot() < 1e-9);
//!
//! // Requests past the limits clamp silently.
//! view.zoom_by(100.0, None);
//! assert_eq!(view.zoom(), 3.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod params;
mod viewport;

pub use params::{ViewportParams, ZoomLimits};
pub use viewport::{Viewport2D, Viewport2DDebugInfo, ViewportTransform};
