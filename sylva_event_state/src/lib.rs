// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sylva Event State: gesture recognition for the explorer surface.
//!
//! Hosts feed raw mouse, pen, touch and wheel events into a
//! [`GestureRecognizer`] and get back semantic [`Gesture`]s: a pan delta, a
//! zoom step with its anchor, or a tap on whatever the press landed on. Each
//! event yields at most one gesture, so applying the result never interleaves
//! a zoom and a pan from the same input.
//!
//! The pieces are usable on their own:
//!
//! - [`drag`]: per-pointer movement deltas and travel.
//! - [`pinch`]: incremental two-contact zoom/pan classification.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use sylva_event_state::{Gesture, GestureRecognizer, HitTarget, PointerId, ZoomAnchor};
//!
//! let mut gestures = GestureRecognizer::<&str>::default();
//!
//! // One finger on the background pans.
//! gestures.on_pointer_down(PointerId::Touch(1), Point::new(100.0, 100.0), HitTarget::Background, 0);
//! let pan = gestures.on_pointer_move(PointerId::Touch(1), Point::new(110.0, 100.0));
//! assert_eq!(pan, Some(Gesture::Pan(Vec2::new(10.0, 0.0))));
//!
//! // A second finger turns it into a pinch.
//! gestures.on_pointer_down(PointerId::Touch(2), Point::new(130.0, 100.0), HitTarget::Background, 16);
//! let zoom = gestures.on_touch_move(&[(1, Point::new(100.0, 100.0)), (2, Point::new(140.0, 100.0))]);
//! assert_eq!(
//!     zoom,
//!     Some(Gesture::Zoom { factor: 2.0, anchor: ZoomAnchor::Pivot(Point::new(120.0, 100.0)) })
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for session transitions and desync
//!   recovery.
//! - `serde`: (de)serialize [`GestureParams`].
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
mod params;
pub mod pinch;
mod pointer;
mod recognizer;

pub use params::GestureParams;
pub use pointer::{HitTarget, Modifiers, PointerId};
pub use recognizer::{Gesture, GestureMode, GestureRecognizer, ZoomAnchor};
