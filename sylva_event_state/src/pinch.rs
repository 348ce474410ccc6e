// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-contact pinch classification.
//!
//! [`PinchState`] keeps a reference distance and centroid for two touch
//! contacts. Each [`PinchState::update`] classifies the move as exactly one of
//! a zoom step or a pan step, or nothing:
//!
//! - If the distance ratio differs from `1` by more than
//!   [`GestureParams::pinch_ratio_threshold`], the move is a zoom by that
//!   ratio about the new centroid, and both references move to the new
//!   values. Steps are incremental, so the product of the emitted factors is
//!   the overall change in distance.
//! - Otherwise, if the centroid moved more than
//!   [`GestureParams::pan_threshold`] pixels, the move is a pan by the
//!   centroid delta and the reference centroid moves.
//!
//! ```
//! use kurbo::Point;
//! use sylva_event_state::GestureParams;
//! use sylva_event_state::pinch::{PinchState, PinchStep};
//!
//! let params = GestureParams::default();
//! let mut pinch = PinchState::new(Point::new(90.0, 100.0), Point::new(110.0, 100.0));
//!
//! let step = pinch.update(Point::new(80.0, 100.0), Point::new(120.0, 100.0), &params);
//! assert_eq!(step, Some(PinchStep::Zoom { factor: 2.0, centroid: Point::new(100.0, 100.0) }));
//! assert_eq!(pinch.distance(), 40.0);
//! ```

use kurbo::{Point, Vec2};

use crate::params::GestureParams;

/// The single operation a pinch move resolves to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchStep {
    /// Scale by `factor` about `centroid` (view coordinates).
    Zoom {
        /// Ratio of the new contact distance to the reference distance.
        factor: f64,
        /// Midpoint of the two contacts after the move.
        centroid: Point,
    },
    /// Translate by the centroid delta.
    Pan(Vec2),
}

/// Reference distance and centroid of a two-contact pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchState {
    distance: f64,
    centroid: Point,
}

impl PinchState {
    /// Captures the reference from the two contact positions.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            distance: a.distance(b),
            centroid: a.midpoint(b),
        }
    }

    /// Reference distance between the contacts.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Reference centroid.
    #[must_use]
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Classifies a move of the contacts to `a` and `b`.
    pub fn update(&mut self, a: Point, b: Point, params: &GestureParams) -> Option<PinchStep> {
        let distance = a.distance(b);
        let centroid = a.midpoint(b);

        if self.distance > f64::EPSILON && distance > f64::EPSILON {
            let factor = distance / self.distance;
            if (factor - 1.0).abs() > params.pinch_ratio_threshold {
                self.distance = distance;
                self.centroid = centroid;
                return Some(PinchStep::Zoom { factor, centroid });
            }
        } else {
            // Contacts on top of each other carry no scale; take the new
            // distance as the reference and read the move as a pan.
            self.distance = distance;
        }

        let delta = centroid - self.centroid;
        if delta.hypot() > params.pan_threshold {
            self.centroid = centroid;
            return Some(PinchStep::Pan(delta));
        }
        None
    }
}
