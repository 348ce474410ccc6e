// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pointer drag tracking: movement deltas and travel.
//!
//! ## Usage
//!
//! 1) Begin tracking with [`DragState::start`] at the press position.
//! 2) On each move, call [`DragState::update`] for the delta since the last
//!    position.
//! 3) Query [`DragState::travel`] to decide whether the press still counts as
//!    a tap.
//! 4) Reseed with [`DragState::rebase`] when another gesture has consumed
//!    the motion so far.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use sylva_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! assert_eq!(drag.update(Point::new(15.0, 20.0)), Some(Vec2::new(5.0, 0.0)));
//! assert_eq!(drag.update(Point::new(12.0, 20.0)), Some(Vec2::new(-3.0, 0.0)));
//!
//! // Travel is the farthest the pointer got from the press, not the net offset.
//! assert_eq!(drag.position(), Some(Point::new(12.0, 20.0)));
//! assert_eq!(drag.travel(), 5.0);
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pointer between press and release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
    travel: f64,
}

impl DragState {
    /// Starts tracking from `pos`, discarding any previous drag.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.travel = 0.0;
    }

    /// Moves to `pos` and returns the delta from the previous position.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let start = self.start_pos?;
        let last = self.last_pos.replace(pos).unwrap_or(start);
        self.travel = self.travel.max(start.distance(pos));
        Some(pos - last)
    }

    /// Moves the last position to `pos` without producing a delta.
    ///
    /// Used when the motion up to `pos` has already been consumed, for example
    /// by a pinch, so the next [`update`](Self::update) starts from there.
    pub fn rebase(&mut self, pos: Point) {
        if let Some(start) = self.start_pos {
            self.travel = self.travel.max(start.distance(pos));
            self.last_pos = Some(pos);
        }
    }

    /// Farthest distance the pointer has been from the press position.
    #[must_use]
    pub fn travel(&self) -> f64 {
        self.travel
    }

    /// Last known position.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.last_pos
    }
}
