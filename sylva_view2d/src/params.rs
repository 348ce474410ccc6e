// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Inclusive zoom range enforced by [`crate::Viewport2D`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomLimits {
    /// Smallest zoom factor.
    pub min: f64,
    /// Largest zoom factor.
    pub max: f64,
}

impl ZoomLimits {
    /// Creates limits, swapping the bounds if they are given in the wrong order.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamps `zoom` into the range.
    ///
    /// With inverted bounds the upper bound wins.
    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        zoom.max(self.min).min(self.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 0.2, max: 3.0 }
    }
}

/// Tuning for [`crate::Viewport2D`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ViewportParams {
    /// Zoom bounds.
    pub zoom_limits: ZoomLimits,
    /// Share of the view that fitted content fills, in `(0, 1]`.
    pub fit_fill: f64,
    /// Factor applied by the zoom in / zoom out buttons.
    pub zoom_step: f64,
}

impl Default for ViewportParams {
    fn default() -> Self {
        Self {
            zoom_limits: ZoomLimits::default(),
            fit_fill: 0.9,
            zoom_step: 1.2,
        }
    }
}
