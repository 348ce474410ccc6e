// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Thresholds used by [`crate::GestureRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GestureParams {
    /// Smallest `|ratio - 1|` between the current and reference contact
    /// distance that counts as a pinch zoom step.
    pub pinch_ratio_threshold: f64,
    /// Smallest centroid movement, in pixels, that counts as a two-finger pan.
    pub pan_threshold: f64,
    /// Largest travel, in pixels, a press may make and still be a tap.
    pub tap_slop: f64,
    /// Longest press, in milliseconds, that is still a tap.
    pub tap_timeout_ms: u64,
    /// Zoom factor for one wheel notch with the zoom modifier held.
    pub wheel_zoom_step: f64,
}

impl Default for GestureParams {
    fn default() -> Self {
        Self {
            pinch_ratio_threshold: 0.01,
            pan_threshold: 2.0,
            tap_slop: 8.0,
            tap_timeout_ms: 350,
            wheel_zoom_step: 1.1,
        }
    }
}
