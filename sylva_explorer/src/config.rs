// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use sylva_event_state::GestureParams;
use sylva_layout::LayoutParams;
use sylva_view2d::ViewportParams;

/// Placement of node detail cards.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CardParams {
    /// Card size in view pixels. Cards do not scale with zoom.
    pub size: Size,
    /// Gap in view pixels between a node's rim and its card.
    pub gap: f64,
}

impl Default for CardParams {
    fn default() -> Self {
        Self {
            size: Size::new(220.0, 132.0),
            gap: 12.0,
        }
    }
}

/// Every tunable of an [`crate::Explorer`] in one place.
///
/// With the `serde` feature, missing fields fall back to their defaults, so
/// a settings file only needs the values it overrides:
///
/// ```json
/// { "viewport": { "zoom_limits": { "min": 0.5, "max": 2.0 } } }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ExplorerConfig {
    /// Radial layout geometry.
    pub layout: LayoutParams,
    /// Zoom bounds, fit margin and button step.
    pub viewport: ViewportParams,
    /// Gesture thresholds.
    pub gestures: GestureParams,
    /// Detail card placement.
    pub cards: CardParams,
}
