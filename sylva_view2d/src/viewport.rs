// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::params::{ViewportParams, ZoomLimits};

/// Snapshot of the camera state handed to renderers.
///
/// World → view is `view_origin + pan + zoom * world`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    /// Uniform zoom factor.
    pub zoom: f64,
    /// Pan offset in view coordinates, relative to the view rect origin.
    pub pan: Vec2,
}

impl ViewportTransform {
    /// The identity transform: zoom `1.0`, no pan.
    pub const IDENTITY: Self = Self {
        zoom: 1.0,
        pan: Vec2::ZERO,
    };
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// 2D viewport over the explorer's world plane.
///
/// `Viewport2D` tracks a rectangular region in device/view space and a
/// uniform pan+zoom transform mapping world coordinates into that region.
/// It can be used to:
/// - Convert points and rectangles between world and view coordinates.
/// - Pan freely and zoom around a chosen pivot within [`ZoomLimits`].
/// - Fit a world‑space rectangle into the view.
#[derive(Clone, Debug)]
pub struct Viewport2D {
    view_rect: Rect,
    zoom: f64,
    pan: Vec2,
    params: ViewportParams,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Viewport2D {
    /// Creates a new viewport covering `view_rect` with default parameters.
    ///
    /// - Initial zoom is `1.0`.
    /// - Initial pan is zero (world origin maps to the view rect origin).
    /// - Zoom is clamped to `[0.2, 3.0]`.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        Self::with_params(view_rect, ViewportParams::default())
    }

    /// Creates a new viewport with explicit parameters.
    #[must_use]
    pub fn with_params(view_rect: Rect, params: ViewportParams) -> Self {
        let mut vp = Self {
            view_rect,
            zoom: 1.0,
            pan: Vec2::ZERO,
            params,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.zoom = params.zoom_limits.clamp(1.0);
        vp.rebuild_transforms();
        vp
    }

    /// Returns the current view rectangle in device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle in device coordinates.
    ///
    /// Zoom and pan are unchanged; only the visible world region moves.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
    }

    /// Returns the current parameters.
    #[must_use]
    pub fn params(&self) -> ViewportParams {
        self.params
    }

    /// Replaces the parameters, re-clamping the zoom around the view center.
    pub fn set_params(&mut self, params: ViewportParams) {
        self.params = params;
        let clamped = params.zoom_limits.clamp(self.zoom);
        self.zoom_about(clamped, None);
    }

    /// Returns the active zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.params.zoom_limits
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset in view coordinates.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns zoom and pan as one value.
    #[must_use]
    pub fn transform(&self) -> ViewportTransform {
        ViewportTransform {
            zoom: self.zoom,
            pan: self.pan,
        }
    }

    /// Returns the cached world → view affine transform.
    #[must_use]
    pub fn world_to_view(&self) -> Affine {
        self.world_to_view
    }

    /// Multiplies the zoom by `factor`, clamped into the zoom limits.
    ///
    /// With a `pivot` (view/device coordinates, for example the cursor or a
    /// pinch centroid) the world point under the pivot stays fixed. Without
    /// one, the view rect center is used. Zoom and pan are assigned together.
    ///
    /// Non-positive or non-finite factors are ignored. Factors that would
    /// leave the limits clamp silently.
    pub fn zoom_by(&mut self, factor: f64, pivot: Option<Point>) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let new_zoom = self.params.zoom_limits.clamp(self.zoom * factor);
        self.zoom_about(new_zoom, pivot);
    }

    fn zoom_about(&mut self, new_zoom: f64, pivot: Option<Point>) {
        let old_zoom = self.zoom;
        if (new_zoom - old_zoom).abs() < f64::EPSILON {
            return;
        }

        let anchor = pivot.unwrap_or_else(|| self.view_rect.center()) - self.view_rect.origin();
        let pan = anchor - (anchor - self.pan) * (new_zoom / old_zoom);
        self.zoom = new_zoom;
        self.pan = pan;
        self.rebuild_transforms();
    }

    /// Zooms in by one [`ViewportParams::zoom_step`] around the view center.
    pub fn zoom_in(&mut self) {
        self.zoom_by(self.params.zoom_step, None);
    }

    /// Zooms out by one [`ViewportParams::zoom_step`] around the view center.
    pub fn zoom_out(&mut self) {
        self.zoom_by(1.0 / self.params.zoom_step, None);
    }

    /// Pans the view by a delta in view/device space.
    ///
    /// There are no pan bounds; content may be moved arbitrarily far.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.pan += delta;
        self.rebuild_transforms();
    }

    /// Returns to zoom `1.0` (clamped) and zero pan.
    pub fn reset(&mut self) {
        self.zoom = self.params.zoom_limits.clamp(1.0);
        self.pan = Vec2::ZERO;
        self.rebuild_transforms();
    }

    /// Resizes the view to `viewport` and frames `content` (world space) in it.
    ///
    /// The zoom makes `content` fill [`ViewportParams::fit_fill`] of the view
    /// along its tighter axis, clamped into the limits, and the pan centers it.
    /// A zero-extent axis is ignored; content that is a single point is
    /// centered at the current zoom.
    pub fn fit_to_content(&mut self, content: Rect, viewport: Size) {
        self.view_rect = Rect::from_origin_size(self.view_rect.origin(), viewport);
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            self.rebuild_transforms();
            return;
        }

        let content = content.abs();
        let sx = (content.width() > 0.0).then(|| viewport.width / content.width());
        let sy = (content.height() > 0.0).then(|| viewport.height / content.height());
        let target = match (sx, sy) {
            (Some(sx), Some(sy)) => sx.min(sy),
            (Some(s), None) | (None, Some(s)) => s,
            (None, None) => {
                self.rebuild_transforms();
                self.center_on(content.center());
                return;
            }
        };

        let zoom = self.params.zoom_limits.clamp(target * self.params.fit_fill);
        let view_center = self.view_rect.center() - self.view_rect.origin();
        self.zoom = zoom;
        self.pan = view_center - content.center().to_vec2() * zoom;
        self.rebuild_transforms();
    }

    /// Centers the view on the given world‑space point.
    pub fn center_on(&mut self, world_pt: Point) {
        let view_center = self.view_rect.center();
        let world_in_view = self.world_to_view_point(world_pt);
        let delta = view_center - world_in_view;
        self.pan_by(delta);
    }

    /// Returns the visible world‑space rectangle.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.view_to_world_rect(self.view_rect)
    }

    /// Converts a world‑space point into view/device coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a view/device‑space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Converts a world‑space rectangle into view/device coordinates.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        // Uniform scale plus translation keeps rectangles axis aligned, so
        // mapping two corners is enough.
        Rect::from_points(
            self.world_to_view * rect.origin(),
            self.world_to_view * Point::new(rect.x1, rect.y1),
        )
    }

    /// Converts a view/device‑space rectangle into world coordinates.
    #[must_use]
    pub fn view_to_world_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.view_to_world * rect.origin(),
            self.view_to_world * Point::new(rect.x1, rect.y1),
        )
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> Viewport2DDebugInfo {
        Viewport2DDebugInfo {
            view_rect: self.view_rect,
            visible_world_rect: self.visible_world_rect(),
            zoom: self.zoom,
            pan: self.pan,
            min_zoom: self.params.zoom_limits.min,
            max_zoom: self.params.zoom_limits.max,
        }
    }

    fn rebuild_transforms(&mut self) {
        let view_origin = self.view_rect.origin().to_vec2();
        // World → view: scale, then translate by pan into the view rect.
        self.world_to_view = Affine::translate(view_origin + self.pan) * Affine::scale(self.zoom);
        self.view_to_world = self.world_to_view.inverse();
    }
}

/// Debug snapshot of a [`Viewport2D`] state.
#[derive(Clone, Copy, Debug)]
pub struct Viewport2DDebugInfo {
    /// Current view rectangle in device coordinates.
    pub view_rect: Rect,
    /// World‑space rectangle currently visible through the view.
    pub visible_world_rect: Rect,
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Current pan offset in view coordinates.
    pub pan: Vec2,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
}
