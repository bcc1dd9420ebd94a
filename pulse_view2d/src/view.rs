// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::limits::ScaleLimits;

/// The mutable part of a [`ViewTransform`]: uniform scale and pan offset.
///
/// The offset is in screen units and is unbounded; panning far away from the
/// data is allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Pan offset in screen units.
    pub offset: Vec2,
}

impl ViewState {
    /// The identity view: `scale = 1`, no offset.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };
}

impl Default for ViewState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Center-anchored pan + zoom over the world canvas.
///
/// `ViewTransform` maps world points (projected canvas positions) to screen
/// points with
///
/// ```text
/// screen = center + offset + scale * (world - center)
/// ```
///
/// where `center` is the middle of the viewport. It can be used to:
/// - Convert points between world and screen coordinates.
/// - Pan by screen-space deltas and zoom around a screen-space anchor.
/// - Report the world region currently on screen.
///
/// The scale is clamped into [`ScaleLimits`] on every update.
#[derive(Clone, Debug)]
pub struct ViewTransform {
    viewport: Size,
    state: ViewState,
    limits: ScaleLimits,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl ViewTransform {
    /// Creates an identity view over a viewport of the given size.
    ///
    /// Scale limits default to `[0.5, 6.0]`.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let mut view = Self {
            viewport,
            state: ViewState::IDENTITY,
            limits: ScaleLimits::default(),
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
        };
        view.rebuild_transforms();
        view
    }

    /// Returns the viewport size in screen units.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size.
    ///
    /// Scale and offset are left untouched; only the anchor (the viewport
    /// center) moves.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.rebuild_transforms();
    }

    /// Returns the viewport center, the fixed point of pure zooming.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.viewport.width * 0.5, self.viewport.height * 0.5)
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Returns the current pan offset in screen units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.state.offset
    }

    /// Returns a copy of the current view state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Replaces the view state, clamping the scale into the current limits.
    ///
    /// Non-finite components are ignored and keep their previous value.
    pub fn set_state(&mut self, state: ViewState) {
        if state.scale.is_finite() {
            self.state.scale = self.limits.clamp(state.scale);
        }
        if state.offset.is_finite() {
            self.state.offset = state.offset;
        }
        self.rebuild_transforms();
    }

    /// Returns the scale limits.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Sets the scale limits and clamps the current scale into them.
    pub fn set_limits(&mut self, limits: ScaleLimits) {
        self.limits = limits;
        self.state.scale = limits.clamp(self.state.scale);
        self.rebuild_transforms();
    }

    /// Converts a world point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        let center = self.center();
        center + self.state.offset + (world - center) * self.state.scale
    }

    /// Converts a screen point to world coordinates.
    ///
    /// This is the exact inverse of [`ViewTransform::world_to_screen`].
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let center = self.center();
        center + (screen - center - self.state.offset) / self.state.scale
    }

    /// Converts a world-space length to screen units.
    #[must_use]
    pub fn world_to_screen_length(&self, length: f64) -> f64 {
        length * self.state.scale
    }

    /// Pans by a screen-space delta. The offset is not clamped.
    pub fn pan(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.state.offset += delta;
        self.rebuild_transforms();
    }

    /// Multiplies the scale by `factor` while keeping the world point under
    /// `anchor` fixed on screen.
    ///
    /// The world point is resolved with the scale in effect *before* the
    /// update; the offset is then solved so that it maps back onto `anchor`.
    /// Non-positive or non-finite factors are ignored.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        let world = self.screen_to_world(anchor);
        let scale = self.limits.clamp(self.state.scale * factor);
        let center = self.center();
        self.state.scale = scale;
        self.state.offset = (anchor - center) - (world - center) * scale;
        self.rebuild_transforms();
    }

    /// Restores the identity view: `scale = 1`, zero offset.
    pub fn reset(&mut self) {
        self.state = ViewState::IDENTITY;
        self.rebuild_transforms();
    }

    /// Returns the world-space rectangle currently covered by the viewport.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let p0 = self.screen_to_world(Point::ORIGIN);
        let p1 = self.screen_to_world(Point::new(self.viewport.width, self.viewport.height));
        Rect::from_points(p0, p1)
    }

    /// Returns the world-to-screen transform as an affine map.
    ///
    /// Point conversion goes through the closed-form methods above; this is
    /// for backends that want to apply the transform to whole shapes.
    #[must_use]
    pub fn world_to_screen_affine(&self) -> Affine {
        self.world_to_screen
    }

    /// Returns the screen-to-world transform as an affine map.
    #[must_use]
    pub fn screen_to_world_affine(&self) -> Affine {
        self.screen_to_world
    }

    /// Snapshot of the current view for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            viewport: self.viewport,
            scale: self.state.scale,
            offset: self.state.offset,
            min_scale: self.limits.min(),
            max_scale: self.limits.max(),
            visible_world_rect: self.visible_world_rect(),
        }
    }

    fn rebuild_transforms(&mut self) {
        let center = self.center().to_vec2();
        let scale = self.state.scale;
        // Move the center to the origin, scale, then move back and apply the pan.
        self.world_to_screen = Affine::translate(center + self.state.offset)
            * Affine::scale(scale)
            * Affine::translate(-center);
        self.screen_to_world = Affine::translate(center)
            * Affine::scale(1.0 / scale)
            * Affine::translate(-(center + self.state.offset));
    }
}

/// Debug snapshot of a [`ViewTransform`].
#[derive(Clone, Copy, Debug)]
pub struct ViewTransformDebugInfo {
    /// Viewport size in screen units.
    pub viewport: Size,
    /// Current scale.
    pub scale: f64,
    /// Current pan offset in screen units.
    pub offset: Vec2,
    /// Minimum allowed scale.
    pub min_scale: f64,
    /// Maximum allowed scale.
    pub max_scale: f64,
    /// World-space rectangle currently on screen.
    pub visible_world_rect: Rect,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{ViewState, ViewTransform};
    use crate::ScaleLimits;

    fn view() -> ViewTransform {
        ViewTransform::new(Size::new(800.0, 600.0))
    }

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn identity_maps_points_to_themselves() {
        let vp = view();
        let p = Point::new(123.0, 45.0);
        assert_eq!(vp.world_to_screen(p), p);
        assert_eq!(vp.screen_to_world(p), p);
    }

    #[test]
    fn scaling_is_anchored_at_viewport_center() {
        let mut vp = view();
        vp.set_state(ViewState {
            scale: 2.0,
            offset: Vec2::ZERO,
        });
        assert_close(vp.world_to_screen(vp.center()), vp.center());
        assert_close(vp.world_to_screen(Point::new(500.0, 300.0)), Point::new(600.0, 300.0));
    }

    #[test]
    fn pan_moves_screen_positions_by_delta() {
        let mut vp = view();
        vp.pan(Vec2::new(15.0, -5.0));
        vp.pan(Vec2::new(5.0, 5.0));
        assert_eq!(vp.offset(), Vec2::new(20.0, 0.0));
        assert_close(vp.world_to_screen(Point::new(10.0, 10.0)), Point::new(30.0, 10.0));
    }

    #[test]
    fn pan_is_unbounded() {
        let mut vp = view();
        vp.pan(Vec2::new(-1.0e7, 1.0e7));
        assert_eq!(vp.offset(), Vec2::new(-1.0e7, 1.0e7));
    }

    #[test]
    fn zoom_at_keeps_anchor_fixed() {
        let mut vp = view();
        vp.pan(Vec2::new(37.0, -12.0));
        let anchor = Point::new(612.0, 97.0);
        let world_before = vp.screen_to_world(anchor);

        vp.zoom_at(anchor, 1.05);
        assert_close(vp.world_to_screen(world_before), anchor);
        assert_close(vp.screen_to_world(anchor), world_before);
    }

    #[test]
    fn zoom_at_clamps_scale() {
        let mut vp = view();
        for _ in 0..200 {
            vp.zoom_at(Point::new(10.0, 10.0), 1.05);
        }
        assert_eq!(vp.scale(), 6.0);
        for _ in 0..400 {
            vp.zoom_at(Point::new(700.0, 500.0), 0.95);
        }
        assert_eq!(vp.scale(), 0.5);
    }

    #[test]
    fn zoom_at_still_anchors_when_clamped() {
        let mut vp = view();
        let anchor = Point::new(100.0, 500.0);
        let world_before = vp.screen_to_world(anchor);
        vp.zoom_at(anchor, 1000.0);
        assert_eq!(vp.scale(), 6.0);
        assert_close(vp.world_to_screen(world_before), anchor);
    }

    #[test]
    fn zoom_at_ignores_invalid_factors() {
        let mut vp = view();
        vp.zoom_at(Point::new(1.0, 1.0), 0.0);
        vp.zoom_at(Point::new(1.0, 1.0), -2.0);
        vp.zoom_at(Point::new(1.0, 1.0), f64::NAN);
        vp.zoom_at(Point::new(1.0, 1.0), f64::INFINITY);
        assert_eq!(vp.state(), ViewState::IDENTITY);
    }

    #[test]
    fn reset_restores_identity_exactly() {
        let mut vp = view();
        vp.pan(Vec2::new(3.5, 8.25));
        vp.zoom_at(Point::new(20.0, 30.0), 1.05);
        vp.zoom_at(Point::new(420.0, 330.0), 0.95);
        vp.pan(Vec2::new(-100.0, 1.0));

        vp.reset();
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.offset(), Vec2::ZERO);
    }

    #[test]
    fn resize_keeps_state() {
        let mut vp = view();
        vp.zoom_at(Point::new(20.0, 30.0), 2.0);
        let state = vp.state();
        vp.set_viewport(Size::new(1024.0, 768.0));
        assert_eq!(vp.state(), state);
        assert_eq!(vp.center(), Point::new(512.0, 384.0));
    }

    #[test]
    fn set_state_clamps_scale() {
        let mut vp = view();
        vp.set_state(ViewState {
            scale: 42.0,
            offset: Vec2::new(1.0, 2.0),
        });
        assert_eq!(vp.scale(), 6.0);
        assert_eq!(vp.offset(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn narrower_limits_clamp_current_scale() {
        let mut vp = view();
        vp.zoom_at(vp.center(), 5.0);
        vp.set_limits(ScaleLimits::new(0.5, 2.0));
        assert_eq!(vp.scale(), 2.0);
    }

    #[test]
    fn affine_matches_closed_form() {
        let mut vp = view();
        vp.pan(Vec2::new(-40.0, 25.0));
        vp.zoom_at(Point::new(250.0, 410.0), 2.5);
        let p = Point::new(77.0, 512.0);
        assert_close(vp.world_to_screen_affine() * p, vp.world_to_screen(p));
        let s = Point::new(5.0, 9.0);
        assert_close(vp.screen_to_world_affine() * s, vp.screen_to_world(s));
    }

    #[test]
    fn visible_world_rect_and_debug_info() {
        let mut vp = view();
        vp.zoom_at(vp.center(), 2.0);
        let visible = vp.visible_world_rect();
        assert!((visible.width() - 400.0).abs() < 1e-9);
        assert!((visible.height() - 300.0).abs() < 1e-9);

        let info = vp.debug_info();
        assert_eq!(info.viewport, Size::new(800.0, 600.0));
        assert_eq!(info.scale, 2.0);
        assert!(info.min_scale <= info.max_scale);
    }
}
