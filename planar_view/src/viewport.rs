// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

/// Camera and pixel viewport over the world‑space plane.
///
/// `Viewport` maps world coordinates (Y up) into screen coordinates (Y down)
/// such that the camera point always lands on the center of the viewport:
///
/// - `screen_x = (world_x - camera_x) * scale + width / 2`
/// - `screen_y = height / 2 - (world_y - camera_y) * scale`
///
/// The scale is always strictly positive. It only changes multiplicatively
/// (see [`Viewport::zoom`]) or through validated setters, and is clamped into
/// the configured scale limits.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    camera: Point,
    scale: f64,
    width: u32,
    height: u32,
    min_scale: f64,
    max_scale: f64,
}

impl Viewport {
    /// Scale used by [`Viewport::new`], in pixels per world unit.
    pub const DEFAULT_SCALE: f64 = 50.0;

    /// Default lower scale limit.
    ///
    /// At `0.5` a 1920 pixel wide viewport spans 3840 world units, which keeps
    /// the per‑unit grid in the low thousands of lines.
    pub const DEFAULT_MIN_SCALE: f64 = 0.5;

    /// Default upper scale limit.
    pub const DEFAULT_MAX_SCALE: f64 = 1.0e6;

    /// Creates a viewport of `width` x `height` pixels.
    ///
    /// - The camera starts at the world origin.
    /// - Initial scale is [`Viewport::DEFAULT_SCALE`].
    /// - Scale is clamped to `[DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE]`.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            camera: Point::ORIGIN,
            scale: Self::DEFAULT_SCALE,
            width,
            height,
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
        }
    }

    /// Returns the world point mapped to the viewport center.
    #[must_use]
    pub fn camera(&self) -> Point {
        self.camera
    }

    /// Returns the camera X coordinate in world units.
    #[must_use]
    pub fn camera_x(&self) -> f64 {
        self.camera.x
    }

    /// Returns the camera Y coordinate in world units.
    #[must_use]
    pub fn camera_y(&self) -> f64 {
        self.camera.y
    }

    /// Moves the camera to `world_pt`.
    ///
    /// Non‑finite points are ignored.
    pub fn set_camera(&mut self, world_pt: Point) {
        if world_pt.is_finite() {
            self.camera = world_pt;
        }
    }

    /// Centers the view on `world_pt`. Same as [`set_camera`](Self::set_camera).
    pub fn center_on(&mut self, world_pt: Point) {
        self.set_camera(world_pt);
    }

    /// Returns the current scale in pixels per world unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale, clamping it into the configured scale limits.
    ///
    /// Values that are not strictly positive and finite are ignored, so the
    /// scale can never become zero or negative.
    pub fn set_scale(&mut self, scale: f64) {
        if !is_positive_finite(scale) {
            return;
        }
        self.scale = scale.clamp(self.min_scale, self.max_scale);
    }

    /// Returns the `(min, max)` scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`, and
    /// the current scale is clamped into the new range. Limits that are not
    /// strictly positive and finite are ignored.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        if !is_positive_finite(min_scale) || !is_positive_finite(max_scale) {
            return;
        }
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.scale = self.scale.clamp(min_scale, max_scale);
    }

    /// Returns the viewport width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the viewport height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Updates the logical render extent, typically after a resize.
    ///
    /// Camera and scale are unchanged; only the visible world region and the
    /// screen position of the camera center move.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Pans the camera by a world‑space delta.
    ///
    /// `camera_x -= delta_world_x` and `camera_y += delta_world_y`. The Y sign
    /// is inverted relative to X so that a downward screen drag (positive
    /// screen Y delta) raises the camera, matching the flipped vertical axis.
    pub fn pan(&mut self, delta_world_x: f64, delta_world_y: f64) {
        self.camera.x -= delta_world_x;
        self.camera.y += delta_world_y;
    }

    /// Multiplies the scale by `factor`.
    ///
    /// Factors below `1.0` shrink the scale (more world units on screen),
    /// factors above `1.0` grow it. The result is clamped into the scale
    /// limits. Factors that are not strictly positive and finite are ignored.
    pub fn zoom(&mut self, factor: f64) {
        if !is_positive_finite(factor) {
            return;
        }
        self.scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
    }

    /// Converts a world X coordinate into screen space.
    #[must_use]
    pub fn to_screen_x(&self, world_x: f64) -> f64 {
        (world_x - self.camera.x) * self.scale + self.half_width()
    }

    /// Converts a world Y coordinate into screen space (Y down).
    #[must_use]
    pub fn to_screen_y(&self, world_y: f64) -> f64 {
        self.half_height() - (world_y - self.camera.y) * self.scale
    }

    /// Converts a world‑space point into screen space.
    #[must_use]
    pub fn to_screen_point(&self, world_pt: Point) -> Point {
        Point::new(self.to_screen_x(world_pt.x), self.to_screen_y(world_pt.y))
    }

    /// Converts a screen X coordinate back into world space.
    #[must_use]
    pub fn to_world_x(&self, screen_x: f64) -> f64 {
        (screen_x - self.half_width()) / self.scale + self.camera.x
    }

    /// Converts a screen Y coordinate back into world space.
    #[must_use]
    pub fn to_world_y(&self, screen_y: f64) -> f64 {
        self.camera.y - (screen_y - self.half_height()) / self.scale
    }

    /// Converts a screen‑space point back into world space.
    ///
    /// This is the inverse of [`Viewport::to_screen_point`] and is meant for
    /// hit testing.
    #[must_use]
    pub fn to_world_point(&self, screen_pt: Point) -> Point {
        Point::new(self.to_world_x(screen_pt.x), self.to_world_y(screen_pt.y))
    }

    /// Returns the world → screen mapping as an affine transform.
    #[must_use]
    pub fn world_to_screen(&self) -> Affine {
        let s = self.scale;
        Affine::new([
            s,
            0.0,
            0.0,
            -s,
            self.half_width() - s * self.camera.x,
            self.half_height() + s * self.camera.y,
        ])
    }

    /// Returns the world‑space rectangle exactly covered by the viewport.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let x0 = self.to_world_x(0.0);
        let x1 = self.to_world_x(f64::from(self.width));
        // Screen Y grows downward, so the top edge is the larger world Y.
        let y0 = self.to_world_y(f64::from(self.height));
        let y1 = self.to_world_y(0.0);
        Rect::new(x0, y0, x1, y1)
    }

    /// Returns how many world units one pixel covers (`1.0 / scale`).
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        1.0 / self.scale
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            camera: self.camera,
            scale: self.scale,
            width: self.width,
            height: self.height,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            visible_world_rect: self.visible_world_rect(),
        }
    }

    fn half_width(&self) -> f64 {
        f64::from(self.width) / 2.0
    }

    fn half_height(&self) -> f64 {
        f64::from(self.height) / 2.0
    }
}

fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// World point mapped to the viewport center.
    pub camera: Point,
    /// Pixels per world unit.
    pub scale: f64,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// World‑space rectangle currently visible through the viewport.
    pub visible_world_rect: Rect,
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::Viewport;

    #[test]
    fn camera_center_maps_to_view_center() {
        let mut vp = Viewport::new(1920, 1080);
        assert_eq!(vp.to_screen_x(0.0), 960.0);
        assert_eq!(vp.to_screen_y(0.0), 540.0);

        vp.set_camera(Point::new(3.5, -7.25));
        assert_eq!(vp.to_screen_x(3.5), 960.0);
        assert_eq!(vp.to_screen_y(-7.25), 540.0);
    }

    #[test]
    fn y_axis_is_flipped() {
        let vp = Viewport::new(800, 600);
        assert!(vp.to_screen_y(1.0) < vp.to_screen_y(0.0));
        assert!(vp.to_screen_x(1.0) > vp.to_screen_x(0.0));
    }

    #[test]
    fn screen_world_roundtrip() {
        let mut vp = Viewport::new(800, 600);
        vp.set_camera(Point::new(12.0, -4.0));
        vp.set_scale(37.5);

        let world_pt = Point::new(10.0, -5.0);
        let screen_pt = vp.to_screen_point(world_pt);
        let world_back = vp.to_world_point(screen_pt);
        assert!((world_back.x - world_pt.x).abs() < 1e-9);
        assert!((world_back.y - world_pt.y).abs() < 1e-9);
    }

    #[test]
    fn affine_matches_component_transforms() {
        let mut vp = Viewport::new(1024, 768);
        vp.set_camera(Point::new(-3.0, 8.0));
        vp.set_scale(12.0);

        let p = Point::new(4.25, -1.5);
        let via_affine = vp.world_to_screen() * p;
        let direct = vp.to_screen_point(p);
        assert!((via_affine.x - direct.x).abs() < 1e-9);
        assert!((via_affine.y - direct.y).abs() < 1e-9);
    }

    #[test]
    fn pan_inverts_y_sign() {
        let mut vp = Viewport::new(800, 600);
        vp.pan(2.0, 3.0);
        assert_eq!(vp.camera(), Point::new(-2.0, 3.0));
    }

    #[test]
    fn zoom_is_multiplicative_and_clamped() {
        let mut vp = Viewport::new(800, 600);
        vp.zoom(2.0);
        assert_eq!(vp.scale(), 100.0);

        vp.set_scale_limits(10.0, 200.0);
        vp.zoom(10.0);
        assert_eq!(vp.scale(), 200.0);
        vp.zoom(1e-9);
        assert_eq!(vp.scale(), 10.0);
    }

    #[test]
    fn invalid_zoom_factors_are_ignored() {
        let mut vp = Viewport::new(800, 600);
        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            vp.zoom(factor);
            assert_eq!(vp.scale(), Viewport::DEFAULT_SCALE);
        }
        vp.set_scale(0.0);
        vp.set_scale(f64::NAN);
        assert_eq!(vp.scale(), Viewport::DEFAULT_SCALE);
    }

    #[test]
    fn scale_limits_are_normalized() {
        let mut vp = Viewport::new(800, 600);
        vp.set_scale_limits(100.0, 60.0);
        assert_eq!(vp.scale_limits(), (60.0, 100.0));
        assert_eq!(vp.scale(), 60.0);

        vp.set_scale_limits(-1.0, 10.0);
        assert_eq!(vp.scale_limits(), (60.0, 100.0));
    }

    #[test]
    fn visible_world_rect_and_debug_info() {
        let vp = Viewport::new(200, 100);
        let rect = vp.visible_world_rect();
        assert_eq!(rect.x0, -2.0);
        assert_eq!(rect.x1, 2.0);
        assert_eq!(rect.y0, -1.0);
        assert_eq!(rect.y1, 1.0);
        assert_eq!(vp.world_units_per_pixel(), 1.0 / 50.0);

        let info = vp.debug_info();
        assert_eq!(info.visible_world_rect, rect);
        assert_eq!((info.width, info.height), (200, 100));
        assert!(info.min_scale <= info.max_scale);
    }

    #[test]
    fn resize_moves_center_but_not_camera() {
        let mut vp = Viewport::new(800, 600);
        vp.set_viewport_size(1000, 400);
        assert_eq!(vp.camera(), Point::ORIGIN);
        assert_eq!(vp.to_screen_x(0.0), 500.0);
        assert_eq!(vp.to_screen_y(0.0), 200.0);
    }
}
