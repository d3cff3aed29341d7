// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] that encodes into a Vello [`Scene`].

use kurbo::{Affine, Line, Point, Rect, Stroke};
use peniko::{Color, Fill};
use planar_surface::{Surface, cull};
use vello::Scene;

/// Slack around the surface, in logical pixels, inside which segments are
/// still submitted.
const CULL_PAD: f64 = 2.0;

/// Encodes surface calls into a Vello scene.
///
/// Coordinates are logical pixels; `scale_factor` maps them to device
/// pixels. Non‑finite segments and segments wholly off one side of the
/// surface are dropped.
pub struct SceneSurface<'a> {
    scene: &'a mut Scene,
    transform: Affine,
    stroke: Stroke,
    width: u32,
    height: u32,
    drawn: usize,
    culled: usize,
}

impl std::fmt::Debug for SceneSurface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneSurface")
            .field("transform", &self.transform)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("drawn", &self.drawn)
            .field("culled", &self.culled)
            .finish_non_exhaustive()
    }
}

impl<'a> SceneSurface<'a> {
    /// Wraps `scene` for a surface of `width` × `height` logical pixels.
    pub fn new(scene: &'a mut Scene, width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            scene,
            transform: Affine::scale(scale_factor),
            stroke: Stroke::new(1.0),
            width,
            height,
            drawn: 0,
            culled: 0,
        }
    }

    /// Segments encoded into the scene.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Segments dropped as non‑finite or off‑screen.
    pub fn culled(&self) -> usize {
        self.culled
    }
}

impl Surface for SceneSurface<'_> {
    fn set_logical_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self, color: Color) {
        self.scene.reset();
        let rect = Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        self.scene
            .fill(Fill::NonZero, self.transform, color, None, &rect);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        if !cull::should_draw(from, to, self.width, self.height, CULL_PAD) {
            self.culled += 1;
            return;
        }
        self.scene.stroke(
            &self.stroke,
            self.transform,
            color,
            None,
            &Line::new(from, to),
        );
        self.drawn += 1;
    }

    fn present(&mut self) {
        tracing::trace!(drawn = self.drawn, culled = self.culled, "scene encoded");
    }
}
