// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Surface Reference Backend.
//!
//! This crate provides [`RecordingSurface`], a [`Surface`] that records every
//! call as a [`DrawOp`] instead of rasterizing.
//!
//! It is intended for tests and headless runs that want to assert on what a
//! frame drew: how many lines, in which colors, and where.
//! - It does **not** rasterize to pixels.
//! - It does **not** cull: off‑screen and non‑finite segments are recorded
//!   exactly as submitted.
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use planar_surface::Surface;
//! use planar_surface_ref::RecordingSurface;
//!
//! let mut surface = RecordingSurface::new();
//! surface.clear(Color::BLACK);
//! surface.draw_line(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Color::WHITE);
//! surface.present();
//!
//! assert_eq!(surface.frame_count(), 1);
//! assert_eq!(surface.frames()[0].line_count(), 1);
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use planar_surface::{DrawOp, Surface};

/// A line as recorded by [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordedLine {
    /// Start point in screen space.
    pub from: Point,
    /// End point in screen space.
    pub to: Point,
    /// Line color.
    pub color: Color,
}

/// The ops of one presented frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Ops in submission order, excluding the closing [`DrawOp::Present`].
    pub ops: Vec<DrawOp>,
}

impl Frame {
    /// Iterates over the lines drawn in this frame.
    pub fn lines(&self) -> impl Iterator<Item = RecordedLine> + '_ {
        lines_of(&self.ops)
    }

    /// Number of lines drawn in this frame.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Number of lines drawn in `color`.
    #[must_use]
    pub fn lines_with_color(&self, color: Color) -> usize {
        self.lines().filter(|l| l.color == color).count()
    }

    /// The last clear color of this frame, if it cleared.
    #[must_use]
    pub fn clear_color(&self) -> Option<Color> {
        self.ops.iter().rev().find_map(|op| match op {
            DrawOp::Clear(c) => Some(*c),
            _ => None,
        })
    }
}

/// A [`Surface`] that records every call.
///
/// Ops are available both as one flat log ([`ops`](Self::ops)) and split into
/// presented [`frames`](Self::frames). Ops submitted after the last
/// [`present`](Surface::present) are pending and only appear in the flat log.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    frames: Vec<Frame>,
    pending: Vec<DrawOp>,
    logical_size: Option<(u32, u32)>,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded ops, in submission order, including presents.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// All recorded lines across every frame, including pending ones.
    pub fn lines(&self) -> impl Iterator<Item = RecordedLine> + '_ {
        lines_of(&self.ops)
    }

    /// Presented frames, oldest first.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recently presented frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Number of presented frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The last logical size set on this surface.
    #[must_use]
    pub fn logical_size(&self) -> Option<(u32, u32)> {
        self.logical_size
    }

    /// Drops all recorded ops and frames. The logical size is kept.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
        self.frames.clear();
        self.pending.clear();
    }

    fn record(&mut self, op: DrawOp) {
        self.ops.push(op);
        self.pending.push(op);
    }
}

impl Surface for RecordingSurface {
    fn set_logical_size(&mut self, width: u32, height: u32) {
        self.logical_size = Some((width, height));
        self.record(DrawOp::SetLogicalSize { width, height });
    }

    fn clear(&mut self, color: Color) {
        self.record(DrawOp::Clear(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.record(DrawOp::Line { from, to, color });
    }

    fn present(&mut self) {
        self.ops.push(DrawOp::Present);
        let ops = core::mem::take(&mut self.pending);
        self.frames.push(Frame { ops });
    }
}

fn lines_of(ops: &[DrawOp]) -> impl Iterator<Item = RecordedLine> + '_ {
    ops.iter().filter_map(|op| match *op {
        DrawOp::Line { from, to, color } => Some(RecordedLine { from, to, color }),
        _ => None,
    })
}
