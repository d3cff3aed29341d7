// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Surface: the line‑drawing boundary between the viewer core and a
//! rendering backend.
//!
//! The viewer core only ever needs four operations from a renderer:
//!
//! - [`Surface::set_logical_size`]: the extent screen coordinates refer to,
//! - [`Surface::clear`]: fill the whole surface with one color,
//! - [`Surface::draw_line`]: a one‑pixel screen‑space segment,
//! - [`Surface::present`]: the frame is complete.
//!
//! Backends (a Vello scene, a recording surface for tests, a CPU
//! rasterizer) implement [`Surface`]; the core stays agnostic of them.
//!
//! # Non‑finite and off‑screen segments
//!
//! The core emits segments exactly as computed, which includes endpoints far
//! outside the surface and non‑finite endpoints when a plotted function is
//! undefined (for example `ln(0)`). Backends must tolerate these. The
//! [`cull`] helpers give backends a cheap way to drop segments that cannot
//! contribute pixels.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use planar_surface::{DrawOp, Surface};
//!
//! #[derive(Default)]
//! struct Log(Vec<DrawOp>);
//!
//! impl Surface for Log {
//!     fn set_logical_size(&mut self, width: u32, height: u32) {
//!         self.0.push(DrawOp::SetLogicalSize { width, height });
//!     }
//!     fn clear(&mut self, color: Color) {
//!         self.0.push(DrawOp::Clear(color));
//!     }
//!     fn draw_line(&mut self, from: Point, to: Point, color: Color) {
//!         self.0.push(DrawOp::Line { from, to, color });
//!     }
//!     fn present(&mut self) {
//!         self.0.push(DrawOp::Present);
//!     }
//! }
//!
//! let mut log = Log::default();
//! log.clear(Color::BLACK);
//! log.draw_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Color::WHITE);
//! log.present();
//! assert_eq!(log.0.len(), 3);
//! ```

#![no_std]

pub mod cull;

pub use kurbo::Point;
pub use peniko::Color;

/// A line‑drawing render target.
///
/// All coordinates are in screen space: pixels, origin at the top left,
/// Y increasing downward.
pub trait Surface {
    /// Sets the logical extent that screen coordinates refer to.
    fn set_logical_size(&mut self, width: u32, height: u32);

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Draws a segment from `from` to `to` in `color`.
    ///
    /// Endpoints may be far off‑screen or non‑finite; implementations must
    /// not panic on them.
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Marks the end of a frame.
    fn present(&mut self);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_logical_size(&mut self, width: u32, height: u32) {
        (**self).set_logical_size(width, height);
    }

    fn clear(&mut self, color: Color) {
        (**self).clear(color);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        (**self).draw_line(from, to, color);
    }

    fn present(&mut self) {
        (**self).present();
    }
}

/// One surface call, as plain data.
///
/// Useful for recording frames and asserting on them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
    /// [`Surface::set_logical_size`].
    SetLogicalSize {
        /// Logical width in pixels.
        width: u32,
        /// Logical height in pixels.
        height: u32,
    },
    /// [`Surface::clear`].
    Clear(Color),
    /// [`Surface::draw_line`].
    Line {
        /// Start point in screen space.
        from: Point,
        /// End point in screen space.
        to: Point,
        /// Line color.
        color: Color,
    },
    /// [`Surface::present`].
    Present,
}

impl DrawOp {
    /// Replays this op onto `surface`.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        match *self {
            Self::SetLogicalSize { width, height } => surface.set_logical_size(width, height),
            Self::Clear(color) => surface.clear(color),
            Self::Line { from, to, color } => surface.draw_line(from, to, color),
            Self::Present => surface.present(),
        }
    }
}
