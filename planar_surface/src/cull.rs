// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cheap segment rejection for backends.
//!
//! These checks are conservative: a segment that passes may still miss the
//! rectangle (it can cross a corner region diagonally), but a segment that is
//! rejected never touches it.

use kurbo::{Point, Rect};

/// Returns `true` if both endpoints have finite coordinates.
#[must_use]
pub fn is_finite_segment(from: Point, to: Point) -> bool {
    from.is_finite() && to.is_finite()
}

/// Returns `false` when both endpoints lie beyond the same edge of `bounds`.
///
/// Non‑finite endpoints make this return `false` as well, since comparisons
/// with NaN never succeed and infinite endpoints cannot be drawn.
#[must_use]
pub fn segment_may_intersect(from: Point, to: Point, bounds: Rect) -> bool {
    if !is_finite_segment(from, to) {
        return false;
    }
    let bounds = bounds.abs();
    let left = from.x < bounds.x0 && to.x < bounds.x0;
    let right = from.x > bounds.x1 && to.x > bounds.x1;
    let above = from.y < bounds.y0 && to.y < bounds.y0;
    let below = from.y > bounds.y1 && to.y > bounds.y1;
    !(left || right || above || below)
}

/// Returns `true` if a segment is worth submitting to a rasterizer drawing
/// into a `width` x `height` surface, with `pad` pixels of slack around it.
#[must_use]
pub fn should_draw(from: Point, to: Point, width: u32, height: u32, pad: f64) -> bool {
    let bounds = Rect::new(0.0, 0.0, f64::from(width), f64::from(height)).inflate(pad, pad);
    segment_may_intersect(from, to, bounds)
}
