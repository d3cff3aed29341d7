// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit grid and coordinate axes.
//!
//! The grid covers a world rectangle `margin` times the half‑extent of the
//! viewport on each side of the camera (2× by default), so lines stay
//! populated while the camera moves within a frame. Bounds are snapped up to
//! integers with `ceil` and lines are placed at every integer in between.

use kurbo::Point;
use peniko::Color;
use planar_surface::Surface;
use planar_view::Viewport;

/// Default grid line color.
pub const DEFAULT_GRID_COLOR: Color = Color::from_rgba8(50, 50, 50, 255);
/// Default axis color.
pub const DEFAULT_AXIS_COLOR: Color = Color::WHITE;
/// Default margin multiplier of the grid bounds.
pub const DEFAULT_MARGIN: f64 = 2.0;
/// Default half‑length of the axes in world units.
pub const DEFAULT_AXIS_EXTENT: f64 = 200.0;
/// Most grid lines drawn in one frame.
///
/// A grid denser than this is skipped for the frame; at that density the
/// lines are far less than a pixel apart.
pub const MAX_GRID_LINES: usize = 1 << 16;

/// Colors and extents of the grid and axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    /// Color of the unit grid lines.
    pub grid_color: Color,
    /// Color of the two axes.
    pub axis_color: Color,
    /// Multiplier applied to the viewport half‑extent when bounding the grid.
    pub margin: f64,
    /// The axes span `[-axis_extent, axis_extent]` on their own dimension.
    pub axis_extent: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            grid_color: DEFAULT_GRID_COLOR,
            axis_color: DEFAULT_AXIS_COLOR,
            margin: DEFAULT_MARGIN,
            axis_extent: DEFAULT_AXIS_EXTENT,
        }
    }
}

/// Integer world bounds of the grid for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridBounds {
    /// Leftmost grid X.
    pub x_min: f64,
    /// Rightmost grid X.
    pub x_max: f64,
    /// Lowest grid Y.
    pub y_min: f64,
    /// Highest grid Y.
    pub y_max: f64,
}

impl GridBounds {
    /// Computes the grid bounds of `viewport` with the given margin multiplier.
    ///
    /// ```
    /// use planar_plot::grid::GridBounds;
    /// use planar_view::Viewport;
    ///
    /// let bounds = GridBounds::compute(&Viewport::new(1920, 1080), 2.0);
    /// assert_eq!((bounds.x_min, bounds.x_max), (-38.0, 39.0));
    /// assert_eq!((bounds.y_min, bounds.y_max), (-21.0, 22.0));
    /// assert_eq!(bounds.vertical_line_count(), 78);
    /// ```
    #[must_use]
    pub fn compute(viewport: &Viewport, margin: f64) -> Self {
        let scale = viewport.scale();
        let half_w = margin * f64::from(viewport.width()) / (2.0 * scale);
        let half_h = margin * f64::from(viewport.height()) / (2.0 * scale);
        let Point { x: cx, y: cy } = viewport.camera();
        Self {
            x_min: (cx - half_w).ceil(),
            x_max: (cx + half_w).ceil(),
            y_min: (cy - half_h).ceil(),
            y_max: (cy + half_h).ceil(),
        }
    }

    /// Number of vertical grid lines, one per integer X in `[x_min, x_max]`.
    #[must_use]
    pub fn vertical_line_count(&self) -> usize {
        integer_count(self.x_min, self.x_max)
    }

    /// Number of horizontal grid lines, one per integer Y in `[y_min, y_max]`.
    #[must_use]
    pub fn horizontal_line_count(&self) -> usize {
        integer_count(self.y_min, self.y_max)
    }

    /// Total number of grid lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.vertical_line_count()
            .saturating_add(self.horizontal_line_count())
    }
}

fn integer_count(min: f64, max: f64) -> usize {
    if !min.is_finite() || !max.is_finite() {
        return 0;
    }
    let (lo, hi) = (min.ceil(), max.floor());
    if hi < lo {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "hi >= lo, both integral and finite"
    )]
    let count = (hi - lo) as usize;
    count.saturating_add(1)
}

/// Draws the unit grid, verticals first, and returns the number of lines.
///
/// Draws nothing when the grid has more than [`MAX_GRID_LINES`] lines.
pub fn draw_grid<S: Surface + ?Sized>(
    viewport: &Viewport,
    style: &GridStyle,
    surface: &mut S,
) -> usize {
    let bounds = GridBounds::compute(viewport, style.margin);
    let (x0, y0) = (bounds.x_min.ceil(), bounds.y_min.ceil());
    let verticals = bounds.vertical_line_count();
    let horizontals = bounds.horizontal_line_count();
    let total = verticals.saturating_add(horizontals);
    if total > MAX_GRID_LINES {
        return 0;
    }

    for i in 0..verticals {
        let x = x0 + i as f64;
        surface.draw_line(
            viewport.to_screen_point(Point::new(x, bounds.y_min)),
            viewport.to_screen_point(Point::new(x, bounds.y_max)),
            style.grid_color,
        );
    }
    for i in 0..horizontals {
        let y = y0 + i as f64;
        surface.draw_line(
            viewport.to_screen_point(Point::new(bounds.x_min, y)),
            viewport.to_screen_point(Point::new(bounds.x_max, y)),
            style.grid_color,
        );
    }
    total
}

/// Draws the X axis, then the Y axis. Returns the number of lines (2).
pub fn draw_axes<S: Surface + ?Sized>(
    viewport: &Viewport,
    style: &GridStyle,
    surface: &mut S,
) -> usize {
    let e = style.axis_extent;
    surface.draw_line(
        viewport.to_screen_point(Point::new(-e, 0.0)),
        viewport.to_screen_point(Point::new(e, 0.0)),
        style.axis_color,
    );
    surface.draw_line(
        viewport.to_screen_point(Point::new(0.0, -e)),
        viewport.to_screen_point(Point::new(0.0, e)),
        style.axis_color,
    );
    2
}
