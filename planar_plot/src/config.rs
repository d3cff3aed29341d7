// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer configuration.
//!
//! [`ViewerConfig::default`] reproduces the classic viewer: a 1920×1080
//! view centered on the origin at 50 pixels per unit, on black, with the
//! eight built‑in curves. With the `serde` feature every type here can be
//! loaded from a file; missing fields take their default values.

use kurbo::Point;
use peniko::Color;
use planar_interaction::InteractionConfig;
use planar_view::Viewport;

use crate::ConfigError;
use crate::catalog::{CurveKind, DEFAULT_DOMAIN_MAX, DEFAULT_DOMAIN_MIN, DEFAULT_STEP};
use crate::function::FunctionSpec;
use crate::grid::{DEFAULT_AXIS_EXTENT, DEFAULT_MARGIN, GridBounds, GridStyle, MAX_GRID_LINES};

/// Top‑level configuration of a [`Viewer`](crate::Viewer).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct ViewerConfig {
    /// Initial viewport width in pixels.
    pub width: u32,
    /// Initial viewport height in pixels.
    pub height: u32,
    /// Initial camera center in world units.
    pub camera: [f64; 2],
    /// Initial scale in pixels per world unit.
    pub scale: f64,
    /// Lower scale bound.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Clear color, RGBA8.
    pub background: [u8; 4],
    /// Grid and axis appearance.
    pub grid: GridConfig,
    /// Function overlays, drawn in order.
    pub overlays: Vec<OverlayConfig>,
    /// Pan and zoom tuning.
    pub interaction: InteractionConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            camera: [0.0, 0.0],
            scale: Viewport::DEFAULT_SCALE,
            min_scale: Viewport::DEFAULT_MIN_SCALE,
            max_scale: Viewport::DEFAULT_MAX_SCALE,
            background: [0, 0, 0, 255],
            grid: GridConfig::default(),
            overlays: CurveKind::ALL.into_iter().map(OverlayConfig::new).collect(),
            interaction: InteractionConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Builds the initial viewport.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidScaleLimits`], [`ConfigError::NonPositiveScale`]
    /// or [`ConfigError::NonFiniteCamera`] for out‑of‑range values.
    pub fn build_viewport(&self) -> Result<Viewport, ConfigError> {
        let (min, max) = (self.min_scale, self.max_scale);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidScaleLimits { min, max });
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::NonPositiveScale { scale: self.scale });
        }
        let [x, y] = self.camera;
        if !(x.is_finite() && y.is_finite()) {
            return Err(ConfigError::NonFiniteCamera { x, y });
        }

        let mut viewport = Viewport::new(self.width, self.height);
        viewport.set_scale_limits(min, max);
        viewport.set_scale(self.scale);
        viewport.set_camera(Point::new(x, y));
        Ok(viewport)
    }

    /// Builds the grid style and checks that the grid stays within
    /// [`MAX_GRID_LINES`] at `min_scale` and the configured size.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidGridMargin`], any [`build_viewport`] error, or
    /// [`ConfigError::GridTooDense`].
    ///
    /// [`build_viewport`]: Self::build_viewport
    pub fn build_grid(&self) -> Result<GridStyle, ConfigError> {
        let style = self.grid.build()?;
        let mut densest = self.build_viewport()?;
        densest.set_scale(self.min_scale);
        let lines = GridBounds::compute(&densest, style.margin).line_count();
        if lines > MAX_GRID_LINES {
            return Err(ConfigError::GridTooDense {
                min_scale: self.min_scale,
                lines,
                max: MAX_GRID_LINES,
            });
        }
        Ok(style)
    }

    /// Checks the pan and zoom constants against the scale limits.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidInteraction`] unless every constant is finite,
    /// `zoom_step > 1`, `pan_speed_gain > 0` and
    /// `min_scale + pan_speed_offset > 1`, so that the pan speed stays
    /// positive and finite at every reachable scale.
    pub fn build_interaction(&self) -> Result<InteractionConfig, ConfigError> {
        let InteractionConfig {
            zoom_step,
            pan_speed_gain,
            pan_speed_offset,
        } = self.interaction;
        let finite = zoom_step.is_finite()
            && pan_speed_gain.is_finite()
            && pan_speed_offset.is_finite()
            && self.min_scale.is_finite();
        if !(finite
            && zoom_step > 1.0
            && pan_speed_gain > 0.0
            && self.min_scale + pan_speed_offset > 1.0)
        {
            return Err(ConfigError::InvalidInteraction {
                zoom_step,
                pan_speed_gain,
                pan_speed_offset,
                min_scale: self.min_scale,
            });
        }
        Ok(self.interaction)
    }

    /// Builds the overlay set.
    ///
    /// # Errors
    ///
    /// The first overlay error, see [`OverlayConfig::build`].
    pub fn build_overlays(&self) -> Result<Vec<FunctionSpec>, ConfigError> {
        self.overlays.iter().map(OverlayConfig::build).collect()
    }

    /// The clear color.
    #[must_use]
    pub fn background_color(&self) -> Color {
        rgba(self.background)
    }

    /// Checks every value without keeping the results.
    ///
    /// # Errors
    ///
    /// The first invalid value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_viewport()?;
        self.build_grid()?;
        self.build_interaction()?;
        for overlay in &self.overlays {
            overlay.validate()?;
        }
        Ok(())
    }
}

/// Grid and axis appearance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct GridConfig {
    /// Grid line color, RGBA8.
    pub grid_color: [u8; 4],
    /// Axis color, RGBA8.
    pub axis_color: [u8; 4],
    /// Multiplier of the viewport half‑extent covered by the grid.
    pub margin: f64,
    /// Half‑length of the axes in world units.
    pub axis_extent: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_color: [50, 50, 50, 255],
            axis_color: [255, 255, 255, 255],
            margin: DEFAULT_MARGIN,
            axis_extent: DEFAULT_AXIS_EXTENT,
        }
    }
}

impl GridConfig {
    /// Builds the grid style.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidGridMargin`] if the margin is negative or not
    /// finite.
    pub fn build(&self) -> Result<GridStyle, ConfigError> {
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(ConfigError::InvalidGridMargin {
                margin: self.margin,
            });
        }
        Ok(GridStyle {
            grid_color: rgba(self.grid_color),
            axis_color: rgba(self.axis_color),
            margin: self.margin,
            axis_extent: self.axis_extent,
        })
    }
}

/// One function overlay.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub struct OverlayConfig {
    /// Which built‑in curve to draw.
    pub curve: CurveKind,
    /// Sampled domain `[min, max)`.
    #[cfg_attr(feature = "serde", serde(default = "default_domain"))]
    pub domain: [f64; 2],
    /// Sampling step in world units.
    #[cfg_attr(feature = "serde", serde(default = "default_step"))]
    pub step: f64,
    /// Color override, RGBA8. The curve's default color when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<[u8; 4]>,
    /// Label override. The curve's formula when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
}

#[cfg(feature = "serde")]
fn default_domain() -> [f64; 2] {
    [DEFAULT_DOMAIN_MIN, DEFAULT_DOMAIN_MAX]
}

#[cfg(feature = "serde")]
fn default_step() -> f64 {
    DEFAULT_STEP
}

impl OverlayConfig {
    /// An overlay of `curve` with the default domain, step, and color.
    #[must_use]
    pub fn new(curve: CurveKind) -> Self {
        Self {
            curve,
            domain: [DEFAULT_DOMAIN_MIN, DEFAULT_DOMAIN_MAX],
            step: DEFAULT_STEP,
            color: None,
            label: None,
        }
    }

    /// Builds the function overlay.
    ///
    /// # Errors
    ///
    /// See [`FunctionSpec::new`].
    pub fn build(&self) -> Result<FunctionSpec, ConfigError> {
        let curve = self.curve;
        let color = self.color.map_or_else(|| curve.default_color(), rgba);
        let spec = FunctionSpec::new(
            move |x| curve.evaluate(x),
            self.domain[0],
            self.domain[1],
            self.step,
            color,
        )?;
        Ok(match &self.label {
            Some(label) => spec.with_label(label.clone()),
            None => spec.with_label(curve.label()),
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.build().map(drop)
    }
}

fn rgba([r, g, b, a]: [u8; 4]) -> Color {
    Color::from_rgba8(r, g, b, a)
}
