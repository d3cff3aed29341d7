// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Rejected viewer or overlay configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The sampling step of an overlay is zero, negative, or not finite.
    #[error("sampling step must be positive and finite, got {step}")]
    NonPositiveStep {
        /// The rejected step.
        step: f64,
    },
    /// A domain bound is NaN or infinite.
    #[error("function domain must be finite, got [{min}, {max})")]
    NonFiniteDomain {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// The domain lower bound exceeds the upper bound.
    #[error("function domain is inverted: {min} > {max}")]
    InvertedDomain {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Scale limits are not positive, finite, and ordered.
    #[error("invalid scale limits [{min}, {max}]")]
    InvalidScaleLimits {
        /// Requested minimum scale.
        min: f64,
        /// Requested maximum scale.
        max: f64,
    },
    /// The initial camera position is not finite.
    #[error("camera position must be finite, got ({x}, {y})")]
    NonFiniteCamera {
        /// Camera X.
        x: f64,
        /// Camera Y.
        y: f64,
    },
    /// The initial scale is zero, negative, or not finite.
    #[error("scale must be positive and finite, got {scale}")]
    NonPositiveScale {
        /// The rejected scale.
        scale: f64,
    },
    /// The grid margin multiplier is negative or not finite.
    #[error("grid margin must be non-negative and finite, got {margin}")]
    InvalidGridMargin {
        /// The rejected margin.
        margin: f64,
    },
    /// The minimum scale lets the grid grow past [`MAX_GRID_LINES`].
    ///
    /// [`MAX_GRID_LINES`]: crate::grid::MAX_GRID_LINES
    #[error("minimum scale {min_scale} allows {lines} grid lines, more than {max}")]
    GridTooDense {
        /// The rejected minimum scale.
        min_scale: f64,
        /// Grid lines at that scale, saturated.
        lines: usize,
        /// The line budget.
        max: usize,
    },
    /// The domain/step ratio of an overlay exceeds [`MAX_SAMPLES`].
    ///
    /// [`MAX_SAMPLES`]: crate::function::MAX_SAMPLES
    #[error("step {step} over [{min}, {max}) needs more than {limit} samples")]
    TooManySamples {
        /// The rejected step.
        step: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// The sample budget.
        limit: usize,
    },
    /// Pan and zoom constants that would disable zoom or break panning.
    ///
    /// Requires finite values with `zoom_step > 1`, `pan_speed_gain > 0` and
    /// `min_scale + pan_speed_offset > 1`.
    #[error(
        "invalid interaction constants: zoom step {zoom_step}, pan gain {pan_speed_gain}, \
         pan offset {pan_speed_offset} (min scale {min_scale})"
    )]
    InvalidInteraction {
        /// Multiplicative zoom step.
        zoom_step: f64,
        /// Pan speed numerator.
        pan_speed_gain: f64,
        /// Pan speed offset.
        pan_speed_offset: f64,
        /// Minimum scale the offset is checked against.
        min_scale: f64,
    },
}
