// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built‑in curves.

use peniko::Color;

use crate::function::FunctionSpec;

/// Default overlay domain lower bound.
pub const DEFAULT_DOMAIN_MIN: f64 = -200.0;
/// Default overlay domain upper bound.
pub const DEFAULT_DOMAIN_MAX: f64 = 200.0;
/// Default overlay sampling step.
pub const DEFAULT_STEP: f64 = 0.1;

/// A built‑in analytic curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CurveKind {
    /// `x²`
    Square,
    /// `sin(x)`
    Sine,
    /// `cos(x)`
    Cosine,
    /// `tan(x)`
    Tangent,
    /// `exp(x / 100)`
    ScaledExp,
    /// `ln(x + 200)`
    ShiftedLog,
    /// `sqrt(x + 200)`
    ShiftedSqrt,
    /// `|x|`
    Abs,
}

impl CurveKind {
    /// Every curve, in default drawing order.
    pub const ALL: [Self; 8] = [
        Self::Square,
        Self::Sine,
        Self::Cosine,
        Self::Tangent,
        Self::ScaledExp,
        Self::ShiftedLog,
        Self::ShiftedSqrt,
        Self::Abs,
    ];

    /// Evaluates the curve at `x`.
    #[must_use]
    pub fn evaluate(self, x: f64) -> f64 {
        match self {
            Self::Square => x * x,
            Self::Sine => x.sin(),
            Self::Cosine => x.cos(),
            Self::Tangent => x.tan(),
            Self::ScaledExp => (x / 100.0).exp(),
            Self::ShiftedLog => (x + 200.0).ln(),
            Self::ShiftedSqrt => (x + 200.0).sqrt(),
            Self::Abs => x.abs(),
        }
    }

    /// The curve's default line color.
    #[must_use]
    pub fn default_color(self) -> Color {
        match self {
            Self::Square => Color::from_rgba8(255, 255, 0, 255),
            Self::Sine => Color::from_rgba8(255, 0, 255, 255),
            Self::Cosine => Color::from_rgba8(0, 255, 255, 255),
            Self::Tangent => Color::from_rgba8(0, 255, 0, 255),
            Self::ScaledExp => Color::from_rgba8(255, 0, 0, 255),
            Self::ShiftedLog => Color::from_rgba8(0, 0, 255, 255),
            Self::ShiftedSqrt => Color::from_rgba8(255, 255, 255, 255),
            Self::Abs => Color::from_rgba8(255, 128, 0, 255),
        }
    }

    /// Short human‑readable formula.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Square => "x^2",
            Self::Sine => "sin(x)",
            Self::Cosine => "cos(x)",
            Self::Tangent => "tan(x)",
            Self::ScaledExp => "exp(x/100)",
            Self::ShiftedLog => "ln(x+200)",
            Self::ShiftedSqrt => "sqrt(x+200)",
            Self::Abs => "|x|",
        }
    }

    /// Builds an overlay for this curve with its default color and label.
    ///
    /// # Errors
    ///
    /// See [`FunctionSpec::new`].
    pub fn to_spec(
        self,
        domain_min: f64,
        domain_max: f64,
        step: f64,
    ) -> Result<FunctionSpec, crate::ConfigError> {
        Ok(FunctionSpec::new(
            move |x| self.evaluate(x),
            domain_min,
            domain_max,
            step,
            self.default_color(),
        )?
        .with_label(self.label()))
    }
}

/// The eight built‑in curves over `[-200, 200)` at step `0.1`.
#[must_use]
pub fn default_overlays() -> Vec<FunctionSpec> {
    CurveKind::ALL
        .iter()
        .filter_map(|kind| {
            kind.to_spec(DEFAULT_DOMAIN_MIN, DEFAULT_DOMAIN_MAX, DEFAULT_STEP)
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_overlays_match_catalog_order() {
        let overlays = default_overlays();
        assert_eq!(overlays.len(), 8);
        for (spec, kind) in overlays.iter().zip(CurveKind::ALL) {
            assert_eq!(spec.color(), kind.default_color());
            assert_eq!(spec.label(), Some(kind.label()));
            assert_eq!(spec.sample_count(), 4000);
        }
    }

    #[test]
    fn evaluations() {
        assert_eq!(CurveKind::Square.evaluate(-3.0), 9.0);
        assert_eq!(CurveKind::Abs.evaluate(-2.5), 2.5);
        assert_eq!(CurveKind::ScaledExp.evaluate(0.0), 1.0);
        assert_eq!(CurveKind::ShiftedSqrt.evaluate(-100.0), 10.0);
        assert_eq!(CurveKind::ShiftedLog.evaluate(-200.0), f64::NEG_INFINITY);
        assert!(CurveKind::ShiftedSqrt.evaluate(-201.0).is_nan());
    }

    #[test]
    fn orange_abs() {
        assert_eq!(
            CurveKind::Abs.default_color(),
            Color::from_rgba8(255, 128, 0, 255)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn kebab_case_names() {
        let json = serde_json::to_string(&CurveKind::ShiftedSqrt).unwrap();
        assert_eq!(json, "\"shifted-sqrt\"");
        let kind: CurveKind = serde_json::from_str("\"scaled-exp\"").unwrap();
        assert_eq!(kind, CurveKind::ScaledExp);
    }
}
