// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise‑linear function overlays.
//!
//! A [`FunctionSpec`] is sampled at fixed world‑space intervals
//! `x_i = domain_min + i * step` for every `x_i < domain_max`, and each sample
//! is joined to the next by a straight segment. Sampling density does not
//! depend on the viewport scale: zooming in reveals the facets.
//!
//! Sample positions are computed from the index rather than by repeated
//! addition, so the number of segments does not drift with the step's binary
//! representation: `[-200, 200)` at `0.1` yields exactly 4000 segments.

use std::borrow::Cow;
use std::fmt;

use kurbo::{Line, Point};
use peniko::Color;
use planar_surface::Surface;
use planar_view::Viewport;

use crate::ConfigError;

/// Most samples a single overlay may take.
pub const MAX_SAMPLES: usize = 1 << 24;

type Evaluator = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// An analytic function drawn over a sampled domain.
pub struct FunctionSpec {
    evaluate: Evaluator,
    domain_min: f64,
    domain_max: f64,
    step: f64,
    color: Color,
    label: Option<Cow<'static, str>>,
}

impl fmt::Debug for FunctionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionSpec")
            .field("domain_min", &self.domain_min)
            .field("domain_max", &self.domain_max)
            .field("step", &self.step)
            .field("color", &self.color)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl FunctionSpec {
    /// Creates a function overlay over `[domain_min, domain_max)`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NonFiniteDomain`] if either bound is NaN or infinite.
    /// - [`ConfigError::InvertedDomain`] if `domain_min > domain_max`.
    /// - [`ConfigError::NonPositiveStep`] if `step` is not positive and finite.
    /// - [`ConfigError::TooManySamples`] if the domain needs more than
    ///   [`MAX_SAMPLES`] steps.
    pub fn new<F>(
        evaluate: F,
        domain_min: f64,
        domain_max: f64,
        step: f64,
        color: Color,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        if !domain_min.is_finite() || !domain_max.is_finite() {
            return Err(ConfigError::NonFiniteDomain {
                min: domain_min,
                max: domain_max,
            });
        }
        if domain_min > domain_max {
            return Err(ConfigError::InvertedDomain {
                min: domain_min,
                max: domain_max,
            });
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(ConfigError::NonPositiveStep { step });
        }
        if sample_count(domain_min, domain_max, step) > MAX_SAMPLES {
            return Err(ConfigError::TooManySamples {
                step,
                min: domain_min,
                max: domain_max,
                limit: MAX_SAMPLES,
            });
        }
        Ok(Self {
            evaluate: Box::new(evaluate),
            domain_min,
            domain_max,
            step,
            color,
            label: None,
        })
    }

    /// Attaches a display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Evaluates the function at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.evaluate)(x)
    }

    /// Lower bound of the domain (inclusive).
    #[must_use]
    pub fn domain_min(&self) -> f64 {
        self.domain_min
    }

    /// Upper bound of the domain (exclusive for sample starts).
    #[must_use]
    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    /// Sampling step in world units.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Line color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Display label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of samples `x_i = domain_min + i * step` with `x_i < domain_max`,
    /// which is also the number of segments drawn.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        sample_count(self.domain_min, self.domain_max, self.step)
    }

    /// The `i`th sample position.
    #[must_use]
    pub fn sample_x(&self, i: usize) -> f64 {
        self.domain_min + i as f64 * self.step
    }

    /// World‑space segments `(x_i, f(x_i)) -> (x_i + step, f(x_i + step))`.
    ///
    /// Every function value is computed once and carried into the next
    /// segment.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            spec: self,
            index: 0,
            count: self.sample_count(),
            carried: None,
        }
    }
}

/// Relative tolerance under which a domain/step quotient counts as integral.
const QUOTIENT_SNAP: f64 = 1e-9;

#[expect(
    clippy::cast_possible_truncation,
    reason = "the count is integral and non-negative; saturates on overflow"
)]
fn sample_count(min: f64, max: f64, step: f64) -> usize {
    let span = max - min;
    if !(span > 0.0 && step > 0.0) {
        return 0;
    }
    let q = span / step;
    if !q.is_finite() {
        return usize::MAX;
    }
    let nearest = q.round();
    if (q - nearest).abs() <= QUOTIENT_SNAP * nearest.max(1.0) {
        nearest as usize
    } else {
        q.ceil() as usize
    }
}

/// Iterator over the world‑space segments of a [`FunctionSpec`].
#[derive(Debug)]
pub struct Segments<'a> {
    spec: &'a FunctionSpec,
    index: usize,
    count: usize,
    carried: Option<Point>,
}

impl Iterator for Segments<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.index >= self.count {
            return None;
        }
        let start = match self.carried {
            Some(p) => p,
            None => {
                let x = self.spec.sample_x(self.index);
                Point::new(x, self.spec.evaluate(x))
            }
        };
        self.index += 1;
        let x = self.spec.sample_x(self.index);
        let end = Point::new(x, self.spec.evaluate(x));
        self.carried = Some(end);
        Some(Line::new(start, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.count - self.index;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Segments<'_> {}

/// Draws `spec` through `viewport` and returns the number of segments drawn.
///
/// Segments are emitted as computed: singularities produce huge or
/// non‑finite screen coordinates and the surface is left to cull them.
pub fn draw_function<S: Surface + ?Sized>(
    viewport: &Viewport,
    spec: &FunctionSpec,
    surface: &mut S,
) -> usize {
    let color = spec.color();
    let mut drawn = 0;
    for seg in spec.segments() {
        surface.draw_line(
            viewport.to_screen_point(seg.p0),
            viewport.to_screen_point(seg.p1),
            color,
        );
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use planar_surface_ref::RecordingSurface;

    fn identity(step: f64, min: f64, max: f64) -> FunctionSpec {
        FunctionSpec::new(|x| x, min, max, step, Color::WHITE).unwrap()
    }

    #[test]
    fn rejects_invalid_parameters() {
        let f = |x: f64| x;
        assert_eq!(
            FunctionSpec::new(f, 0.0, 1.0, 0.0, Color::WHITE).unwrap_err(),
            ConfigError::NonPositiveStep { step: 0.0 }
        );
        assert!(matches!(
            FunctionSpec::new(f, 0.0, 1.0, f64::NAN, Color::WHITE),
            Err(ConfigError::NonPositiveStep { .. })
        ));
        assert!(matches!(
            FunctionSpec::new(f, 0.0, 1.0, -0.1, Color::WHITE),
            Err(ConfigError::NonPositiveStep { .. })
        ));
        assert!(matches!(
            FunctionSpec::new(f, f64::NEG_INFINITY, 1.0, 0.1, Color::WHITE),
            Err(ConfigError::NonFiniteDomain { .. })
        ));
        assert_eq!(
            FunctionSpec::new(f, 2.0, 1.0, 0.1, Color::WHITE).unwrap_err(),
            ConfigError::InvertedDomain { min: 2.0, max: 1.0 }
        );
    }

    #[test]
    fn rejects_steps_past_sample_budget() {
        let f = |x: f64| x;
        assert_eq!(
            FunctionSpec::new(f, -200.0, 200.0, 1e-320, Color::WHITE).unwrap_err(),
            ConfigError::TooManySamples {
                step: 1e-320,
                min: -200.0,
                max: 200.0,
                limit: MAX_SAMPLES,
            }
        );
        assert!(matches!(
            FunctionSpec::new(f, 0.0, 1.0, 1e-9, Color::WHITE),
            Err(ConfigError::TooManySamples { .. })
        ));

        let widest = identity(1.0, 0.0, MAX_SAMPLES as f64);
        assert_eq!(widest.sample_count(), MAX_SAMPLES);
    }

    #[test]
    fn default_domain_has_exactly_4000_samples() {
        assert_eq!(identity(0.1, -200.0, 200.0).sample_count(), 4000);
    }

    #[test]
    fn sample_count_edges() {
        assert_eq!(identity(0.1, 1.0, 1.0).sample_count(), 0);
        assert_eq!(identity(1.0, 0.0, 3.0).sample_count(), 3);
        // 0, 0.4, 0.8 < 1.0
        assert_eq!(identity(0.4, 0.0, 1.0).sample_count(), 3);
        assert_eq!(identity(10.0, 0.0, 1.0).sample_count(), 1);
        assert_eq!(identity(0.3, 0.0, 0.9).sample_count(), 3);
    }

    #[test]
    fn segments_chain_end_to_start() {
        let spec = FunctionSpec::new(|x| x * x, 0.0, 1.0, 0.25, Color::WHITE).unwrap();
        let segs: Vec<_> = spec.segments().collect();
        assert_eq!(segs.len(), 4);
        for pair in segs.windows(2) {
            assert_eq!(pair[0].p1, pair[1].p0);
        }
        assert_eq!(segs[0].p0, Point::new(0.0, 0.0));
        assert_eq!(segs[3].p1, Point::new(1.0, 1.0));
    }

    #[test]
    fn evaluates_each_sample_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let spec = FunctionSpec::new(
            move |x| {
                counter.fetch_add(1, Ordering::Relaxed);
                x.sin()
            },
            -200.0,
            200.0,
            0.1,
            Color::WHITE,
        )
        .unwrap();
        assert_eq!(spec.segments().count(), 4000);
        assert_eq!(calls.load(Ordering::Relaxed), 4001);
    }

    #[test]
    fn draws_in_spec_color_through_viewport() {
        let yellow = Color::from_rgba8(255, 255, 0, 255);
        let spec = FunctionSpec::new(|x| x * x, -1.0, 1.0, 1.0, yellow).unwrap();
        let view = Viewport::new(1920, 1080);
        let mut surface = RecordingSurface::new();
        assert_eq!(draw_function(&view, &spec, &mut surface), 2);

        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(lines[0].from, Point::new(910.0, 490.0));
        assert_eq!(lines[0].to, Point::new(960.0, 540.0));
        assert_eq!(lines[1].to, Point::new(1010.0, 490.0));
        assert!(lines.iter().all(|l| l.color == yellow));
    }

    #[test]
    fn non_finite_values_are_emitted() {
        let spec = FunctionSpec::new(|x| (x + 1.0).ln(), -1.0, 0.0, 0.5, Color::WHITE).unwrap();
        let view = Viewport::new(100, 100);
        let mut surface = RecordingSurface::new();
        assert_eq!(draw_function(&view, &spec, &mut surface), 2);
        let first = surface.lines().next().unwrap();
        assert_eq!(first.from.y, f64::INFINITY);
    }

    #[test]
    fn label_round_trips() {
        let spec = identity(1.0, 0.0, 1.0).with_label("id");
        assert_eq!(spec.label(), Some("id"));
        assert!(format!("{spec:?}").contains("\"id\""));
    }
}
