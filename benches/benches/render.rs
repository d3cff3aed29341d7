// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use peniko::Color;
use planar_plot::{
    CurveKind, GridBounds, GridStyle, Viewer, ViewerConfig, draw_function, draw_grid,
};
use planar_surface::{Surface, cull};
use planar_view::Viewport;

/// Counts calls and touches coordinates so the work is not optimized away.
#[derive(Default)]
struct CountingSurface {
    lines: usize,
    visible: usize,
    width: u32,
    height: u32,
    checksum: f64,
}

impl Surface for CountingSurface {
    fn set_logical_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self, _color: Color) {}

    fn draw_line(&mut self, from: Point, to: Point, _color: Color) {
        self.lines += 1;
        if cull::should_draw(from, to, self.width, self.height, 1.0) {
            self.visible += 1;
            self.checksum += from.x + to.y;
        }
    }

    fn present(&mut self) {}
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/grid");

    // Line count grows as 1/scale; 0.5 is the default lower bound.
    for scale in [0.5f64, 5.0, 50.0, 500.0] {
        let mut view = Viewport::new(1920, 1080);
        view.set_scale(scale);
        let lines = GridBounds::compute(&view, 2.0).line_count();
        group.throughput(Throughput::Elements(lines as u64));

        group.bench_with_input(BenchmarkId::from_parameter(scale), &view, |b, view| {
            let style = GridStyle::default();
            b.iter(|| {
                let mut surface = CountingSurface {
                    width: 1920,
                    height: 1080,
                    ..CountingSurface::default()
                };
                black_box(draw_grid(view, &style, &mut surface));
                black_box(surface.checksum);
            });
        });
    }
    group.finish();
}

fn bench_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/function");
    let view = Viewport::new(1920, 1080);

    for kind in [CurveKind::Square, CurveKind::Sine, CurveKind::Tangent, CurveKind::ShiftedLog] {
        let spec = kind.to_spec(-200.0, 200.0, 0.1).unwrap();
        group.throughput(Throughput::Elements(spec.sample_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(kind.label()), &spec, |b, spec| {
            b.iter(|| {
                let mut surface = CountingSurface {
                    width: 1920,
                    height: 1080,
                    ..CountingSurface::default()
                };
                black_box(draw_function(&view, spec, &mut surface));
                black_box(surface.visible);
            });
        });
    }
    group.finish();
}

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/frame");
    for scale in [5.0f64, 50.0] {
        let config = ViewerConfig {
            scale,
            ..ViewerConfig::default()
        };
        let mut viewer = Viewer::new(config).unwrap();
        let mut surface = CountingSurface::default();
        viewer.start(&mut surface);

        group.bench_function(BenchmarkId::new("default_overlays", scale), |b| {
            b.iter(|| {
                let stats = viewer.render(&mut surface);
                black_box(stats.total_lines());
            });
        });
        black_box(surface.lines);
    }
    group.finish();
}

criterion_group!(benches, bench_grid, bench_functions, bench_full_frame);
criterion_main!(benches);
