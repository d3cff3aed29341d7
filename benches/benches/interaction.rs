// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use planar_interaction::{InputEvent, InteractionController};
use planar_view::Viewport;

fn drag_script(moves: usize) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(moves + 2);
    events.push(InputEvent::primary_down(0.0, 0.0));
    for i in 0..moves {
        let t = i as f64;
        events.push(InputEvent::pointer_move(t, (t * 0.1).sin() * 100.0));
        if i % 16 == 0 {
            events.push(InputEvent::WheelScroll {
                delta_y: if i % 32 == 0 { 1.0 } else { -1.0 },
            });
        }
    }
    events.push(InputEvent::primary_up(moves as f64, 0.0));
    events
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("interaction/drag");
    for moves in [64usize, 1_024, 16_384] {
        let events = drag_script(moves);
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(moves), &events, |b, events| {
            b.iter_batched(
                || (InteractionController::default(), Viewport::new(1920, 1080)),
                |(mut controller, mut view)| {
                    controller.handle_all(events, &mut view);
                    black_box(view.camera());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drag);
criterion_main!(benches);
