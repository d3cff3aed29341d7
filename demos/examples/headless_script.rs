// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted, windowless session.
//!
//! Replays a short drag/zoom/resize script through the viewer into a
//! recording surface and logs what every frame drew.
//!
//!   `RUST_LOG=debug cargo run -p planar_demos --example headless_script`

use std::process::ExitCode;

use clap::Parser;
use planar_demos::StartError;
use planar_demos::cli::{Args, init_tracing};
use planar_interaction::{InputEvent, Key};
use planar_plot::{ScriptedEvents, Viewer, run};
use planar_surface::{DrawOp, cull};
use planar_surface_ref::RecordingSurface;

fn main() -> ExitCode {
    init_tracing();
    match replay(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "headless session failed");
            ExitCode::FAILURE
        }
    }
}

fn script() -> ScriptedEvents {
    ScriptedEvents::new([
        vec![],
        vec![
            InputEvent::primary_down(100.0, 100.0),
            InputEvent::pointer_move(110.0, 100.0),
            InputEvent::primary_up(110.0, 100.0),
        ],
        vec![InputEvent::WheelScroll { delta_y: 1.0 }],
        vec![InputEvent::WheelScroll { delta_y: -1.0 }],
        vec![InputEvent::Resize {
            width: 1280,
            height: 720,
        }],
        vec![InputEvent::KeyDown(Key::Escape)],
    ])
}

fn replay(args: &Args) -> Result<(), StartError> {
    let mut viewer = Viewer::new(args.viewer_config()?)?;
    let mut surface = RecordingSurface::new();
    let summary = run(&mut viewer, &mut script(), &mut surface);

    let (mut width, mut height) = (0, 0);
    for (i, frame) in surface.frames().iter().enumerate() {
        for op in &frame.ops {
            if let DrawOp::SetLogicalSize { width: w, height: h } = *op {
                (width, height) = (w, h);
            }
        }
        let visible = frame
            .lines()
            .filter(|l| cull::should_draw(l.from, l.to, width, height, 0.0))
            .count();
        tracing::info!(frame = i, lines = frame.line_count(), visible, "frame");
    }
    let view = viewer.viewport();
    tracing::info!(
        frames = summary.frames,
        events = summary.events,
        lines = summary.lines,
        camera_x = view.camera_x(),
        camera_y = view.camera_y(),
        scale = view.scale(),
        "session finished"
    );
    Ok(())
}
