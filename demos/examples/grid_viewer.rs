// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive coordinate plane.
//!
//! Drag with the left button to pan, use the wheel to zoom, press Escape or
//! close the window to quit.
//!
//! Examples:
//!   `cargo run -p planar_demos --example grid_viewer`
//!   `cargo run -p planar_demos --example grid_viewer -- --width 1280 --height 720`
//!   `cargo run -p planar_demos --example grid_viewer -- --config viewer.json --cpu`

use std::process::ExitCode;

use clap::Parser;
use planar_demos::StartError;
use planar_demos::cli::{Args, init_tracing};
use planar_demos::vello_winit::PlanarApp;
use planar_plot::Viewer;
use winit::event_loop::EventLoop;

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, source = ?std::error::Error::source(&err), "viewer failed to start");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), StartError> {
    let viewer = Viewer::new(args.viewer_config()?)?;
    let mut app = PlanarApp::new(viewer, args.cpu);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    if let Some(err) = app.take_error() {
        return Err(err);
    }
    let view = app.viewer().viewport();
    tracing::info!(
        camera_x = view.camera_x(),
        camera_y = view.camera_y(),
        scale = view.scale(),
        "viewer closed"
    );
    Ok(())
}
