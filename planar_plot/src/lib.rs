// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Plot: the coordinate‑plane viewer core.
//!
//! This crate draws a panning, zooming Cartesian grid with axes and a set of
//! analytic functions onto any [`planar_surface::Surface`]:
//!
//! - [`grid`]: the unit grid, bounded at twice the visible half‑extent, and
//!   the two axes.
//! - [`function`]: [`FunctionSpec`], a function sampled at a fixed
//!   world‑space step and drawn as connected segments.
//! - [`catalog`]: the eight built‑in curves ([`CurveKind`]).
//! - [`ViewerConfig`]: initial camera, limits, colors, and overlays.
//! - [`Viewer`]: applies input through the
//!   [`InteractionController`](planar_interaction::InteractionController),
//!   then renders `clear → grid → axes → overlays → present`.
//!
//! Hosts either call [`Viewer::frame`] from their own event loop, or provide
//! an [`EventSource`] and hand control to [`run`].
//!
//! ```
//! use planar_interaction::InputEvent;
//! use planar_plot::{ScriptedEvents, Viewer, ViewerConfig, run};
//! use planar_surface_ref::RecordingSurface;
//!
//! let mut viewer = Viewer::new(ViewerConfig::default()).unwrap();
//! let mut surface = RecordingSurface::new();
//! let mut script = ScriptedEvents::new([vec![InputEvent::primary_down(0.0, 0.0)]]);
//!
//! let summary = run(&mut viewer, &mut script, &mut surface);
//! assert_eq!(summary.frames, 2);
//! ```
//!
//! ## Features
//!
//! - `tracing`: log viewer construction, frame stats, and interaction
//!   transitions.
//! - `serde`: derive serde traits for [`ViewerConfig`] and friends.

pub mod catalog;
pub mod function;
pub mod grid;

mod config;
mod error;
mod viewer;

pub use catalog::{CurveKind, default_overlays};
pub use config::{GridConfig, OverlayConfig, ViewerConfig};
pub use error::ConfigError;
pub use function::{FunctionSpec, draw_function};
pub use grid::{GridBounds, GridStyle, draw_axes, draw_grid};
pub use viewer::{
    ControlFlow, EventSource, FrameReport, FrameStats, RunSummary, ScriptedEvents, Viewer, run,
};
