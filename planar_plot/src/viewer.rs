// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame loop: apply queued input, then draw grid, axes, and overlays.

use std::collections::VecDeque;

use peniko::Color;
use planar_interaction::{EventOutcome, InputEvent, InteractionController};
use planar_surface::Surface;
use planar_view::Viewport;

use crate::ConfigError;
use crate::config::ViewerConfig;
use crate::function::{FunctionSpec, draw_function};
use crate::grid::{GridStyle, draw_axes, draw_grid};

/// Whether the frame loop keeps going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlFlow {
    /// Render another frame.
    Continue,
    /// Stop after the current frame.
    Exit,
}

/// Line counts of one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Unit grid lines.
    pub grid_lines: usize,
    /// Axis lines.
    pub axis_lines: usize,
    /// Function segments across all overlays.
    pub function_segments: usize,
}

impl FrameStats {
    /// Every line drawn in the frame.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.grid_lines
            .saturating_add(self.axis_lines)
            .saturating_add(self.function_segments)
    }
}

/// Result of [`Viewer::frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    /// Whether the loop should continue.
    pub control: ControlFlow,
    /// Number of events handed to the controller.
    pub events: usize,
    /// What was drawn.
    pub stats: FrameStats,
}

/// A source of input events for [`run`].
pub trait EventSource {
    /// Appends every event that arrived since the last call to `out`.
    fn poll_events(&mut self, out: &mut Vec<InputEvent>);
}

/// A fixed script of per‑frame event batches.
///
/// Once the script runs out it reports [`InputEvent::Quit`], so [`run`]
/// always terminates.
#[derive(Clone, Debug, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    /// Creates a script from per‑frame batches.
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Number of batches not yet delivered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
        match self.frames.pop_front() {
            Some(batch) => out.extend(batch),
            None => out.push(InputEvent::Quit),
        }
    }
}

/// Totals of a finished [`run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames rendered, including the one that saw the exit.
    pub frames: u64,
    /// Events handed to the controller.
    pub events: u64,
    /// Lines drawn across all frames.
    pub lines: u64,
}

/// The coordinate‑plane viewer: one viewport, its interaction controller,
/// and everything drawn on top.
///
/// ```
/// use planar_interaction::InputEvent;
/// use planar_plot::{ControlFlow, Viewer, ViewerConfig};
/// use planar_surface_ref::RecordingSurface;
///
/// let mut viewer = Viewer::new(ViewerConfig::default()).unwrap();
/// let mut surface = RecordingSurface::new();
/// viewer.start(&mut surface);
///
/// let report = viewer.frame([InputEvent::WheelScroll { delta_y: 1.0 }], &mut surface);
/// assert_eq!(report.control, ControlFlow::Continue);
/// assert_eq!(report.stats.function_segments, 8 * 4000);
/// assert!((viewer.viewport().scale() - 50.0 / 1.1).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct Viewer {
    viewport: Viewport,
    controller: InteractionController,
    overlays: Vec<FunctionSpec>,
    style: GridStyle,
    background: Color,
    size_dirty: bool,
}

impl Viewer {
    /// Builds a viewer from `config`.
    ///
    /// # Errors
    ///
    /// The first invalid configuration value, see [`ViewerConfig::validate`].
    pub fn new(config: ViewerConfig) -> Result<Self, ConfigError> {
        let viewport = config.build_viewport()?;
        let style = config.build_grid()?;
        let interaction = config.build_interaction()?;
        let overlays = config.build_overlays()?;
        #[cfg(feature = "tracing")]
        tracing::info!(
            width = viewport.width(),
            height = viewport.height(),
            scale = viewport.scale(),
            overlays = overlays.len(),
            "viewer created"
        );
        Ok(Self {
            viewport,
            controller: InteractionController::new(interaction),
            overlays,
            style,
            background: config.background_color(),
            size_dirty: false,
        })
    }

    /// Appends an overlay, drawn after the existing ones.
    pub fn push_overlay(&mut self, spec: FunctionSpec) {
        self.overlays.push(spec);
    }

    /// The camera.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable access to the camera, for hosts that drive it directly.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// The interaction state machine.
    #[must_use]
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Overlays in drawing order.
    #[must_use]
    pub fn overlays(&self) -> &[FunctionSpec] {
        &self.overlays
    }

    /// Grid and axis appearance.
    #[must_use]
    pub fn style(&self) -> &GridStyle {
        &self.style
    }

    /// Clear color.
    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Returns `true` once a quit or escape event was applied.
    #[must_use]
    pub fn has_exited(&self) -> bool {
        self.controller.has_exited()
    }

    /// Pushes the initial logical size to `surface`.
    ///
    /// Call once after the host created its surface.
    pub fn start<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.set_logical_size(self.viewport.width(), self.viewport.height());
        self.size_dirty = false;
    }

    /// Applies `events` in order.
    ///
    /// Events after an exit are ignored. Returns [`ControlFlow::Exit`] once
    /// the viewer has exited.
    pub fn apply_events<I>(&mut self, events: I) -> ControlFlow
    where
        I: IntoIterator<Item = InputEvent>,
    {
        self.apply(events).0
    }

    fn apply<I>(&mut self, events: I) -> (ControlFlow, usize)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut applied = 0;
        for event in events {
            applied += 1;
            if let EventOutcome::Resized { .. } =
                self.controller.handle(&event, &mut self.viewport)
            {
                self.size_dirty = true;
            }
        }
        let control = if self.controller.has_exited() {
            ControlFlow::Exit
        } else {
            ControlFlow::Continue
        };
        (control, applied)
    }

    /// Draws one frame: clear, grid, axes, overlays, present.
    ///
    /// The logical size is pushed first if a resize was applied since the
    /// last frame.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        if self.size_dirty {
            surface.set_logical_size(self.viewport.width(), self.viewport.height());
            self.size_dirty = false;
        }
        surface.clear(self.background);
        let grid_lines = draw_grid(&self.viewport, &self.style, surface);
        let axis_lines = draw_axes(&self.viewport, &self.style, surface);
        let mut function_segments: usize = 0;
        for spec in &self.overlays {
            function_segments =
                function_segments.saturating_add(draw_function(&self.viewport, spec, surface));
        }
        surface.present();

        let stats = FrameStats {
            grid_lines,
            axis_lines,
            function_segments,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            grid_lines,
            axis_lines,
            function_segments,
            camera_x = self.viewport.camera_x(),
            camera_y = self.viewport.camera_y(),
            scale = self.viewport.scale(),
            "frame rendered"
        );
        stats
    }

    /// Applies all of `events`, then renders.
    ///
    /// The frame is rendered even when it contains an exit.
    pub fn frame<I, S>(&mut self, events: I, surface: &mut S) -> FrameReport
    where
        I: IntoIterator<Item = InputEvent>,
        S: Surface + ?Sized,
    {
        let (control, events) = self.apply(events);
        let stats = self.render(surface);
        FrameReport {
            control,
            events,
            stats,
        }
    }
}

/// Runs the frame loop until the viewer exits.
///
/// Each iteration polls `source` once, applies everything it returned, and
/// renders a frame.
pub fn run<E, S>(viewer: &mut Viewer, source: &mut E, surface: &mut S) -> RunSummary
where
    E: EventSource + ?Sized,
    S: Surface + ?Sized,
{
    viewer.start(surface);
    let mut summary = RunSummary::default();
    let mut batch = Vec::new();
    loop {
        batch.clear();
        source.poll_events(&mut batch);
        let report = viewer.frame(batch.drain(..), surface);
        summary.frames += 1;
        summary.events += report.events as u64;
        summary.lines += report.stats.total_lines() as u64;
        if report.control == ControlFlow::Exit {
            break;
        }
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        frames = summary.frames,
        events = summary.events,
        "frame loop finished"
    );
    summary
}
