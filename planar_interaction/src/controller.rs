// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use planar_view::Viewport;

use crate::drag::DragState;
use crate::input::{InputEvent, Key, PointerButton};

/// Tuning constants for the pan/zoom interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct InteractionConfig {
    /// Multiplicative zoom step per wheel notch.
    ///
    /// Wheel‑forward divides the scale by this value, wheel‑back multiplies
    /// it.
    pub zoom_step: f64,
    /// Numerator of the pan speed formula.
    pub pan_speed_gain: f64,
    /// Offset added to the scale before taking `log2` in the pan speed formula.
    pub pan_speed_offset: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            zoom_step: 1.1,
            pan_speed_gain: 1.5,
            pan_speed_offset: 2.0,
        }
    }
}

impl InteractionConfig {
    /// World units panned per pixel of drag at `scale`.
    ///
    /// `pan_speed_gain / log2(scale + pan_speed_offset)`: the speed shrinks
    /// as the scale grows, so a pixel of drag covers less world distance when
    /// the view shows fewer world units.
    #[must_use]
    pub fn pan_speed(&self, scale: f64) -> f64 {
        self.pan_speed_gain / (scale + self.pan_speed_offset).log2()
    }
}

/// Interaction state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// No drag in progress.
    #[default]
    Idle,
    /// Primary button held; pointer moves pan the camera.
    Dragging,
    /// A quit or escape event was received. Terminal.
    Exited,
}

/// What a single event did to the interaction state and the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// The event had no effect.
    Ignored,
    /// A drag started.
    DragStarted,
    /// The camera was panned by `world_delta` (the value passed to
    /// [`Viewport::pan`]).
    Panned {
        /// World‑space delta handed to [`Viewport::pan`].
        world_delta: Vec2,
    },
    /// The drag ended.
    DragEnded,
    /// The scale was multiplied by `factor` (before clamping).
    Zoomed {
        /// Requested zoom factor.
        factor: f64,
        /// Scale after the zoom was applied.
        scale: f64,
    },
    /// The viewport was resized.
    Resized {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// The frame loop must stop.
    Exit,
}

/// State machine turning input events into camera mutations.
///
/// The controller owns only the drag bookkeeping; the [`Viewport`] is passed
/// in for every event so that the render loop stays its single owner.
///
/// ```
/// use planar_interaction::{EventOutcome, InputEvent, InteractionController};
/// use planar_view::Viewport;
///
/// let mut view = Viewport::new(1920, 1080);
/// let mut controller = InteractionController::default();
///
/// controller.handle(&InputEvent::primary_down(100.0, 100.0), &mut view);
/// controller.handle(&InputEvent::pointer_move(110.0, 100.0), &mut view);
/// controller.handle(&InputEvent::primary_up(110.0, 100.0), &mut view);
///
/// // Dragging right by 10 pixels moved the camera left.
/// assert!((view.camera_x() + 10.0 * 1.5 / 52.0_f64.log2()).abs() < 1e-12);
/// assert_eq!(view.camera_y(), 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    config: InteractionConfig,
    drag: DragState,
    exited: bool,
}

impl InteractionController {
    /// Creates a controller with the given tuning constants.
    #[must_use]
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            drag: DragState::default(),
            exited: false,
        }
    }

    /// Returns the tuning constants.
    #[must_use]
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Returns the current interaction mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.exited {
            InteractionMode::Exited
        } else if self.drag.is_dragging() {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    /// Returns the drag bookkeeping.
    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Returns `true` once a quit or escape event has been handled.
    #[must_use]
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Applies one event to `viewport`.
    ///
    /// Events arriving after an exit are ignored.
    pub fn handle(&mut self, event: &InputEvent, viewport: &mut Viewport) -> EventOutcome {
        if self.exited {
            return EventOutcome::Ignored;
        }
        match *event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                self.exited = true;
                self.drag.end();
                #[cfg(feature = "tracing")]
                tracing::debug!(?event, "exit requested");
                EventOutcome::Exit
            }
            InputEvent::KeyDown(_) => EventOutcome::Ignored,
            InputEvent::Resize { width, height } => {
                viewport.set_viewport_size(width, height);
                #[cfg(feature = "tracing")]
                tracing::debug!(width, height, "viewport resized");
                EventOutcome::Resized { width, height }
            }
            InputEvent::PointerDown {
                button: PointerButton::Primary,
                position,
            } => {
                self.drag.start(position);
                #[cfg(feature = "tracing")]
                tracing::debug!(x = position.x, y = position.y, "drag started");
                EventOutcome::DragStarted
            }
            InputEvent::PointerUp {
                button: PointerButton::Primary,
                ..
            } => {
                if !self.drag.is_dragging() {
                    return EventOutcome::Ignored;
                }
                self.drag.end();
                #[cfg(feature = "tracing")]
                tracing::debug!("drag ended");
                EventOutcome::DragEnded
            }
            InputEvent::PointerDown { .. } | InputEvent::PointerUp { .. } => {
                EventOutcome::Ignored
            }
            InputEvent::PointerMove { position } => {
                let Some(delta) = self.drag.update(position) else {
                    return EventOutcome::Ignored;
                };
                let speed = self.config.pan_speed(viewport.scale());
                let world_delta = delta * speed;
                viewport.pan(world_delta.x, world_delta.y);
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    dx = world_delta.x,
                    dy = world_delta.y,
                    camera_x = viewport.camera_x(),
                    camera_y = viewport.camera_y(),
                    "panned"
                );
                EventOutcome::Panned { world_delta }
            }
            InputEvent::WheelScroll { delta_y } => {
                let factor = if delta_y > 0.0 {
                    1.0 / self.config.zoom_step
                } else if delta_y < 0.0 {
                    self.config.zoom_step
                } else {
                    return EventOutcome::Ignored;
                };
                viewport.zoom(factor);
                #[cfg(feature = "tracing")]
                tracing::debug!(factor, scale = viewport.scale(), "zoomed");
                EventOutcome::Zoomed {
                    factor,
                    scale: viewport.scale(),
                }
            }
        }
    }

    /// Applies `events` in order, stopping at the first exit.
    ///
    /// Returns `true` if an exit was handled.
    pub fn handle_all<'a, I>(&mut self, events: I, viewport: &mut Viewport) -> bool
    where
        I: IntoIterator<Item = &'a InputEvent>,
    {
        for event in events {
            if self.handle(event, viewport) == EventOutcome::Exit {
                return true;
            }
        }
        self.exited
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    fn setup() -> (InteractionController, Viewport) {
        (InteractionController::default(), Viewport::new(1920, 1080))
    }

    #[test]
    fn pan_speed_matches_formula() {
        let config = InteractionConfig::default();
        let speed = config.pan_speed(50.0);
        assert!((speed - 1.5 / 52.0_f64.log2()).abs() < 1e-15);
        assert!((speed - 0.2631).abs() < 1e-3);
        assert!(config.pan_speed(500.0) < speed);
    }

    #[test]
    fn drag_right_moves_camera_left() {
        let (mut c, mut vp) = setup();
        assert_eq!(
            c.handle(&InputEvent::primary_down(100.0, 100.0), &mut vp),
            EventOutcome::DragStarted
        );
        assert_eq!(c.mode(), InteractionMode::Dragging);

        let outcome = c.handle(&InputEvent::pointer_move(110.0, 100.0), &mut vp);
        let expected = 10.0 * 1.5 / 52.0_f64.log2();
        match outcome {
            EventOutcome::Panned { world_delta } => {
                assert!((world_delta.x - expected).abs() < 1e-12);
                assert_eq!(world_delta.y, 0.0);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!((vp.camera_x() + expected).abs() < 1e-12);
        assert!((vp.camera_x() + 2.63).abs() < 0.01);
        assert_eq!(vp.camera_y(), 0.0);

        assert_eq!(
            c.handle(&InputEvent::primary_up(110.0, 100.0), &mut vp),
            EventOutcome::DragEnded
        );
        assert_eq!(c.mode(), InteractionMode::Idle);
        assert!(!c.drag_state().is_dragging());
    }

    #[test]
    fn drag_down_raises_camera() {
        let (mut c, mut vp) = setup();
        c.handle(&InputEvent::primary_down(0.0, 0.0), &mut vp);
        c.handle(&InputEvent::pointer_move(0.0, 4.0), &mut vp);
        assert!(vp.camera_y() > 0.0);
        assert_eq!(vp.camera_x(), 0.0);
    }

    #[test]
    fn idle_moves_are_ignored() {
        let (mut c, mut vp) = setup();
        assert_eq!(
            c.handle(&InputEvent::pointer_move(50.0, 50.0), &mut vp),
            EventOutcome::Ignored
        );
        assert_eq!(vp.camera(), Point::ORIGIN);
    }

    #[test]
    fn non_primary_buttons_do_not_drag() {
        let (mut c, mut vp) = setup();
        for button in [
            PointerButton::Secondary,
            PointerButton::Auxiliary,
            PointerButton::Other(7),
        ] {
            let down = InputEvent::PointerDown {
                button,
                position: Point::new(10.0, 10.0),
            };
            assert_eq!(c.handle(&down, &mut vp), EventOutcome::Ignored);
            c.handle(&InputEvent::pointer_move(80.0, 90.0), &mut vp);
            assert_eq!(c.mode(), InteractionMode::Idle);
        }
        assert_eq!(vp.camera(), Point::ORIGIN);
    }

    #[test]
    fn secondary_release_does_not_end_drag() {
        let (mut c, mut vp) = setup();
        c.handle(&InputEvent::primary_down(0.0, 0.0), &mut vp);
        let up = InputEvent::PointerUp {
            button: PointerButton::Secondary,
            position: Point::ORIGIN,
        };
        assert_eq!(c.handle(&up, &mut vp), EventOutcome::Ignored);
        assert_eq!(c.mode(), InteractionMode::Dragging);
    }

    #[test]
    fn wheel_zooms_in_both_directions() {
        let (mut c, mut vp) = setup();
        c.handle(&InputEvent::WheelScroll { delta_y: 1.0 }, &mut vp);
        assert!((vp.scale() - 50.0 / 1.1).abs() < 1e-12);
        c.handle(&InputEvent::WheelScroll { delta_y: -3.0 }, &mut vp);
        assert!((vp.scale() - 50.0).abs() < 1e-9);
        assert_eq!(
            c.handle(&InputEvent::WheelScroll { delta_y: 0.0 }, &mut vp),
            EventOutcome::Ignored
        );
    }

    #[test]
    fn wheel_does_not_change_drag_state() {
        let (mut c, mut vp) = setup();
        c.handle(&InputEvent::primary_down(0.0, 0.0), &mut vp);
        c.handle(&InputEvent::WheelScroll { delta_y: 1.0 }, &mut vp);
        assert_eq!(c.mode(), InteractionMode::Dragging);
    }

    #[test]
    fn resize_forwards_to_viewport() {
        let (mut c, mut vp) = setup();
        c.handle(&InputEvent::primary_down(0.0, 0.0), &mut vp);
        let outcome = c.handle(
            &InputEvent::Resize {
                width: 640,
                height: 480,
            },
            &mut vp,
        );
        assert_eq!(
            outcome,
            EventOutcome::Resized {
                width: 640,
                height: 480
            }
        );
        assert_eq!((vp.width(), vp.height()), (640, 480));
        assert_eq!(c.mode(), InteractionMode::Dragging);
    }

    #[test]
    fn quit_and_escape_are_terminal() {
        for exit in [InputEvent::Quit, InputEvent::KeyDown(Key::Escape)] {
            let (mut c, mut vp) = setup();
            assert_eq!(c.handle(&exit, &mut vp), EventOutcome::Exit);
            assert_eq!(c.mode(), InteractionMode::Exited);
            assert_eq!(
                c.handle(&InputEvent::WheelScroll { delta_y: 1.0 }, &mut vp),
                EventOutcome::Ignored
            );
            assert_eq!(vp.scale(), 50.0);
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        let (mut c, mut vp) = setup();
        assert_eq!(
            c.handle(&InputEvent::KeyDown(Key::Character('q')), &mut vp),
            EventOutcome::Ignored
        );
        assert_eq!(c.mode(), InteractionMode::Idle);
    }

    #[test]
    fn handle_all_stops_at_exit() {
        let (mut c, mut vp) = setup();
        let events = [
            InputEvent::WheelScroll { delta_y: -1.0 },
            InputEvent::Quit,
            InputEvent::WheelScroll { delta_y: -1.0 },
        ];
        assert!(c.handle_all(&events, &mut vp));
        assert!((vp.scale() - 55.0).abs() < 1e-9);
    }
}
