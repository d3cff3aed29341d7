// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform‑neutral input events consumed by the interaction controller.
//!
//! Hosts translate their native window events into [`InputEvent`] values and
//! feed them, in arrival order, to
//! [`InteractionController::handle`](crate::InteractionController::handle).

use kurbo::Point;

/// Pointer button identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (usually the left mouse button). Drives panning.
    Primary,
    /// Secondary button (usually the right mouse button).
    Secondary,
    /// Auxiliary button (usually the middle mouse button / wheel press).
    Auxiliary,
    /// Any other button, identified by the host's button number.
    Other(u16),
}

/// Keyboard key identifier.
///
/// Only the keys the viewer reacts to get their own variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape‑equivalent key; terminates the frame loop.
    Escape,
    /// A key producing a character.
    Character(char),
    /// Any other key.
    Other,
}

/// One input event, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// The host asked the application to quit (window closed, etc.).
    Quit,
    /// A key was pressed.
    KeyDown(Key),
    /// The drawable area changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// A pointer button was pressed.
    PointerDown {
        /// Which button.
        button: PointerButton,
        /// Pointer position in screen space.
        position: Point,
    },
    /// A pointer button was released.
    PointerUp {
        /// Which button.
        button: PointerButton,
        /// Pointer position in screen space.
        position: Point,
    },
    /// The pointer moved.
    PointerMove {
        /// Pointer position in screen space.
        position: Point,
    },
    /// The wheel scrolled vertically.
    ///
    /// Positive values scroll forward (away from the user).
    WheelScroll {
        /// Vertical scroll amount; only the sign is significant.
        delta_y: f64,
    },
}

impl InputEvent {
    /// Convenience constructor for a primary‑button press.
    #[must_use]
    pub fn primary_down(x: f64, y: f64) -> Self {
        Self::PointerDown {
            button: PointerButton::Primary,
            position: Point::new(x, y),
        }
    }

    /// Convenience constructor for a primary‑button release.
    #[must_use]
    pub fn primary_up(x: f64, y: f64) -> Self {
        Self::PointerUp {
            button: PointerButton::Primary,
            position: Point::new(x, y),
        }
    }

    /// Convenience constructor for a pointer move.
    #[must_use]
    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove {
            position: Point::new(x, y),
        }
    }

    /// Returns `true` for events that terminate the frame loop.
    #[must_use]
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Quit | Self::KeyDown(Key::Escape))
    }
}
