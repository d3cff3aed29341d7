// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag bookkeeping: the last pointer position of an active drag.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`] at the pointer‑down position.
//! 2) On each move, [`DragState::update`] returns the screen delta since the
//!    previous position and records the new one.
//! 3) [`DragState::end`] clears the state at pointer‑up.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use planar_interaction::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(100.0, 100.0));
//! assert!(drag.is_dragging());
//!
//! assert_eq!(drag.update(Point::new(110.0, 100.0)), Some(Vec2::new(10.0, 0.0)));
//! assert_eq!(drag.update(Point::new(115.0, 98.0)), Some(Vec2::new(5.0, -2.0)));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! assert_eq!(drag.update(Point::new(0.0, 0.0)), None);
//! ```

use kurbo::{Point, Vec2};

/// Tracks the pointer positions of an in‑progress drag.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    /// Position where the drag started.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the drag.
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Start tracking a new drag from `pos`, replacing any previous drag.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records `pos` and returns the movement since the last recorded position.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// End the current drag and reset state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
