// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per‑frame buffering for hosts that deliver events through callbacks.

use std::collections::VecDeque;

use crate::input::InputEvent;

/// FIFO of input events collected between two frames.
///
/// Callback‑driven hosts [`push`](EventQueue::push) events as they arrive and
/// the frame loop [`drain`](EventQueue::drain)s them all before rendering, so
/// a frame always reflects every event received up to that point.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Returns the number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns `true` if an exit event is pending.
    #[must_use]
    pub fn contains_exit(&self) -> bool {
        self.events.iter().any(InputEvent::is_exit)
    }

    /// Removes and yields all pending events in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}

impl Extend<InputEvent> for EventQueue {
    fn extend<T: IntoIterator<Item = InputEvent>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}
