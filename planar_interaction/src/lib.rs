// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar Interaction: turn pointer, wheel, and window events into camera
//! mutations.
//!
//! This crate sits between a host's native event loop and the
//! [`planar_view::Viewport`]. It provides:
//!
//! - [`input`]: platform‑neutral [`InputEvent`]s (pointer, wheel, resize,
//!   key, quit).
//! - [`drag`]: [`DragState`](drag::DragState), the last pointer position of
//!   an active drag.
//! - [`InteractionController`]: the `Idle` / `Dragging` state machine that
//!   pans on primary‑button drags, zooms on the wheel, forwards resizes, and
//!   latches exit requests.
//! - [`queue`]: an [`EventQueue`] for hosts that deliver events through
//!   callbacks, so that every event of a frame is applied before drawing.
//!
//! ## Pan speed
//!
//! A drag of `(dx, dy)` screen pixels pans the camera by
//! `(dx, dy) * 1.5 / log2(scale + 2)` world units. The speed shrinks
//! logarithmically as the scale grows.
//!
//! ## Zoom
//!
//! Each wheel notch multiplies the scale by `1 / 1.1` (forward) or `1.1`
//! (back). Zoom is always multiplicative, so the scale can never reach zero.
//!
//! ## Features
//!
//! - `tracing`: log state transitions with the `tracing` crate.
//! - `serde`: derive serde traits for [`InteractionConfig`].

pub mod drag;
pub mod input;
pub mod queue;

mod controller;

pub use controller::{EventOutcome, InteractionConfig, InteractionController, InteractionMode};
pub use input::{InputEvent, Key, PointerButton};
pub use queue::EventQueue;
