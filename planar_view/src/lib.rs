// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar View: the camera/viewport model of a Cartesian plane viewer.
//!
//! This crate provides a small, headless model of a world‑space plane seen
//! through a pixel viewport. It focuses on:
//! - Camera state: the world point mapped to the center of the viewport.
//! - Scale: pixels per world unit, changed multiplicatively by zooming.
//! - Coordinate conversion between world space (Y up) and screen space (Y down).
//!
//! It does **not** own any input handling or rendering backend. Callers are
//! expected to:
//! - Feed pan/zoom requests from an interaction layer (for example
//!   `planar_interaction`).
//! - Query [`Viewport::to_screen_x`] / [`Viewport::to_screen_y`] each frame to
//!   place grid lines and function samples.
//!
//! ## Minimal example
//!
//! ```rust
//! use planar_view::Viewport;
//!
//! // 1920x1080 surface, camera at the origin, 50 pixels per world unit.
//! let mut view = Viewport::new(1920, 1080);
//! assert_eq!(view.to_screen_x(0.0), 960.0);
//! assert_eq!(view.to_screen_y(0.0), 540.0);
//!
//! // One world unit to the right is 50 pixels to the right; one unit up is
//! // 50 pixels up (smaller screen Y).
//! assert_eq!(view.to_screen_x(1.0), 1010.0);
//! assert_eq!(view.to_screen_y(1.0), 490.0);
//!
//! // Zooming is multiplicative and never reaches zero.
//! view.zoom(1.0 / 1.1);
//! assert!(view.scale() > 0.0);
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis‑aligned with a **uniform** scale on both axes.
//! - Panning is expressed in world units, with the Y delta applied with the
//!   opposite sign so that screen‑space drags map onto the flipped vertical
//!   axis.
//! - Scale is clamped into `[min_scale, max_scale]`. Very small scales put a
//!   huge world area on screen (many grid lines), very large scales push
//!   world coordinates far outside the `f64` range that renders precisely.
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{Viewport, ViewportDebugInfo};
