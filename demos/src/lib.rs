// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host glue for running the Planar viewer.
//!
//! - [`vello_winit`]: a winit window presenting through Vello.
//! - [`winit_input`]: winit event translation.
//! - [`scene_surface`]: a [`planar_surface::Surface`] over a Vello scene.
//! - [`cli`]: command line, configuration loading, and log setup.

pub mod cli;
pub mod scene_surface;
pub mod vello_winit;
pub mod winit_input;

mod error;

pub use error::StartError;
