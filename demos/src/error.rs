// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use planar_plot::ConfigError;
use thiserror::Error;

/// Failure to bring the viewer up. Always fatal.
#[derive(Debug, Error)]
pub enum StartError {
    /// Reading the configuration file failed.
    #[error("failed to read config {}", path.display())]
    ReadConfig {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for a viewer config.
    #[error("failed to parse config {}", path.display())]
    ParseConfig {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// The configuration was rejected by the viewer.
    #[error("invalid viewer configuration")]
    InvalidConfig(#[from] ConfigError),
    /// The winit event loop could not be created or failed while running.
    #[error("event loop error")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// The window could not be created.
    #[error("failed to create window")]
    Window(#[from] winit::error::OsError),
    /// No GPU surface could be created for the window.
    #[error("failed to create render surface")]
    Surface(#[source] vello::Error),
    /// The Vello renderer could not be created.
    #[error("failed to create renderer")]
    Renderer(#[source] vello::Error),
}
