// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

use clap::Parser;
use planar_plot::ViewerConfig;
use tracing_subscriber::EnvFilter;

use crate::StartError;

/// Command line of the viewer binaries.
#[derive(Parser, Debug, Default)]
#[command(version, about = "Pan and zoom a coordinate plane with function overlays.")]
pub struct Args {
    /// JSON viewer configuration. Missing fields take their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Initial window width in logical pixels.
    #[arg(long)]
    pub width: Option<u32>,
    /// Initial window height in logical pixels.
    #[arg(long)]
    pub height: Option<u32>,
    /// Use Vello's CPU path instead of GPU compute shaders.
    #[arg(long)]
    pub cpu: bool,
}

impl Args {
    /// Loads the configuration file, if any, and applies size overrides.
    ///
    /// # Errors
    ///
    /// Read, parse, and validation failures.
    pub fn viewer_config(&self) -> Result<ViewerConfig, StartError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ViewerConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        config.validate()?;
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<ViewerConfig, StartError> {
    let text = std::fs::read_to_string(path).map_err(|source| StartError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&text).map_err(|source| StartError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, `info` by default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
