//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! profile-config.toml file: the demo point cloud, the sampling line and the
//! plot dimensions.
//!
//! The values are not validated here. They flow into the library
//! constructors, which reject anything unusable with a `GeometryError`.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "profile-config.toml";

/// Application configuration loaded from profile-config.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Regular grid of sample points seeding the demo cloud
    pub cloud: CloudConfig,
    /// Line the profile is taken along
    pub line: LineConfig,
    /// Plot output dimensions
    pub display: DisplayConfig,
}

/// Demo point cloud: `points_x * points_y` points over a rectangular domain
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CloudConfig {
    pub domain_width: f64,
    pub domain_height: f64,
    pub points_x: usize,
    pub points_y: usize,
}

/// Sampling line and sample count
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LineConfig {
    pub source_x: f64,
    pub source_y: f64,
    pub target_x: f64,
    pub target_y: f64,
    /// Number of samples along the line (at least 2)
    pub samples: usize,
}

/// Plot dimensions for the terminal and raster sinks
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// ASCII chart height in character rows
    pub rows: usize,
    /// ASCII chart width in character columns
    pub columns: usize,
    /// Raster chart width in pixels
    pub width: u32,
    /// Raster chart height in pixels
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cloud: CloudConfig {
                domain_width: 1.0,
                domain_height: 1.0,
                points_x: 50,
                points_y: 50,
            },
            line: LineConfig {
                source_x: 0.0,
                source_y: 0.0,
                target_x: 1.0,
                target_y: 1.0,
                samples: 2000,
            },
            display: DisplayConfig {
                rows: 24,
                columns: 100,
                width: 400,
                height: 300,
            },
        }
    }
}

impl Config {
    /// Load configuration from profile-config.toml.
    /// Falls back to default configuration if the file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from the specified path.
    /// Falls back to default configuration if the file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!("loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("invalid config file {}: {}", path.display(), e);
                    warn!("using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                info!(
                    "no config file at {}, using default configuration",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Save the configuration as pretty TOML
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        info!("configuration saved to {}", path.as_ref().display());
        Ok(())
    }
}
