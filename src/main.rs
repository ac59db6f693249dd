//! # Cloud Profile Demo Driver
//!
//! Seeds a regular point cloud with a smooth test function, samples it along
//! a line and plots the profile in the terminal.
//!
//! Flags:
//! - `--config <path>`: read settings from `<path>` instead of profile-config.toml
//! - `--json`: print the profile as JSON instead of plotting it

// Test modules
#[cfg(test)]
mod tests;

use anyhow::Context;
use cloud_profile_lib::{
    config::{Config, CONFIG_FILE},
    demo, profile, renderer::AsciiPlot, DiscreteFunction, Line, Point,
};
use log::{info, warn};
use std::env;
use std::io;

/// Value following `--config`, if given.
/// A `--config` with no path after it is reported and ignored.
fn config_path(args: &[String]) -> Option<&str> {
    let flag = args.iter().position(|arg| arg == "--config")?;
    match args.get(flag + 1) {
        Some(path) if !path.starts_with("--") => Some(path.as_str()),
        _ => {
            warn!("--config given without a path, using {}", CONFIG_FILE);
            None
        }
    }
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json_mode = args.iter().any(|arg| arg == "--json");

    let config = match config_path(&args) {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };

    eprintln!("Plotting along a line through a point cloud...");
    eprintln!("Note that this may take some time since we are doing a brute force nearest neighbor evaluation");

    let cloud = demo::grid_cloud_from_config(&config.cloud).context("building the point cloud")?;
    let values = demo::sample_values(&cloud, demo::test_function);
    let function = DiscreteFunction::new(&cloud, values).context("binding values to the cloud")?;
    info!("seeded {} cloud points", cloud.size());

    let line_config = &config.line;
    let source = Point::new(line_config.source_x, line_config.source_y);
    let target = Point::new(line_config.target_x, line_config.target_y);
    let line = Line::new(source, target).context("setting up the sampling line")?;

    if json_mode {
        let result = profile::build(&function, &line, line_config.samples)
            .context("sampling the profile")?;
        let json = serde_json::to_string_pretty(&result)?;
        println!("{}", json);
        return Ok(());
    }

    let title = format!(
        "Profile from ({}, {}) to ({}, {}), {} samples",
        source.x(),
        source.y(),
        target.x(),
        target.y(),
        line_config.samples
    );
    let mut sink = AsciiPlot::from_config(io::stdout().lock(), &config.display).with_title(title);
    let result = profile::plot_over_line(&function, &line, line_config.samples, &mut sink)
        .context("plotting the profile")?;
    info!("plotted {} samples", result.len());

    Ok(())
}
