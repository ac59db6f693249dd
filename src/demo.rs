//! # Demo Data
//!
//! Synthetic inputs for the driver and for tests: a regular grid of sample
//! points over a rectangle, and a smooth test function to put on it.
//!
//! ## Grid Layout
//! For `nx * ny` points over a `width * height` domain the spacing is
//! `width / nx` by `height / ny`, starting at the origin. The far edges are
//! not included, so the last column sits at `width - width / nx`. Points are
//! ordered column by column: index `i * ny + j` holds `(i * dx, j * dy)`.
//!
//! ## Test Function
//! `sin(2πx) * cos(2πy)`: one full period per unit in each direction, values
//! in `[-1, 1]`.

use crate::config::CloudConfig;
use crate::error::GeometryError;
use crate::point::Point;
use crate::point_cloud::PointCloud;
use std::f64::consts::TAU;

/// Regular grid of `nx * ny` points over `[0, width) x [0, height)`.
///
/// Fails with `InvalidArgument` when either count is zero.
pub fn grid_cloud(
    width: f64,
    height: f64,
    nx: usize,
    ny: usize,
) -> Result<PointCloud, GeometryError> {
    if nx == 0 || ny == 0 {
        return Err(GeometryError::invalid(
            "grid",
            format!("need at least one point per axis, got {nx} x {ny}"),
        ));
    }

    let dx = width / nx as f64;
    let dy = height / ny as f64;

    let mut points = Vec::with_capacity(nx * ny);
    for i in 0..nx {
        for j in 0..ny {
            points.push(Point::new(i as f64 * dx, j as f64 * dy));
        }
    }

    PointCloud::new(points)
}

/// [`grid_cloud`] with dimensions taken from the config
pub fn grid_cloud_from_config(cloud: &CloudConfig) -> Result<PointCloud, GeometryError> {
    grid_cloud(
        cloud.domain_width,
        cloud.domain_height,
        cloud.points_x,
        cloud.points_y,
    )
}

/// `sin(2πx) * cos(2πy)`
pub fn test_function(position: &Point) -> f64 {
    (TAU * position.x()).sin() * (TAU * position.y()).cos()
}

/// Evaluate `f` at every point of `cloud`, in cloud order
pub fn sample_values<F>(cloud: &PointCloud, f: F) -> Vec<f64>
where
    F: Fn(&Point) -> f64,
{
    cloud.iter().map(f).collect()
}
