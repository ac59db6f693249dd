//! # Cloud Profile Core Library
//!
//! Sample a discrete function stored on a scattered 2D point cloud along an
//! arbitrary line, and plot the resulting 1D profile.
//!
//! ## Data Flow
//! 1. **Cloud**: build a [`PointCloud`] from sample locations
//! 2. **Function**: bind one scalar per point with [`DiscreteFunction`]
//! 3. **Discretize**: [`line_sampler::discretize`] spreads `n` query points along a [`Line`]
//! 4. **Evaluate**: each query point takes the value of its nearest cloud point
//! 5. **Profile**: [`profile::build`] pairs each value with its arc length from the line start
//! 6. **Plot**: a [`renderer::PlotSink`] draws the distance/value series
//!
//! Steps 1 to 5 are pure computations over immutable data. Only the sink
//! performs output.
//!
//! ## Core Types
//! - [`Point`], [`Line`]: geometric primitives
//! - [`PointCloud`]: ordered, non-empty sample locations with nearest neighbor lookup
//! - [`DiscreteFunction`]: values on a cloud, evaluated by nearest neighbor
//! - [`ProfileSample`], [`Profile`]: the sampled series handed to the plot sink

use serde::{Deserialize, Serialize};

pub mod config;
pub mod demo;
pub mod discrete_function;
pub mod error;
pub mod line_sampler;
pub mod point;
pub mod point_cloud;
pub mod profile;
pub mod renderer;

pub use discrete_function::DiscreteFunction;
pub use error::GeometryError;
pub use point::{Line, Point};
pub use point_cloud::PointCloud;

/// One sample of a profile: how far along the line, and the function value
/// found there.
///
/// # Example
/// ```
/// use cloud_profile_lib::ProfileSample;
///
/// let start = ProfileSample { distance: 0.0, value: 5.0 };
/// assert_eq!(start.distance, 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    /// Arc length from the line's source, always >= 0
    pub distance: f64,
    /// Function value at the sample position
    pub value: f64,
}

/// The discrete function sampled along a line.
///
/// A profile produced by [`profile::build`] has exactly the requested number
/// of samples, starts at distance 0.0 and never decreases in distance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub samples: Vec<ProfileSample>,
}

impl Profile {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The x column for plotting
    pub fn distances(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.distance).collect()
    }

    /// The y column for plotting
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    /// `(min, max)` of the values, `None` for an empty profile
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        if self.samples.is_empty() {
            return None;
        }
        Some(
            self.samples
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), sample| {
                    (min.min(sample.value), max.max(sample.value))
                }),
        )
    }
}
