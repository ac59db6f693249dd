//! # Profile Builder
//!
//! Samples a [`DiscreteFunction`] along a [`Line`]:
//! 1. **Discretize**: `n` equally spaced points from source to target
//! 2. **Measure**: arc length of each point from the line's source
//! 3. **Evaluate**: nearest neighbor value of each point
//!
//! [`build`] only computes. Drawing is left to a [`PlotSink`], and
//! [`plot_over_line`] wires the two together.

use crate::discrete_function::DiscreteFunction;
use crate::error::GeometryError;
use crate::line_sampler;
use crate::point::Line;
use crate::renderer::{PlotError, PlotSink};
use crate::{Profile, ProfileSample};
use log::debug;
use thiserror::Error;

/// Sample count used when the caller has no preference
pub const DEFAULT_SAMPLES: usize = 1000;

/// Sample `function` at `n` points along `line`.
///
/// Errors are those of [`line_sampler::discretize`], passed through unchanged.
///
/// # Example
/// ```
/// use cloud_profile_lib::{profile, DiscreteFunction, Line, Point, PointCloud};
///
/// let cloud = PointCloud::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]).unwrap();
/// let f = DiscreteFunction::new(&cloud, vec![5.0, 50.0]).unwrap();
/// let line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)).unwrap();
///
/// let result = profile::build(&f, &line, 2).unwrap();
/// assert_eq!(result.distances(), vec![0.0, 10.0]);
/// assert_eq!(result.values(), vec![5.0, 50.0]);
/// ```
pub fn build(
    function: &DiscreteFunction<'_>,
    line: &Line,
    n: usize,
) -> Result<Profile, GeometryError> {
    let points = line_sampler::discretize(line, n)?;
    debug!(
        "sampling {} points over a line of length {:.4} against a cloud of {} points",
        n,
        line.length(),
        function.cloud().size()
    );

    let samples = points
        .iter()
        .map(|point| ProfileSample {
            distance: line_sampler::arc_length(line, point),
            value: function.evaluate(point),
        })
        .collect();

    Ok(Profile { samples })
}

/// Failure of [`plot_over_line`]: either the sampling or the drawing step.
#[derive(Error, Debug)]
pub enum PlotOverLineError {
    #[error("sampling failed: {0}")]
    Geometry(#[from] GeometryError),

    #[error("plotting failed: {0}")]
    Plot(#[from] PlotError),
}

/// Build the profile of `function` along `line` and hand it to `sink`.
pub fn plot_over_line<S: PlotSink + ?Sized>(
    function: &DiscreteFunction<'_>,
    line: &Line,
    n: usize,
    sink: &mut S,
) -> Result<Profile, PlotOverLineError> {
    let profile = build(function, line, n)?;
    sink.plot(&profile.distances(), &profile.values())?;
    Ok(profile)
}
