//! # Line Sampler
//!
//! Turns a line segment into `n` equally spaced query points and maps points
//! on the line back to a 1D coordinate (arc length from the source).
//!
//! Sample `i` is `source + i * step` with `step = (target - source) / (n - 1)`.
//! The first sample is `source` exactly and the last one is pinned to
//! `target`, so rounding in the step never moves the end of the profile.

use crate::error::GeometryError;
use crate::point::{Line, Point};

/// Minimum sample count: one sample at each end of the line
pub const MIN_SAMPLES: usize = 2;

/// Discretize `line` into `n` equally spaced points, source to target.
///
/// Fails with `InvalidArgument` when `n < 2`. Degenerate lines cannot reach
/// this function since [`Line::new`] already rejects them.
///
/// # Example
/// ```
/// use cloud_profile_lib::{line_sampler, Line, Point};
///
/// let line = Line::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0)).unwrap();
/// let points = line_sampler::discretize(&line, 3).unwrap();
/// assert_eq!(
///     points,
///     vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)]
/// );
/// ```
pub fn discretize(line: &Line, n: usize) -> Result<Vec<Point>, GeometryError> {
    if n < MIN_SAMPLES {
        return Err(GeometryError::invalid(
            "n",
            format!("at least {MIN_SAMPLES} samples are required, got {n}"),
        ));
    }

    let (dx, dy) = line.direction();
    let intervals = (n - 1) as f64;
    let (step_x, step_y) = (dx / intervals, dy / intervals);

    let source = line.source();
    let mut points = Vec::with_capacity(n);
    for i in 0..n - 1 {
        let t = i as f64;
        points.push(source.offset(step_x * t, step_y * t));
    }
    points.push(line.target());

    Ok(points)
}

/// Distance from the start of `line` to `point`.
///
/// Only meaningful for points lying on the line; no check is made.
pub fn arc_length(line: &Line, point: &Point) -> f64 {
    line.source().distance_to(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Line {
        Line::new(Point::new(x0, y0), Point::new(x1, y1)).unwrap()
    }

    #[test]
    fn test_three_samples_on_axis() {
        let points = discretize(&line(0.0, 0.0, 2.0, 0.0), 3).unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_too_few_samples_rejected() {
        let l = line(0.0, 0.0, 1.0, 1.0);
        for n in [0, 1] {
            match discretize(&l, n) {
                Err(GeometryError::InvalidArgument { argument, .. }) => assert_eq!(argument, "n"),
                other => panic!("n = {n}: expected InvalidArgument, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_endpoints_and_uniform_spacing() {
        let l = line(-1.3, 0.7, 2.9, -4.1);
        for n in [2, 3, 7, 100, 1001] {
            let points = discretize(&l, n).unwrap();
            assert_eq!(points.len(), n);
            assert_eq!(points[0], l.source());
            assert_eq!(points[n - 1], l.target());

            let expected = l.length() / (n - 1) as f64;
            for pair in points.windows(2) {
                let spacing = pair[0].distance_to(&pair[1]);
                assert!(
                    (spacing - expected).abs() < 1e-9,
                    "n = {n}: spacing {spacing} differs from {expected}"
                );
            }
        }
    }

    #[test]
    fn test_arc_length_along_line() {
        let l = line(1.0, 1.0, 4.0, 5.0);
        let points = discretize(&l, 6).unwrap();
        assert_eq!(arc_length(&l, &points[0]), 0.0);
        assert!((arc_length(&l, &points[5]) - 5.0).abs() < 1e-12);

        for pair in points.windows(2) {
            assert!(arc_length(&l, &pair[0]) < arc_length(&l, &pair[1]));
        }
    }
}
