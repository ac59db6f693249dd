//! # Points and Lines
//!
//! The two geometric primitives of the sampling pipeline:
//! - [`Point`]: an immutable 2D coordinate, small enough to pass by value
//! - [`Line`]: a directed segment between two distinct points

use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

/// An immutable position in the plane.
///
/// Coordinates are private so a point never changes after construction;
/// read them through [`Point::x`] and [`Point::y`].
///
/// # Example
/// ```
/// use cloud_profile_lib::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a.distance_to(&b), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance between two points
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when neither coordinate is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Translate by `(dx, dy)`
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A directed line segment from `source` to `target`.
///
/// A line whose endpoints coincide, or that has a non-finite coordinate, has
/// no direction, so [`Line::new`] rejects it. Every `Line` value is therefore
/// a proper segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    source: Point,
    target: Point,
}

impl Line {
    /// Create a line, failing with `InvalidArgument` when `source == target`
    /// or any coordinate is NaN or infinite.
    ///
    /// # Example
    /// ```
    /// use cloud_profile_lib::{Line, Point};
    ///
    /// let line = Line::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0)).unwrap();
    /// assert_eq!(line.length(), 2.0);
    ///
    /// assert!(Line::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0)).is_err());
    /// ```
    pub fn new(source: Point, target: Point) -> Result<Self, GeometryError> {
        if !source.is_finite() || !target.is_finite() {
            return Err(GeometryError::invalid(
                "line",
                format!(
                    "endpoints must be finite, got ({}, {}) and ({}, {})",
                    source.x, source.y, target.x, target.y
                ),
            ));
        }
        if source == target {
            return Err(GeometryError::invalid(
                "line",
                format!(
                    "source and target coincide at ({}, {}), direction is undefined",
                    source.x, source.y
                ),
            ));
        }
        Ok(Self { source, target })
    }

    pub fn source(&self) -> Point {
        self.source
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Componentwise `target - source`
    pub fn direction(&self) -> (f64, f64) {
        (
            self.target.x - self.source.x,
            self.target.y - self.source.y,
        )
    }

    pub fn length(&self) -> f64 {
        self.source.distance_to(&self.target)
    }
}
