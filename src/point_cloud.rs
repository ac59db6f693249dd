//! # Point Cloud
//!
//! An ordered, build-once collection of sample locations with a nearest
//! neighbor query.
//!
//! ## Nearest Neighbor Search
//! The query is a brute force linear scan, O(n) per lookup. The scan keeps
//! the first point that achieves the running minimum and only replaces it on
//! a strictly smaller distance, so among equidistant points the lowest index
//! always wins. Any faster index substituted here must keep that tie-break.

use crate::error::GeometryError;
use crate::point::Point;

/// Ordered, non-empty collection of points.
///
/// Insertion order is preserved and duplicates are allowed. There is no way
/// to add or remove points after construction, so indices stay stable for the
/// lifetime of the cloud.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    points: Vec<Point>,
}

impl PointCloud {
    /// Build a cloud from an ordered sequence of points.
    ///
    /// Fails with `InvalidArgument` when `points` is empty.
    ///
    /// # Example
    /// ```
    /// use cloud_profile_lib::{Point, PointCloud};
    ///
    /// let cloud = PointCloud::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).unwrap();
    /// assert_eq!(cloud.size(), 2);
    /// assert!(PointCloud::new(vec![]).is_err());
    /// ```
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::invalid(
                "points",
                "a point cloud needs at least one point",
            ));
        }
        Ok(Self { points })
    }

    /// Number of points in the cloud
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Point at `index`, or `IndexOutOfRange` past the end
    pub fn get(&self, index: usize) -> Result<Point, GeometryError> {
        self.points
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                size: self.points.len(),
            })
    }

    /// Iterate the points in insertion order.
    ///
    /// Each call starts a fresh pass over the cloud.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Index of the point closest to `query`.
    ///
    /// Ties resolve to the lowest index. The cloud is never empty, so there
    /// is always an answer.
    pub fn nearest_index(&self, query: &Point) -> usize {
        let mut best_index = 0;
        let mut best_distance = f64::INFINITY;

        for (index, point) in self.points.iter().enumerate() {
            let distance = point.distance_to(query);
            if distance < best_distance {
                best_index = index;
                best_distance = distance;
            }
        }

        best_index
    }

    /// The point closest to `query`, see [`PointCloud::nearest_index`]
    pub fn nearest(&self, query: &Point) -> Point {
        self.points[self.nearest_index(query)]
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
