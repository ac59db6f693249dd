//! # Discrete Function
//!
//! Scalar values attached to the points of a [`PointCloud`], extended to the
//! whole plane by nearest neighbor lookup: the value at any query point is the
//! value of the closest cloud point.

use crate::error::GeometryError;
use crate::point::Point;
use crate::point_cloud::PointCloud;

/// A function defined by one value per cloud point.
///
/// The function borrows its cloud, so one cloud can back several functions
/// and may outlive all of them.
#[derive(Clone, Debug)]
pub struct DiscreteFunction<'a> {
    cloud: &'a PointCloud,
    values: Vec<f64>,
}

impl<'a> DiscreteFunction<'a> {
    /// Bind `values` to the points of `cloud`.
    ///
    /// Fails with `InvalidArgument` unless there is exactly one value per
    /// point.
    ///
    /// # Example
    /// ```
    /// use cloud_profile_lib::{DiscreteFunction, Point, PointCloud};
    ///
    /// let cloud = PointCloud::new(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(0.0, 1.0),
    /// ])
    /// .unwrap();
    /// let f = DiscreteFunction::new(&cloud, vec![10.0, 20.0, 30.0]).unwrap();
    /// assert_eq!(f.evaluate(&Point::new(0.1, 0.1)), 10.0);
    /// ```
    pub fn new(cloud: &'a PointCloud, values: Vec<f64>) -> Result<Self, GeometryError> {
        if values.len() != cloud.size() {
            return Err(GeometryError::invalid(
                "values",
                format!(
                    "expected {} values (one per cloud point), got {}",
                    cloud.size(),
                    values.len()
                ),
            ));
        }
        Ok(Self { cloud, values })
    }

    pub fn cloud(&self) -> &'a PointCloud {
        self.cloud
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of the cloud point nearest to `point`
    pub fn evaluate(&self, point: &Point) -> f64 {
        self.values[self.cloud.nearest_index(point)]
    }
}
