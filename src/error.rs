//! # Geometry Errors
//!
//! Every failure in the sampling pipeline is a broken precondition detected
//! at construction time or on entry to an operation. Nothing here is
//! transient, so callers get the error back immediately and nothing is
//! retried.

use thiserror::Error;

/// Errors raised by the point cloud, discrete function and line sampler.
///
/// Each variant carries enough context to tell which argument or which bound
/// was violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A constructor or operation received an argument it cannot work with
    /// (empty cloud, mismatched value count, too few samples, degenerate line)
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// Indexed access past the end of a point cloud
    #[error("index {index} out of range for point cloud of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

impl GeometryError {
    pub(crate) fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        GeometryError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}
