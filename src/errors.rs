//! Errors returned by the library.
//!
//! All the checks are done at the boundary (before any sampling begins) or
//! surfaced directly from the numerical integration. The procedure is
//! all-or-nothing: there are no partial results.

use thiserror::Error;

/// An enum that indicates what went wrong during an estimation.
#[derive(Error, Debug)]
pub enum EstimationError {
    /// A parameter did not fullfill the conditions of the function.
    /// Maybe it was infinite or a NaN when it was not allowed, or a scale
    /// / batch count / batch size was not strictly positive.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// The numerical quadrature did not converge within its tolerance (or
    /// found a non-finite value). It is **not** retried automatically:
    /// changing the upper bound or the tolerance is a decision of the caller.
    #[error(
        "The numerical integration did not converge after {evaluations} evaluations (error estimate: {error_estimate:e})"
    )]
    IntegrationFailure {
        /// Number of evaluations of the integrand before giving up.
        evaluations: usize,
        /// The error estimate at the moment of giving up. May be `inf` or NaN.
        error_estimate: f64,
    },
    /// A histogram could not be rendered to an image.
    #[error("Could not render the histogram: {0}")]
    Render(String),
    /// Input/output error (creating the output directory for the histograms).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for EstimationError {
    fn from(value: image::ImageError) -> Self {
        return EstimationError::Render(value.to_string());
    }
}

/// Convenience alias used all along the crate.
pub type Result<T> = std::result::Result<T, EstimationError>;
