//! # Analytical reference
//!
//! The true expected values of the derived statistics, computed by
//! integrating the density of `Z = |X|^(1/4)` (see [AbsPower]):
//!
//! ```text
//! <z^n> = integral {0 -> inf} z^n g(z) dz
//! ```
//!
//! Since `|x|^(1/2) = z^2`, the expectation of the second statistic is the
//! moment of order 2 of the same density. The moments of order `1`, `2` and
//! `3` exist; the order `4` (`<|x|>`) is already infinite.
//!
//! The domain is truncated at `upper_bound`. The part left out is not
//! integrated, but it is estimated with the asymptotic decay of the density
//! and returned as [IntegrationResult::truncation_error], so the caller can
//! judge if the bound is big enough. Nothing is retried automatically.

use log::{debug, warn};
use serde::Serialize;

use crate::{
    configuration,
    distribution_trait::Distribution,
    distributions::{AbsPower::AbsPower, Cauchy::Cauchy},
    errors::{EstimationError, Result},
    euclid::{self, IntegrationResult},
};

/// The orders of the moments that can be computed.
pub const MOMENT_ORDERS: [u8; 3] = [1, 2, 3];

/// Computes the raw moment `<z^order>` of `|X|^(1/4)` where `X` follows `cauchy`.
///
///  - `order` must be `1`, `2` or `3`.
///  - `upper_bound` (finite, stricly positive) truncates the integration domain.
///  - `tolerance` (finite, stricly positive) is the absolute tolerance of the quadrature.
///
/// Returns [EstimationError::InvalidParameter] for invalid inputs and
/// [EstimationError::IntegrationFailure] if the quadrature does not converge.
pub fn analytical_moment(
    cauchy: &Cauchy,
    order: u8,
    upper_bound: f64,
    tolerance: f64,
) -> Result<IntegrationResult> {
    if !MOMENT_ORDERS.contains(&order) {
        return Err(EstimationError::InvalidParameter(format!(
            "only the moments of order 1, 2 and 3 are finite (asked for {order})"
        )));
    }
    if !upper_bound.is_finite() || upper_bound <= 0.0 {
        return Err(EstimationError::InvalidParameter(format!(
            "the upper bound of the integration must be finite and stricly positive (found {upper_bound})"
        )));
    }

    let density: AbsPower = AbsPower::fourth_root(cauchy.clone());
    let bounds: (f64, f64) = density.get_domain().truncate(upper_bound).get_bounds();
    let peak: Option<f64> = density.peak();
    let breakpoints: Vec<f64> = euclid::integration_breakpoints(
        bounds,
        density.characteristic_scale(),
        peak.as_slice(),
    );

    // The integration variable is the offset from the peak, so the
    // nodes are dense enough around it however narrow it is.
    let anchor: f64 = peak.unwrap_or(0.0);
    let offsets: Vec<f64> = breakpoints.iter().map(|z: &f64| z - anchor).collect();

    let order_exp: i32 = i32::from(order);
    let integration_fn =
        |offset: f64| (anchor + offset).powi(order_exp) * density.pdf_from_peak(offset);

    let mut result: IntegrationResult =
        euclid::adaptive_integration(integration_fn, &offsets, tolerance)?;
    result.truncation_error = density.tail_estimate(order, upper_bound);

    let relative_tail: f64 = result.truncation_error / result.value.abs();
    if !(relative_tail <= configuration::integration::TRUNCATION_WARNING_RELATIVE) {
        warn!(
            "The tail beyond {upper_bound} contributes about {:e} to <z^{order}> ({:e} relative). Consider a bigger upper bound. ",
            result.truncation_error, relative_tail
        );
    }

    debug!(
        "<z^{order}> = {} (+- {:e}, tail {:e}) with {} evaluations over {} intervals",
        result.value,
        result.error,
        result.truncation_error,
        result.evaluations,
        breakpoints.len() - 1
    );

    return Ok(result);
}

/// The analytical expectations of both derived statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalyticalReference {
    /// `<|x|^(1/4)>` (moment of order 1)
    pub z1: IntegrationResult,
    /// `<|x|^(1/2)>` (moment of order 2)
    pub z2: IntegrationResult,
}

impl AnalyticalReference {
    /// Variance of `|x|^(1/4)`: `<z^2> - <z>^2`.
    #[must_use]
    pub fn z1_variance(&self) -> f64 {
        return self.z2.value - self.z1.value * self.z1.value;
    }

    /// Predicted standard deviation of the mean of `batch_size` values of
    /// `|x|^(1/4)` ([CLT](https://en.wikipedia.org/wiki/Central_limit_theorem)).
    ///
    /// There is no counterpart for `|x|^(1/2)`: its variance (`<|x|>`) is infinite.
    #[must_use]
    pub fn z1_batch_spread(&self, batch_size: usize) -> f64 {
        return (self.z1_variance().max(0.0) / batch_size as f64).sqrt();
    }
}

/// Computes the [AnalyticalReference] of `cauchy`.
///
/// ## Inputs
///
///  - `cauchy`: the distribution of the raw samples.
///  - `upper_bound`: (optional) truncation of the integration domain.
///      - Deafult is [DEFAULT_UPPER_BOUND](configuration::study::DEFAULT_UPPER_BOUND).
///  - `tolerance`: (optional) absolute tolerance of each integral.
///      - Deafult is [DEFAULT_TOLERANCE](configuration::integration::DEFAULT_TOLERANCE).
#[bon::builder]
pub fn analytical_reference(
    cauchy: &Cauchy,
    #[builder(default = configuration::study::DEFAULT_UPPER_BOUND)] upper_bound: f64,
    #[builder(default = configuration::integration::DEFAULT_TOLERANCE)] tolerance: f64,
) -> Result<AnalyticalReference> {
    let z1: IntegrationResult = analytical_moment(cauchy, 1, upper_bound, tolerance)?;
    let z2: IntegrationResult = analytical_moment(cauchy, 2, upper_bound, tolerance)?;
    return Ok(AnalyticalReference { z1, z2 });
}
