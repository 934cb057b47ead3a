//! Power transforms of the raw samples.
//!
//! A raw Cauchy sample has no finite mean, but `|x|^(1/4)` and `|x|^(1/2)`
//! have a finite expectation (see [crate::distributions::AbsPower]). Each raw
//! sample is mapped to the pair of both statistics.

use serde::Serialize;

/// The two derived statistics of a single raw sample.
///
/// Both values are always non-negative (or NaN if the raw sample was NaN).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DerivedPair {
    /// `|x|^(1/4)`
    pub z1: f64,
    /// `|x|^(1/2)`
    pub z2: f64,
}

/// Maps the raw sample `x` to `(|x|^(1/4), |x|^(1/2))`.
///
/// It is total over the reals: `transform(0.0)` is `(0.0, 0.0)` and the
/// infinities go to `(inf, inf)`.
#[must_use]
#[inline]
pub fn transform(x: f64) -> DerivedPair {
    // sqrt is correctly rounded and faster than powf
    let z2: f64 = x.abs().sqrt();
    let z1: f64 = z2.sqrt();
    return DerivedPair { z1, z2 };
}

/// General form of the transform: `|x|^exponent`.
///
/// `exponent` is expected to be stricly positive, so `abs_power(0.0, p) = 0.0`.
#[must_use]
#[inline]
pub fn abs_power(x: f64, exponent: f64) -> f64 {
    return x.abs().powf(exponent);
}
