//! # Cauchy distribution
//!
//! The [Cauchy distribution](https://en.wikipedia.org/wiki/Cauchy_distribution)
//! (also known as the Breit-Wigner or Lorentzian distribution) is a
//! continuous distribution with a bell shape and very heavy tails.
//!
//! It has 2 parameters: the location `x0` (the median and the mode) and the
//! scale `gamma` (the half width at half maximum). The density is
//!
//! ```text
//! f(x) = (gamma / pi) / ((x - x0)^2 + gamma^2)
//! ```
//!
//! Its tails decay so slowly that the mean and all the higher moments are
//! undefined: the average of `n` Cauchy samples follows the same Cauchy
//! distribution, no matter how big `n` is.

use std::f64::consts::{FRAC_1_PI, PI};

use rand::Rng;

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::{EstimationError, Result},
};

/// A [Cauchy distribution](https://en.wikipedia.org/wiki/Cauchy_distribution).
#[derive(Debug, Clone, PartialEq)]
pub struct Cauchy {
    /// location (`x0`)
    location: f64,
    /// scale (`gamma`)
    scale: f64,
    domain: ContinuousDomain,
}

/// An iterator that generates infinites samples form the Cauchy distribution.
///
/// It owns its random generator, so a seeded generator gives a reproducible
/// stream of samples.
pub struct CauchyGenerator<R: Rng> {
    location: f64,
    scale: f64,
    rng: R,
}

impl Cauchy {
    /// Creates a new [Cauchy] distribution.
    ///
    ///  - The `location` must be finite (No `+-inf` or NaNs)
    ///  - The `scale` must be finite and stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfiled, [EstimationError::InvalidParameter]
    /// will be returned.
    pub fn new(location: f64, scale: f64) -> Result<Cauchy> {
        if !location.is_finite() {
            return Err(EstimationError::InvalidParameter(format!(
                "the location of a Cauchy distribution must be finite (found {location})"
            )));
        }

        if !scale.is_finite() || scale <= 0.0 {
            return Err(EstimationError::InvalidParameter(format!(
                "the scale of a Cauchy distribution must be finite and stricly positive (found {scale})"
            )));
        }

        return Ok(Cauchy {
            location,
            scale,
            domain: ContinuousDomain::Reals,
        });
    }

    /// Returns the location (`x0`), the first parameter of the distribution.
    #[must_use]
    pub const fn get_location(&self) -> f64 {
        return self.location;
    }

    /// Returns the scale (`gamma`), the second parameter of the distribution.
    #[must_use]
    pub const fn get_scale(&self) -> f64 {
        return self.scale;
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function).
    ///
    /// `quantile(q) = x0 + gamma * tan(pi * (q - 1/2))`
    ///
    /// Returns `-inf` for `q <= 0.0`, `inf` for `1.0 <= q` and NaN if `q` is NaN.
    #[must_use]
    pub fn quantile(&self, q: f64) -> f64 {
        if q.is_nan() {
            return f64::NAN;
        }
        if q <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if 1.0 <= q {
            return f64::INFINITY;
        }

        return inverse_cdf(self.location, self.scale, q);
    }

    /// Returns an iterator that generates [Cauchy] samples using (and owning) `rng`.
    ///
    /// It avoids the heap allocation of [Distribution::sample_multiple] if you don't
    /// know exacly how many values you want.
    pub fn iter<R: Rng>(&self, rng: R) -> CauchyGenerator<R> {
        return CauchyGenerator {
            location: self.location,
            scale: self.scale,
            rng,
        };
    }
}

/// Inverse transform sampling: `r` is uniform in `[0, 1)`. `tan(-pi/2)` is
/// just a very big (finite) negative number in floating point.
#[inline]
fn inverse_cdf(location: f64, scale: f64, r: f64) -> f64 {
    return location + scale * (PI * (r - 0.5)).tan();
}

impl Distribution for Cauchy {
    fn pdf(&self, x: f64) -> f64 {
        let dx: f64 = x - self.location;
        return FRAC_1_PI * self.scale / (dx * dx + self.scale * self.scale);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        return FRAC_1_PI * ((x - self.location) / self.scale).atan() + 0.5;
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return inverse_cdf(self.location, self.scale, rng.random());
    }
}

impl<R: Rng> Iterator for CauchyGenerator<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        return Some(inverse_cdf(self.location, self.scale, self.rng.random()));
    }
}

impl Default for Cauchy {
    /// The standard Cauchy distribution (`x0 = 0`, `gamma = 1`).
    fn default() -> Self {
        return Cauchy {
            location: 0.0,
            scale: 1.0,
            domain: ContinuousDomain::Reals,
        };
    }
}
