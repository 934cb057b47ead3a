//! # Power of the absolute value of a Cauchy variable
//!
//! If `X` follows a [Cauchy](crate::distributions::Cauchy::Cauchy) distribution
//! with location `x0` and scale `gamma`, then `Z = |X|^p` (with `0 < p`) has
//! the density (change of variables, `x = z^(1/p)`)
//!
//! ```text
//! g(z) = (1/p) * z^(1/p - 1) * ( f(z^(1/p)) + f(-z^(1/p)) )        for 0 <= z
//! ```
//!
//! where `f` is the Cauchy density. For `p = 1/4` this is
//!
//! ```text
//! g(z) = (4 gamma / pi) z^3 ( 1/((z^4 - x0)^2 + gamma^2) + 1/((z^4 + x0)^2 + gamma^2) )
//! ```
//!
//! The tail of `g` decays as `z^(-1/p - 1)`, so the moment of order `n`
//! exists if and only if `n * p < 1`. With `p = 1/4` the moments of order
//! `1`, `2` and `3` are finite: the transform tames the heavy tails of the
//! Cauchy distribution.

use std::f64::consts::{FRAC_1_PI, FRAC_PI_2};

use rand::Rng;

use crate::{
    distribution_trait::Distribution,
    distributions::Cauchy::Cauchy,
    domain::ContinuousDomain,
    errors::{EstimationError, Result},
    transform::abs_power,
};

/// The distribution of `|X|^p` where `X` follows a [Cauchy] distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct AbsPower {
    cauchy: Cauchy,
    /// `p`
    exponent: f64,
    /// `1/p`
    inv_exponent: f64,
    domain: ContinuousDomain,
}

impl AbsPower {
    /// Creates the distribution of `|X|^exponent` where `X` follows `cauchy`.
    ///
    /// The `exponent` must be finite and stricly positive, otherwise
    /// [EstimationError::InvalidParameter] is returned.
    pub fn new(cauchy: Cauchy, exponent: f64) -> Result<AbsPower> {
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(EstimationError::InvalidParameter(format!(
                "the exponent of the power transform must be finite and stricly positive (found {exponent})"
            )));
        }

        return Ok(AbsPower {
            cauchy,
            exponent,
            inv_exponent: 1.0 / exponent,
            domain: ContinuousDomain::From(0.0),
        });
    }

    /// The distribution of the fourth root of the absolute value (`p = 1/4`).
    #[must_use]
    pub fn fourth_root(cauchy: Cauchy) -> AbsPower {
        return AbsPower {
            cauchy,
            exponent: 0.25,
            inv_exponent: 4.0,
            domain: ContinuousDomain::From(0.0),
        };
    }

    #[must_use]
    pub const fn get_cauchy(&self) -> &Cauchy {
        return &self.cauchy;
    }

    #[must_use]
    pub const fn get_exponent(&self) -> f64 {
        return self.exponent;
    }

    /// Returns true if the raw moment of the given `order` is finite (`order * p < 1`).
    #[must_use]
    pub fn has_finite_moment(&self, order: u8) -> bool {
        return f64::from(order) * self.exponent < 1.0;
    }

    /// The raw moment `<z^order> = E[|X|^(order * p)]` in closed form:
    ///
    /// ```text
    /// E[|X|^s] = r^s cos(s theta) / cos(pi s / 2)         0 <= s < 1
    /// ```
    ///
    /// where `r = sqrt(x0^2 + gamma^2)` and `theta = atan(x0 / gamma)`.
    ///
    /// Returns `None` if the moment is not finite.
    #[must_use]
    pub fn raw_moment(&self, order: u8) -> Option<f64> {
        if !self.has_finite_moment(order) {
            return None;
        }

        let location: f64 = self.cauchy.get_location();
        let scale: f64 = self.cauchy.get_scale();
        let s: f64 = f64::from(order) * self.exponent;
        let r: f64 = location.hypot(scale);
        let theta: f64 = (location / scale).atan();

        return Some(r.powf(s) * (s * theta).cos() / (FRAC_PI_2 * s).cos());
    }

    /// The scale at wich the density has its features: `(|x0| + gamma)^p`.
    ///
    /// Used to place the breakpoints of the numerical integration.
    #[must_use]
    pub fn characteristic_scale(&self) -> f64 {
        let spread: f64 = self.cauchy.get_location().abs() + self.cauchy.get_scale();
        return spread.powf(self.exponent);
    }

    /// The point where the density may have a narrow peak: the image of the
    /// location, `|x0|^p`. `None` if the location is `0.0`.
    #[must_use]
    pub fn peak(&self) -> Option<f64> {
        let location: f64 = self.cauchy.get_location();
        if location == 0.0 {
            return None;
        }
        return Some(location.abs().powf(self.exponent));
    }

    /// Evaluates the pdf at `z = peak + offset`, where `peak` is [AbsPower::peak]
    /// (or `0.0` if there is no peak).
    ///
    /// With a small scale the peak can be narrower than the spacing of the
    /// `f64` values around it, and `z^(1/p) - |x0|` loses all its digits. Here
    /// that distance is computed from `offset` directly:
    ///
    /// ```text
    /// x - |x0| = x_peak * ((1 + offset/peak)^(1/p) - 1) + (x_peak - |x0|)
    /// ```
    ///
    /// where `x_peak = peak^(1/p)`, so the peak is resolved at any scale.
    #[must_use]
    pub fn pdf_from_peak(&self, offset: f64) -> f64 {
        let Some(peak) = self.peak() else {
            return self.pdf(offset);
        };

        let z: f64 = peak + offset;
        if z < 0.0 {
            return 0.0;
        }

        let location: f64 = self.cauchy.get_location().abs();
        let gamma: f64 = self.cauchy.get_scale();
        let x_peak: f64 = peak.powf(self.inv_exponent);

        // ln_1p(-1) = -inf and exp_m1(-inf) = -1, so z = 0 gives x = 0
        let growth: f64 = (self.inv_exponent * (offset / peak).ln_1p()).exp_m1();
        let near: f64 = x_peak * growth + (x_peak - location);
        let far: f64 = 2.0 * location + near;

        let jacobian: f64 = self.inv_exponent * z.powf(self.inv_exponent - 1.0);
        let gamma_sq: f64 = gamma * gamma;
        let density: f64 = FRAC_1_PI * gamma / (near * near + gamma_sq)
            + FRAC_1_PI * gamma / (far * far + gamma_sq);
        return jacobian * density;
    }

    /// Estimation of the contribution to the raw moment of the given `order`
    /// of the region beyond `upper_bound`:
    ///
    /// ```text
    /// integral {U -> inf} z^n g(z) dz  ~=  (2 gamma / (pi p)) U^(n - 1/p) / (1/p - n)
    /// ```
    ///
    /// The approximation uses the asymptotic form of `g` so it is only
    /// returned when `U^(1/p)` is well beyond the bulk of the distribution
    /// (`2 (|x0| + gamma) < U^(1/p)`). Otherwise (or if the moment is not
    /// finite) `inf` is returned.
    #[must_use]
    pub fn tail_estimate(&self, order: u8, upper_bound: f64) -> f64 {
        if !self.has_finite_moment(order) {
            return f64::INFINITY;
        }

        let gamma: f64 = self.cauchy.get_scale();
        let bulk: f64 = self.cauchy.get_location().abs() + gamma;
        let x_bound: f64 = upper_bound.powf(self.inv_exponent);
        if !(2.0 * bulk < x_bound) {
            return f64::INFINITY;
        }

        let n: f64 = f64::from(order);
        let decay: f64 = self.inv_exponent - n;
        let coefficient: f64 = 2.0 * gamma * FRAC_1_PI * self.inv_exponent;
        return coefficient * upper_bound.powf(-decay) / decay;
    }
}

impl Distribution for AbsPower {
    fn pdf(&self, z: f64) -> f64 {
        if z < 0.0 {
            return 0.0;
        }

        // x = z^(1/p)    dx/dz = (1/p) * z^(1/p - 1)
        let x: f64 = z.powf(self.inv_exponent);
        let jacobian: f64 = self.inv_exponent * z.powf(self.inv_exponent - 1.0);
        return jacobian * (self.cauchy.pdf(x) + self.cauchy.pdf(-x));
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn cdf(&self, z: f64) -> f64 {
        if z.is_nan() {
            return f64::NAN;
        }
        if z <= 0.0 {
            return 0.0;
        }

        // P(|X|^p <= z) = P(-z^(1/p) <= X <= z^(1/p))
        let x: f64 = z.powf(self.inv_exponent);
        return self.cauchy.cdf(x) - self.cauchy.cdf(-x);
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return abs_power(self.cauchy.sample(rng), self.exponent);
    }

    fn expected_value(&self) -> Option<f64> {
        return self.raw_moment(1);
    }

    fn variance(&self) -> Option<f64> {
        let mean: f64 = self.raw_moment(1)?;
        let second: f64 = self.raw_moment(2)?;
        return Some(second - mean * mean);
    }
}
