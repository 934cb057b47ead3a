//! A Domain represents the set of points where a function is defined.
//!
//! In this library we use it for the pdf of the distributions (see
//! [crate::distribution_trait]) and to decide the region that has to be
//! integrated numerically.

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// The values contained in the range.
    ///
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(f64, f64),
    /// All the numbers from the given value onwards.
    From(f64),
    /// All the numbers until the given value.
    To(f64),
}

impl ContinuousDomain {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            ContinuousDomain::Reals => true,
            ContinuousDomain::Range(min, max) => (*min <= x) && (x <= *max),
            ContinuousDomain::From(min) => *min <= x,
            ContinuousDomain::To(max) => x <= *max,
        }
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and negative infinity.
    /// It is guaranteed that return.0 <= return.1. If the bounds are finite, the values
    /// themselves are included.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match &self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (*min, *max),
            ContinuousDomain::From(min) => (*min, f64::INFINITY),
            ContinuousDomain::To(max) => (f64::NEG_INFINITY, *max),
        }
    }

    /// Returns true if both bounds are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        let (min, max): (f64, f64) = self.get_bounds();
        return min.is_finite() && max.is_finite();
    }

    /// Intersects the domain with `[-limit, limit]`. The result is always a
    /// [ContinuousDomain::Range].
    ///
    /// Infinite domains can not be integrated directly; if the integrand decays
    /// fast enough, cutting the domain at a big `limit` leaves out a negligible
    /// contribution. `limit` is assumed to be finite and positive.
    #[must_use]
    pub fn truncate(&self, limit: f64) -> ContinuousDomain {
        let (min, max): (f64, f64) = self.get_bounds();
        let new_min: f64 = min.max(-limit);
        let new_max: f64 = max.min(limit);
        if new_max < new_min {
            // the domain is completly outside the limits, keep the invariant
            return ContinuousDomain::Range(new_min, new_min);
        }
        return ContinuousDomain::Range(new_min, new_max);
    }
}
