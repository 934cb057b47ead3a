//! This script contains the interfaces used to comunicate with the distributions.

use rand::Rng;

use crate::configuration;
use crate::domain::ContinuousDomain;
use crate::euclid;

/// The trait for any continuous distribution.
///
/// None of the provided methods are guaranteed to work if the implemented [Distribution::pdf]
/// is NOT a [valid pdf](https://en.wikipedia.org/wiki/Probability_density_function).
/// So, it needs to fullfill:
///  - The function must be stricly non-negative
///  - The function must be real valued
///  - The function must have a total area of 1 under the curve.
///
/// The random generator is always given explicitly: the distributions never
/// own a global generator, so a seeded generator gives reproducible samples.
pub trait Distribution {
    //Requiered methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the distribution at point `x`.
    ///
    /// The PDF is assumed to be a valid probability distribution. It is must fullfill:
    ///  - `0.0 <= pdf(x)`
    ///  - It is normalized. (It has an area under the curbe of `1.0`)
    ///  - As `x` approaches `+-inf` (if inside the domain), `pdf(x)` should
    ///     tend to `0.0`.
    fn pdf(&self, x: f64) -> f64;

    /// Returns a reference to the pdf [ContinuousDomain], wich indicates at wich points
    /// the pdf can be evaluated. The returned domain should be constant and not change.
    fn get_domain(&self) -> &ContinuousDomain;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function).
    /// If the function is evaluated outside the domain of the pdf, it will either
    /// return either `0.0` or `1.0`.
    fn cdf(&self, x: f64) -> f64;

    /// Draws a single value from the distribution, consuming randomness from `rng`.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64
    where
        Self: Sized;

    // Provided methods:

    /// Draws `n` values from the distribution.
    fn sample_multiple<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64>
    where
        Self: Sized,
    {
        return (0..n).map(|_| self.sample(rng)).collect::<Vec<f64>>();
    }

    /// Returns the [expected value](https://en.wikipedia.org/wiki/Expected_value)
    /// of the distribution if it exists.
    fn expected_value(&self) -> Option<f64> {
        return None;
    }

    /// Returns the [variance](https://en.wikipedia.org/wiki/Variance) of the
    /// distribution if it exists.
    fn variance(&self) -> Option<f64> {
        return None;
    }

    /// Returns the raw [moment](https://en.wikipedia.org/wiki/Moment_(mathematics))
    /// of the given `order` computed over the domain truncated to `[-limit, limit]`:
    ///
    /// ```text
    /// integral {a -> b} x^k * f(x) dx
    /// ```
    ///
    /// It uses the fixed step Simpson's rule
    /// ([crate::euclid::numerical_integration_finite]), so no error estimate is
    /// given. For a controlled error use [crate::reference::analytical_moment].
    ///
    /// The area under the pdf (wich should be `1.0`) is the moment of order `0`.
    fn moment_finite(&self, order: u8, limit: f64) -> f64 {
        let bounds: (f64, f64) = self.get_domain().truncate(limit).get_bounds();
        let order_exp: i32 = i32::from(order);

        let integration_fn = |x: f64| x.powi(order_exp) * self.pdf(x);

        return euclid::numerical_integration_finite(
            integration_fn,
            bounds,
            configuration::integration::DEFAULT_INTEGRATION_NUM_STEPS,
        );
    }
}
