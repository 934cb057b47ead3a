//! Euclid contains uscefull math functions: numerical integration and some
//! helpers for seeding random generators.

use serde::Serialize;

use crate::configuration::integration::{
    BREAKPOINT_SCALE_FRACTION, MAXIMUM_EVALUATIONS, MAXIMUM_RECURSION_DEPTH,
    ROUNDOFF_RELATIVE_TOLERANCE,
};
use crate::errors::{EstimationError, Result};

/// The result of a numerical integration with error control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntegrationResult {
    /// The estimated value of the integral.
    pub value: f64,
    /// The estimated absolute error of the quadrature (over the integrated interval).
    pub error: f64,
    /// Estimation of the contribution left out by cutting an infinite domain.
    ///
    /// `0.0` if nothing was left out, `inf` if it could not be estimated.
    pub truncation_error: f64,
    /// Number of evaluations of the integrand.
    pub evaluations: usize,
}

impl IntegrationResult {
    /// The total uncertainty of the result (quadrature + truncation).
    #[must_use]
    pub fn total_error(&self) -> f64 {
        return self.error + self.truncation_error;
    }
}

/// Numerical integration of `func` in the finite interval `bounds` using the
/// composite [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule)
/// with `num_steps` subdivisions (rounded up to the next even number).
///
/// The bounds **must** be finite. If `bounds.1 <= bounds.0` the result is `0.0`.
pub fn numerical_integration_finite(
    func: impl Fn(f64) -> f64,
    bounds: (f64, f64),
    num_steps: usize,
) -> f64 {
    let (a, b): (f64, f64) = bounds;
    if b <= a {
        return 0.0;
    }

    // Simpson's rule needs an even number of intervals
    let n: usize = (num_steps.max(2) + 1) & !1;
    let step_length: f64 = (b - a) / n as f64;

    let mut odd_sum: f64 = 0.0;
    let mut even_sum: f64 = 0.0;
    for i in 1..n {
        let x: f64 = a + step_length * i as f64;
        if i & 1 == 1 {
            odd_sum += func(x);
        } else {
            even_sum += func(x);
        }
    }

    let total: f64 = func(a) + 4.0 * odd_sum + 2.0 * even_sum + func(b);
    return total * step_length / 3.0;
}

/// Returns the sorted breakpoints used to split `bounds` before the adaptive
/// integration.
///
/// Starting from `bounds.0` the breakpoints are placed at distances
/// `scale * BREAKPOINT_SCALE_FRACTION * 2^k`, so the region near the origin
/// (where the integrand has its features) is sampled densely while the tail
/// is covered with few intervals. The points in `extra` that fall inside the
/// bounds are also added (peaks of the integrand, for example).
///
/// The bounds **must** be finite.
#[must_use]
pub fn integration_breakpoints(bounds: (f64, f64), scale: f64, extra: &[f64]) -> Vec<f64> {
    let (a, b): (f64, f64) = bounds;
    let mut points: Vec<f64> = vec![a];

    if scale.is_finite() && 0.0 < scale {
        let mut distance: f64 = scale * BREAKPOINT_SCALE_FRACTION;
        while a + distance < b {
            points.push(a + distance);
            distance = distance * 2.0;
        }
    }

    points.extend(extra.iter().copied().filter(|&e| a < e && e < b));
    points.push(b);

    points.sort_by(f64::total_cmp);
    points.dedup();
    return points;
}

/// Adaptive [Simpson's integration](https://en.wikipedia.org/wiki/Adaptive_Simpson%27s_method)
/// of `func` over the intervals defined by consecutive `breakpoints`.
///
/// `tolerance` is the absolute tolerance for the whole integral; it is shared
/// evenly among the intervals. Every interval is halved until the difference
/// between the Simpson estimate and the refined estimate is below
/// `15 * tolerance` (with Richardson extrapolation applied to the result).
///
/// The tolerance of a panel is halved with every split, but it never goes
/// below [ROUNDOFF_RELATIVE_TOLERANCE] times the value of the panel: past
/// that point the difference is just rounding noise. A panel too small to be
/// split in `f64` is accepted as it is.
///
/// Returns [EstimationError::IntegrationFailure] if:
///  - the maximum depth ([MAXIMUM_RECURSION_DEPTH]) or the maximum number of
///     evaluations ([MAXIMUM_EVALUATIONS]) is reached before the tolerance is met.
///  - the integrand returns a non-finite value.
///
/// The `truncation_error` of the result is `0.0`; callers that cut an
/// infinite domain fill it themselves.
pub fn adaptive_integration(
    func: impl Fn(f64) -> f64,
    breakpoints: &[f64],
    tolerance: f64,
) -> Result<IntegrationResult> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(EstimationError::InvalidParameter(format!(
            "the integration tolerance must be finite and positive (found {tolerance})"
        )));
    }
    if breakpoints.len() < 2 {
        return Err(EstimationError::InvalidParameter(
            "at least 2 breakpoints are needed to integrate".to_string(),
        ));
    }

    let mut integrator: AdaptiveSimpson<_> = AdaptiveSimpson {
        func,
        evaluations: 0,
        converged: true,
    };

    let interval_tolerance: f64 = tolerance / (breakpoints.len() - 1) as f64;
    let mut value: f64 = 0.0;
    let mut error: f64 = 0.0;

    for window in breakpoints.windows(2) {
        let (a, b): (f64, f64) = (window[0], window[1]);
        let (v, e): (f64, f64) = integrator.integrate_interval(a, b, interval_tolerance);
        value += v;
        error += e;
    }

    if !integrator.converged || !value.is_finite() {
        return Err(EstimationError::IntegrationFailure {
            evaluations: integrator.evaluations,
            error_estimate: error,
        });
    }

    return Ok(IntegrationResult {
        value,
        error,
        truncation_error: 0.0,
        evaluations: integrator.evaluations,
    });
}

/// State of a single adaptive integration.
struct AdaptiveSimpson<F>
where
    F: Fn(f64) -> f64,
{
    func: F,
    evaluations: usize,
    /// Becomes false as soon as an interval could not reach its tolerance.
    converged: bool,
}

/// An interval `[a, b]` with its midpoint `m` and the values of the integrand.
#[derive(Debug, Clone, Copy)]
struct Panel {
    a: f64,
    fa: f64,
    m: f64,
    fm: f64,
    b: f64,
    fb: f64,
}

impl Panel {
    fn simpson(&self) -> f64 {
        return (self.b - self.a) / 6.0 * (self.fa + 4.0 * self.fm + self.fb);
    }
}

impl<F> AdaptiveSimpson<F>
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&mut self, x: f64) -> f64 {
        self.evaluations += 1;
        return (self.func)(x);
    }

    fn integrate_interval(&mut self, a: f64, b: f64, tolerance: f64) -> (f64, f64) {
        let m: f64 = 0.5 * (a + b);
        let fa: f64 = self.evaluate(a);
        let fm: f64 = self.evaluate(m);
        let fb: f64 = self.evaluate(b);
        let panel: Panel = Panel { a, fa, m, fm, b, fb };
        let whole: f64 = panel.simpson();

        return self.refine(panel, whole, tolerance, MAXIMUM_RECURSION_DEPTH);
    }

    /// Returns the value and the error estimate of the integral over the panel.
    fn refine(&mut self, panel: Panel, whole: f64, tolerance: f64, depth: u32) -> (f64, f64) {
        let left_m: f64 = 0.5 * (panel.a + panel.m);
        let right_m: f64 = 0.5 * (panel.m + panel.b);
        let f_left_m: f64 = self.evaluate(left_m);
        let f_right_m: f64 = self.evaluate(right_m);

        let left: Panel = Panel {
            a: panel.a,
            fa: panel.fa,
            m: left_m,
            fm: f_left_m,
            b: panel.m,
            fb: panel.fm,
        };
        let right: Panel = Panel {
            a: panel.m,
            fa: panel.fm,
            m: right_m,
            fm: f_right_m,
            b: panel.b,
            fb: panel.fb,
        };

        let left_value: f64 = left.simpson();
        let right_value: f64 = right.simpson();
        let delta: f64 = left_value + right_value - whole;

        if !delta.is_finite() {
            self.converged = false;
            return (f64::NAN, f64::INFINITY);
        }

        let refined: f64 = left_value + right_value + delta / 15.0;
        let error: f64 = delta.abs() / 15.0;

        // no panel can be asked for more than the rounding of its own value
        let target: f64 = tolerance.max(ROUNDOFF_RELATIVE_TOLERANCE * whole.abs());
        if delta.abs() <= 15.0 * target {
            return (refined, error);
        }

        // the panel is already at the resolution of f64
        if !(panel.a < left_m && left_m < panel.m && panel.m < right_m && right_m < panel.b) {
            return (refined, error);
        }

        if depth == 0 || MAXIMUM_EVALUATIONS <= self.evaluations {
            self.converged = false;
            return (refined, error);
        }

        let half_tolerance: f64 = 0.5 * tolerance;
        let (lv, le): (f64, f64) = self.refine(left, left_value, half_tolerance, depth - 1);
        if !self.converged {
            // no point in keep working, the result will be discarded
            return (lv, f64::INFINITY);
        }
        let (rv, re): (f64, f64) = self.refine(right, right_value, half_tolerance, depth - 1);

        return (lv + rv, le + re);
    }
}

/// Derives an independent seed for the `counter`-th random generator from
/// `base_seed` with the [SplitMix64](https://prng.di.unimi.it/splitmix64.c)
/// finalizer. Consecutive counters give uncorrelated seeds.
#[must_use]
pub const fn split_seed(base_seed: u64, counter: u64) -> u64 {
    let mut z: u64 = base_seed.wrapping_add(counter.wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    return z ^ (z >> 31);
}
