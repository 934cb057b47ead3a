//! This file contains the deafult values and other value choices used trough the library.
//!
//! The values of [study] reproduce the classical demonstration: a Cauchy
//! distribution with location `2.34` and scale `5.67`, 100 batches of
//! 100 000 samples each.

/// The library uses numerical integration to compute the analytical moments.
///
/// The main integrator is an [adaptive Simpson's rule](https://en.wikipedia.org/wiki/Adaptive_Simpson%27s_method)
/// wich keeps subdividing an interval until the difference between the coarse
/// and the refined estimate is below the tolerance. Since the subdivision can
/// (in theory) go on forever, it is bounded by a maximum depth
/// ([MAXIMUM_RECURSION_DEPTH]) and a maximum number of evaluations of the
/// integrand ([MAXIMUM_EVALUATIONS]). If any of them is exhausted before
/// reaching the tolerance, the integration fails.
///
/// For quick checks (like the normalization of a density) the fixed step
/// [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule)
/// is used instead, with [DEFAULT_INTEGRATION_NUM_STEPS] steps.
///
/// There are no perfect values that will work with every distribution. Increasing the
/// precision comes with an extra computational cost. We recommend changing the values
/// to fit your needs. This values are just a mere recomendation.
pub mod integration {

    /// The deafult absolute tolerance of the adaptive integration: `1e-9`.
    pub static DEFAULT_TOLERANCE: f64 = 1.0e-9;

    /// The maximum number of times an interval can be halved.
    ///
    /// `2^-48` of the original interval is already close to the resolution of `f64`.
    pub static MAXIMUM_RECURSION_DEPTH: u32 = 48;

    /// The maximum number of evaluations of the integrand in a single integral.
    ///
    /// `1 << 24 = 16 777 216`
    pub static MAXIMUM_EVALUATIONS: usize = 1 << 24;

    /// The number of subdivisions used by the fixed step Simpson's rule.
    /// `(1 << 16) + 1 = 65 537`
    ///
    /// The `+ 1` is because odd numbers are better for Simpson's integration.
    pub static DEFAULT_INTEGRATION_NUM_STEPS: usize = (1 << 16) + 1;

    /// Relative floor of the tolerance of a single panel of the adaptive
    /// integration: `16 * f64::EPSILON`.
    ///
    /// Narrow peaks need many halvings, and the absolute tolerance halves
    /// with them until it is below the rounding error of the panel.
    pub static ROUNDOFF_RELATIVE_TOLERANCE: f64 = 16.0 * f64::EPSILON;

    /// The first breakpoint of the integration grid is placed at this fraction
    /// of the characteristic scale of the integrand. The next breakpoints
    /// double the distance to the origin.
    pub static BREAKPOINT_SCALE_FRACTION: f64 = 0.125;

    /// A warning is logged if the estimated contribution of the truncated tail
    /// relative to the integral is bigger than this value.
    pub static TRUNCATION_WARNING_RELATIVE: f64 = 1.0e-4;
}

/// Deafult values of the study.
pub mod study {

    /// Location (`x0`) of the Cauchy distribution.
    pub static DEFAULT_LOCATION: f64 = 2.34;

    /// Scale (`gamma`) of the Cauchy distribution.
    pub static DEFAULT_SCALE: f64 = 5.67;

    /// Number of independent batches (`B`).
    pub static DEFAULT_BATCH_COUNT: usize = 100;

    /// Number of samples in each batch (`N`).
    pub static DEFAULT_BATCH_SIZE: usize = 100_000;

    /// The integration domain `[0, inf)` is truncated at this value.
    ///
    /// The tail left out decays as `U^(n - 4)` for the moment of order `n`.
    pub static DEFAULT_UPPER_BOUND: f64 = 1000.0;

    /// Number of bins of the histograms of the batch means.
    pub static DEFAULT_HISTOGRAM_BINS: usize = 50;

    /// Seed of the random number generator.
    pub static DEFAULT_SEED: u64 = 0x00ca_0c4e_0000_0001;

    /// Size (in pixels) of the rendered histograms.
    pub static HISTOGRAM_IMAGE_WIDTH: u32 = 800;
    pub static HISTOGRAM_IMAGE_HEIGHT: u32 = 480;

    /// Width (in characters) of the longest bar of the terminal histograms.
    pub static HISTOGRAM_TEXT_WIDTH: usize = 60;
}
