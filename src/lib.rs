#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// ^Disable warning "crate `FatTailMoments` should have a snake case name convert the identifier to snake case: `fat_tail_moments`"
// The rest of the names will follow the snake_case convention (except the distribution modules).

//! # Fat Tail Moments
//!
//! A worked example of parameter estimation for
//! [fat-tailed distributions](https://en.wikipedia.org/wiki/Fat-tailed_distribution),
//! using the [Cauchy (Breit-Wigner) distribution](https://en.wikipedia.org/wiki/Cauchy_distribution).
//!
//! The mean of a Cauchy distribution does not exist, so the average of Cauchy
//! samples never converges. However, after the change of variables
//! `z = |x|^(1/4)` the statistics `z` and `z^2 = |x|^(1/2)` have a finite
//! expectation, and their sample means behave as the
//! [CLT](https://en.wikipedia.org/wiki/Central_limit_theorem) predicts (at
//! least for `z`, wich also has a finite variance).
//!
//! The library provides:
//!
//!  - [x] The [Cauchy](distributions::Cauchy::Cauchy) distribution, sampled
//!     with an explicitly given (seedable) random generator.
//!  - [x] The [transform](transform::transform) of every raw sample into the
//!     pair `(|x|^(1/4), |x|^(1/2))`.
//!  - [x] The [aggregation] of many independent batches into batch means
//!     (sequential or in parallel).
//!  - [x] The [analytical reference](reference::analytical_moment): the true
//!     moments, computed by adaptive numerical integration of the density of
//!     [`|x|^(1/4)`](distributions::AbsPower::AbsPower).
//!  - [x] A [report](report::StudyReport) comparing both, with
//!     [histograms](histogram::Histogram) of the batch means.
//!
//! The whole procedure is run by [study::run_study] with a [study::StudyConfig].
//!
//! ```no_run
//! use FatTailMoments::study::{StudyConfig, run_study};
//!
//! let config: StudyConfig = StudyConfig {
//!     batch_count: 50,
//!     batch_size: 10_000,
//!     ..StudyConfig::default()
//! };
//! let report = run_study(&config).expect("The configuration is valid. ");
//! println!("{report}");
//! ```
//!
//! ***
//!

pub mod aggregation;
pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod histogram;
pub mod reference;
pub mod report;
pub mod samples;
pub mod study;
pub mod transform;
