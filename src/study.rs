//! # Study
//!
//! Runs the whole procedure once:
//!
//! 1. Validate the configuration (nothing is sampled with invalid parameters).
//! 2. Compute the analytical reference (an integration failure stops the run).
//! 3. Collect the batch means.
//! 4. Build the [StudyReport].

use log::info;
use serde::Serialize;

use crate::{
    aggregation::{self, BatchMeans},
    configuration::{integration, study},
    distributions::Cauchy::Cauchy,
    errors::{EstimationError, Result},
    reference::{self, AnalyticalReference},
    report::StudyReport,
};

/// All the inputs of a study. [StudyConfig::default] reproduces the classical
/// demonstration (see [crate::configuration::study]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyConfig {
    /// Location (`x0`) of the Cauchy distribution.
    pub location: f64,
    /// Scale (`gamma`) of the Cauchy distribution. Must be stricly positive.
    pub scale: f64,
    /// Number of batches (`B`). Must be stricly positive.
    pub batch_count: usize,
    /// Samples per batch (`N`). Must be stricly positive.
    pub batch_size: usize,
    /// Truncation of the integration domain of the analytical reference.
    pub upper_bound: f64,
    /// Absolute tolerance of the analytical reference.
    pub tolerance: f64,
    /// Number of bins of the histograms.
    pub bins: usize,
    /// Seed of the random generator(s).
    pub seed: u64,
    /// Compute the batches in parallel.
    pub parallel: bool,
}

impl Default for StudyConfig {
    fn default() -> Self {
        return StudyConfig {
            location: study::DEFAULT_LOCATION,
            scale: study::DEFAULT_SCALE,
            batch_count: study::DEFAULT_BATCH_COUNT,
            batch_size: study::DEFAULT_BATCH_SIZE,
            upper_bound: study::DEFAULT_UPPER_BOUND,
            tolerance: integration::DEFAULT_TOLERANCE,
            bins: study::DEFAULT_HISTOGRAM_BINS,
            seed: study::DEFAULT_SEED,
            parallel: false,
        };
    }
}

impl StudyConfig {
    /// Checks all the parameters and returns the [Cauchy] distribution of the study.
    ///
    /// Returns [EstimationError::InvalidParameter] for the first invalid parameter found.
    pub fn validate(&self) -> Result<Cauchy> {
        let cauchy: Cauchy = Cauchy::new(self.location, self.scale)?;

        if self.batch_count == 0 {
            return Err(EstimationError::InvalidParameter(
                "the number of batches must be stricly positive".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(EstimationError::InvalidParameter(
                "the size of the batches must be stricly positive".to_string(),
            ));
        }
        if !self.upper_bound.is_finite() || self.upper_bound <= 0.0 {
            return Err(EstimationError::InvalidParameter(format!(
                "the upper bound must be finite and stricly positive (found {})",
                self.upper_bound
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(EstimationError::InvalidParameter(format!(
                "the tolerance must be finite and stricly positive (found {})",
                self.tolerance
            )));
        }
        if self.bins == 0 {
            return Err(EstimationError::InvalidParameter(
                "the histograms need at least 1 bin".to_string(),
            ));
        }

        return Ok(cauchy);
    }
}

/// Runs the study described by `config`. All-or-nothing: any error stops the run.
pub fn run_study(config: &StudyConfig) -> Result<StudyReport> {
    let cauchy: Cauchy = config.validate()?;

    info!(
        "Cauchy(x0 = {}, gamma = {}): {} batches of {} samples (seed {:#x}, parallel: {})",
        config.location,
        config.scale,
        config.batch_count,
        config.batch_size,
        config.seed,
        config.parallel
    );

    let analytical: AnalyticalReference = reference::analytical_reference()
        .cauchy(&cauchy)
        .upper_bound(config.upper_bound)
        .tolerance(config.tolerance)
        .call()?;

    info!(
        "Analytical reference: <|x|^(1/4)> = {}, <|x|^(1/2)> = {}",
        analytical.z1.value, analytical.z2.value
    );

    let batch_means: BatchMeans = aggregation::collect_batch_means()
        .cauchy(&cauchy)
        .batch_count(config.batch_count)
        .batch_size(config.batch_size)
        .seed(config.seed)
        .parallel(config.parallel)
        .call()?;

    let report: StudyReport =
        StudyReport::new(&batch_means, config.batch_size, &analytical, config.bins)?;

    info!(
        "Empirical: <|x|^(1/4)> = {}, <|x|^(1/2)> = {}",
        report.empirical_z1(),
        report.empirical_z2()
    );

    return Ok(report);
}
