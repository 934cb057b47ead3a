//! # Report
//!
//! Compares the empirical estimates (the average of the batch means) with the
//! analytical reference and keeps a histogram of the batch means of each
//! statistic.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::{
    aggregation::BatchMeans,
    configuration::study::{HISTOGRAM_IMAGE_HEIGHT, HISTOGRAM_IMAGE_WIDTH, HISTOGRAM_TEXT_WIDTH},
    errors::{EstimationError, Result},
    euclid::IntegrationResult,
    histogram::Histogram,
    reference::AnalyticalReference,
    samples::Samples,
};

/// Empirical vs analytical values of a single derived statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticSummary {
    /// Name of the statistic (for display).
    pub name: String,
    /// The average of the batch means: the final point estimate.
    pub empirical: f64,
    /// The analytical expectation.
    pub analytical: IntegrationResult,
    /// `(empirical - analytical) / analytical`
    pub relative_deviation: f64,
    /// Observed standard deviation of the batch means. `None` with a single batch.
    pub spread: Option<f64>,
    /// Standard deviation of the batch means predicted by the CLT.
    /// `None` if the statistic has infinite variance.
    pub predicted_spread: Option<f64>,
    /// Histogram of the batch means.
    pub histogram: Histogram,
}

impl StatisticSummary {
    fn new(
        name: &str,
        batch_means: &[f64],
        analytical: IntegrationResult,
        predicted_spread: Option<f64>,
        bins: usize,
    ) -> Result<StatisticSummary> {
        let mut samples: Samples = Samples::new(batch_means)?;
        let empirical: f64 = samples.mean().ok_or_else(|| {
            EstimationError::InvalidParameter("there are no batch means to report".to_string())
        })?;
        let spread: Option<f64> = samples.standard_deviation();
        let histogram: Histogram = Histogram::from_samples(&mut samples, bins)?;

        return Ok(StatisticSummary {
            name: name.to_string(),
            empirical,
            analytical,
            relative_deviation: (empirical - analytical.value) / analytical.value,
            spread,
            predicted_spread,
            histogram,
        });
    }
}

/// The result of a study: the 4 scalars (empirical and analytical
/// `<|x|^(1/4)>` and `<|x|^(1/2)>`) plus the extra diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyReport {
    /// Number of batches (`B`)
    pub batch_count: usize,
    /// Samples per batch (`N`)
    pub batch_size: usize,
    /// `|x|^(1/4)`
    pub z1: StatisticSummary,
    /// `|x|^(1/2)`
    pub z2: StatisticSummary,
}

impl StudyReport {
    /// Builds the report from the batch means (of batches of `batch_size`
    /// samples) and the analytical reference. The histograms have `bins` bins.
    ///
    /// Returns [EstimationError::InvalidParameter] if there are no batch means,
    /// if some of them is not finite or if `bins` is `0`.
    pub fn new(
        batch_means: &BatchMeans,
        batch_size: usize,
        reference: &AnalyticalReference,
        bins: usize,
    ) -> Result<StudyReport> {
        let z1: StatisticSummary = StatisticSummary::new(
            "<|x|^(1/4)>",
            &batch_means.z1,
            reference.z1,
            Some(reference.z1_batch_spread(batch_size)),
            bins,
        )?;
        let z2: StatisticSummary =
            StatisticSummary::new("<|x|^(1/2)>", &batch_means.z2, reference.z2, None, bins)?;

        return Ok(StudyReport {
            batch_count: batch_means.len(),
            batch_size,
            z1,
            z2,
        });
    }

    /// Empirical `<|x|^(1/4)>`
    #[must_use]
    pub const fn empirical_z1(&self) -> f64 {
        return self.z1.empirical;
    }

    /// Empirical `<|x|^(1/2)>`
    #[must_use]
    pub const fn empirical_z2(&self) -> f64 {
        return self.z2.empirical;
    }

    /// Analytical `<|x|^(1/4)>`
    #[must_use]
    pub const fn analytical_z1(&self) -> f64 {
        return self.z1.analytical.value;
    }

    /// Analytical `<|x|^(1/2)>`
    #[must_use]
    pub const fn analytical_z2(&self) -> f64 {
        return self.z2.analytical.value;
    }

    /// Text rendering of both histograms.
    #[must_use]
    pub fn render_histograms(&self) -> String {
        let mut ret: String = String::new();
        for summary in [&self.z1, &self.z2] {
            ret.push_str(&format!("Batch means of {}:\n", summary.name));
            ret.push_str(&summary.histogram.render_text(HISTOGRAM_TEXT_WIDTH));
            ret.push('\n');
        }
        return ret;
    }

    /// Draws both histograms into `directory` (created if needed) as
    /// `z1_batch_means.png` and `z2_batch_means.png`. The analytical value is
    /// marked with a vertical line. Returns the paths of the written files.
    pub fn save_histograms(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(directory)?;

        let mut paths: Vec<PathBuf> = Vec::with_capacity(2);
        for (file_name, summary) in [
            ("z1_batch_means.png", &self.z1),
            ("z2_batch_means.png", &self.z2),
        ] {
            let path: PathBuf = directory.join(file_name);
            summary.histogram.save_png(
                &path,
                HISTOGRAM_IMAGE_WIDTH,
                HISTOGRAM_IMAGE_HEIGHT,
                Some(summary.analytical.value),
            )?;
            paths.push(path);
        }

        info!("Histograms written to {}", directory.display());
        return Ok(paths);
    }
}

fn fmt_option(value: Option<f64>) -> String {
    return match value {
        Some(v) => format!("{v:.6}"),
        None => "-".to_string(),
    };
}

impl fmt::Display for StudyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} batches of {} samples",
            self.batch_count, self.batch_size
        )?;
        writeln!(
            f,
            "{:<14} {:>12} {:>12} {:>10} {:>10} {:>12} {:>12}",
            "statistic", "empirical", "analytical", "+-", "rel. dev.", "spread", "CLT spread"
        )?;
        for summary in [&self.z1, &self.z2] {
            writeln!(
                f,
                "{:<14} {:>12.6} {:>12.6} {:>10.1e} {:>+10.2e} {:>12} {:>12}",
                summary.name,
                summary.empirical,
                summary.analytical.value,
                summary.analytical.total_error(),
                summary.relative_deviation,
                fmt_option(summary.spread),
                fmt_option(summary.predicted_spread),
            )?;
        }
        return Ok(());
    }
}
