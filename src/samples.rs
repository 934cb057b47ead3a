//! Storage of collected data (the batch means) with cached statistics.

use crate::errors::{EstimationError, Result};

/// A collection of finite values.
///
/// The statistics are computed lazily and cached in [SampleProperties], so
/// asking for the same statistic twice is constant time.
#[derive(Debug, Clone)]
pub struct Samples {
    data: Vec<f64>,
    properties: SampleProperties,
}

/// Stores the sample properties of the data if they have been computed.
#[derive(Debug, Clone, Default, PartialEq)]
struct SampleProperties {
    /// the average of the sample
    ///
    /// Or None if `data.len() == 0`
    mean: Option<f64>,
    /// the (unbiased) variance of the sample
    ///
    /// Or None if `data.len() <= 1`
    variance: Option<f64>,
    /// The maximum value of the sample
    maximum: Option<f64>,
    /// The minimum value of the sample
    minimum: Option<f64>,
}

impl Samples {
    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`), otherwise
    /// [EstimationError::InvalidParameter] is returned.
    ///
    /// If you want to just move the data without copying it,
    /// use [Samples::new_move].
    pub fn new(data: &[f64]) -> Result<Samples> {
        return Samples::new_move(Vec::from(data));
    }

    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`).
    ///
    /// If you don't want to move the data (to keep ownership of it),
    /// use [Samples::new].
    pub fn new_move(data: Vec<f64>) -> Result<Samples> {
        if let Some(invalid) = data.iter().find(|f: &&f64| !f.is_finite()) {
            return Err(EstimationError::InvalidParameter(format!(
                "the samples must be finite (found {invalid})"
            )));
        }

        return Ok(Samples {
            data,
            properties: SampleProperties::default(),
        });
    }

    /// Gives a reference to the contained data (in the original order).
    #[must_use]
    pub fn peek_data(&self) -> &[f64] {
        return &self.data;
    }

    /// Number of values.
    #[must_use]
    pub fn count(&self) -> usize {
        return self.data.len();
    }

    /// Computes the sample [mean](https://en.wikipedia.org/wiki/Mean) and returns it.
    ///
    /// Returns [None] if there are no samples.
    pub fn mean(&mut self) -> Option<f64> {
        if self.properties.mean.is_some() {
            return self.properties.mean;
        }

        let n: usize = self.data.len();
        if n == 0 {
            return None;
        }

        let mut mean: f64 = 0.0;
        for &s in &self.data {
            mean += s;
        }
        mean = mean / n as f64;

        self.properties.mean = Some(mean);
        return Some(mean);
    }

    /// Computes the (unbiased) sample [variance](https://en.wikipedia.org/wiki/Variance)
    /// and returns it.
    ///
    /// Returns [None] if there is not enough samples to compute the variance
    /// (0 or 1 samples only).
    pub fn variance(&mut self) -> Option<f64> {
        if self.properties.variance.is_some() {
            return self.properties.variance;
        }

        let n: usize = self.data.len();
        if n < 2 {
            return None;
        }

        // there is more than 1 sample, so the mean exists
        let mean: f64 = self.mean()?;
        let mut sum_squares: f64 = 0.0;
        for &s in &self.data {
            let d: f64 = s - mean;
            sum_squares += d * d;
        }

        let variance: f64 = sum_squares / (n - 1) as f64;
        self.properties.variance = Some(variance);
        return Some(variance);
    }

    /// The square root of [Samples::variance].
    pub fn standard_deviation(&mut self) -> Option<f64> {
        return self.variance().map(f64::sqrt);
    }

    /// Returns the minimum among the data (`O(n)` the first time).
    ///
    /// Returns `None` if there are 0 samples.
    pub fn minimum(&mut self) -> Option<f64> {
        if self.properties.minimum.is_some() {
            return self.properties.minimum;
        }

        let first: f64 = *self.data.first()?;
        let min: f64 = self.data.iter().copied().fold(first, f64::min);

        self.properties.minimum = Some(min);
        return Some(min);
    }

    /// Returns the maximum among the data (`O(n)` the first time).
    ///
    /// Returns `None` if there are 0 samples.
    pub fn maximum(&mut self) -> Option<f64> {
        if self.properties.maximum.is_some() {
            return self.properties.maximum;
        }

        let last: f64 = *self.data.last()?;
        let max: f64 = self.data.iter().copied().fold(last, f64::max);

        self.properties.maximum = Some(max);
        return Some(max);
    }
}
