//! # Batch means
//!
//! The aggregation draws `batch_count` independent batches of `batch_size`
//! Cauchy samples, transforms every sample (see [crate::transform]) and keeps
//! only the mean of each statistic per batch. The individual samples are
//! never stored: a batch uses `O(1)` memory.
//!
//! The batches are independent, so they can be computed in parallel
//! ([aggregate_parallel]). In that case every batch owns its own random
//! generator, seeded from the base seed and the batch index with
//! [split_seed](crate::euclid::split_seed): the result only depends on the
//! seed and not on the number of threads.

use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    distribution_trait::Distribution,
    distributions::Cauchy::Cauchy,
    errors::{EstimationError, Result},
    euclid::split_seed,
    samples::Samples,
    transform::{DerivedPair, transform},
};

/// The batch means of both statistics, in the order the batches were generated.
///
/// `z1[i]` and `z2[i]` come from the same batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchMeans {
    /// Means of `|x|^(1/4)`
    pub z1: Vec<f64>,
    /// Means of `|x|^(1/2)`
    pub z2: Vec<f64>,
}

impl BatchMeans {
    #[must_use]
    pub fn with_capacity(batch_count: usize) -> BatchMeans {
        return BatchMeans {
            z1: Vec::with_capacity(batch_count),
            z2: Vec::with_capacity(batch_count),
        };
    }

    /// Appends the means of a batch.
    pub fn push(&mut self, means: DerivedPair) {
        self.z1.push(means.z1);
        self.z2.push(means.z2);
    }

    /// Number of batches.
    #[must_use]
    pub fn len(&self) -> usize {
        return self.z1.len();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        return self.z1.is_empty();
    }

    /// Copies the means of `|x|^(1/4)` into a [Samples].
    pub fn z1_samples(&self) -> Result<Samples> {
        return Samples::new(&self.z1);
    }

    /// Copies the means of `|x|^(1/2)` into a [Samples].
    pub fn z2_samples(&self) -> Result<Samples> {
        return Samples::new(&self.z2);
    }
}

impl FromIterator<DerivedPair> for BatchMeans {
    fn from_iter<I: IntoIterator<Item = DerivedPair>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut ret: BatchMeans = BatchMeans::with_capacity(iter.size_hint().0);
        for means in iter {
            ret.push(means);
        }
        return ret;
    }
}

fn check_sizes(batch_count: usize, batch_size: usize) -> Result<()> {
    if batch_count == 0 {
        return Err(EstimationError::InvalidParameter(
            "the number of batches must be stricly positive".to_string(),
        ));
    }
    if batch_size == 0 {
        return Err(EstimationError::InvalidParameter(
            "the size of the batches must be stricly positive".to_string(),
        ));
    }
    return Ok(());
}

/// Draws `batch_size` samples and returns the mean of both derived statistics.
///
/// Only the running sums are kept. `batch_size` is assumed to be non-zero.
pub fn batch_mean<R: Rng + ?Sized>(cauchy: &Cauchy, batch_size: usize, rng: &mut R) -> DerivedPair {
    let mut sum_z1: f64 = 0.0;
    let mut sum_z2: f64 = 0.0;

    for _ in 0..batch_size {
        let pair: DerivedPair = transform(cauchy.sample(rng));
        sum_z1 += pair.z1;
        sum_z2 += pair.z2;
    }

    let inv_n: f64 = 1.0 / batch_size as f64;
    return DerivedPair {
        z1: sum_z1 * inv_n,
        z2: sum_z2 * inv_n,
    };
}

/// Computes `batch_count` batch means sequentially, drawing all the samples
/// from `rng`.
///
/// With a seeded `rng` the result is reproducible. Returns
/// [EstimationError::InvalidParameter] if `batch_count` or `batch_size` is `0`
/// (before drawing any sample).
pub fn aggregate<R: Rng + ?Sized>(
    cauchy: &Cauchy,
    batch_count: usize,
    batch_size: usize,
    rng: &mut R,
) -> Result<BatchMeans> {
    check_sizes(batch_count, batch_size)?;

    let mut ret: BatchMeans = BatchMeans::with_capacity(batch_count);
    for i in 0..batch_count {
        let means: DerivedPair = batch_mean(cauchy, batch_size, rng);
        trace!("batch {i}: <z1> = {}, <z2> = {}", means.z1, means.z2);
        ret.push(means);
    }

    debug!("Computed {batch_count} batch means of {batch_size} samples (sequential)");
    return Ok(ret);
}

/// Computes `batch_count` batch means in parallel (with [rayon]).
///
/// The batch `i` uses its own [StdRng] seeded with `split_seed(seed, i)`, so
/// the result is the same for any number of threads and equal to
/// [aggregate_per_batch_seeded] with the same arguments.
pub fn aggregate_parallel(
    cauchy: &Cauchy,
    batch_count: usize,
    batch_size: usize,
    seed: u64,
) -> Result<BatchMeans> {
    check_sizes(batch_count, batch_size)?;

    // collecting an indexed parallel iterator keeps the batch order
    let means: Vec<DerivedPair> = (0..batch_count)
        .into_par_iter()
        .map(|i: usize| {
            let mut rng: StdRng = StdRng::seed_from_u64(split_seed(seed, i as u64));
            batch_mean(cauchy, batch_size, &mut rng)
        })
        .collect();

    debug!(
        "Computed {batch_count} batch means of {batch_size} samples ({} threads)",
        rayon::current_num_threads()
    );
    return Ok(means.into_iter().collect::<BatchMeans>());
}

/// Sequential counterpart of [aggregate_parallel]: the batch `i` uses its own
/// [StdRng] seeded with `split_seed(seed, i)`.
pub fn aggregate_per_batch_seeded(
    cauchy: &Cauchy,
    batch_count: usize,
    batch_size: usize,
    seed: u64,
) -> Result<BatchMeans> {
    check_sizes(batch_count, batch_size)?;

    let ret: BatchMeans = (0..batch_count)
        .map(|i: usize| {
            let mut rng: StdRng = StdRng::seed_from_u64(split_seed(seed, i as u64));
            batch_mean(cauchy, batch_size, &mut rng)
        })
        .collect::<BatchMeans>();

    debug!("Computed {batch_count} batch means of {batch_size} samples (per batch seeds)");
    return Ok(ret);
}

/// Computes the batch means from a `seed`, in parallel or sequentially.
///
/// ## Inputs
///
///  - `cauchy`: the distribution of the raw samples.
///  - `batch_count`: the number of batches (`B`).
///  - `batch_size`: the number of samples per batch (`N`).
///  - `seed`: the seed of the random generator(s).
///  - `parallel`: (optional, deafult `false`) use [aggregate_parallel].
///     Otherwise a single [StdRng] seeded with `seed` is used for all the
///     batches ([aggregate]).
#[bon::builder]
pub fn collect_batch_means(
    cauchy: &Cauchy,
    batch_count: usize,
    batch_size: usize,
    seed: u64,
    #[builder(default)] parallel: bool,
) -> Result<BatchMeans> {
    if parallel {
        return aggregate_parallel(cauchy, batch_count, batch_size, seed);
    }

    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    return aggregate(cauchy, batch_count, batch_size, &mut rng);
}
