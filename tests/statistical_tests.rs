//! Tests for the aggregation of the batch means.
//!
//! The tests with random values use fixed seeds, so they are deterministic.
//! The tolerances are wide enough to pass for (almost) any seed.

use FatTailMoments::{
    aggregation::{
        BatchMeans, aggregate, aggregate_parallel, aggregate_per_batch_seeded, batch_mean,
        collect_batch_means,
    },
    distributions::Cauchy::Cauchy,
    errors::EstimationError,
    samples::Samples,
    transform::DerivedPair,
};
use assert_approx_eq::assert_approx_eq;
use rand::{SeedableRng, rngs::StdRng};

fn standard_deviation(values: &[f64]) -> f64 {
    let mut samples: Samples = Samples::new(values).unwrap();
    return samples.standard_deviation().unwrap();
}

#[test]
fn seeded_runs_are_repeatable() {
    let cauchy: Cauchy = Cauchy::new(2.34, 5.67).unwrap();

    let first: BatchMeans = collect_batch_means()
        .cauchy(&cauchy)
        .batch_count(20)
        .batch_size(1000)
        .seed(1234)
        .call()
        .unwrap();
    let second: BatchMeans = collect_batch_means()
        .cauchy(&cauchy)
        .batch_count(20)
        .batch_size(1000)
        .seed(1234)
        .call()
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 20);

    let other: BatchMeans = collect_batch_means()
        .cauchy(&cauchy)
        .batch_count(20)
        .batch_size(1000)
        .seed(1235)
        .call()
        .unwrap();
    assert_ne!(first, other);
}

#[test]
fn parallel_runs_are_repeatable() {
    let cauchy: Cauchy = Cauchy::new(2.34, 5.67).unwrap();

    let first: BatchMeans = aggregate_parallel(&cauchy, 32, 2000, 99).unwrap();
    let second: BatchMeans = collect_batch_means()
        .cauchy(&cauchy)
        .batch_count(32)
        .batch_size(2000)
        .seed(99)
        .parallel(true)
        .call()
        .unwrap();
    assert_eq!(first, second);

    // independent of the number of threads
    let sequential: BatchMeans = aggregate_per_batch_seeded(&cauchy, 32, 2000, 99).unwrap();
    assert_eq!(first, sequential);
}

#[test]
fn sequential_matches_manual_batches() {
    let cauchy: Cauchy = Cauchy::default();

    let mut rng: StdRng = StdRng::seed_from_u64(5);
    let means: BatchMeans = aggregate(&cauchy, 3, 500, &mut rng).unwrap();

    let mut rng: StdRng = StdRng::seed_from_u64(5);
    let manual: Vec<DerivedPair> = (0..3).map(|_| batch_mean(&cauchy, 500, &mut rng)).collect();

    for (i, pair) in manual.iter().enumerate() {
        assert_eq!(means.z1[i], pair.z1);
        assert_eq!(means.z2[i], pair.z2);
    }
}

#[test]
fn batch_means_are_non_negative() {
    let cauchy: Cauchy = Cauchy::new(-2.34, 5.67).unwrap();
    let means: BatchMeans = aggregate_parallel(&cauchy, 50, 100, 3).unwrap();

    assert!(means.z1.iter().all(|z: &f64| 0.0 <= *z));
    assert!(means.z2.iter().all(|z: &f64| 0.0 <= *z));
}

#[test]
fn single_sample_batches() {
    // With N = 1 every batch mean is a single transformed sample.
    let cauchy: Cauchy = Cauchy::new(2.34, 5.67).unwrap();
    let means: BatchMeans = aggregate_per_batch_seeded(&cauchy, 100, 1, 17).unwrap();

    for i in 0..means.len() {
        assert_approx_eq!(means.z1[i] * means.z1[i], means.z2[i], 1.0e-9 * means.z2[i].max(1.0));
    }
}

#[test]
fn empty_batches_are_rejected() {
    let cauchy: Cauchy = Cauchy::default();
    let mut rng: StdRng = StdRng::seed_from_u64(0);

    assert!(matches!(
        aggregate(&cauchy, 0, 100, &mut rng),
        Err(EstimationError::InvalidParameter(_))
    ));
    assert!(matches!(
        aggregate(&cauchy, 100, 0, &mut rng),
        Err(EstimationError::InvalidParameter(_))
    ));
    assert!(aggregate_parallel(&cauchy, 0, 10, 1).is_err());
    assert!(aggregate_per_batch_seeded(&cauchy, 10, 0, 1).is_err());
    assert!(
        collect_batch_means()
            .cauchy(&cauchy)
            .batch_count(0)
            .batch_size(10)
            .seed(1)
            .parallel(true)
            .call()
            .is_err()
    );
}

#[test]
fn spread_shrinks_as_inverse_square_root() {
    // Quadrupling N should halve the spread of the batch means of |x|^(1/4).
    let cauchy: Cauchy = Cauchy::default();

    let small: BatchMeans = aggregate_parallel(&cauchy, 200, 1000, 2024).unwrap();
    let large: BatchMeans = aggregate_parallel(&cauchy, 200, 4000, 4048).unwrap();

    let ratio: f64 = standard_deviation(&small.z1) / standard_deviation(&large.z1);
    assert!(1.4 < ratio && ratio < 2.8, "ratio: {ratio}");
}

#[test]
fn spread_matches_central_limit_theorem() {
    // sqrt((sqrt(2) - 1/cos(pi/8)^2) / N) for the standard Cauchy
    let cauchy: Cauchy = Cauchy::default();
    let means: BatchMeans = aggregate_parallel(&cauchy, 200, 1000, 77).unwrap();

    let predicted: f64 = (0.2426407_f64 / 1000.0).sqrt();
    let spread: f64 = standard_deviation(&means.z1);
    assert!(
        0.7 * predicted < spread && spread < 1.4 * predicted,
        "spread: {spread}, predicted: {predicted}"
    );
}

#[test]
fn collect_from_iterator() {
    let pairs: Vec<DerivedPair> = vec![
        DerivedPair { z1: 1.0, z2: 1.0 },
        DerivedPair { z1: 2.0, z2: 4.0 },
    ];
    let means: BatchMeans = pairs.into_iter().collect();

    assert_eq!(means.len(), 2);
    assert!(!means.is_empty());
    assert_eq!(means.z2, vec![1.0, 4.0]);

    let mut z1: Samples = means.z1_samples().unwrap();
    assert_approx_eq!(z1.mean().unwrap(), 1.5);
    assert_eq!(means.z2_samples().unwrap().count(), 2);
}
