use FatTailMoments::{
    distribution_trait::Distribution,
    distributions::{AbsPower::AbsPower, Cauchy::Cauchy},
    errors::EstimationError,
    samples::Samples,
    transform::{DerivedPair, transform},
};
use assert_approx_eq::assert_approx_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};

#[test]
fn cauchy_rejects_invalid_parameters() {
    for scale in [0.0, -1.0, -5.67, f64::NAN, f64::INFINITY] {
        let result = Cauchy::new(2.34, scale);
        assert!(
            matches!(result, Err(EstimationError::InvalidParameter(_))),
            "scale {scale} should be rejected"
        );
    }

    assert!(Cauchy::new(f64::NAN, 1.0).is_err());
    assert!(Cauchy::new(f64::NEG_INFINITY, 1.0).is_err());
    assert!(Cauchy::new(-3.0, 1.0e-12).is_ok());
}

#[test]
fn cauchy_pdf_cdf_quantile() {
    let cauchy: Cauchy = Cauchy::new(2.34, 5.67).unwrap();
    let pi: f64 = std::f64::consts::PI;

    assert_approx_eq!(cauchy.pdf(2.34), 1.0 / (pi * 5.67));
    // half width at half maximum
    assert_approx_eq!(cauchy.pdf(2.34 + 5.67), 0.5 / (pi * 5.67));
    assert_approx_eq!(cauchy.pdf(2.34 - 5.67), cauchy.pdf(2.34 + 5.67));

    assert_approx_eq!(cauchy.cdf(2.34), 0.5);
    assert_approx_eq!(cauchy.cdf(2.34 + 5.67), 0.75);
    assert_approx_eq!(cauchy.cdf(2.34 - 5.67), 0.25);

    assert_approx_eq!(cauchy.quantile(0.5), 2.34);
    assert_approx_eq!(cauchy.quantile(0.75), 2.34 + 5.67);
    assert_approx_eq!(cauchy.quantile(0.25), 2.34 - 5.67);
    assert_eq!(cauchy.quantile(0.0), f64::NEG_INFINITY);
    assert_eq!(cauchy.quantile(1.0), f64::INFINITY);
    assert!(cauchy.quantile(f64::NAN).is_nan());

    for q in [0.01, 0.1, 0.3, 0.6, 0.9, 0.99] {
        assert_approx_eq!(cauchy.cdf(cauchy.quantile(q)), q, 1.0e-12);
    }
}

#[test]
fn cauchy_has_no_moments() {
    let cauchy: Cauchy = Cauchy::default();
    assert!(cauchy.expected_value().is_none());
    assert!(cauchy.variance().is_none());
}

#[test]
fn cauchy_sampling_is_reproducible() {
    let cauchy: Cauchy = Cauchy::new(2.34, 5.67).unwrap();

    let mut rng_a: StdRng = StdRng::seed_from_u64(7);
    let mut rng_b: StdRng = StdRng::seed_from_u64(7);
    let a: Vec<f64> = cauchy.sample_multiple(1000, &mut rng_a);
    let b: Vec<f64> = cauchy.sample_multiple(1000, &mut rng_b);
    assert_eq!(a, b);

    // the generator gives the same stream as sample_multiple
    let c: Vec<f64> = cauchy.iter(StdRng::seed_from_u64(7)).take(1000).collect();
    assert_eq!(a, c);

    let mut rng_c: StdRng = StdRng::seed_from_u64(8);
    let d: Vec<f64> = cauchy.sample_multiple(1000, &mut rng_c);
    assert_ne!(a, d);
}

#[test]
fn sampling_follows_the_quantile() {
    let cauchy: Cauchy = Cauchy::new(2.34, 5.67).unwrap();
    let mut uniform: StdRng = StdRng::seed_from_u64(21);
    let mut rng: StdRng = StdRng::seed_from_u64(21);
    let mut generator = cauchy.iter(StdRng::seed_from_u64(21));

    for _ in 0..1000 {
        let r: f64 = uniform.random();
        let expected: f64 = cauchy.quantile(r);
        assert_eq!(cauchy.sample(&mut rng), expected);
        assert_eq!(generator.next(), Some(expected));
    }
}

#[test]
fn cauchy_sample_median() {
    // The mean of the samples is meaningless, but the median is well behaved.
    let cauchy: Cauchy = Cauchy::new(2.34, 1.0).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(42);
    let mut samples: Vec<f64> = cauchy.sample_multiple(10_000, &mut rng);
    samples.sort_unstable_by(f64::total_cmp);

    assert_approx_eq!(samples[4999], 2.34, 0.1);
    // upper quartile: x0 + gamma
    assert_approx_eq!(samples[7499], 3.34, 0.15);

    // ...while the mean of the transformed samples is stable
    let mut transformed: Samples =
        Samples::new_move(samples.iter().map(|x: &f64| transform(*x).z1).collect()).unwrap();
    let density: AbsPower = AbsPower::fourth_root(cauchy);
    assert_approx_eq!(
        transformed.mean().unwrap(),
        density.expected_value().unwrap(),
        0.02
    );
}

#[test]
fn transform_of_zero() {
    assert_eq!(transform(0.0), DerivedPair { z1: 0.0, z2: 0.0 });
    assert_eq!(transform(-0.0), DerivedPair { z1: 0.0, z2: 0.0 });
}

#[test]
fn transform_values() {
    let pair: DerivedPair = transform(16.0);
    assert_approx_eq!(pair.z1, 2.0);
    assert_approx_eq!(pair.z2, 4.0);

    assert_eq!(transform(-16.0), pair);

    let pair: DerivedPair = transform(0.0625);
    assert_approx_eq!(pair.z1, 0.5);
    assert_approx_eq!(pair.z2, 0.25);

    let pair: DerivedPair = transform(f64::NEG_INFINITY);
    assert_eq!(pair.z1, f64::INFINITY);
    assert_eq!(pair.z2, f64::INFINITY);
}

#[test]
fn transform_is_never_negative() {
    let cauchy: Cauchy = Cauchy::new(-2.34, 5.67).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(3);

    for x in cauchy.iter(&mut rng).take(100_000) {
        let pair: DerivedPair = transform(x);
        assert!(0.0 <= pair.z1, "z1 = {} for x = {x}", pair.z1);
        assert!(0.0 <= pair.z2, "z2 = {} for x = {x}", pair.z2);
        assert_approx_eq!(pair.z1 * pair.z1, pair.z2, 1.0e-9 * pair.z2.max(1.0));
    }
}

#[test]
fn abs_power_density_is_normalized() {
    for (location, scale) in [(0.0, 1.0), (2.34, 5.67), (-10.0, 0.5)] {
        let density: AbsPower = AbsPower::fourth_root(Cauchy::new(location, scale).unwrap());

        // At z = 20 (x = 160000) almost all the mass is already included.
        let area: f64 = density.moment_finite(0, 20.0);
        assert_approx_eq!(area, density.cdf(20.0), 1.0e-6);
        assert_approx_eq!(area, 1.0, 1.0e-3);

        assert_eq!(density.pdf(-1.0), 0.0);
        assert_eq!(density.cdf(-1.0), 0.0);
        assert_eq!(density.pdf(0.0), 0.0);
    }
}

#[test]
fn abs_power_cdf_matches_cauchy() {
    let cauchy: Cauchy = Cauchy::new(2.34, 5.67).unwrap();
    let density: AbsPower = AbsPower::fourth_root(cauchy.clone());

    for z in [0.3, 1.0, 1.5, 2.0, 4.0] {
        let x: f64 = z * z * z * z;
        assert_approx_eq!(density.cdf(z), cauchy.cdf(x) - cauchy.cdf(-x), 1.0e-12);
    }
}

#[test]
fn abs_power_pdf_from_peak() {
    for (location, scale) in [(2.34, 5.67), (-10.0, 0.5), (0.0, 1.0)] {
        let density: AbsPower = AbsPower::fourth_root(Cauchy::new(location, scale).unwrap());
        let peak: f64 = density.peak().unwrap_or(0.0);

        for z in [0.0, 0.2, 1.0, 1.7, 2.5, 10.0] {
            let expected: f64 = density.pdf(z);
            assert_approx_eq!(
                density.pdf_from_peak(z - peak),
                expected,
                1.0e-12 * expected.max(1.0)
            );
        }
        assert_eq!(density.pdf_from_peak(-peak - 1.0), 0.0);
    }

    // A peak narrower than the spacing of f64 around 50^(1/4): the maximum
    // of the density is still found (4 z^3 / (pi gamma) at the peak).
    let density: AbsPower = AbsPower::fourth_root(Cauchy::new(-50.0, 1.0e-9).unwrap());
    let peak: f64 = density.peak().unwrap();
    let maximum: f64 = 4.0 * peak.powi(3) / (std::f64::consts::PI * 1.0e-9);
    assert_approx_eq!(density.pdf_from_peak(0.0), maximum, 1.0e-6 * maximum);
    assert!(density.pdf_from_peak(1.0e-9) < 0.01 * maximum);
    assert!(density.peak().is_some());
    assert!(AbsPower::fourth_root(Cauchy::default()).peak().is_none());
}

#[test]
fn abs_power_closed_form_moments() {
    let density: AbsPower = AbsPower::fourth_root(Cauchy::default());
    let pi: f64 = std::f64::consts::PI;

    // 1 / cos(pi / 8) and sqrt(2) - 1 / cos(pi / 8)^2
    assert_approx_eq!(density.expected_value().unwrap(), 1.0 / (pi / 8.0).cos(), 1.0e-12);
    assert_approx_eq!(density.variance().unwrap(), 0.2426407, 1.0e-6);
    assert_approx_eq!(density.raw_moment(0).unwrap(), 1.0, 1.0e-15);
    assert!(density.raw_moment(4).is_none());

    let density: AbsPower = AbsPower::fourth_root(Cauchy::new(2.34, 5.67).unwrap());
    assert_approx_eq!(density.expected_value().unwrap(), 1.6952588, 1.0e-6);
    assert_approx_eq!(density.raw_moment(2).unwrap(), 3.4356777, 1.0e-6);

    // |X|^(1/2): the mean exists, the variance (<|X|>) does not
    let density: AbsPower = AbsPower::new(Cauchy::default(), 0.5).unwrap();
    assert_approx_eq!(density.expected_value().unwrap(), std::f64::consts::SQRT_2, 1.0e-12);
    assert!(density.variance().is_none());
}

#[test]
fn abs_power_moments() {
    let density: AbsPower = AbsPower::fourth_root(Cauchy::default());
    assert!(density.has_finite_moment(1));
    assert!(density.has_finite_moment(3));
    assert!(!density.has_finite_moment(4));

    assert_eq!(density.tail_estimate(4, 1000.0), f64::INFINITY);
    // the bound is inside the bulk of the distribution
    assert_eq!(density.tail_estimate(1, 1.0), f64::INFINITY);

    // (8 gamma / pi) U^(n - 4) / (4 - n)
    let pi: f64 = std::f64::consts::PI;
    assert_approx_eq!(density.tail_estimate(3, 1000.0), 8.0 / (pi * 1000.0), 1.0e-15);
    assert_approx_eq!(
        density.tail_estimate(2, 1000.0),
        4.0 / (pi * 1.0e6),
        1.0e-15
    );

    assert!(AbsPower::new(Cauchy::default(), 0.0).is_err());
    assert!(AbsPower::new(Cauchy::default(), f64::NAN).is_err());
}

#[test]
fn abs_power_samples_are_non_negative() {
    let density: AbsPower = AbsPower::new(Cauchy::new(2.34, 5.67).unwrap(), 0.5).unwrap();
    let mut rng: StdRng = StdRng::seed_from_u64(11);

    let samples: Vec<f64> = density.sample_multiple(10_000, &mut rng);
    assert!(samples.iter().all(|z: &f64| 0.0 <= *z));
}
