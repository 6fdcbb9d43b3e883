//! Grouped statistics against raw statistics

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use qc_descriptive::{compute_grouped, compute_raw};
use qc_histogram::fixed_histogram;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

#[test]
fn test_grouped_mean_converges_with_many_bins() {
    let mut rng = StdRng::seed_from_u64(7);
    let normal = Normal::new(100.0, 4.0).unwrap();
    let data: Vec<f64> = (0..400).map(|_| normal.sample(&mut rng)).collect();
    let raw = compute_raw(&data);

    let fine = compute_grouped(&fixed_histogram(&data, data.len()));

    // The midpoint error is bounded by half a bin width
    let fine_width = raw.range / data.len() as f64;
    assert_abs_diff_eq!(fine.mean, raw.mean, epsilon = fine_width / 2.0 + 1e-9);
    assert_abs_diff_eq!(fine.std_dev, raw.std_dev, epsilon = 0.05);
}

proptest! {
    // Property: grouped mean is within half a bin width of the raw mean
    #[test]
    fn prop_grouped_mean_within_half_width(
        data in prop::collection::vec(-1e3f64..1e3, 2..200),
        bins in 1usize..50
    ) {
        let raw = compute_raw(&data);
        prop_assume!(raw.range > 0.0);
        let grouped = compute_grouped(&fixed_histogram(&data, bins));
        let half_width = raw.range / bins as f64 / 2.0;

        prop_assert_eq!(grouped.total_count, data.len());
        prop_assert!((grouped.mean - raw.mean).abs() <= half_width + 1e-6);
    }
}
