//! Check-sheet scenarios through the public facade

use approx::assert_relative_eq;
use proptest::prelude::*;
use qc_stats::prelude::*;
use qc_stats::qc_outlier::tukey_outliers;

fn one_to_ten() -> Vec<f64> {
    (1..=10).map(|x| x as f64).collect()
}

#[test]
fn test_equal_width_binning() {
    let table = FixedWidthBuilder::new(3).build(&one_to_ten());

    let bounds: Vec<(f64, f64)> = table.bins().iter().map(|b| (b.lower, b.upper)).collect();
    assert_eq!(bounds, vec![(1.0, 4.0), (4.0, 7.0), (7.0, 10.0)]);
    assert_eq!(table.counts(), vec![3, 3, 4]);
    assert_eq!(table.find_bin(10.0), Some(2));
    assert_eq!(table.find_bin(4.0), Some(1));
}

#[test]
fn test_sturges_suggestion() {
    assert_eq!(suggest_bins_sturges(16), 5);
}

#[test]
fn test_capability_indices() {
    let result = compute_capability(10.0, 1.0, &SpecLimits::two_sided(7.0, 13.0));
    assert_eq!(result.cp, Some(1.0));
    assert_eq!(result.cpu, Some(1.0));
    assert_eq!(result.cpl, Some(1.0));
    assert_eq!(result.cpk, Some(1.0));
}

#[test]
fn test_outliers_in_small_sample() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
    let report = detect(&data);

    assert_eq!(report.tukey_outliers, vec![100.0]);
    assert_eq!(tukey_outliers(&data), vec![100.0]);
    for interior in [2.0, 3.0, 4.0, 5.0] {
        assert!(!report.z_score_outliers.contains(&interior));
        assert!(!report.tukey_outliers.contains(&interior));
    }
}

#[test]
fn test_shape_labels() {
    let symmetric = [2.0, 3.0, 3.0, 4.0, 4.0, 4.0, 5.0, 5.0, 6.0];
    let analysis = analyze(&symmetric.as_slice().into(), AnalysisConfig::with_bins(5, SpecLimits::none()));
    assert_eq!(analysis.shape, ShapeLabel::Normal);

    let right_tailed = [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 4.0, 10.0, 20.0];
    let analysis = analyze(
        &right_tailed.as_slice().into(),
        AnalysisConfig::with_bins(5, SpecLimits::none()),
    );
    assert_eq!(analysis.shape, ShapeLabel::PositivelySkewed);
}

#[test]
fn test_full_report_for_single_value() {
    let analysis = analyze(
        &vec![7.0].into(),
        AnalysisConfig::builder().bin_count(4).limits(5.0, 9.0).build(),
    );
    assert_eq!(analysis.statistics.raw.std_dev, 0.0);
    assert!(analysis.capability.is_undefined());
    assert_eq!(analysis.rows.iter().map(|r| r.count).sum::<f64>(), 1.0);
}

#[test]
fn test_grouped_mean_converges() {
    let data: Vec<f64> = (0..500).map(|i| (i as f64 * 0.37).sin() * 5.0 + 20.0).collect();
    let raw = compute_raw(&data);

    let coarse = compute_grouped(&fixed_histogram(&data, 5));
    let fine = compute_grouped(&fixed_histogram(&data, data.len()));

    assert!((fine.mean - raw.mean).abs() <= raw.range / data.len() as f64 / 2.0 + 1e-9);
    assert!((coarse.mean - raw.mean).abs() <= raw.range / 5.0 / 2.0 + 1e-9);
    assert_relative_eq!(fine.mean, raw.mean, epsilon = 0.02);
}

proptest! {
    // Property: every sample is counted exactly once
    #[test]
    fn prop_conservation(
        data in prop::collection::vec(-1e6f64..1e6, 1..500),
        bins in 1usize..100
    ) {
        let table = FixedWidthBuilder::new(bins).build(&data);
        prop_assert_eq!(table.counts().iter().sum::<usize>(), data.len());
        prop_assert_eq!(table.len(), bins);
    }

    // Property: min lands in the first bin and max in the last
    #[test]
    fn prop_boundary_inclusion(
        data in prop::collection::vec(-1e6f64..1e6, 2..500),
        bins in 1usize..100
    ) {
        let table = FixedWidthBuilder::new(bins).build(&data);
        prop_assume!(table.max() > table.min());

        prop_assert_eq!(table.find_bin(table.min()), Some(0));
        prop_assert_eq!(table.find_bin(table.max()), Some(bins - 1));
        prop_assert!(table.bins()[0].count >= 1);
        prop_assert!(table.bins()[bins - 1].count >= 1);
    }

    // Property: zero spread never yields capability indices
    #[test]
    fn prop_capability_nullity(m in -1e3f64..1e3, a in -1e3f64..1e3, b in -1e3f64..1e3) {
        let result = compute_capability(m, 0.0, &SpecLimits::two_sided(a, b));
        prop_assert_eq!(result.cp, None);
        prop_assert_eq!(result.cpk, None);
    }
}
