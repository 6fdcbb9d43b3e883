//! Exact statistics computed directly from the samples

use ordered_float::OrderedFloat;
use qc_core::utils::{mean, min_max, sample_variance, sorted};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Descriptive statistics of the raw samples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStatistics {
    /// Number of samples
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value, first occurrence wins ties
    pub mode: f64,
    /// How many times `mode` occurs
    pub mode_frequency: usize,
    /// True when every value is unique, so `mode` carries no information
    pub is_degenerate_mode: bool,
    /// `max - min`
    pub range: f64,
    /// Sample variance (n - 1 denominator)
    pub variance: f64,
    pub std_dev: f64,
}

/// Compute raw statistics
///
/// Empty input yields all-zero statistics. A single sample has zero
/// variance and is its own mean, median and mode.
///
/// # Examples
///
/// ```rust
/// use qc_descriptive::compute_raw;
///
/// let stats = compute_raw(&[2.0, 4.0, 4.0, 5.0]);
/// assert_eq!(stats.mean, 3.75);
/// assert_eq!(stats.median, 4.0);
/// assert_eq!(stats.mode, 4.0);
/// assert!(!stats.is_degenerate_mode);
/// ```
pub fn compute_raw(data: &[f64]) -> RawStatistics {
    let Some((min, max)) = min_max(data) else {
        return RawStatistics::default();
    };
    let (mode, mode_frequency) = mode(data);
    let variance = sample_variance(data);

    RawStatistics {
        count: data.len(),
        min,
        max,
        mean: mean(data),
        median: median(data),
        mode,
        mode_frequency,
        is_degenerate_mode: mode_frequency == 1,
        range: max - min,
        variance,
        std_dev: variance.sqrt(),
    }
}

/// Median of the samples; 0.0 for empty input
pub fn median(data: &[f64]) -> f64 {
    let sorted = sorted(data);
    let n = sorted.len();
    match n {
        0 => 0.0,
        _ if n % 2 == 1 => sorted[n / 2],
        _ => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
    }
}

/// Most frequent value and its frequency
///
/// Ties go to the value that first appears in the data. Returns `(0.0, 0)`
/// for empty input.
pub fn mode(data: &[f64]) -> (f64, usize) {
    let mut frequencies: HashMap<OrderedFloat<f64>, usize> = HashMap::new();
    let mut first_seen = Vec::new();
    for &value in data {
        let entry = frequencies.entry(OrderedFloat(value)).or_insert(0);
        if *entry == 0 {
            first_seen.push(OrderedFloat(value));
        }
        *entry += 1;
    }

    first_seen
        .into_iter()
        .fold((0.0, 0), |(best, best_freq), key| {
            let freq = frequencies.get(&key).copied().unwrap_or(0);
            if freq > best_freq {
                (key.into_inner(), freq)
            } else {
                (best, best_freq)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_raw_basic() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = compute_raw(&data);

        assert_eq!(stats.count, 5);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.range, 4.0);
        assert_relative_eq!(stats.variance, 2.5);
        assert_relative_eq!(stats.std_dev, 2.5f64.sqrt());
        // All unique: reported but flagged
        assert_eq!(stats.mode, 1.0);
        assert!(stats.is_degenerate_mode);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_mode_first_encountered_wins() {
        // 3.0 and 1.0 both appear twice; 3.0 is seen first
        assert_eq!(mode(&[3.0, 1.0, 1.0, 3.0, 2.0]), (3.0, 2));
        assert_eq!(mode(&[7.0, 8.0, 8.0]), (8.0, 2));
        assert_eq!(mode(&[]), (0.0, 0));
    }

    #[test]
    fn test_empty() {
        let stats = compute_raw(&[]);
        assert_eq!(stats, RawStatistics::default());
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_single_value() {
        let stats = compute_raw(&[9.5]);
        assert_eq!(stats.mean, 9.5);
        assert_eq!(stats.median, 9.5);
        assert_eq!(stats.mode, 9.5);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.range, 0.0);
    }
}
