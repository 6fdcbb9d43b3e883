//! Utility functions for working with data slices

/// Sort data and return a new vector
///
/// Uses IEEE total ordering, so the result is deterministic even if a
/// caller bypasses dataset preparation and passes non-finite values.
///
/// # Examples
///
/// ```rust
/// use qc_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use qc_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the sample variance (n - 1 denominator)
///
/// Returns 0.0 for slices with less than 2 elements.
pub fn sample_variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    data.iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64
}

/// Calculate the sample standard deviation
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use qc_core::utils::std_dev;
///
/// let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    sample_variance(data).sqrt()
}

/// Nearest-rank quantile of already sorted data
///
/// Picks `sorted[floor(n * p)]` without interpolation, clamped to the last
/// element. Returns `None` for empty input.
///
/// Quartile-based rules in this workspace (Freedman-Diaconis, Tukey fences)
/// all use this definition.
///
/// # Examples
///
/// ```rust
/// use qc_core::utils::nearest_rank;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
/// assert_eq!(nearest_rank(&data, 0.25), Some(2.0)); // index floor(1.5) = 1
/// assert_eq!(nearest_rank(&data, 0.75), Some(5.0)); // index floor(4.5) = 4
/// ```
pub fn nearest_rank(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let n = sorted.len();
    let idx = ((n as f64) * p).floor().max(0.0) as usize;
    Some(sorted[idx.min(n - 1)])
}

/// Minimum and maximum of a slice in a single pass
///
/// Returns `None` for empty input.
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    let first = *data.first()?;
    Some(
        data.iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}

/// Round to a fixed number of decimal places
///
/// # Examples
///
/// ```rust
/// use qc_core::utils::round_to;
///
/// assert_eq!(round_to(33.333, 1), 33.3);
/// assert_eq!(round_to(66.66, 1), 66.7);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
