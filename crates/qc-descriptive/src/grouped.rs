//! Grouped statistics approximated from class midpoints
//!
//! Every sample in a bin is represented by the bin's midpoint. The results
//! approximate the raw statistics and converge to them as bins narrow; they
//! are kept in their own type so the two are never mixed up in reports.

use qc_histogram::{Bin, FrequencyTable, TableOps};
use serde::{Deserialize, Serialize};

/// Descriptive statistics of a frequency table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedStatistics {
    /// Sum of all bin counts
    pub total_count: usize,
    /// `sum(midpoint * count) / sum(count)`
    pub mean: f64,
    /// `sum(count * (midpoint - mean)^2) / (sum(count) - 1)`
    pub variance: f64,
    pub std_dev: f64,
    /// Bin with the highest count, first occurrence wins ties
    pub modal_bin: Option<Bin>,
}

/// Compute grouped statistics from a frequency table
///
/// An empty table, or one holding a single sample, has zero variance.
///
/// # Examples
///
/// ```rust
/// use qc_descriptive::compute_grouped;
/// use qc_histogram::fixed_histogram;
///
/// let table = fixed_histogram(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0], 3);
/// let grouped = compute_grouped(&table);
/// // midpoints 2.5, 5.5, 8.5 with counts 3, 3, 4
/// assert!((grouped.mean - 5.8).abs() < 1e-12);
/// assert_eq!(grouped.modal_bin.unwrap().midpoint, 8.5);
/// ```
pub fn compute_grouped(table: &FrequencyTable) -> GroupedStatistics {
    let total: usize = table.bins().iter().map(|bin| bin.count).sum();
    if total == 0 {
        return GroupedStatistics::default();
    }

    let total_f = total as f64;
    let mean = table
        .bins()
        .iter()
        .map(|bin| bin.midpoint * bin.count as f64)
        .sum::<f64>()
        / total_f;

    let variance = if total > 1 {
        table
            .bins()
            .iter()
            .map(|bin| {
                let diff = bin.midpoint - mean;
                bin.count as f64 * diff * diff
            })
            .sum::<f64>()
            / (total_f - 1.0)
    } else {
        0.0
    };

    GroupedStatistics {
        total_count: total,
        mean,
        variance,
        std_dev: variance.sqrt(),
        modal_bin: table.modal_index().map(|i| table.bins()[i].clone()),
    }
}
