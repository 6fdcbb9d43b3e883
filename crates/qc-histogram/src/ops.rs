//! Operations on frequency tables

use crate::types::FrequencyTable;
use qc_core::utils::round_to;

/// Share of each count in the total, as a percentage rounded to `decimals`
///
/// Returns all zeros when the total is zero.
///
/// # Examples
///
/// ```rust
/// use qc_histogram::ops::percentages;
///
/// assert_eq!(percentages(&[1.0, 1.0, 1.0], 1), vec![33.3, 33.3, 33.3]);
/// ```
pub fn percentages(counts: &[f64], decimals: u32) -> Vec<f64> {
    let total: f64 = counts.iter().sum();
    counts
        .iter()
        .map(|&c| {
            if total > 0.0 {
                round_to(c / total * 100.0, decimals)
            } else {
                0.0
            }
        })
        .collect()
}

/// Running percentage over `counts`, rounded to `decimals`
///
/// The running sum is accumulated on unrounded shares, so the last entry is
/// exactly 100 whenever the total is positive.
///
/// # Examples
///
/// ```rust
/// use qc_histogram::ops::cumulative_percentages;
///
/// assert_eq!(cumulative_percentages(&[1.0, 1.0, 1.0], 1), vec![33.3, 66.7, 100.0]);
/// ```
pub fn cumulative_percentages(counts: &[f64], decimals: u32) -> Vec<f64> {
    let total: f64 = counts.iter().sum();
    let mut running = 0.0;
    counts
        .iter()
        .map(|&c| {
            if total > 0.0 {
                running += c;
                round_to(running / total * 100.0, decimals)
            } else {
                0.0
            }
        })
        .collect()
}

/// Indices of all entries at or above `ratio` times the tallest entry
///
/// Returns an empty vector when every height is zero.
pub fn peak_indices(heights: &[f64], ratio: f64) -> Vec<usize> {
    let max = heights.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return vec![];
    }
    let threshold = ratio * max;
    heights
        .iter()
        .enumerate()
        .filter(|(_, h)| **h >= threshold)
        .map(|(i, _)| i)
        .collect()
}

/// Operations that derive presentation data from a frequency table
pub trait TableOps {
    /// Bin counts as floating-point heights
    fn heights(&self) -> Vec<f64>;

    /// Per-bin percentage of the total count
    fn percentages(&self, decimals: u32) -> Vec<f64>;

    /// Per-bin cumulative percentage of the total count
    fn cumulative_percentages(&self, decimals: u32) -> Vec<f64>;

    /// Per-bin `"lower–upper"` labels with `precision` decimals
    fn labels(&self, precision: usize) -> Vec<String>;

    /// Index of the first bin with the highest count
    fn modal_index(&self) -> Option<usize>;
}

impl TableOps for FrequencyTable {
    fn heights(&self) -> Vec<f64> {
        self.bins().iter().map(|bin| bin.count as f64).collect()
    }

    fn percentages(&self, decimals: u32) -> Vec<f64> {
        percentages(&self.heights(), decimals)
    }

    fn cumulative_percentages(&self, decimals: u32) -> Vec<f64> {
        cumulative_percentages(&self.heights(), decimals)
    }

    fn labels(&self, precision: usize) -> Vec<String> {
        self.bins()
            .iter()
            .map(|bin| format!("{:.p$}–{:.p$}", bin.lower, bin.upper, p = precision))
            .collect()
    }

    fn modal_index(&self) -> Option<usize> {
        // Strictly greater keeps the first of several equal peaks
        self.bins()
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, usize)>, (i, bin)| match best {
                Some((_, count)) if bin.count <= count => best,
                _ => Some((i, bin.count)),
            })
            .map(|(i, _)| i)
    }
}
