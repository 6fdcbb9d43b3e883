//! Heuristic histogram shape classification

use qc_histogram::ops::peak_indices;
use qc_histogram::{FrequencyTable, TableOps};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bins at or above this share of the tallest bin count as peaks
pub const PEAK_RATIO: f64 = 0.7;

/// Minimum index distance between the first two peaks of a twin peak
pub const TWIN_PEAK_DISTANCE: usize = 2;

/// `|skew|` below this is classified as normal
pub const SYMMETRY_LIMIT: f64 = 0.3;

/// `|skew|` above this is classified as skewed
pub const SKEW_LIMIT: f64 = 0.5;

/// Overall shape of a histogram
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeLabel {
    Normal,
    PositivelySkewed,
    NegativelySkewed,
    TwinPeak,
    #[default]
    General,
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeLabel::Normal => "normal",
            ShapeLabel::PositivelySkewed => "positively skewed",
            ShapeLabel::NegativelySkewed => "negatively skewed",
            ShapeLabel::TwinPeak => "twin peak",
            ShapeLabel::General => "general",
        };
        f.write_str(name)
    }
}

/// Pearson's second skewness coefficient, `3 * (mean - median) / sd`
///
/// Zero when the standard deviation is zero.
pub fn pearson_skewness(mean: f64, median: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        0.0
    } else {
        3.0 * (mean - median) / std_dev
    }
}

/// Classify the shape of a frequency table
///
/// A table with no samples has no peaks and zero skew, so it is reported as
/// [`ShapeLabel::Normal`].
pub fn classify(table: &FrequencyTable, mean: f64, median: f64, std_dev: f64) -> ShapeLabel {
    classify_heights(&table.heights(), mean, median, std_dev)
}

/// Classify the shape described by a sequence of bar heights
///
/// Twin peaks are checked first: if at least two bars reach
/// [`PEAK_RATIO`] of the tallest and the first two of them are at least
/// [`TWIN_PEAK_DISTANCE`] apart, the shape is [`ShapeLabel::TwinPeak`].
/// Otherwise the Pearson skewness decides.
///
/// # Examples
///
/// ```rust
/// use qc_shape::{classify_heights, ShapeLabel};
///
/// let bimodal = [9.0, 2.0, 1.0, 8.0];
/// assert_eq!(classify_heights(&bimodal, 5.0, 5.0, 1.0), ShapeLabel::TwinPeak);
///
/// let tailed = [10.0, 4.0, 1.0];
/// assert_eq!(classify_heights(&tailed, 4.0, 2.0, 2.0), ShapeLabel::PositivelySkewed);
/// ```
pub fn classify_heights(heights: &[f64], mean: f64, median: f64, std_dev: f64) -> ShapeLabel {
    let peaks = peak_indices(heights, PEAK_RATIO);
    if let [first, second, ..] = peaks[..] {
        if second - first >= TWIN_PEAK_DISTANCE {
            return ShapeLabel::TwinPeak;
        }
    }

    let skew = pearson_skewness(mean, median, std_dev);
    if skew.abs() < SYMMETRY_LIMIT {
        ShapeLabel::Normal
    } else if skew > SKEW_LIMIT {
        ShapeLabel::PositivelySkewed
    } else if skew < -SKEW_LIMIT {
        ShapeLabel::NegativelySkewed
    } else {
        ShapeLabel::General
    }
}
