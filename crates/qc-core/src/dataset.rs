//! Dataset preparation
//!
//! Raw check-sheet input arrives either as a flat list of measurements or as
//! pre-aggregated category counts. Both are cleaned here into a canonical
//! form before any statistic sees them: non-finite values are dropped
//! silently, and the number of dropped entries is reported back so the
//! caller can surface it.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use tracing::warn;

/// An ordered sequence of finite samples
///
/// Order is kept as supplied so results are reproducible, even though no
/// statistic depends on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    /// Create a dataset, dropping any non-finite values
    pub fn new(values: Vec<f64>) -> Self {
        prepare(&values).dataset
    }

    /// The samples as a slice
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the dataset and return the samples
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl Deref for Dataset {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for Dataset {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// One pre-aggregated check-sheet category and its tally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: f64,
}

impl CategoryCount {
    pub fn new(category: impl Into<String>, count: f64) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }
}

/// What preparation did to the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparationReport {
    /// Number of entries supplied
    pub received: usize,
    /// Number of entries dropped as unusable
    pub dropped: usize,
}

impl PreparationReport {
    /// Number of entries that survived preparation
    pub fn kept(&self) -> usize {
        self.received - self.dropped
    }

    /// True when nothing was dropped
    pub fn is_clean(&self) -> bool {
        self.dropped == 0
    }
}

/// A prepared value together with its preparation report
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared<T> {
    pub dataset: T,
    pub report: PreparationReport,
}

/// Clean a flat list of measurements
///
/// NaN and infinite values are removed; all other values keep their order.
///
/// # Examples
///
/// ```rust
/// use qc_core::dataset::prepare;
///
/// let prepared = prepare(&[1.0, f64::NAN, 2.0, f64::INFINITY]);
/// assert_eq!(prepared.dataset.values(), &[1.0, 2.0]);
/// assert_eq!(prepared.report.dropped, 2);
/// ```
pub fn prepare(raw: &[f64]) -> Prepared<Dataset> {
    let values: Vec<f64> = raw.iter().copied().filter(|v| v.is_finite()).collect();
    let report = PreparationReport {
        received: raw.len(),
        dropped: raw.len() - values.len(),
    };
    if !report.is_clean() {
        warn!(
            dropped = report.dropped,
            received = report.received,
            "dropped non-finite samples"
        );
    }
    Prepared {
        dataset: Dataset { values },
        report,
    }
}

/// Clean a list of category counts
///
/// Pairs whose count is non-finite or negative are removed, since they
/// cannot be frequencies. Zero counts are kept: an empty category is still
/// a row on the check sheet.
pub fn prepare_categories(raw: &[CategoryCount]) -> Prepared<Vec<CategoryCount>> {
    let categories: Vec<CategoryCount> = raw
        .iter()
        .filter(|c| c.count.is_finite() && c.count >= 0.0)
        .cloned()
        .collect();
    let report = PreparationReport {
        received: raw.len(),
        dropped: raw.len() - categories.len(),
    };
    if !report.is_clean() {
        warn!(
            dropped = report.dropped,
            received = report.received,
            "dropped unusable category counts"
        );
    }
    Prepared {
        dataset: categories,
        report,
    }
}
