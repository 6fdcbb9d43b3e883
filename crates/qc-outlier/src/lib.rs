//! Outlier flags for quality-control samples
//!
//! Two independent rules are applied and both results are reported:
//!
//! - **Z-score**: `|x - mean| / sd > 3` using the sample standard deviation
//! - **Tukey fences**: `x < Q1 - 1.5 * IQR` or `x > Q3 + 1.5 * IQR`, with
//!   nearest-rank quartiles (`floor(n * 0.25)`, `floor(n * 0.75)`)
//!
//! The rules often disagree. In small samples the Z-score rule is weak: the
//! largest attainable `|z|` with `n` samples is `(n - 1) / sqrt(n)`, so
//! fewer than 11 samples can never be flagged by it.
//!
//! # Example
//!
//! ```rust
//! use qc_outlier::detect;
//!
//! let report = detect(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);
//! assert_eq!(report.tukey_outliers, vec![100.0]);
//! assert!(report.z_score_outliers.is_empty());
//! ```

use qc_core::utils::{mean, nearest_rank, sorted, std_dev};
use serde::{Deserialize, Serialize};

/// Quartiles and fences of the Tukey rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TukeyFences {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    /// `Q1 - k * IQR`
    pub lower: f64,
    /// `Q3 + k * IQR`
    pub upper: f64,
}

impl TukeyFences {
    /// Compute fences with multiplier `k`; `None` for empty input
    pub fn from_sample(data: &[f64], k: f64) -> Option<Self> {
        let sorted = sorted(data);
        let q1 = nearest_rank(&sorted, 0.25)?;
        let q3 = nearest_rank(&sorted, 0.75)?;
        let iqr = q3 - q1;
        Some(Self {
            q1,
            q3,
            iqr,
            lower: q1 - k * iqr,
            upper: q3 + k * iqr,
        })
    }

    /// True when the value lies strictly outside the fences
    pub fn is_outside(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Samples flagged by each rule, in their original order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    pub z_score_outliers: Vec<f64>,
    pub tukey_outliers: Vec<f64>,
    /// Fences used by the Tukey rule; `None` for an empty sample
    pub fences: Option<TukeyFences>,
}

impl OutlierReport {
    /// True when neither rule flagged anything
    pub fn is_clean(&self) -> bool {
        self.z_score_outliers.is_empty() && self.tukey_outliers.is_empty()
    }
}

/// Outlier detector with configurable thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierDetector {
    /// Absolute Z-score above which a sample is flagged
    pub z_threshold: f64,
    /// IQR multiplier for the Tukey fences
    pub tukey_k: f64,
}

impl Default for OutlierDetector {
    fn default() -> Self {
        Self {
            z_threshold: 3.0,
            tukey_k: 1.5,
        }
    }
}

impl OutlierDetector {
    /// Apply both rules
    pub fn detect(&self, data: &[f64]) -> OutlierReport {
        let fences = TukeyFences::from_sample(data, self.tukey_k);
        OutlierReport {
            z_score_outliers: self.z_score_outliers(data),
            tukey_outliers: fences
                .map(|f| outside(data, &f))
                .unwrap_or_default(),
            fences,
        }
    }

    /// Samples whose absolute Z-score exceeds the threshold
    ///
    /// Empty when the standard deviation is zero, since Z is undefined.
    pub fn z_score_outliers(&self, data: &[f64]) -> Vec<f64> {
        let sd = std_dev(data);
        if sd == 0.0 {
            return vec![];
        }
        let m = mean(data);
        data.iter()
            .copied()
            .filter(|&v| ((v - m) / sd).abs() > self.z_threshold)
            .collect()
    }
}

/// Apply both rules with the standard thresholds (3 sigma, 1.5 IQR)
pub fn detect(data: &[f64]) -> OutlierReport {
    OutlierDetector::default().detect(data)
}

/// Z-score outliers with the standard 3-sigma threshold
pub fn z_score_outliers(data: &[f64]) -> Vec<f64> {
    OutlierDetector::default().z_score_outliers(data)
}

/// Tukey outliers with the standard 1.5 IQR fences
pub fn tukey_outliers(data: &[f64]) -> Vec<f64> {
    TukeyFences::from_sample(data, OutlierDetector::default().tukey_k)
        .map(|f| outside(data, &f))
        .unwrap_or_default()
}

fn outside(data: &[f64], fences: &TukeyFences) -> Vec<f64> {
    data.iter().copied().filter(|&v| fences.is_outside(v)).collect()
}
