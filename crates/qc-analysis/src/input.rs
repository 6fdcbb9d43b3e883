//! Analysis input

use qc_core::CategoryCount;
use serde::{Deserialize, Serialize};

/// Data handed to the aggregator
///
/// Measurements are binned; category counts are already aggregated and
/// become one row each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum AnalysisInput {
    Measurements(Vec<f64>),
    Categories(Vec<CategoryCount>),
}

impl AnalysisInput {
    /// Number of raw entries before preparation
    pub fn len(&self) -> usize {
        match self {
            Self::Measurements(values) => values.len(),
            Self::Categories(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `"measurements"` or `"categories"`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Measurements(_) => "measurements",
            Self::Categories(_) => "categories",
        }
    }
}

impl From<Vec<f64>> for AnalysisInput {
    fn from(values: Vec<f64>) -> Self {
        Self::Measurements(values)
    }
}

impl From<&[f64]> for AnalysisInput {
    fn from(values: &[f64]) -> Self {
        Self::Measurements(values.to_vec())
    }
}

impl From<Vec<CategoryCount>> for AnalysisInput {
    fn from(pairs: Vec<CategoryCount>) -> Self {
        Self::Categories(pairs)
    }
}
