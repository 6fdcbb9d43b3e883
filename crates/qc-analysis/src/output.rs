//! Analysis output types

use qc_capability::CapabilityResult;
use qc_core::PreparationReport;
use qc_descriptive::{GroupedStatistics, RawStatistics};
use qc_histogram::FrequencyTable;
use qc_outlier::OutlierReport;
use qc_shape::{CurvePoint, ShapeLabel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the exported frequency table
///
/// `lower`, `upper` and `midpoint` are present for binned measurements and
/// absent for category input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub category: String,
    pub count: f64,
    pub percentage: f64,
    pub cumulative_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midpoint: Option<f64>,
}

/// Raw and grouped statistics side by side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// Computed from the samples
    pub raw: RawStatistics,
    /// Approximated from bin midpoints
    pub grouped: GroupedStatistics,
}

/// Everything produced by one analysis pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistogramAnalysis {
    /// Samples received and dropped during preparation
    pub preparation: PreparationReport,
    /// Number of bins used, or the number of rows for category input
    pub bin_count: usize,
    /// The binned table; empty for category input
    pub table: FrequencyTable,
    pub rows: Vec<TableRow>,
    pub statistics: StatisticsSummary,
    pub capability: CapabilityResult,
    pub outliers: OutlierReport,
    pub shape: ShapeLabel,
    pub curve: Vec<CurvePoint>,
}

impl HistogramAnalysis {
    /// Sum of all row counts
    pub fn total_count(&self) -> f64 {
        self.rows.iter().map(|row| row.count).sum()
    }

    /// The row with the highest count, first occurrence wins ties
    pub fn modal_row(&self) -> Option<&TableRow> {
        self.rows
            .iter()
            .fold(None, |best: Option<&TableRow>, row| match best {
                Some(b) if row.count <= b.count => best,
                _ => Some(row),
            })
    }
}

impl fmt::Display for HistogramAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = &self.statistics.raw;
        let grouped = &self.statistics.grouped;
        writeln!(f, "{:<20} {:>10} {:>8} {:>8}", "class", "count", "%", "cum %")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<20} {:>10} {:>8} {:>8}",
                row.category, row.count, row.percentage, row.cumulative_percentage
            )?;
        }
        writeln!(
            f,
            "raw:     n={} mean={:.4} median={:.4} sd={:.4} range={:.4}",
            raw.count, raw.mean, raw.median, raw.std_dev, raw.range
        )?;
        writeln!(f, "grouped: mean={:.4} sd={:.4}", grouped.mean, grouped.std_dev)?;
        writeln!(f, "capability: {}", self.capability)?;
        writeln!(
            f,
            "outliers: {} by z-score, {} by Tukey fences",
            self.outliers.z_score_outliers.len(),
            self.outliers.tukey_outliers.len()
        )?;
        write!(f, "shape: {}", self.shape)
    }
}
