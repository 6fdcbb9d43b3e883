//! The one-pass histogram aggregator

use crate::config::AnalysisConfig;
use crate::input::AnalysisInput;
use crate::output::{HistogramAnalysis, StatisticsSummary, TableRow};
use qc_capability::compute_capability;
use qc_core::{prepare, prepare_categories, CategoryCount, PreparationReport};
use qc_descriptive::{compute_grouped, compute_raw, GroupedStatistics, RawStatistics};
use qc_histogram::ops::{cumulative_percentages, percentages};
use qc_histogram::{FixedWidthBuilder, FrequencyTable, HistogramBuilder, TableOps};
use qc_outlier::detect;
use qc_shape::{classify, classify_heights, generate_with, ShapeLabel};
use tracing::{debug, instrument};

/// Runs every analysis stage over one input
///
/// The aggregator only holds its configuration; each call to
/// [`analyze`](Self::analyze) prepares the input and recomputes everything
/// from scratch, so identical inputs give identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HistogramAggregator {
    config: AnalysisConfig,
}

impl HistogramAggregator {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze measurements or category counts
    #[instrument(skip_all, fields(kind = input.kind(), n = input.len()))]
    pub fn analyze(&self, input: &AnalysisInput) -> HistogramAnalysis {
        match input {
            AnalysisInput::Measurements(values) => self.analyze_values(values),
            AnalysisInput::Categories(pairs) => self.analyze_categories(pairs),
        }
    }

    /// Bin and analyze raw measurements
    ///
    /// Non-finite samples are dropped first and counted in
    /// [`HistogramAnalysis::preparation`].
    pub fn analyze_values(&self, values: &[f64]) -> HistogramAnalysis {
        let prepared = prepare(values);
        let data = prepared.dataset.values();

        let bin_count = self.config.bin_rule.resolve(data);
        let table = FixedWidthBuilder::new(bin_count).build(data);
        debug!(bins = table.len(), total = table.total_count(), "built frequency table");

        let raw = compute_raw(data);
        let grouped = compute_grouped(&table);
        let shape = classify(&table, raw.mean, raw.median, raw.std_dev);
        let rows = self.binned_rows(&table);

        self.finish(
            prepared.report,
            bin_count,
            table,
            rows,
            data,
            StatisticsSummary { raw, grouped },
            shape,
        )
    }

    /// Analyze already aggregated category counts
    ///
    /// Each pair becomes one row without bounds. Statistics, capability,
    /// outliers and the curve are computed over the counts themselves;
    /// grouped statistics need midpoints and stay zeroed.
    pub fn analyze_categories(&self, pairs: &[CategoryCount]) -> HistogramAnalysis {
        let prepared = prepare_categories(pairs);
        let categories = prepared.dataset;
        let counts: Vec<f64> = categories.iter().map(|pair| pair.count).collect();

        let raw = compute_raw(&counts);
        let shape = classify_heights(&counts, raw.mean, raw.median, raw.std_dev);
        let rows = self.category_rows(&categories, &counts);

        self.finish(
            prepared.report,
            rows.len(),
            FrequencyTable::empty(),
            rows,
            &counts,
            StatisticsSummary {
                raw,
                grouped: GroupedStatistics::default(),
            },
            shape,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn finish(
        &self,
        preparation: PreparationReport,
        bin_count: usize,
        table: FrequencyTable,
        rows: Vec<TableRow>,
        data: &[f64],
        statistics: StatisticsSummary,
        shape: ShapeLabel,
    ) -> HistogramAnalysis {
        let RawStatistics { mean, std_dev, .. } = statistics.raw;
        let peak = rows.iter().map(|row| row.count).fold(0.0, f64::max);

        HistogramAnalysis {
            preparation,
            bin_count,
            table,
            rows,
            capability: compute_capability(mean, std_dev, &self.config.spec_limits),
            outliers: detect(data),
            shape,
            curve: generate_with(data, mean, std_dev, peak, self.config.curve_increments),
            statistics,
        }
    }

    fn binned_rows(&self, table: &FrequencyTable) -> Vec<TableRow> {
        let labels = table.labels(self.config.label_precision);
        let pct = table.percentages(self.config.percentage_decimals);
        let cum = table.cumulative_percentages(self.config.percentage_decimals);

        table
            .bins()
            .iter()
            .zip(labels)
            .zip(pct.into_iter().zip(cum))
            .map(|((bin, category), (percentage, cumulative_percentage))| TableRow {
                category,
                count: bin.count as f64,
                percentage,
                cumulative_percentage,
                lower: Some(bin.lower),
                upper: Some(bin.upper),
                midpoint: Some(bin.midpoint),
            })
            .collect()
    }

    fn category_rows(&self, categories: &[CategoryCount], counts: &[f64]) -> Vec<TableRow> {
        let pct = percentages(counts, self.config.percentage_decimals);
        let cum = cumulative_percentages(counts, self.config.percentage_decimals);

        categories
            .iter()
            .zip(pct.into_iter().zip(cum))
            .map(|(pair, (percentage, cumulative_percentage))| TableRow {
                category: pair.category.clone(),
                count: pair.count,
                percentage,
                cumulative_percentage,
                lower: None,
                upper: None,
                midpoint: None,
            })
            .collect()
    }
}
