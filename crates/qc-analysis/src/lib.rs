//! Histogram analysis for quality-control check sheets
//!
//! This crate combines the workspace's components into one pass over a
//! sample:
//!
//! 1. **Preparation**: non-finite samples are dropped and counted
//! 2. **Binning**: an equal-width [`FrequencyTable`](qc_histogram::FrequencyTable)
//!    using a fixed count, Sturges or Freedman-Diaconis
//! 3. **Statistics**: raw and grouped statistics, kept in separate types
//! 4. **Capability**: Cp/Cpk against optional specification limits
//! 5. **Outliers**: Z-score and Tukey-fence flags, reported side by side
//! 6. **Shape**: a heuristic label and a normal-curve overlay
//!
//! Every pass is recomputed from its inputs; there is no hidden state, so
//! identical inputs always produce identical [`HistogramAnalysis`] values.
//! [`CachedAggregator`] adds optional memoization on top.
//!
//! # Examples
//!
//! ## Measurements
//!
//! ```rust
//! use qc_analysis::{AnalysisConfig, HistogramAggregator};
//!
//! let config = AnalysisConfig::builder()
//!     .bin_count(3)
//!     .limits(0.0, 11.0)
//!     .build();
//! let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
//! let analysis = HistogramAggregator::new(config).analyze(&data.into());
//!
//! for row in &analysis.rows {
//!     println!("{:>12} {:>3} {:>5.1}%", row.category, row.count, row.percentage);
//! }
//! println!("{}", analysis.capability);
//! println!("shape: {}", analysis.shape);
//! ```
//!
//! ## Pre-aggregated categories
//!
//! ```rust
//! use qc_analysis::{analyze, AnalysisConfig, AnalysisInput};
//! use qc_core::CategoryCount;
//!
//! let defects = vec![
//!     CategoryCount::new("scratch", 12.0),
//!     CategoryCount::new("dent", 5.0),
//!     CategoryCount::new("stain", 3.0),
//! ];
//! let analysis = analyze(&AnalysisInput::Categories(defects), AnalysisConfig::default());
//!
//! assert_eq!(analysis.rows[0].percentage, 60.0);
//! assert_eq!(analysis.rows[2].cumulative_percentage, 100.0);
//! ```

pub mod aggregator;
pub mod cache;
pub mod config;
pub mod input;
pub mod output;

pub use aggregator::HistogramAggregator;
pub use cache::{CachePolicy, CacheStats, CachedAggregator};
pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use input::AnalysisInput;
pub use output::{HistogramAnalysis, StatisticsSummary, TableRow};

/// Run one analysis pass with the given configuration
pub fn analyze(input: &AnalysisInput, config: AnalysisConfig) -> HistogramAnalysis {
    HistogramAggregator::new(config).analyze(input)
}
