//! Histogram and process-capability engine for quality-control check sheets
//!
//! This crate re-exports the workspace members:
//!
//! | Crate | Purpose |
//! |-------|---------|
//! | [`qc_core`] | errors, dataset preparation, slice utilities |
//! | [`qc_histogram`] | equal-width frequency tables and bin-count rules |
//! | [`qc_descriptive`] | raw and grouped statistics |
//! | [`qc_capability`] | Cp/Cpk against specification limits |
//! | [`qc_outlier`] | Z-score and Tukey-fence outlier flags |
//! | [`qc_shape`] | shape classification and normal-curve overlay |
//! | [`qc_analysis`] | the one-pass aggregator and its cache |
//!
//! # Quick start
//!
//! ```rust
//! use qc_stats::prelude::*;
//!
//! let data = vec![9.8, 10.0, 10.1, 10.1, 10.3, 9.9, 10.2, 10.0, 9.7, 10.4];
//! let config = AnalysisConfig::builder()
//!     .bin_rule(BinCountRule::Sturges)
//!     .limits(9.0, 11.0)
//!     .build();
//!
//! let analysis = HistogramAggregator::new(config).analyze(&data.into());
//! assert_eq!(analysis.total_count(), 10.0);
//! println!("{analysis}");
//! ```

pub use qc_analysis;
pub use qc_capability;
pub use qc_core;
pub use qc_descriptive;
pub use qc_histogram;
pub use qc_outlier;
pub use qc_shape;

pub use qc_core::{Error, Result};

/// Commonly used types and functions
pub mod prelude {
    pub use qc_analysis::{
        analyze, AnalysisConfig, AnalysisInput, CachedAggregator, HistogramAggregator,
        HistogramAnalysis, TableRow,
    };
    pub use qc_capability::{compute_capability, CapabilityResult, SpecLimits};
    pub use qc_core::{prepare, CategoryCount, Dataset};
    pub use qc_descriptive::{compute_grouped, compute_raw, GroupedStatistics, RawStatistics};
    pub use qc_histogram::{
        fixed_histogram, suggest_bins_freedman_diaconis, suggest_bins_sturges, Bin,
        BinCountRule, FixedWidthBuilder, FrequencyTable, HistogramBuilder, TableOps,
    };
    pub use qc_outlier::{detect, OutlierReport};
    pub use qc_shape::{classify, generate, CurvePoint, ShapeLabel};
}
