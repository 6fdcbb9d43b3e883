//! Equal-width frequency tables for quality-control histograms
//!
//! This crate turns a numeric sample into a [`FrequencyTable`]: `k`
//! contiguous, equal-width classes spanning `[min, max]`, where every class
//! is half-open except the last, which also admits the maximum. It also
//! provides the usual heuristics for choosing `k`.
//!
//! # Key Features
//!
//! - **Total**: empty and constant samples still produce a usable table
//! - **Bin-count rules**: fixed, Sturges, Freedman-Diaconis (nearest-rank IQR)
//! - **Presentation helpers**: percentages, cumulative percentages, labels
//!
//! # Examples
//!
//! ## Basic Usage with Fixed-Width Bins
//!
//! ```rust
//! use qc_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let table = FixedWidthBuilder::new(3).build(&data);
//!
//! assert_eq!(table.counts(), vec![3, 3, 4]); // 10 lands in the last bin
//! for bin in table.bins() {
//!     println!("  [{:.1}, {:.1}): count={}", bin.lower, bin.upper, bin.count);
//! }
//! ```
//!
//! ## Choosing the Bin Count
//!
//! ```rust
//! use qc_histogram::{BinCountRule, HistogramBuilder};
//!
//! let data: Vec<f64> = (0..16).map(|x| x as f64).collect();
//! assert_eq!(BinCountRule::Sturges.resolve(&data), 5);
//!
//! let table = BinCountRule::FreedmanDiaconis.build(&data);
//! println!("{table}");
//! ```
//!
//! ## Table Operations
//!
//! ```rust
//! use qc_histogram::{fixed_histogram, TableOps};
//!
//! let table = fixed_histogram(&[1.0, 2.0, 2.0, 3.0], 2);
//! assert_eq!(table.percentages(1), vec![25.0, 75.0]);
//! assert_eq!(table.cumulative_percentages(1), vec![25.0, 100.0]);
//! ```

pub mod builders;
pub mod ops;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{
    suggest_bins_freedman_diaconis, suggest_bins_sturges, BinCountRule, FixedWidthBuilder,
    MAX_BINS,
};
pub use ops::TableOps;
pub use traits::HistogramBuilder;
pub use types::{Bin, FrequencyTable};

// Convenience functions
/// Create a frequency table with a fixed number of equal-width bins
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> FrequencyTable {
    FixedWidthBuilder::new(num_bins).build(data)
}

/// Create a frequency table using Sturges' rule for the bin count
///
/// ```rust
/// use qc_histogram::sturges_histogram;
///
/// let data: Vec<f64> = (0..16).map(|x| x as f64).collect();
/// assert_eq!(sturges_histogram(&data).len(), 5);
/// ```
pub fn sturges_histogram(data: &[f64]) -> FrequencyTable {
    BinCountRule::Sturges.build(data)
}
