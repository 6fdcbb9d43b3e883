//! Core traits for frequency-table building

use crate::types::FrequencyTable;

/// Trait for building frequency tables from sample data
///
/// Building is total: every input, including an empty or constant sample,
/// yields a usable table.
pub trait HistogramBuilder {
    /// Build a frequency table from the given sample
    fn build(&self, sample: &[f64]) -> FrequencyTable;

    /// Get the target number of bins (if known before seeing the data)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
