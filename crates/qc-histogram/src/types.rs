//! Core types for frequency-table representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single class of a frequency table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Lower edge of the bin (inclusive)
    pub lower: f64,
    /// Upper edge of the bin (exclusive, except for the last bin)
    pub upper: f64,
    /// Center of the interval, the representative value for grouped statistics
    pub midpoint: f64,
    /// Number of samples in this bin
    pub count: usize,
}

impl Bin {
    /// Create a new bin; the midpoint is derived from the edges
    pub fn new(lower: f64, upper: f64, count: usize) -> Self {
        Self {
            lower,
            upper,
            midpoint: (lower + upper) / 2.0,
            count,
        }
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value falls within this bin's half-open interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value < self.upper
    }

    /// Get the relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, midpoint={:.3}",
            self.lower, self.upper, self.count, self.midpoint
        )
    }
}

/// An ordered, contiguous partition of `[min, max]` into equal-width bins
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// The bins that make up the table
    bins: Vec<Bin>,
    /// Total number of samples
    total_count: usize,
    /// Minimum value in the data
    min: f64,
    /// Maximum value in the data
    max: f64,
}

impl FrequencyTable {
    /// Create a new frequency table
    pub fn new(bins: Vec<Bin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    /// The table produced for an empty dataset
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the bins
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of samples
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the minimum sample value
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the maximum sample value
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the range of the data
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // Last bin is closed on the right
        if let Some(last) = self.bins.last() {
            if value == last.upper {
                return Some(self.bins.len() - 1);
            }
        }

        self.bins.iter().position(|bin| bin.contains(value))
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get frequencies as a vector
    pub fn frequencies(&self) -> Vec<f64> {
        self.bins
            .iter()
            .map(|bin| bin.frequency(self.total_count))
            .collect()
    }

    /// Get bin midpoints as a vector
    pub fn midpoints(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.midpoint).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.lower).collect();
        if let Some(last) = self.bins.last() {
            edges.push(last.upper);
        }
        edges
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FrequencyTable({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.min,
            self.max
        )
    }
}
