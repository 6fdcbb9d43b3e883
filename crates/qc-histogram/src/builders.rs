//! Frequency-table building strategies

use crate::traits::HistogramBuilder;
use crate::types::{Bin, FrequencyTable};
use num_traits::ToPrimitive;
use qc_core::utils::{min_max, nearest_rank, sorted};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Upper bound on the number of bins any builder or rule produces
///
/// Freedman-Diaconis on a heavy-tailed sample, or a careless configuration,
/// can ask for an arbitrarily large count; it is clamped to this value.
pub const MAX_BINS: usize = 10_000;

/// Clamp a requested bin count to `1..=MAX_BINS`
fn clamp_bins(bins: usize) -> usize {
    if bins > MAX_BINS {
        warn!(requested = bins, max = MAX_BINS, "bin count clamped");
    }
    bins.clamp(1, MAX_BINS)
}

/// Fixed-width frequency-table builder
///
/// Partitions `[min, max]` into `num_bins` equal-width classes. Every class
/// is half-open except the last, which also admits `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width builder; the bin count is clamped to
    /// `1..=MAX_BINS`
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: clamp_bins(num_bins),
        }
    }

    /// Number of bins this builder produces
    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// Index of the bin a value belongs to
    ///
    /// `floor((v - min) / width)` clamped to the valid range, with `max`
    /// itself forced into the last bin to guard against floating-point
    /// overshoot.
    fn bin_index(&self, value: f64, min: f64, max: f64, width: f64) -> usize {
        let last = self.num_bins - 1;
        if value == max {
            return last;
        }
        let raw = ((value - min) / width).floor();
        raw.to_usize().unwrap_or(0).min(last)
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> FrequencyTable {
        let Some((min, max)) = min_max(sample) else {
            return FrequencyTable::empty();
        };

        // A constant sample still gets a visible, non-zero-width class
        let span = if max - min == 0.0 { 1.0 } else { max - min };
        let width = span / self.num_bins as f64;

        let mut counts = vec![0usize; self.num_bins];
        for &value in sample {
            counts[self.bin_index(value, min, max, width)] += 1;
        }

        let last = self.num_bins - 1;
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let lower = min + i as f64 * width;
                let upper = if i == last && max > min {
                    max // Ensure last bin ends exactly at max
                } else {
                    min + (i + 1) as f64 * width
                };
                Bin::new(lower, upper, count)
            })
            .collect();

        FrequencyTable::new(bins, sample.len(), min, max)
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Sturges' rule: `ceil(1 + log2(n))`, never less than one
///
/// # Examples
///
/// ```rust
/// use qc_histogram::suggest_bins_sturges;
///
/// assert_eq!(suggest_bins_sturges(16), 5);
/// assert_eq!(suggest_bins_sturges(0), 1);
/// ```
pub fn suggest_bins_sturges(n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    (1.0 + (n as f64).log2())
        .ceil()
        .to_usize()
        .unwrap_or(1)
        .max(1)
}

/// Freedman-Diaconis rule: `ceil((max - min) / h)` with `h = 2 * IQR / cbrt(n)`
///
/// Quartiles are taken by nearest rank (`floor(n * 0.25)`, `floor(n * 0.75)`
/// on the sorted data). Falls back to Sturges when fewer than two samples
/// are given or the bin width collapses to zero. The result never exceeds
/// [`MAX_BINS`].
///
/// ```rust
/// use qc_histogram::{suggest_bins_freedman_diaconis, MAX_BINS};
///
/// assert_eq!(suggest_bins_freedman_diaconis(&[0.0, 1.0, 2.0, 3.0, 1e15]), MAX_BINS);
/// ```
pub fn suggest_bins_freedman_diaconis(sample: &[f64]) -> usize {
    let n = sample.len();
    if n < 2 {
        return suggest_bins_sturges(n);
    }

    let sorted = sorted(sample);
    let (Some(q1), Some(q3)) = (nearest_rank(&sorted, 0.25), nearest_rank(&sorted, 0.75)) else {
        return suggest_bins_sturges(n);
    };
    let bin_width = 2.0 * (q3 - q1) / (n as f64).cbrt();
    if bin_width <= 0.0 {
        return suggest_bins_sturges(n);
    }

    let range = sorted[n - 1] - sorted[0];
    clamp_bins((range / bin_width).ceil().to_usize().unwrap_or(usize::MAX))
}

/// How the number of bins is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "rule", content = "bins", rename_all = "snake_case")]
pub enum BinCountRule {
    /// A caller-supplied bin count, clamped to `1..=MAX_BINS`
    Fixed(#[serde(deserialize_with = "clamped_bin_count")] usize),
    /// Sturges' rule from the sample size
    #[default]
    Sturges,
    /// Freedman-Diaconis rule from the sample spread
    FreedmanDiaconis,
}

/// Accept any numeric bin count from configuration, clamping it to
/// `1..=MAX_BINS`
fn clamped_bin_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let bins = f64::deserialize(deserializer)?;
    Ok(clamp_bins(bins.max(1.0).to_usize().unwrap_or(usize::MAX)))
}

impl BinCountRule {
    /// Resolve the rule to a concrete bin count for the given sample
    pub fn resolve(&self, sample: &[f64]) -> usize {
        let bins = match *self {
            Self::Fixed(bins) => clamp_bins(bins),
            Self::Sturges => suggest_bins_sturges(sample.len()),
            Self::FreedmanDiaconis => suggest_bins_freedman_diaconis(sample),
        };
        debug!(rule = ?self, n = sample.len(), bins, "resolved bin count");
        bins
    }

    /// Get the name of this rule
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fixed(_) => "fixed",
            Self::Sturges => "sturges",
            Self::FreedmanDiaconis => "freedman_diaconis",
        }
    }
}

impl HistogramBuilder for BinCountRule {
    fn build(&self, sample: &[f64]) -> FrequencyTable {
        FixedWidthBuilder::new(self.resolve(sample)).build(sample)
    }

    fn target_bins(&self) -> Option<usize> {
        match *self {
            Self::Fixed(bins) => Some(clamp_bins(bins)),
            _ => None,
        }
    }
}
