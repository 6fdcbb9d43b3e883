//! Analysis configuration
//!
//! The configuration is plain data so a caller can persist it next to the
//! measurements and replay an analysis exactly.

use qc_capability::SpecLimits;
use qc_core::{Error, Result};
use qc_histogram::{BinCountRule, MAX_BINS};
use qc_shape::{DEFAULT_INCREMENTS, MAX_INCREMENTS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one analysis pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How the number of bins is chosen
    pub bin_rule: BinCountRule,
    /// Optional lower/upper specification limits
    pub spec_limits: SpecLimits,
    /// Decimals kept in row percentages
    pub percentage_decimals: u32,
    /// Decimals used in bin labels
    pub label_precision: usize,
    /// Equal increments between min and max of the normal-curve overlay
    pub curve_increments: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bin_rule: BinCountRule::default(),
            spec_limits: SpecLimits::none(),
            percentage_decimals: 1,
            label_precision: 2,
            curve_increments: DEFAULT_INCREMENTS,
        }
    }
}

impl AnalysisConfig {
    /// Start building a configuration from the defaults
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Shorthand for a fixed bin count and optional limits
    pub fn with_bins(bins: usize, spec_limits: SpecLimits) -> Self {
        Self::builder().bin_count(bins).spec_limits(spec_limits).build()
    }

    /// Parse a configuration from JSON
    ///
    /// Missing fields take their default values. A fixed bin count is
    /// clamped to `1..=MAX_BINS` and the curve increments to
    /// `1..=MAX_INCREMENTS`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when the document is malformed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qc_analysis::AnalysisConfig;
    /// use qc_histogram::BinCountRule;
    ///
    /// let config = AnalysisConfig::from_json(
    ///     r#"{"bin_rule": {"rule": "fixed", "bins": 7}, "spec_limits": {"lsl": 9.5, "usl": 10.5}}"#,
    /// )?;
    /// assert_eq!(config.bin_rule, BinCountRule::Fixed(7));
    /// assert_eq!(config.percentage_decimals, 1);
    /// # Ok::<(), qc_core::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// Read and parse a JSON configuration file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Json`] when it is malformed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the configuration to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn normalized(mut self) -> Self {
        if let BinCountRule::Fixed(bins) = self.bin_rule {
            self.bin_rule = BinCountRule::Fixed(bins.clamp(1, MAX_BINS));
        }
        self.curve_increments = self.curve_increments.clamp(1, MAX_INCREMENTS);
        self
    }
}

/// Builder for [`AnalysisConfig`]
///
/// [`build`](Self::build) is lenient and clamps out-of-range values;
/// [`try_build`](Self::try_build) rejects them instead.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Use a fixed number of bins
    pub fn bin_count(mut self, bins: usize) -> Self {
        self.config.bin_rule = BinCountRule::Fixed(bins);
        self
    }

    /// Use a bin-count rule
    pub fn bin_rule(mut self, rule: BinCountRule) -> Self {
        self.config.bin_rule = rule;
        self
    }

    /// Set both specification limits
    pub fn spec_limits(mut self, limits: SpecLimits) -> Self {
        self.config.spec_limits = limits;
        self
    }

    /// Set a two-sided specification
    pub fn limits(self, lsl: f64, usl: f64) -> Self {
        self.spec_limits(SpecLimits::two_sided(lsl, usl))
    }

    pub fn percentage_decimals(mut self, decimals: u32) -> Self {
        self.config.percentage_decimals = decimals;
        self
    }

    pub fn label_precision(mut self, precision: usize) -> Self {
        self.config.label_precision = precision;
        self
    }

    /// Set the number of curve increments (points minus one)
    pub fn curve_increments(mut self, increments: usize) -> Self {
        self.config.curve_increments = increments;
        self
    }

    /// Build the configuration, clamping the bin count and increment count
    /// into their valid ranges
    pub fn build(self) -> AnalysisConfig {
        self.config.normalized()
    }

    /// Build the configuration, rejecting values that would be clamped
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] for a zero fixed bin count or
    ///   specification limits with `USL <= LSL`
    /// - [`Error::Config`] for more than [`MAX_BINS`] bins or curve
    ///   increments outside `1..=MAX_INCREMENTS`
    /// - [`Error::InvalidInput`] for a non-finite specification limit
    pub fn try_build(self) -> Result<AnalysisConfig> {
        match self.config.bin_rule {
            BinCountRule::Fixed(0) => return Err(Error::invalid_bin_count(0)),
            BinCountRule::Fixed(bins) if bins > MAX_BINS => {
                return Err(Error::Config(format!(
                    "Bin count {bins} exceeds the maximum of {MAX_BINS}"
                )));
            }
            _ => {}
        }
        if !(1..=MAX_INCREMENTS).contains(&self.config.curve_increments) {
            return Err(Error::Config(format!(
                "Curve increments must be between 1 and {MAX_INCREMENTS}, got {}",
                self.config.curve_increments
            )));
        }
        self.config.spec_limits.validated()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.bin_rule, BinCountRule::Sturges);
        assert_eq!(config.spec_limits, SpecLimits::none());
        assert_eq!(config.percentage_decimals, 1);
        assert_eq!(config.label_precision, 2);
        assert_eq!(config.curve_increments, 50);
    }

    #[test]
    fn test_builder_clamps() {
        let config = AnalysisConfig::builder()
            .bin_count(0)
            .curve_increments(0)
            .build();
        assert_eq!(config.bin_rule, BinCountRule::Fixed(1));
        assert_eq!(config.curve_increments, 1);

        let config = AnalysisConfig::builder()
            .bin_count(usize::MAX)
            .curve_increments(usize::MAX)
            .build();
        assert_eq!(config.bin_rule, BinCountRule::Fixed(MAX_BINS));
        assert_eq!(config.curve_increments, MAX_INCREMENTS);
    }

    #[test]
    fn test_try_build_rejects() {
        assert!(matches!(
            AnalysisConfig::builder().bin_count(0).try_build(),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            AnalysisConfig::builder().limits(13.0, 7.0).try_build(),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            AnalysisConfig::builder().curve_increments(0).try_build(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            AnalysisConfig::builder().bin_count(MAX_BINS + 1).try_build(),
            Err(Error::Config(_))
        ));

        let config = AnalysisConfig::builder()
            .bin_count(7)
            .limits(7.0, 13.0)
            .try_build()
            .unwrap();
        assert_eq!(config.bin_rule, BinCountRule::Fixed(7));
        assert!(config.spec_limits.is_two_sided());
    }

    #[test]
    fn test_json_round_trip() {
        let config = AnalysisConfig::builder()
            .bin_rule(BinCountRule::FreedmanDiaconis)
            .limits(9.5, 10.5)
            .percentage_decimals(2)
            .build();
        let json = config.to_json().unwrap();
        assert_eq!(AnalysisConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_partial_and_clamped() {
        let config = AnalysisConfig::from_json(r#"{"bin_rule": {"rule": "fixed", "bins": -4}}"#)
            .unwrap();
        assert_eq!(config.bin_rule, BinCountRule::Fixed(1));
        assert_eq!(config.percentage_decimals, 1);

        let config = AnalysisConfig::from_json("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());

        let config = AnalysisConfig::from_json(
            r#"{"bin_rule": {"rule": "fixed", "bins": 1e15}, "curve_increments": 1000000000000}"#,
        )
        .unwrap();
        assert_eq!(config.bin_rule, BinCountRule::Fixed(MAX_BINS));
        assert_eq!(config.curve_increments, MAX_INCREMENTS);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            AnalysisConfig::from_json("{not json"),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_json_file("/nonexistent/qc-config.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_json_file() {
        let path = std::env::temp_dir().join(format!("qc-analysis-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"bin_rule": {"rule": "sturges"}, "label_precision": 1}"#).unwrap();
        let config = AnalysisConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.bin_rule, BinCountRule::Sturges);
        assert_eq!(config.label_precision, 1);
    }
}
