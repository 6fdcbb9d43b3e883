//! Process capability indices
//!
//! Capability indices relate the width and position of the specification
//! window to the spread of the process:
//!
//! - `Cp  = (USL - LSL) / (6 * sigma)`
//! - `Cpu = (USL - mean) / (3 * sigma)`
//! - `Cpl = (mean - LSL) / (3 * sigma)`
//! - `Cpk = min(Cpu, Cpl)`
//!
//! Missing limits are a normal configuration state, not an error: the
//! indices are simply absent. Negative values are kept, since a negative
//! Cpk means the process mean lies outside the specification window.
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.,
//!   Chapter 8.
//!
//! # Example
//!
//! ```rust
//! use qc_capability::{compute_capability, SpecLimits};
//!
//! let limits = SpecLimits::two_sided(7.0, 13.0);
//! let result = compute_capability(10.0, 1.0, &limits);
//! assert_eq!(result.cp, Some(1.0));
//! assert_eq!(result.cpk, Some(1.0));
//! ```

use qc_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower and upper specification limits, each optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecLimits {
    pub lsl: Option<f64>,
    pub usl: Option<f64>,
}

impl SpecLimits {
    /// Create limits from optional values
    pub fn new(lsl: Option<f64>, usl: Option<f64>) -> Self {
        Self { lsl, usl }
    }

    /// Create a two-sided specification
    pub fn two_sided(lsl: f64, usl: f64) -> Self {
        Self::new(Some(lsl), Some(usl))
    }

    /// No limits configured
    pub fn none() -> Self {
        Self::default()
    }

    /// True when both limits are present
    pub fn is_two_sided(&self) -> bool {
        self.lsl.is_some() && self.usl.is_some()
    }

    /// Strictly validate the limits
    ///
    /// Present limits must be finite and, when both are given, `USL > LSL`.
    /// [`compute_capability`] itself never needs this; it is for callers that
    /// want to reject a bad configuration up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a non-finite limit and
    /// [`Error::InvalidParameter`] for inverted or equal limits.
    pub fn validated(self) -> Result<Self> {
        if self.lsl.is_some_and(|l| !l.is_finite()) {
            return Err(Error::non_finite("LSL"));
        }
        if self.usl.is_some_and(|u| !u.is_finite()) {
            return Err(Error::non_finite("USL"));
        }
        if let (Some(l), Some(u)) = (self.lsl, self.usl) {
            if u <= l {
                return Err(Error::inverted_limits(l, u));
            }
        }
        Ok(self)
    }
}

/// Capability indices; every field is `None` when limits are missing or the
/// standard deviation is zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CapabilityResult {
    pub cp: Option<f64>,
    pub cpk: Option<f64>,
    /// Upper one-sided index, `(USL - mean) / (3 * sigma)`
    pub cpu: Option<f64>,
    /// Lower one-sided index, `(mean - LSL) / (3 * sigma)`
    pub cpl: Option<f64>,
}

impl CapabilityResult {
    /// True when no index could be computed
    pub fn is_undefined(&self) -> bool {
        self.cp.is_none() && self.cpk.is_none()
    }
}

impl fmt::Display for CapabilityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show(v: Option<f64>) -> String {
            v.map_or_else(|| "n/a".to_string(), |x| format!("{x:.3}"))
        }
        write!(f, "Cp={}, Cpk={}", show(self.cp), show(self.cpk))
    }
}

/// Compute Cp/Cpk from the process mean and standard deviation
///
/// Both limits are required; with either missing, or a zero (or non-finite)
/// standard deviation, the result is undefined.
pub fn compute_capability(mean: f64, std_dev: f64, limits: &SpecLimits) -> CapabilityResult {
    let (Some(lsl), Some(usl)) = (limits.lsl, limits.usl) else {
        return CapabilityResult::default();
    };
    if std_dev == 0.0 || !std_dev.is_finite() {
        return CapabilityResult::default();
    }

    let cpu = (usl - mean) / (3.0 * std_dev);
    let cpl = (mean - lsl) / (3.0 * std_dev);
    CapabilityResult {
        cp: Some((usl - lsl) / (6.0 * std_dev)),
        cpk: Some(cpu.min(cpl)),
        cpu: Some(cpu),
        cpl: Some(cpl),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_centered_process() {
        let result = compute_capability(10.0, 1.0, &SpecLimits::two_sided(7.0, 13.0));
        assert_eq!(result.cp, Some(1.0));
        assert_eq!(result.cpu, Some(1.0));
        assert_eq!(result.cpl, Some(1.0));
        assert_eq!(result.cpk, Some(1.0));
        assert_eq!(result.to_string(), "Cp=1.000, Cpk=1.000");
    }

    #[test]
    fn test_off_center_process() {
        // Mean shifted toward USL
        let result = compute_capability(12.0, 0.5, &SpecLimits::two_sided(7.0, 13.0));
        assert_relative_eq!(result.cp.unwrap(), 2.0);
        assert_relative_eq!(result.cpu.unwrap(), 2.0 / 3.0);
        assert_relative_eq!(result.cpl.unwrap(), 10.0 / 3.0);
        assert_relative_eq!(result.cpk.unwrap(), 2.0 / 3.0);
    }

    #[test]
    fn test_negative_cpk_preserved() {
        // Mean above USL
        let result = compute_capability(14.0, 1.0, &SpecLimits::two_sided(7.0, 13.0));
        assert_relative_eq!(result.cpk.unwrap(), -1.0 / 3.0);
        assert!(result.cpk.unwrap() < 0.0);
    }

    #[test]
    fn test_missing_limits() {
        let one_sided = SpecLimits::new(None, Some(13.0));
        assert!(compute_capability(10.0, 1.0, &one_sided).is_undefined());
        assert!(compute_capability(10.0, 1.0, &SpecLimits::none()).is_undefined());
        assert_eq!(
            compute_capability(10.0, 1.0, &SpecLimits::none()).to_string(),
            "Cp=n/a, Cpk=n/a"
        );
    }

    #[test]
    fn test_validated() {
        assert!(SpecLimits::two_sided(7.0, 13.0).validated().is_ok());
        assert!(SpecLimits::new(None, Some(1.0)).validated().is_ok());
        assert!(matches!(
            SpecLimits::two_sided(13.0, 7.0).validated(),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            SpecLimits::new(Some(f64::NAN), Some(7.0)).validated(),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_limits_serde() {
        let limits: SpecLimits = serde_json::from_str(r#"{"lsl": 7.0, "usl": null}"#).unwrap();
        assert_eq!(limits, SpecLimits::new(Some(7.0), None));
    }

    proptest! {
        // Property: zero spread never yields an index
        #[test]
        fn prop_zero_std_dev_is_undefined(
            mean in -1e6f64..1e6,
            lsl in -1e6f64..1e6,
            usl in -1e6f64..1e6
        ) {
            let result = compute_capability(mean, 0.0, &SpecLimits::two_sided(lsl, usl));
            prop_assert_eq!(result, CapabilityResult::default());
        }

        // Property: Cpk never exceeds Cp
        #[test]
        fn prop_cpk_at_most_cp(
            mean in -100f64..100.0,
            sd in 0.01f64..50.0,
            lsl in -100f64..0.0,
            width in 0.1f64..200.0
        ) {
            let result = compute_capability(mean, sd, &SpecLimits::two_sided(lsl, lsl + width));
            prop_assert!(result.cpk.unwrap() <= result.cp.unwrap() + 1e-9);
        }
    }
}
