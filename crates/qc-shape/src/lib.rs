//! Histogram shape analysis
//!
//! Two chart-facing components live here:
//!
//! - [`classify`]: a heuristic label for the overall histogram shape
//!   (normal, skewed, twin peak, general). It is a reading aid for check
//!   sheets, not a statistical test, and its thresholds are fixed.
//! - [`generate`]: a normal-curve overlay scaled to the tallest bin.
//!
//! # Example
//!
//! ```rust
//! use qc_histogram::fixed_histogram;
//! use qc_shape::{classify, generate, ShapeLabel};
//!
//! let data = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];
//! let table = fixed_histogram(&data, 5);
//!
//! assert_eq!(classify(&table, 3.0, 3.0, 1.2247), ShapeLabel::Normal);
//! assert_eq!(generate(&data, 3.0, 1.2247, &table).len(), 51);
//! ```

pub mod classifier;
pub mod curve;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_data;

pub use classifier::{classify, classify_heights, pearson_skewness, ShapeLabel};
pub use curve::{
    generate, generate_with, CurvePoint, NormalCurve, DEFAULT_INCREMENTS, MAX_INCREMENTS,
};
