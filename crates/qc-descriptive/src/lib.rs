//! Descriptive statistics for quality-control histograms
//!
//! Two parallel models are provided and kept in separate types:
//!
//! | Model | Source | Type |
//! |-------|--------|------|
//! | Raw | the samples themselves | [`RawStatistics`] |
//! | Grouped | bin midpoints weighted by counts | [`GroupedStatistics`] |
//!
//! The grouped model is the classic check-sheet computation and only
//! approximates the raw one.
//!
//! # Example
//!
//! ```rust
//! use qc_descriptive::{compute_grouped, compute_raw};
//! use qc_histogram::fixed_histogram;
//!
//! let data = [9.8, 10.0, 10.1, 10.1, 10.3, 9.9];
//! let raw = compute_raw(&data);
//! let grouped = compute_grouped(&fixed_histogram(&data, 3));
//!
//! println!("raw mean {:.3}, grouped mean {:.3}", raw.mean, grouped.mean);
//! ```

pub mod grouped;
pub mod raw;

pub use grouped::{compute_grouped, GroupedStatistics};
pub use raw::{compute_raw, median, mode, RawStatistics};
