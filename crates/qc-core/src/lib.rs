//! Core types for the quality-control statistics engine
//!
//! This crate holds what every other qc-stats crate shares:
//!
//! - [`error`] - the workspace error type and `Result` alias
//! - [`dataset`] - preparation of raw measurements and category counts
//! - [`utils`] - slice helpers (sorting, mean, sample variance, nearest-rank
//!   quantiles, rounding)
//!
//! # Example
//!
//! ```rust
//! use qc_core::dataset::prepare;
//! use qc_core::utils::{mean, std_dev};
//!
//! let prepared = prepare(&[9.8, 10.1, f64::NAN, 10.0, 10.3]);
//! assert_eq!(prepared.report.dropped, 1);
//!
//! let data = prepared.dataset;
//! println!("mean={:.3} sd={:.3}", mean(&data), std_dev(&data));
//! ```

pub mod dataset;
pub mod error;
pub mod utils;

pub use dataset::{prepare, prepare_categories, CategoryCount, Dataset, PreparationReport, Prepared};
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
