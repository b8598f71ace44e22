//! Response diagnostics (spread and outlier detection).
//!
//! # Example
//!
//! ```rust,ignore
//! use sigma_trend::diagnostics::{response_outliers, ResponseSpread};
//!
//! let spread = ResponseSpread::from_samples(&samples, &sums);
//! let outliers = response_outliers(&samples, &spread, 2.0);
//! ```

mod outliers;

pub use outliers::{response_outliers, Outlier, ResponseSpread};
