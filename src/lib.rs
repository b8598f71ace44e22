//! Descriptive statistics and trendline fitting for paired observations.
//!
//! Given two equal-length numeric sequences, this library computes the summary
//! sums, the Pearson correlation with a qualitative classification, outliers of
//! the response, and a least-squares trendline (linear, quadratic, exponential
//! or power), then renders everything as a fixed-structure text report.
//!
//! Invalid input (empty or mismatched sequences) is rejected up front. A
//! trendline that cannot be fit for the given data (for example an exponential
//! fit with a non-positive y) does not fail the call: the report still carries
//! every statistics section and ends with a note explaining the problem.
//!
//! # Example
//!
//! ```rust,ignore
//! use sigma_trend::prelude::*;
//!
//! let analysis = TrendAnalyzer::builder()
//!     .kind(RegressionKind::Quadratic)
//!     .rounding(true)
//!     .build()?
//!     .analyze_slices(&[-2.0, -1.0, 0.0, 1.0, 2.0], &[4.0, 1.0, 0.0, 1.0, 4.0])?;
//!
//! // Structured results
//! let r = analysis.statistics().correlation.r();
//!
//! // Rendered report
//! println!("{}", analysis.report());
//! ```

pub mod analyzer;
pub mod core;
pub mod datasets;
pub mod descriptive;
pub mod diagnostics;
pub mod input;
pub mod plot;
pub mod report;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analyzer::{generate_report, TrendAnalysis, TrendAnalyzer, TrendAnalyzerBuilder};
    pub use crate::core::{
        Axis, FormattingMode, NumberFormat, RegressionKind, ReportOptions, ReportOptionsBuilder,
        SampleSet, SampleStatistics,
    };
    pub use crate::descriptive::{Correlation, CorrelationSign, CorrelationStrength, SampleSums};
    pub use crate::diagnostics::{Outlier, ResponseSpread};
    pub use crate::report::{Report, SectionKind};
    pub use crate::solvers::{
        FitDiagnostic, FitOutcome, FittedTrendline, RegressionError, TrendlineFitter,
        TrendlineModel,
    };
}

pub use crate::analyzer::{generate_report, TrendAnalysis, TrendAnalyzer};
pub use crate::core::{FormattingMode, RegressionKind, ReportOptions};
pub use crate::report::Report;
pub use crate::solvers::{FitDiagnostic, FitOutcome, RegressionError, TrendlineModel};
