//! Core types: samples, options, number formatting and the statistics result.

mod format;
mod options;
mod result;
mod sample;

pub use format::{correlation_value, NumberFormat, NON_FINITE_TEXT};
pub use options::{
    FormattingMode, OptionsError, RegressionKind, ReportOptions, ReportOptionsBuilder,
};
pub use result::SampleStatistics;
pub use sample::{Axis, SampleSet};
