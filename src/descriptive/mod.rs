//! Descriptive statistics: summary sums, the sample table and Pearson correlation.

mod correlation;
mod sums;

pub use correlation::{pearson, Correlation, CorrelationSign, CorrelationStrength};
pub use sums::{table_rows, SampleSums, TableRow};
