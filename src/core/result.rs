//! Statistics computed for every sample set, regardless of trendline kind.

use super::sample::SampleSet;
use crate::descriptive::{pearson, table_rows, Correlation, SampleSums, TableRow};
use crate::diagnostics::{response_outliers, Outlier, ResponseSpread};

/// Everything the statistics pass produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStatistics {
    /// One row per sample, in input order.
    pub rows: Vec<TableRow>,
    pub sums: SampleSums,
    pub correlation: Correlation,
    pub spread: ResponseSpread,
    /// Outliers in ascending index order.
    pub outliers: Vec<Outlier>,
}

impl SampleStatistics {
    /// Run the statistics pass.
    ///
    /// # Arguments
    /// * `samples` - The validated observations
    /// * `outlier_threshold` - Cutoff in population standard deviations of y
    pub fn compute(samples: &SampleSet, outlier_threshold: f64) -> Self {
        let sums = SampleSums::from_samples(samples);
        let spread = ResponseSpread::from_samples(samples, &sums);

        Self {
            rows: table_rows(samples),
            sums,
            correlation: pearson(&sums),
            spread,
            outliers: response_outliers(samples, &spread, outlier_threshold),
        }
    }

    /// Number of observations.
    pub fn n(&self) -> usize {
        self.sums.n
    }

    /// Returns true if any outliers were flagged.
    pub fn has_outliers(&self) -> bool {
        !self.outliers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute() {
        let samples = SampleSet::from_slices(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        let stats = SampleStatistics::compute(&samples, 2.0);

        assert_eq!(stats.n(), 3);
        assert_eq!(stats.rows.len(), 3);
        assert_eq!(stats.correlation, Correlation::Defined(1.0));
        assert!((stats.spread.mean - 4.0).abs() < 1e-12);
        assert!(!stats.has_outliers());
    }
}
