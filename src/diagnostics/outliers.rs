//! Spread of the response and threshold-based outlier detection.

use crate::core::SampleSet;
use crate::descriptive::SampleSums;

/// Mean and population standard deviation of y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseSpread {
    pub mean: f64,
    /// Population standard deviation (divisor n).
    pub std_dev: f64,
}

impl ResponseSpread {
    /// Mean as Σy / n, standard deviation as sqrt(Σ(y − mean)² / n).
    pub fn from_samples(samples: &SampleSet, sums: &SampleSums) -> Self {
        let n = sums.n_f64();
        let mean = sums.sum_y / n;
        let squared_deviations: f64 = samples.y().iter().map(|&y| (y - mean).powi(2)).sum();

        Self {
            mean,
            std_dev: (squared_deviations / n).sqrt(),
        }
    }
}

/// A sample flagged as an outlier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outlier {
    /// 0-based position in the input.
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Flag every sample with |y_i − mean| > threshold · std_dev.
///
/// The comparison is strict, so a constant response flags nothing.
/// Indices are returned in ascending order.
pub fn response_outliers(
    samples: &SampleSet,
    spread: &ResponseSpread,
    threshold: f64,
) -> Vec<Outlier> {
    let cutoff = threshold * spread.std_dev;
    samples
        .pairs()
        .enumerate()
        .filter(|&(_, (_, y))| (y - spread.mean).abs() > cutoff)
        .map(|(index, (x, y))| Outlier { index, x, y })
        .collect()
}
