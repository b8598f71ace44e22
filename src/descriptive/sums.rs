//! Summary sums and the per-sample table.

use crate::core::SampleSet;

/// The six summary sums of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSums {
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_x2: f64,
    pub sum_y2: f64,
    pub sum_xy: f64,
}

impl SampleSums {
    /// Accumulate the sums in a single pass.
    pub fn from_samples(samples: &SampleSet) -> Self {
        let mut sums = Self {
            n: samples.len(),
            sum_x: 0.0,
            sum_y: 0.0,
            sum_x2: 0.0,
            sum_y2: 0.0,
            sum_xy: 0.0,
        };

        for (xi, yi) in samples.pairs() {
            sums.sum_x += xi;
            sums.sum_y += yi;
            sums.sum_x2 += xi * xi;
            sums.sum_y2 += yi * yi;
            sums.sum_xy += xi * yi;
        }

        sums
    }

    /// n as a float, for use in the normal equations.
    pub fn n_f64(&self) -> f64 {
        self.n as f64
    }

    /// n·Σxy − Σx·Σy, the shared numerator of r and the slope.
    pub fn cross_term(&self) -> f64 {
        self.n_f64() * self.sum_xy - self.sum_x * self.sum_y
    }

    /// n·Σx² − (Σx)².
    pub fn x_spread_term(&self) -> f64 {
        self.n_f64() * self.sum_x2 - self.sum_x * self.sum_x
    }

    /// n·Σy² − (Σy)².
    pub fn y_spread_term(&self) -> f64 {
        self.n_f64() * self.sum_y2 - self.sum_y * self.sum_y
    }
}

/// One row of the sample table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    /// 1-based display index.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub x2: f64,
    pub y2: f64,
    pub xy: f64,
}

/// Build one table row per sample, in input order.
pub fn table_rows(samples: &SampleSet) -> Vec<TableRow> {
    samples
        .pairs()
        .enumerate()
        .map(|(i, (x, y))| TableRow {
            index: i + 1,
            x,
            y,
            x2: x * x,
            y2: y * y,
            xy: x * y,
        })
        .collect()
}
