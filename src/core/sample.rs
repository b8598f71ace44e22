//! Paired observations.

use crate::solvers::RegressionError;
use faer::Col;

/// Which variable of a sample a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Lowercase label used in diagnostics ("x" / "y").
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated set of (x, y) observations.
///
/// Both columns have the same, non-zero length and every value is finite.
#[derive(Debug, Clone)]
pub struct SampleSet {
    x: Col<f64>,
    y: Col<f64>,
}

impl SampleSet {
    /// Validate and wrap two columns.
    pub fn new(x: &Col<f64>, y: &Col<f64>) -> Result<Self, RegressionError> {
        if x.nrows() == 0 || y.nrows() == 0 {
            return Err(RegressionError::EmptyInput);
        }
        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_len: x.nrows(),
                y_len: y.nrows(),
            });
        }
        check_finite(x, Axis::X)?;
        check_finite(y, Axis::Y)?;

        Ok(Self {
            x: x.clone(),
            y: y.clone(),
        })
    }

    /// Validate and copy two slices.
    pub fn from_slices(x: &[f64], y: &[f64]) -> Result<Self, RegressionError> {
        let x = Col::from_fn(x.len(), |i| x[i]);
        let y = Col::from_fn(y.len(), |i| y[i]);
        Self::new(&x, &y)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    /// Always false; an empty set cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.x.nrows() == 0
    }

    pub fn x(&self) -> &Col<f64> {
        &self.x
    }

    pub fn y(&self) -> &Col<f64> {
        &self.y
    }

    /// Iterate over (x, y) pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Smallest x value.
    pub fn min_x(&self) -> f64 {
        self.x.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest x value.
    pub fn max_x(&self) -> f64 {
        self.x.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// First index whose value on `axis` is not strictly positive.
    pub fn first_non_positive(&self, axis: Axis) -> Option<(usize, f64)> {
        let col = match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        };
        col.iter()
            .copied()
            .enumerate()
            .find(|&(_, v)| v <= 0.0)
    }
}

fn check_finite(col: &Col<f64>, axis: Axis) -> Result<(), RegressionError> {
    match col.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(RegressionError::NonFiniteValue { axis, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_lengths() {
        let x = Col::from_fn(3, |i| i as f64);
        let y = Col::from_fn(2, |i| i as f64);
        let err = SampleSet::new(&x, &y).unwrap_err();
        assert!(matches!(
            err,
            RegressionError::DimensionMismatch { x_len: 3, y_len: 2 }
        ));
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = SampleSet::from_slices(&[], &[]).unwrap_err();
        assert!(matches!(err, RegressionError::EmptyInput));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        let err = SampleSet::from_slices(&[1.0, 2.0], &[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(
            err,
            RegressionError::NonFiniteValue {
                axis: Axis::Y,
                index: 1
            }
        ));
    }

    #[test]
    fn test_min_x_and_pairs() {
        let samples = SampleSet::from_slices(&[3.0, -1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples.min_x(), -1.0);
        assert_eq!(samples.max_x(), 3.0);
        let pairs: Vec<_> = samples.pairs().collect();
        assert_eq!(pairs, vec![(3.0, 1.0), (-1.0, 2.0), (2.0, 3.0)]);
    }

    #[test]
    fn test_first_non_positive() {
        let samples = SampleSet::from_slices(&[1.0, 0.0, -2.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(samples.first_non_positive(Axis::X), Some((1, 0.0)));
        assert_eq!(samples.first_non_positive(Axis::Y), None);
    }
}
