//! Axis bounds and sampled trendline curves for plotting.

use crate::core::SampleSet;
use crate::solvers::{FittedTrendline, TrendlineModel};

/// Number of intervals used to sample curved trendlines.
pub const CURVE_STEPS: usize = 100;

/// Fraction of the x range added as padding on every side.
const PADDING_FRACTION: f64 = 0.05;

/// Plot window around a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl AxisBounds {
    /// Data extent padded by 5% of the x range (5% of 1 when the range is zero).
    ///
    /// With `whole_numbers`, lower bounds are floored and upper bounds ceiled.
    pub fn from_samples(samples: &SampleSet, whole_numbers: bool) -> Self {
        let (min_x, max_x) = extent(samples.x().iter().copied());
        let (min_y, max_y) = extent(samples.y().iter().copied());

        let range = max_x - min_x;
        let padding = PADDING_FRACTION * if range == 0.0 { 1.0 } else { range };

        let bounds = Self {
            min_x: min_x - padding,
            max_x: max_x + padding,
            min_y: min_y - padding,
            max_y: max_y + padding,
        };

        if whole_numbers {
            Self {
                min_x: bounds.min_x.floor(),
                max_x: bounds.max_x.ceil(),
                min_y: bounds.min_y.floor(),
                max_y: bounds.max_y.ceil(),
            }
        } else {
            bounds
        }
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Points tracing `model` across the x axis of `bounds`.
///
/// A line needs only its two end points; curves are sampled at
/// [`CURVE_STEPS`] + 1 evenly spaced x values. Points where the model is
/// undefined (a power law at x ≤ 0, or any non-finite y) are skipped.
pub fn trendline_points(model: &TrendlineModel, bounds: &AxisBounds) -> Vec<(f64, f64)> {
    let xs: Vec<f64> = match model {
        TrendlineModel::Linear(_) => vec![bounds.min_x, bounds.max_x],
        _ => {
            let step = (bounds.max_x - bounds.min_x) / CURVE_STEPS as f64;
            (0..=CURVE_STEPS)
                .map(|i| bounds.min_x + step * i as f64)
                .collect()
        }
    };

    xs.into_iter()
        .filter(|&x| !matches!(model, TrendlineModel::Power(_)) || x > 0.0)
        .map(|x| (x, model.predict(x)))
        .filter(|&(_, y)| y.is_finite())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{LinearFit, PowerFit};

    #[test]
    fn test_bounds_padding() {
        let samples = SampleSet::from_slices(&[0.0, 10.0], &[1.0, 3.0]).unwrap();
        let bounds = AxisBounds::from_samples(&samples, false);

        assert!((bounds.min_x + 0.5).abs() < 1e-12);
        assert!((bounds.max_x - 10.5).abs() < 1e-12);
        assert!((bounds.min_y - 0.5).abs() < 1e-12);
        assert!((bounds.max_y - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_whole_numbers() {
        let samples = SampleSet::from_slices(&[0.0, 10.0], &[1.0, 3.0]).unwrap();
        let bounds = AxisBounds::from_samples(&samples, true);

        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.max_x, 11.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 4.0);
    }

    #[test]
    fn test_bounds_single_x() {
        let samples = SampleSet::from_slices(&[2.0], &[2.0]).unwrap();
        let bounds = AxisBounds::from_samples(&samples, false);
        assert!((bounds.max_x - bounds.min_x - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_linear_uses_end_points() {
        let model = TrendlineModel::Linear(LinearFit {
            slope: 2.0,
            intercept: 1.0,
            r_squared: None,
        });
        let bounds = AxisBounds {
            min_x: -1.0,
            max_x: 4.0,
            min_y: 0.0,
            max_y: 10.0,
        };
        assert_eq!(
            trendline_points(&model, &bounds),
            vec![(-1.0, -1.0), (4.0, 9.0)]
        );
    }

    #[test]
    fn test_power_curve_skips_non_positive_x() {
        let model = TrendlineModel::Power(PowerFit {
            a: 1.0,
            b: 0.5,
            r_squared: None,
        });
        let bounds = AxisBounds {
            min_x: -1.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
        };
        let points = trendline_points(&model, &bounds);

        assert!(!points.is_empty());
        assert!(points.len() < CURVE_STEPS + 1);
        assert!(points.iter().all(|&(x, y)| x > 0.0 && y.is_finite()));
    }
}
