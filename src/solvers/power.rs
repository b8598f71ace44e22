//! Power-law trendline by log-log linearization.

use crate::core::{Axis, NumberFormat, RegressionKind, SampleSet};
use crate::descriptive::SampleSums;
use crate::solvers::traits::{FitDiagnostic, FitOutcome, FittedTrendline, TrendlineFitter};
use crate::solvers::TrendlineModel;
use crate::utils::simple_least_squares;

/// Fits `y = a·x^b` by regressing ln(y) on ln(x).
///
/// Every x and every y must be strictly positive. x is checked before y.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerFitter;

/// Fitted `y = a·x^b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerFit {
    pub a: f64,
    pub b: f64,
    /// r² of ln(y) against ln(x).
    pub r_squared: Option<f64>,
}

impl TrendlineFitter for PowerFitter {
    fn kind(&self) -> RegressionKind {
        RegressionKind::Power
    }

    fn fit(&self, samples: &SampleSet, _sums: &SampleSums) -> FitOutcome {
        let kind = RegressionKind::Power;

        for axis in [Axis::X, Axis::Y] {
            if let Some((index, value)) = samples.first_non_positive(axis) {
                return FitOutcome::Unavailable(FitDiagnostic::NonPositiveValue {
                    kind,
                    axis,
                    index,
                    value,
                });
            }
        }

        let transformed = samples.pairs().map(|(x, y)| (x.ln(), y.ln()));
        let Some(line) = simple_least_squares(transformed) else {
            return FitOutcome::Unavailable(FitDiagnostic::ZeroDenominator { kind });
        };

        let a = line.intercept.exp();
        if a == 0.0 || !a.is_finite() || !line.slope.is_finite() {
            return FitOutcome::Unavailable(FitDiagnostic::InvalidCoefficient { kind });
        }

        FitOutcome::Fitted(TrendlineModel::Power(PowerFit {
            a,
            b: line.slope,
            r_squared: line.r_squared,
        }))
    }
}

impl FittedTrendline for PowerFit {
    /// Undefined (NaN) for x ≤ 0 with a non-integral exponent.
    fn predict(&self, x: f64) -> f64 {
        self.a * x.powf(self.b)
    }

    fn solve_for_x(&self, y: f64) -> Option<f64> {
        if self.b == 0.0 || y / self.a <= 0.0 {
            return None;
        }
        Some((y / self.a).powf(1.0 / self.b))
    }

    fn equation(&self, fmt: &NumberFormat) -> String {
        format!("y = {}*x^{}", fmt.number(self.a), fmt.number(self.b))
    }

    /// Omitted when b == 0.
    fn inverse_formula(&self, fmt: &NumberFormat) -> Option<String> {
        if self.b == 0.0 {
            return None;
        }
        Some(format!(
            "x = (y/{})^(1/{})",
            fmt.number(self.a),
            fmt.number(self.b)
        ))
    }

    fn r_squared(&self) -> Option<f64> {
        self.r_squared
    }
}
