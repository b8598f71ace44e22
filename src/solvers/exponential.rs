//! Exponential trendline by log-domain linearization.

use crate::core::{Axis, NumberFormat, RegressionKind, SampleSet};
use crate::descriptive::SampleSums;
use crate::solvers::traits::{FitDiagnostic, FitOutcome, FittedTrendline, TrendlineFitter};
use crate::solvers::TrendlineModel;
use crate::utils::simple_least_squares;

/// Fits `y = a·e^(b·(x − minX))`.
///
/// ln(y) is regressed on x shifted by its minimum, so `a` is the fitted
/// value at the smallest observed x.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialFitter;

/// Fitted `y = a·e^(b·(x − x_shift))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFit {
    pub a: f64,
    pub b: f64,
    /// Minimum x of the fitted samples.
    pub x_shift: f64,
    /// r² of ln(y) against shifted x.
    pub r_squared: Option<f64>,
}

impl TrendlineFitter for ExponentialFitter {
    fn kind(&self) -> RegressionKind {
        RegressionKind::Exponential
    }

    fn fit(&self, samples: &SampleSet, _sums: &SampleSums) -> FitOutcome {
        let kind = RegressionKind::Exponential;

        if let Some((index, value)) = samples.first_non_positive(Axis::Y) {
            return FitOutcome::Unavailable(FitDiagnostic::NonPositiveValue {
                kind,
                axis: Axis::Y,
                index,
                value,
            });
        }

        let x_shift = samples.min_x();
        let transformed = samples.pairs().map(|(x, y)| (x - x_shift, y.ln()));
        let Some(line) = simple_least_squares(transformed) else {
            return FitOutcome::Unavailable(FitDiagnostic::ZeroDenominator { kind });
        };

        let a = line.intercept.exp();
        if a == 0.0 || !a.is_finite() || !line.slope.is_finite() {
            return FitOutcome::Unavailable(FitDiagnostic::InvalidCoefficient { kind });
        }

        FitOutcome::Fitted(TrendlineModel::Exponential(ExponentialFit {
            a,
            b: line.slope,
            x_shift,
            r_squared: line.r_squared,
        }))
    }
}

impl FittedTrendline for ExponentialFit {
    fn predict(&self, x: f64) -> f64 {
        self.a * (self.b * (x - self.x_shift)).exp()
    }

    fn solve_for_x(&self, y: f64) -> Option<f64> {
        if self.b == 0.0 || y / self.a <= 0.0 {
            return None;
        }
        Some(self.x_shift + (y / self.a).ln() / self.b)
    }

    fn equation(&self, fmt: &NumberFormat) -> String {
        format!(
            "y = {}*e^({}*(x-{}))",
            fmt.number(self.a),
            fmt.number(self.b),
            fmt.number(self.x_shift)
        )
    }

    fn inverse_formula(&self, fmt: &NumberFormat) -> Option<String> {
        Some(format!(
            "x = {} + ln(y/{})/{}",
            fmt.number(self.x_shift),
            fmt.number(self.a),
            fmt.number(self.b)
        ))
    }

    fn r_squared(&self) -> Option<f64> {
        self.r_squared
    }
}
