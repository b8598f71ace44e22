//! Straight-line trendline.

use crate::core::{NumberFormat, RegressionKind, SampleSet};
use crate::descriptive::SampleSums;
use crate::solvers::traits::{FitDiagnostic, FitOutcome, FittedTrendline, TrendlineFitter};
use crate::solvers::TrendlineModel;

/// Least-squares line fitter, computed directly from the summary sums.
///
/// ```text
/// slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
/// intercept = (Σy − slope·Σx) / n
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearFitter;

/// Fitted `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Squared Pearson correlation, when its denominator is positive.
    pub r_squared: Option<f64>,
}

impl TrendlineFitter for LinearFitter {
    fn kind(&self) -> RegressionKind {
        RegressionKind::Linear
    }

    fn fit(&self, _samples: &SampleSet, sums: &SampleSums) -> FitOutcome {
        let denominator = sums.x_spread_term();
        if denominator == 0.0 {
            return FitOutcome::Unavailable(FitDiagnostic::DegenerateSlope);
        }

        let slope = sums.cross_term() / denominator;
        let intercept = (sums.sum_y - slope * sums.sum_x) / sums.n_f64();
        if !slope.is_finite() || !intercept.is_finite() {
            return FitOutcome::Unavailable(FitDiagnostic::NonFiniteCoefficients {
                kind: RegressionKind::Linear,
            });
        }

        let r_denominator = denominator * sums.y_spread_term();
        let r_squared = if r_denominator > 0.0 {
            let r = sums.cross_term() / r_denominator.sqrt();
            Some((r * r).min(1.0)).filter(|r2| r2.is_finite())
        } else {
            None
        };

        FitOutcome::Fitted(TrendlineModel::Linear(LinearFit {
            slope,
            intercept,
            r_squared,
        }))
    }
}

impl FittedTrendline for LinearFit {
    fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    fn solve_for_x(&self, y: f64) -> Option<f64> {
        if self.slope == 0.0 {
            return None;
        }
        Some((y - self.intercept) / self.slope)
    }

    fn equation(&self, fmt: &NumberFormat) -> String {
        format!(
            "y = {}x + {}",
            fmt.number(self.slope),
            fmt.number(self.intercept)
        )
    }

    fn r_squared(&self) -> Option<f64> {
        self.r_squared
    }
}
