//! Trendline solvers, one per [`RegressionKind`].

mod exponential;
mod linear;
mod power;
mod quadratic;
mod traits;

pub use exponential::{ExponentialFit, ExponentialFitter};
pub use linear::{LinearFit, LinearFitter};
pub use power::{PowerFit, PowerFitter};
pub use quadratic::{QuadraticFit, QuadraticFitter, Vertex, VertexKind};
pub use traits::{FitDiagnostic, FitOutcome, FittedTrendline, RegressionError, TrendlineFitter};

use crate::core::{NumberFormat, RegressionKind, SampleSet};
use crate::descriptive::SampleSums;

/// A fitted trendline of any kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrendlineModel {
    Linear(LinearFit),
    Quadratic(QuadraticFit),
    Exponential(ExponentialFit),
    Power(PowerFit),
}

impl TrendlineModel {
    pub fn kind(&self) -> RegressionKind {
        match self {
            TrendlineModel::Linear(_) => RegressionKind::Linear,
            TrendlineModel::Quadratic(_) => RegressionKind::Quadratic,
            TrendlineModel::Exponential(_) => RegressionKind::Exponential,
            TrendlineModel::Power(_) => RegressionKind::Power,
        }
    }

    fn as_fitted(&self) -> &dyn FittedTrendline {
        match self {
            TrendlineModel::Linear(m) => m,
            TrendlineModel::Quadratic(m) => m,
            TrendlineModel::Exponential(m) => m,
            TrendlineModel::Power(m) => m,
        }
    }
}

impl FittedTrendline for TrendlineModel {
    fn predict(&self, x: f64) -> f64 {
        self.as_fitted().predict(x)
    }

    fn solve_for_x(&self, y: f64) -> Option<f64> {
        self.as_fitted().solve_for_x(y)
    }

    fn equation(&self, fmt: &NumberFormat) -> String {
        self.as_fitted().equation(fmt)
    }

    fn inverse_formula(&self, fmt: &NumberFormat) -> Option<String> {
        self.as_fitted().inverse_formula(fmt)
    }

    fn r_squared(&self) -> Option<f64> {
        self.as_fitted().r_squared()
    }
}

/// The fitter implementing `kind`.
pub fn fitter_for(kind: RegressionKind) -> &'static dyn TrendlineFitter {
    match kind {
        RegressionKind::Linear => &LinearFitter,
        RegressionKind::Quadratic => &QuadraticFitter,
        RegressionKind::Exponential => &ExponentialFitter,
        RegressionKind::Power => &PowerFitter,
    }
}

/// Fit the trendline selected by `kind`.
pub fn fit_trendline(kind: RegressionKind, samples: &SampleSet, sums: &SampleSums) -> FitOutcome {
    let outcome = fitter_for(kind).fit(samples, sums);
    match &outcome {
        FitOutcome::Fitted(_) => {
            tracing::debug!(%kind, n = samples.len(), "trendline fitted");
        }
        FitOutcome::Unavailable(diagnostic) => {
            tracing::debug!(%kind, ?diagnostic, "trendline unavailable");
        }
    }
    outcome
}
