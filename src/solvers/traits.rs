//! Core traits for trendline fitters.

use crate::core::{Axis, NumberFormat, OptionsError, RegressionKind, SampleSet};
use crate::descriptive::SampleSums;
use thiserror::Error;

use super::TrendlineModel;

/// Errors that reject an input before any computation runs.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("x or y values are empty")]
    EmptyInput,

    #[error("dimension mismatch: x has {x_len} values but y has {y_len}")]
    DimensionMismatch { x_len: usize, y_len: usize },

    #[error("{axis} value at index {index} is not a finite number")]
    NonFiniteValue { axis: Axis, index: usize },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

/// Why a trendline could not be fit.
///
/// These are reported in-band: the statistics sections of the report are still
/// produced and the diagnostic replaces the remainder of the trendline section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitDiagnostic {
    /// n·Σx² − (Σx)² is zero. The linear trendline is silently omitted.
    DegenerateSlope,

    /// The quadratic normal-equation determinant is zero.
    SingularSystem,

    /// A value that must be strictly positive is not.
    NonPositiveValue {
        kind: RegressionKind,
        axis: Axis,
        index: usize,
        value: f64,
    },

    /// The log-domain slope denominator is zero (all x equal).
    ZeroDenominator { kind: RegressionKind },

    /// The recovered coefficient a is zero or not finite.
    InvalidCoefficient { kind: RegressionKind },

    /// The solved coefficients are not finite numbers.
    NonFiniteCoefficients { kind: RegressionKind },
}

impl FitDiagnostic {
    /// Note to print in place of the trendline section, if any.
    pub fn message(&self, fmt: &NumberFormat) -> Option<String> {
        match *self {
            FitDiagnostic::DegenerateSlope => None,
            FitDiagnostic::SingularSystem => Some(
                "Could not calculate quadratic regression (determinant is zero).".to_string(),
            ),
            FitDiagnostic::NonPositiveValue {
                kind,
                axis,
                index,
                value,
            } => Some(format!(
                "Cannot perform {kind} regression: {axis} value at index {index} is not positive ({}).",
                fmt.number(value)
            )),
            FitDiagnostic::ZeroDenominator { kind } => Some(format!(
                "Cannot perform {kind} regression: denominator for b is zero (all X values may be the same)."
            )),
            FitDiagnostic::InvalidCoefficient { kind } => Some(format!(
                "Could not calculate {kind} regression: invalid coefficient a (possibly due to data scale or input values)."
            )),
            FitDiagnostic::NonFiniteCoefficients { kind } => Some(format!(
                "Could not calculate {kind} regression: the coefficients are not finite numbers."
            )),
        }
    }
}

/// Result of running a fitter.
#[derive(Debug, Clone, PartialEq)]
pub enum FitOutcome {
    Fitted(TrendlineModel),
    Unavailable(FitDiagnostic),
}

impl FitOutcome {
    pub fn model(&self) -> Option<&TrendlineModel> {
        match self {
            FitOutcome::Fitted(model) => Some(model),
            FitOutcome::Unavailable(_) => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&FitDiagnostic> {
        match self {
            FitOutcome::Fitted(_) => None,
            FitOutcome::Unavailable(diagnostic) => Some(diagnostic),
        }
    }

    pub fn is_fitted(&self) -> bool {
        matches!(self, FitOutcome::Fitted(_))
    }
}

/// A trendline strategy for one [`RegressionKind`].
pub trait TrendlineFitter {
    /// The kind this fitter implements.
    fn kind(&self) -> RegressionKind;

    /// Fit the trendline.
    ///
    /// # Arguments
    /// * `samples` - The validated observations
    /// * `sums` - Summary sums already accumulated for `samples`
    fn fit(&self, samples: &SampleSet, sums: &SampleSums) -> FitOutcome;
}

/// A fitted trendline.
pub trait FittedTrendline {
    /// Evaluate the trendline at `x`.
    fn predict(&self, x: f64) -> f64;

    /// Invert the trendline, where an inverse formula exists.
    fn solve_for_x(&self, _y: f64) -> Option<f64> {
        None
    }

    /// Equation text, e.g. `y = 2x + 1`.
    fn equation(&self, fmt: &NumberFormat) -> String;

    /// Inverse formula text, e.g. `x = (y/3)^(1/2)`.
    fn inverse_formula(&self, _fmt: &NumberFormat) -> Option<String> {
        None
    }

    /// Goodness of fit, where defined (log-domain for exponential and power).
    fn r_squared(&self) -> Option<f64> {
        None
    }
}
