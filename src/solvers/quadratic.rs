//! Quadratic trendline via the normal equations and Cramer's rule.

use crate::core::{NumberFormat, RegressionKind, SampleSet};
use crate::descriptive::SampleSums;
use crate::solvers::traits::{FitDiagnostic, FitOutcome, FittedTrendline, TrendlineFitter};
use crate::solvers::TrendlineModel;
use crate::utils::cramer_solve_3x3;
use faer::{Col, Mat};

/// Fits `y = a·x² + b·x + c`.
///
/// The normal equations
///
/// ```text
/// | Σx⁴ Σx³ Σx² | |a|   |Σx²y|
/// | Σx³ Σx² Σx  | |b| = |Σxy |
/// | Σx² Σx  n   | |c|   |Σy  |
/// ```
///
/// are solved in closed form by Cramer's rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticFitter;

/// Whether the vertex is the lowest or highest point of the parabola.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    Minimum,
    Maximum,
}

impl VertexKind {
    pub fn label(self) -> &'static str {
        match self {
            VertexKind::Minimum => "minimum",
            VertexKind::Maximum => "maximum",
        }
    }
}

/// Turning point of a fitted parabola.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub kind: VertexKind,
}

/// Fitted `y = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// `None` when a == 0: the fit is a line and has no turning point.
    pub vertex: Option<Vertex>,
}

/// Assemble the 3×3 normal-equation matrix and right-hand side.
fn normal_equations(samples: &SampleSet, sums: &SampleSums) -> (Mat<f64>, Col<f64>) {
    let mut sum_x3 = 0.0;
    let mut sum_x4 = 0.0;
    let mut sum_x2y = 0.0;
    for (xi, yi) in samples.pairs() {
        let xi2 = xi * xi;
        sum_x3 += xi2 * xi;
        sum_x4 += xi2 * xi2;
        sum_x2y += xi2 * yi;
    }

    let moments = [sum_x4, sum_x3, sums.sum_x2, sums.sum_x, sums.n_f64()];
    // Hankel structure: entry (i, j) is the moment of order 4 − i − j
    let lhs = Mat::from_fn(3, 3, |i, j| moments[i + j]);
    let rhs_values = [sum_x2y, sums.sum_xy, sums.sum_y];
    let rhs = Col::from_fn(3, |i| rhs_values[i]);

    (lhs, rhs)
}

/// Relative size below which the x² term is treated as zero.
const CURVATURE_TOLERANCE: f64 = 1.490_116_119_384_765_6e-8;

impl QuadraticFit {
    /// Build the fit and its vertex.
    ///
    /// The vertex is `None` when `a` is zero or when the x² term is negligible
    /// next to the linear term across `x_range`, i.e.
    /// |a|·range ≤ tolerance·|b|.
    fn from_coefficients(a: f64, b: f64, c: f64, x_range: f64) -> Self {
        let negligible = a == 0.0 || a.abs() * x_range <= CURVATURE_TOLERANCE * b.abs();
        let vertex = if negligible {
            None
        } else {
            let x = -b / (2.0 * a);
            let y = a * x * x + b * x + c;
            let kind = if a < 0.0 {
                VertexKind::Maximum
            } else {
                VertexKind::Minimum
            };
            Some(Vertex { x, y, kind }).filter(|v| v.x.is_finite() && v.y.is_finite())
        };

        Self { a, b, c, vertex }
    }
}

impl TrendlineFitter for QuadraticFitter {
    fn kind(&self) -> RegressionKind {
        RegressionKind::Quadratic
    }

    fn fit(&self, samples: &SampleSet, sums: &SampleSums) -> FitOutcome {
        let (lhs, rhs) = normal_equations(samples, sums);

        let Some(beta) = cramer_solve_3x3(&lhs, &rhs) else {
            return FitOutcome::Unavailable(FitDiagnostic::SingularSystem);
        };

        let (a, b, c) = (beta[0], beta[1], beta[2]);
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return FitOutcome::Unavailable(FitDiagnostic::NonFiniteCoefficients {
                kind: RegressionKind::Quadratic,
            });
        }

        let x_range = samples.max_x() - samples.min_x();
        FitOutcome::Fitted(TrendlineModel::Quadratic(QuadraticFit::from_coefficients(
            a, b, c, x_range,
        )))
    }
}

impl FittedTrendline for QuadraticFit {
    fn predict(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    fn equation(&self, fmt: &NumberFormat) -> String {
        format!(
            "y = {}x² + {}x + {}",
            fmt.number(self.a),
            fmt.number(self.b),
            fmt.number(self.c)
        )
    }
}
