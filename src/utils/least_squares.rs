//! Simple (one predictor) ordinary least squares over transformed pairs.

/// Slope/intercept fit of v on u, with the log-domain r² when defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleFit {
    pub slope: f64,
    pub intercept: f64,
    /// Squared correlation of u and v; `None` when its denominator is not positive.
    pub r_squared: Option<f64>,
}

/// Fit v = intercept + slope·u.
///
/// Returns `None` when n·Σu² − (Σu)² is zero (all u equal).
pub fn simple_least_squares(pairs: impl Iterator<Item = (f64, f64)>) -> Option<SimpleFit> {
    let mut n = 0usize;
    let (mut sum_u, mut sum_v, mut sum_uv, mut sum_u2, mut sum_v2) = (0.0, 0.0, 0.0, 0.0, 0.0);

    for (u, v) in pairs {
        n += 1;
        sum_u += u;
        sum_v += v;
        sum_uv += u * v;
        sum_u2 += u * u;
        sum_v2 += v * v;
    }

    let n = n as f64;
    let term_u = n * sum_u2 - sum_u * sum_u;
    if term_u == 0.0 {
        return None;
    }

    let numerator = n * sum_uv - sum_u * sum_v;
    let slope = numerator / term_u;
    let intercept = (sum_v - slope * sum_u) / n;

    let term_v = n * sum_v2 - sum_v * sum_v;
    let r_denominator = term_u * term_v;
    let r_squared = if r_denominator > 0.0 {
        let r = numerator / r_denominator.sqrt();
        Some(r * r).filter(|r2| r2.is_finite())
    } else {
        None
    };

    Some(SimpleFit {
        slope,
        intercept,
        r_squared,
    })
}
