//! Pearson correlation and its qualitative classification.

use super::sums::SampleSums;

/// Pearson correlation coefficient, or the reason it is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Correlation {
    /// r in [-1, 1].
    Defined(f64),
    /// The denominator (n·Σx² − (Σx)²)·(n·Σy² − (Σy)²) is exactly zero.
    ZeroDenominator,
    /// The denominator is non-zero but r came out non-finite.
    NonFinite,
}

impl Correlation {
    /// r, if defined.
    pub fn r(&self) -> Option<f64> {
        match *self {
            Correlation::Defined(r) => Some(r),
            _ => None,
        }
    }

    /// r², if defined.
    pub fn r_squared(&self) -> Option<f64> {
        self.r().map(|r| r * r)
    }

    pub fn sign(&self) -> Option<CorrelationSign> {
        self.r().map(CorrelationSign::classify)
    }

    pub fn strength(&self) -> Option<CorrelationStrength> {
        self.r().map(CorrelationStrength::classify)
    }
}

/// Direction of a correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationSign {
    Positive,
    Negative,
    /// r == 0.
    Neither,
}

impl CorrelationSign {
    pub fn classify(r: f64) -> Self {
        if r > 0.0 {
            CorrelationSign::Positive
        } else if r < 0.0 {
            CorrelationSign::Negative
        } else {
            CorrelationSign::Neither
        }
    }

    /// Sentence used in the report.
    pub fn sentence(self) -> &'static str {
        match self {
            CorrelationSign::Positive => "The correlation is positive.",
            CorrelationSign::Negative => "The correlation is negative.",
            CorrelationSign::Neither => "There is no pos/neg correlation.",
        }
    }
}

/// Strength band of |r|. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CorrelationStrength {
    /// |r| < 0.3
    None,
    /// 0.3 ≤ |r| < 0.5
    Weak,
    /// 0.5 ≤ |r| < 0.7
    Moderate,
    /// 0.7 ≤ |r| < 1
    Strong,
    /// |r| == 1
    Perfect,
}

impl CorrelationStrength {
    pub fn classify(r: f64) -> Self {
        let abs_r = r.abs();
        if abs_r == 1.0 {
            CorrelationStrength::Perfect
        } else if abs_r >= 0.7 {
            CorrelationStrength::Strong
        } else if abs_r >= 0.5 {
            CorrelationStrength::Moderate
        } else if abs_r >= 0.3 {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::None
        }
    }

    /// Sentence used in the report.
    pub fn sentence(self) -> &'static str {
        match self {
            CorrelationStrength::Perfect => "Perfect correlation.",
            CorrelationStrength::Strong => "Strong correlation.",
            CorrelationStrength::Moderate => "Moderate correlation.",
            CorrelationStrength::Weak => "Weak correlation.",
            CorrelationStrength::None => "There is no spectrum correlation.",
        }
    }
}

/// Compute the Pearson correlation coefficient from the summary sums.
///
/// r = (n·Σxy − Σx·Σy) / sqrt((n·Σx² − (Σx)²)·(n·Σy² − (Σy)²))
///
/// Rounding can push |r| marginally past 1; the value is clamped back into range.
pub fn pearson(sums: &SampleSums) -> Correlation {
    let denominator = sums.x_spread_term() * sums.y_spread_term();
    if denominator == 0.0 {
        return Correlation::ZeroDenominator;
    }

    let r = sums.cross_term() / denominator.sqrt();
    if !r.is_finite() {
        return Correlation::NonFinite;
    }

    Correlation::Defined(r.clamp(-1.0, 1.0))
}
