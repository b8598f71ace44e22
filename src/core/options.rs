//! Report options and configuration.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Trendline model to fit.
///
/// Unrecognized kind names parse as [`RegressionKind::Linear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegressionKind {
    /// y = slope·x + intercept (default).
    #[default]
    Linear,
    /// y = a·x² + b·x + c.
    Quadratic,
    /// y = a·e^(b·(x − minX)).
    Exponential,
    /// y = a·x^b.
    Power,
}

impl RegressionKind {
    /// All kinds, in display order.
    pub const ALL: [RegressionKind; 4] = [
        RegressionKind::Linear,
        RegressionKind::Quadratic,
        RegressionKind::Exponential,
        RegressionKind::Power,
    ];

    /// Resolve a kind from its name, falling back to linear.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "quadratic" => RegressionKind::Quadratic,
            "exponential" => RegressionKind::Exponential,
            "power" => RegressionKind::Power,
            _ => RegressionKind::Linear,
        }
    }

    /// Lowercase name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            RegressionKind::Linear => "linear",
            RegressionKind::Quadratic => "quadratic",
            RegressionKind::Exponential => "exponential",
            RegressionKind::Power => "power",
        }
    }
}

impl fmt::Display for RegressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RegressionKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// How numeric values are rendered in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormattingMode {
    /// Round to two decimals, then print the shortest representation (3.10 → "3.1").
    #[default]
    Rounded,
    /// Shortest representation that round-trips to the original value.
    Exact,
}

impl FormattingMode {
    /// Map a "use rounding" flag to a mode.
    pub fn from_rounding(use_rounding: bool) -> Self {
        if use_rounding {
            FormattingMode::Rounded
        } else {
            FormattingMode::Exact
        }
    }
}

/// Configuration options for a trendline report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Which trendline model to fit (default: linear).
    pub kind: RegressionKind,
    /// Number rendering policy (default: rounded).
    pub formatting: FormattingMode,
    /// Outlier cutoff in population standard deviations (default: 2.0).
    pub outlier_threshold: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            kind: RegressionKind::Linear,
            formatting: FormattingMode::Rounded,
            outlier_threshold: 2.0,
        }
    }
}

/// Errors that can occur when validating report options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("outlier_threshold must be finite and positive, got {0}")]
    InvalidOutlierThreshold(f64),
}

impl ReportOptions {
    /// Create a new builder for report options.
    pub fn builder() -> ReportOptionsBuilder {
        ReportOptionsBuilder::default()
    }

    /// Default options for the given kind.
    pub fn for_kind(kind: RegressionKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.outlier_threshold.is_finite() || self.outlier_threshold <= 0.0 {
            return Err(OptionsError::InvalidOutlierThreshold(
                self.outlier_threshold,
            ));
        }
        Ok(())
    }
}

/// Builder for `ReportOptions`.
#[derive(Debug, Clone, Default)]
pub struct ReportOptionsBuilder {
    options: ReportOptions,
}

impl ReportOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trendline model.
    pub fn kind(mut self, kind: RegressionKind) -> Self {
        self.options.kind = kind;
        self
    }

    /// Set the number formatting mode.
    pub fn formatting(mut self, mode: FormattingMode) -> Self {
        self.options.formatting = mode;
        self
    }

    /// Shorthand for `formatting(FormattingMode::from_rounding(..))`.
    pub fn rounding(mut self, use_rounding: bool) -> Self {
        self.options.formatting = FormattingMode::from_rounding(use_rounding);
        self
    }

    /// Set the outlier cutoff, in population standard deviations.
    pub fn outlier_threshold(mut self, threshold: f64) -> Self {
        self.options.outlier_threshold = threshold;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<ReportOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> ReportOptions {
        self.options
    }
}
