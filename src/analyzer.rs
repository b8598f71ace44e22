//! Engine entry point: statistics pass, trendline fit and report rendering.

use crate::core::{
    FormattingMode, NumberFormat, RegressionKind, ReportOptions, ReportOptionsBuilder,
    SampleSet, SampleStatistics,
};
use crate::report::Report;
use crate::solvers::{fit_trendline, FitOutcome, RegressionError, TrendlineModel};
use faer::Col;

/// Computes statistics and a trendline for paired observations.
///
/// Analysis is a pure function of its input; one analyzer can be shared across
/// threads and reused for any number of sample sets.
///
/// # Example
///
/// ```rust,ignore
/// use sigma_trend::prelude::*;
/// use faer::Col;
///
/// let x = Col::from_fn(5, |i| i as f64);
/// let y = Col::from_fn(5, |i| 1.0 + 2.0 * i as f64);
///
/// let analysis = TrendAnalyzer::builder()
///     .kind(RegressionKind::Linear)
///     .formatting(FormattingMode::Exact)
///     .build()?
///     .analyze(&x, &y)?;
///
/// println!("{}", analysis.report());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzer {
    options: ReportOptions,
}

/// Structured output of one analysis.
#[derive(Debug, Clone)]
pub struct TrendAnalysis {
    kind: RegressionKind,
    formatting: FormattingMode,
    samples: SampleSet,
    statistics: SampleStatistics,
    trendline: FitOutcome,
}

impl TrendAnalyzer {
    /// Create an analyzer from validated options.
    pub fn new(options: ReportOptions) -> Result<Self, RegressionError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Create a builder for configuring the analyzer.
    pub fn builder() -> TrendAnalyzerBuilder {
        TrendAnalyzerBuilder::default()
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Analyze two equal-length, non-empty columns.
    pub fn analyze(&self, x: &Col<f64>, y: &Col<f64>) -> Result<TrendAnalysis, RegressionError> {
        let samples = SampleSet::new(x, y)?;
        Ok(self.analyze_samples(samples))
    }

    /// Analyze two equal-length, non-empty slices.
    pub fn analyze_slices(&self, x: &[f64], y: &[f64]) -> Result<TrendAnalysis, RegressionError> {
        let samples = SampleSet::from_slices(x, y)?;
        Ok(self.analyze_samples(samples))
    }

    /// Analyze an already validated sample set.
    pub fn analyze_samples(&self, samples: SampleSet) -> TrendAnalysis {
        let kind = self.options.kind;
        tracing::debug!(%kind, n = samples.len(), "analyzing samples");

        let statistics = SampleStatistics::compute(&samples, self.options.outlier_threshold);
        let trendline = fit_trendline(kind, &samples, &statistics.sums);

        TrendAnalysis {
            kind,
            formatting: self.options.formatting,
            samples,
            statistics,
            trendline,
        }
    }
}

impl TrendAnalysis {
    pub fn kind(&self) -> RegressionKind {
        self.kind
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn statistics(&self) -> &SampleStatistics {
        &self.statistics
    }

    pub fn trendline(&self) -> &FitOutcome {
        &self.trendline
    }

    /// The fitted model, if the trendline could be fit.
    pub fn model(&self) -> Option<&TrendlineModel> {
        self.trendline.model()
    }

    /// Render with the formatting mode the analyzer was configured with.
    pub fn report(&self) -> Report {
        self.report_with(self.formatting)
    }

    /// Render with a specific formatting mode.
    pub fn report_with(&self, mode: FormattingMode) -> Report {
        Report::assemble(&self.statistics, &self.trendline, &NumberFormat::new(mode))
    }
}

/// Builder for `TrendAnalyzer`.
#[derive(Debug, Clone, Default)]
pub struct TrendAnalyzerBuilder {
    builder: ReportOptionsBuilder,
}

impl TrendAnalyzerBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trendline model.
    pub fn kind(mut self, kind: RegressionKind) -> Self {
        self.builder = self.builder.kind(kind);
        self
    }

    /// Set the number formatting mode.
    pub fn formatting(mut self, mode: FormattingMode) -> Self {
        self.builder = self.builder.formatting(mode);
        self
    }

    /// Round numbers to two decimals (`true`) or print them exactly (`false`).
    pub fn rounding(mut self, use_rounding: bool) -> Self {
        self.builder = self.builder.rounding(use_rounding);
        self
    }

    /// Set the outlier cutoff, in population standard deviations.
    pub fn outlier_threshold(mut self, threshold: f64) -> Self {
        self.builder = self.builder.outlier_threshold(threshold);
        self
    }

    /// Build and validate the analyzer.
    pub fn build(self) -> Result<TrendAnalyzer, RegressionError> {
        let options = self.builder.build()?;
        Ok(TrendAnalyzer { options })
    }
}

/// Validate, analyze and render in one call.
pub fn generate_report(
    x: &[f64],
    y: &[f64],
    options: &ReportOptions,
) -> Result<Report, RegressionError> {
    let analyzer = TrendAnalyzer::new(options.clone())?;
    Ok(analyzer.analyze_slices(x, y)?.report())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionsError;

    #[test]
    fn test_builder_validates() {
        let result = TrendAnalyzer::builder().outlier_threshold(-1.0).build();
        assert!(matches!(
            result,
            Err(RegressionError::InvalidOptions(
                OptionsError::InvalidOutlierThreshold(_)
            ))
        ));
    }

    #[test]
    fn test_analyze_columns() {
        let x = Col::from_fn(5, |i| i as f64);
        let y = Col::from_fn(5, |i| 1.0 + 2.0 * i as f64);

        let analysis = TrendAnalyzer::builder()
            .build()
            .unwrap()
            .analyze(&x, &y)
            .unwrap();

        assert_eq!(analysis.kind(), RegressionKind::Linear);
        assert_eq!(analysis.samples().len(), 5);
        assert!(analysis.model().is_some());
        assert!(analysis.report().has_trendline());
    }

    #[test]
    fn test_hard_errors_produce_no_report() {
        let options = ReportOptions::default();
        assert!(matches!(
            generate_report(&[], &[], &options),
            Err(RegressionError::EmptyInput)
        ));
        assert!(matches!(
            generate_report(&[1.0, 2.0], &[1.0], &options),
            Err(RegressionError::DimensionMismatch { x_len: 2, y_len: 1 })
        ));
    }

    #[test]
    fn test_report_with_overrides_mode() {
        let analysis = TrendAnalyzer::default()
            .analyze_slices(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.14159])
            .unwrap();

        assert!(analysis.report().text().contains("3.14 "));
        assert!(analysis
            .report_with(FormattingMode::Exact)
            .text()
            .contains("3.14159"));
    }

    #[test]
    fn test_analyzer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TrendAnalyzer>();
        assert_send_sync::<TrendAnalysis>();
        assert_send_sync::<Report>();
    }
}
