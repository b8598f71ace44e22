//! Text report assembly.
//!
//! A [`Report`] is a sequence of independently rendered sections followed by
//! any diagnostic notes explaining why the trendline could not be fit.
//!
//! # Example
//!
//! ```rust,ignore
//! use sigma_trend::prelude::*;
//!
//! let report = generate_report(&x, &y, &ReportOptions::for_kind(RegressionKind::Power))?;
//! println!("{report}");
//! ```

mod sections;

pub use sections::{
    render_correlation, render_outliers, render_spread, render_sums, render_table,
    render_trendline, table_header, SectionKind,
};

use crate::core::{NumberFormat, SampleStatistics};
use crate::solvers::FitOutcome;
use std::fmt;

/// One rendered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub text: String,
}

/// The rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<ReportSection>,
    notes: Vec<String>,
}

impl Report {
    /// Render the statistics and the trendline outcome.
    pub fn assemble(stats: &SampleStatistics, outcome: &FitOutcome, fmt: &NumberFormat) -> Self {
        let mut sections: Vec<ReportSection> = sections::render_statistics(stats, fmt)
            .into_iter()
            .map(|(kind, text)| ReportSection { kind, text })
            .collect();
        let mut notes = Vec::new();

        match outcome {
            FitOutcome::Fitted(model) => sections.push(ReportSection {
                kind: SectionKind::Trendline,
                text: render_trendline(model, fmt),
            }),
            FitOutcome::Unavailable(diagnostic) => {
                if let Some(message) = diagnostic.message(fmt) {
                    notes.push(message);
                }
            }
        }

        Self { sections, notes }
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    /// Text of the section of the given kind, if present.
    pub fn section(&self, kind: SectionKind) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.text.as_str())
    }

    /// Diagnostic notes appended after the sections.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Returns true if the trendline section was rendered.
    pub fn has_trendline(&self) -> bool {
        self.section(SectionKind::Trendline).is_some()
    }

    /// The full report as one text block.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            f.write_str(&section.text)?;
        }
        for note in &self.notes {
            writeln!(f, "\n{note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Axis, FormattingMode, RegressionKind, SampleSet};
    use crate::solvers::FitDiagnostic;

    fn stats() -> SampleStatistics {
        let samples = SampleSet::from_slices(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        SampleStatistics::compute(&samples, 2.0)
    }

    #[test]
    fn test_sections_in_order() {
        let fmt = NumberFormat::new(FormattingMode::Rounded);
        let report = Report::assemble(
            &stats(),
            &FitOutcome::Unavailable(FitDiagnostic::DegenerateSlope),
            &fmt,
        );

        let kinds: Vec<_> = report.sections().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Table,
                SectionKind::Sums,
                SectionKind::Correlation,
                SectionKind::Spread,
                SectionKind::Outliers,
            ]
        );
        // degenerate linear fit leaves no trace
        assert!(report.notes().is_empty());
        assert!(!report.has_trendline());
    }

    #[test]
    fn test_diagnostic_note_is_last() {
        let fmt = NumberFormat::new(FormattingMode::Exact);
        let diagnostic = FitDiagnostic::NonPositiveValue {
            kind: RegressionKind::Exponential,
            axis: Axis::Y,
            index: 1,
            value: -2.5,
        };
        let report = Report::assemble(&stats(), &FitOutcome::Unavailable(diagnostic), &fmt);

        let text = report.text();
        assert!(text.ends_with(
            "No outliers detected.\n\nCannot perform exponential regression: y value at index 1 is not positive (-2.5).\n"
        ));
        assert_eq!(report.notes().len(), 1);
    }
}
