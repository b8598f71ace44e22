//! Rendering of individual report sections.
//!
//! Each function renders one section from the structured results. Headings and
//! line order are part of the report's contract; numbers follow the
//! [`NumberFormat`] except r and r², which always use four decimals.

use crate::core::{correlation_value, NumberFormat, SampleStatistics};
use crate::descriptive::{Correlation, SampleSums, TableRow};
use crate::diagnostics::{Outlier, ResponseSpread};
use crate::solvers::{FittedTrendline, QuadraticFit, TrendlineModel};

/// Identifies a section of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Table,
    Sums,
    Correlation,
    Spread,
    Outliers,
    Trendline,
}

/// Header row of the sample table.
pub fn table_header() -> String {
    table_line("Index", "X", "Y", "X^2", "Y^2", "XY")
}

fn table_line(index: &str, x: &str, y: &str, x2: &str, y2: &str, xy: &str) -> String {
    format!("{index:<7} {x:<10} {y:<10} {x2:<12} {y2:<12} {xy:<12}\n")
}

/// One table line per row, below the header.
pub fn render_table(rows: &[TableRow], fmt: &NumberFormat) -> String {
    let mut out = table_header();
    for row in rows {
        out.push_str(&table_line(
            &row.index.to_string(),
            &fmt.number(row.x),
            &fmt.number(row.y),
            &fmt.number(row.x2),
            &fmt.number(row.y2),
            &fmt.number(row.xy),
        ));
    }
    out
}

pub fn render_sums(sums: &SampleSums, fmt: &NumberFormat) -> String {
    format!(
        "\nΣx = {}\nΣy = {}\nΣx² = {}\nΣy² = {}\nΣxy = {}\nn = {}\n",
        fmt.number(sums.sum_x),
        fmt.number(sums.sum_y),
        fmt.number(sums.sum_x2),
        fmt.number(sums.sum_y2),
        fmt.number(sums.sum_xy),
        sums.n
    )
}

pub fn render_correlation(correlation: &Correlation) -> String {
    match *correlation {
        Correlation::Defined(r) => {
            let mut out = format!(
                "r = {}\nr² = {}\n",
                correlation_value(r),
                correlation_value(r * r)
            );
            if let (Some(sign), Some(strength)) = (correlation.sign(), correlation.strength()) {
                out.push_str(&format!("{}\n{}\n", sign.sentence(), strength.sentence()));
            }
            out
        }
        Correlation::ZeroDenominator => {
            "r is undefined (denominator for r is zero).\n".to_string()
        }
        Correlation::NonFinite => {
            "r is undefined (the computed value is not a finite number).\n".to_string()
        }
    }
}

pub fn render_spread(spread: &ResponseSpread, fmt: &NumberFormat) -> String {
    format!(
        "\nMean of Y: {}\nStandard Deviation of Y: {}\n",
        fmt.number(spread.mean),
        fmt.number(spread.std_dev)
    )
}

pub fn render_outliers(outliers: &[Outlier], fmt: &NumberFormat) -> String {
    if outliers.is_empty() {
        return "No outliers detected.\n".to_string();
    }

    let mut out = String::from("Outliers detected at the following indices (0-based):\n");
    for outlier in outliers {
        out.push_str(&format!(
            "Index {}: X = {}, Y = {}\n",
            outlier.index,
            fmt.number(outlier.x),
            fmt.number(outlier.y)
        ));
    }
    out
}

fn render_vertex(fit: &QuadraticFit, fmt: &NumberFormat) -> String {
    match fit.vertex {
        Some(vertex) => format!(
            "Vertex: ({}, {}) - This is a {}\n",
            fmt.number(vertex.x),
            fmt.number(vertex.y),
            vertex.kind.label()
        ),
        None => "Vertex: none (the x² coefficient is zero or negligible, so the fit has no well-defined vertex)\n"
            .to_string(),
    }
}

/// The trendline section of a fitted model.
pub fn render_trendline(model: &TrendlineModel, fmt: &NumberFormat) -> String {
    let mut out = String::from("\n");
    let equation = model.equation(fmt);

    match model {
        TrendlineModel::Linear(_) => {
            out.push_str(&format!("Trendline equation: {equation}\n"));
        }
        TrendlineModel::Quadratic(fit) => {
            out.push_str(&format!("Quadratic Trendline equation: {equation}\n"));
            out.push_str(&render_vertex(fit, fmt));
        }
        TrendlineModel::Exponential(_) | TrendlineModel::Power(_) => {
            let label = if matches!(model, TrendlineModel::Exponential(_)) {
                "Exponential"
            } else {
                "Power"
            };
            out.push_str(&format!("{label} equation: {equation}\n"));
            if let Some(inverse) = model.inverse_formula(fmt) {
                out.push_str(&format!("Solving for x: {inverse}\n"));
            }
            if let Some(r_squared) = model.r_squared() {
                out.push_str(&format!(
                    "r² for {} fit: {}\n",
                    model.kind(),
                    fmt.number(r_squared)
                ));
            }
        }
    }

    out
}

/// Render every statistics section, in report order.
pub fn render_statistics(
    stats: &SampleStatistics,
    fmt: &NumberFormat,
) -> Vec<(SectionKind, String)> {
    vec![
        (SectionKind::Table, render_table(&stats.rows, fmt)),
        (SectionKind::Sums, render_sums(&stats.sums, fmt)),
        (SectionKind::Correlation, render_correlation(&stats.correlation)),
        (SectionKind::Spread, render_spread(&stats.spread, fmt)),
        (SectionKind::Outliers, render_outliers(&stats.outliers, fmt)),
    ]
}
