//! # Trendline Reports
//!
//! Runs every regression kind on its built-in dataset and prints the report,
//! then shows the structured results and a rejected log-domain fit.
//!
//! Run with: `cargo run --example report`

use sigma_trend::datasets::example_dataset;
use sigma_trend::input::parse_samples;
use sigma_trend::plot::{trendline_points, AxisBounds};
use sigma_trend::prelude::*;

fn main() {
    println!("=== Trendline Reports ===\n");

    example_reports();
    structured_results();
    rejected_fit();
}

fn example_reports() {
    for kind in RegressionKind::ALL {
        println!("--- {kind} ---\n");

        let (x, y) = example_dataset(kind);
        match generate_report(x, y, &ReportOptions::for_kind(kind)) {
            Ok(report) => println!("{report}"),
            Err(e) => println!("error: {e}"),
        }
    }
}

fn structured_results() {
    println!("--- Structured results ---\n");

    let (x, y) = match parse_samples("-3 -2 -1 0 1 2 3", "9.1 4.2 0.9 0.1 1.2 3.8 9.3") {
        Ok(values) => values,
        Err(e) => {
            println!("error: {e}");
            return;
        }
    };

    let analysis = match TrendAnalyzer::builder()
        .kind(RegressionKind::Quadratic)
        .formatting(FormattingMode::Exact)
        .build()
        .and_then(|analyzer| analyzer.analyze_slices(&x, &y))
    {
        Ok(analysis) => analysis,
        Err(e) => {
            println!("error: {e}");
            return;
        }
    };

    let stats = analysis.statistics();
    println!("n = {}", stats.n());
    match stats.correlation.r() {
        Some(r) => println!("r = {r:.6}"),
        None => println!("r is undefined"),
    }
    println!("outliers: {}", stats.outliers.len());

    if let Some(model) = analysis.model() {
        let bounds = AxisBounds::from_samples(analysis.samples(), true);
        let points = trendline_points(model, &bounds);
        println!(
            "plot window x: [{}, {}], y: [{}, {}], {} curve points",
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y,
            points.len()
        );
    }
    println!();
}

fn rejected_fit() {
    println!("--- Rejected power fit ---\n");

    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 4.0, 8.0];

    match generate_report(&x, &y, &ReportOptions::for_kind(RegressionKind::Power)) {
        Ok(report) => {
            println!("{report}");
            for note in report.notes() {
                println!("note: {note}");
            }
        }
        Err(e) => println!("error: {e}"),
    }
}
