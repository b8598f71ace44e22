//! Common test utilities and data generators.

#![allow(dead_code)]

use sigma_trend::prelude::*;

/// Analyze slices with the given kind and formatting.
pub fn analyze(x: &[f64], y: &[f64], kind: RegressionKind, mode: FormattingMode) -> TrendAnalysis {
    TrendAnalyzer::builder()
        .kind(kind)
        .formatting(mode)
        .build()
        .expect("default options are valid")
        .analyze_slices(x, y)
        .expect("input is valid")
}

/// Render a report for slices with the given kind and formatting.
pub fn report_text(x: &[f64], y: &[f64], kind: RegressionKind, mode: FormattingMode) -> String {
    analyze(x, y, kind, mode).report().text()
}

/// Generate y = intercept + slope·x with deterministic noise.
pub fn generate_noisy_line(
    n_samples: usize,
    slope: f64,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Vec<f64>, Vec<f64>) {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let mut next_rand = || -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((rng_state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let x: Vec<f64> = (0..n_samples).map(|i| i as f64 * 0.5).collect();
    let y = x
        .iter()
        .map(|&xi| intercept + slope * xi + noise_std * next_rand())
        .collect();

    (x, y)
}

/// Lines of the sample table (header excluded).
pub fn table_lines(text: &str) -> Vec<&str> {
    text.lines()
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}
