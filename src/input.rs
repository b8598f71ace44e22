//! Parsing of whitespace-delimited numeric text.

use crate::core::Axis;
use thiserror::Error;

/// Errors that can occur while parsing text input.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("invalid input for {} values: '{token}'", axis_name(.axis))]
    InvalidNumber { axis: Axis, token: String },

    #[error("number of Y values ({y_count}) must match number of X values ({x_count})")]
    CountMismatch { x_count: usize, y_count: usize },

    #[error("X values are empty")]
    Empty,
}

fn axis_name(axis: &Axis) -> &'static str {
    match axis {
        Axis::X => "X",
        Axis::Y => "Y",
    }
}

/// Parse every whitespace-separated token of `text` as an `f64`.
pub fn parse_values(text: &str, axis: Axis) -> Result<Vec<f64>, ParseError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseError::InvalidNumber {
                    axis,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Parse x and y text fields into two equal-length, non-empty sequences.
pub fn parse_samples(x_text: &str, y_text: &str) -> Result<(Vec<f64>, Vec<f64>), ParseError> {
    let x = parse_values(x_text, Axis::X)?;
    if x.is_empty() {
        return Err(ParseError::Empty);
    }

    let y_count = y_text.split_whitespace().count();
    if y_count != x.len() {
        return Err(ParseError::CountMismatch {
            x_count: x.len(),
            y_count,
        });
    }
    let y = parse_values(y_text, Axis::Y)?;

    Ok((x, y))
}
