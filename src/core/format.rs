//! Number rendering shared by equations, diagnostics and the report.

use super::options::FormattingMode;

/// Text written in place of a value that is not a finite number.
pub const NON_FINITE_TEXT: &str = "undefined";

/// Renders numbers according to a [`FormattingMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberFormat {
    mode: FormattingMode,
}

impl NumberFormat {
    pub fn new(mode: FormattingMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> FormattingMode {
        self.mode
    }

    /// Render `value` per the mode.
    ///
    /// Rust's `Display` for `f64` already prints the shortest representation that
    /// round-trips and never switches to exponent notation. Negative zero prints
    /// as "0"; non-finite values print as [`NON_FINITE_TEXT`].
    pub fn number(&self, value: f64) -> String {
        if !value.is_finite() {
            return NON_FINITE_TEXT.to_string();
        }
        let shown = match self.mode {
            FormattingMode::Rounded => round_to_hundredths(value),
            FormattingMode::Exact => value,
        };
        // adding +0.0 folds -0.0 into 0.0
        format!("{}", shown + 0.0)
    }
}

/// Round half away from zero to two decimal places.
///
/// Values so large that scaling by 100 overflows are already integral and are
/// returned unchanged.
fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Render a correlation value with four decimals regardless of mode.
pub fn correlation_value(value: f64) -> String {
    if value.is_finite() {
        format!("{:.4}", value + 0.0)
    } else {
        NON_FINITE_TEXT.to_string()
    }
}
