//! Built-in example datasets, one per regression kind.

use crate::core::RegressionKind;

const LINEAR_X: [f64; 10] = [0.0, 3.0, 5.0, 6.0, 7.0, 10.0, 12.0, 13.0, 15.0, 18.0];
const LINEAR_Y: [f64; 10] = [8.2, 7.5, 7.0, 6.5, 7.2, 6.1, 6.8, 5.5, 5.8, 5.2];

const QUADRATIC_X: [f64; 9] = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
const QUADRATIC_Y: [f64; 9] = [9.2, 4.1, 1.1, 0.2, 1.1, 4.2, 9.1, 16.0, 25.1];

const EXPONENTIAL_X: [f64; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
const EXPONENTIAL_Y: [f64; 6] = [2.1, 5.4, 14.8, 40.2, 109.6, 298.1];

const POWER_X: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
const POWER_Y: [f64; 10] = [1.1, 4.2, 9.1, 16.2, 25.1, 36.2, 49.1, 64.2, 81.1, 100.2];

/// Example (x, y) data suited to `kind`.
pub fn example_dataset(kind: RegressionKind) -> (&'static [f64], &'static [f64]) {
    match kind {
        RegressionKind::Linear => (&LINEAR_X, &LINEAR_Y),
        RegressionKind::Quadratic => (&QUADRATIC_X, &QUADRATIC_Y),
        RegressionKind::Exponential => (&EXPONENTIAL_X, &EXPONENTIAL_Y),
        RegressionKind::Power => (&POWER_X, &POWER_Y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datasets_are_paired() {
        for kind in RegressionKind::ALL {
            let (x, y) = example_dataset(kind);
            assert!(!x.is_empty());
            assert_eq!(x.len(), y.len(), "{kind} dataset");
        }
    }

    #[test]
    fn test_log_domain_datasets_are_positive() {
        let (_, y) = example_dataset(RegressionKind::Exponential);
        assert!(y.iter().all(|&v| v > 0.0));

        let (x, y) = example_dataset(RegressionKind::Power);
        assert!(x.iter().all(|&v| v > 0.0));
        assert!(y.iter().all(|&v| v > 0.0));
    }
}
