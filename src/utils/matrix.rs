//! Small dense systems: quadratic normal equations and Cramer's rule.

use faer::{Col, Mat};

/// Determinant of a 3×3 matrix by cofactor expansion along the first row.
pub fn determinant_3x3(m: &Mat<f64>) -> f64 {
    debug_assert!(m.nrows() == 3 && m.ncols() == 3);

    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

/// Copy of `m` with column `j` replaced by `rhs`.
fn replace_column(m: &Mat<f64>, j: usize, rhs: &Col<f64>) -> Mat<f64> {
    Mat::from_fn(m.nrows(), m.ncols(), |row, col| {
        if col == j {
            rhs[row]
        } else {
            m[(row, col)]
        }
    })
}

/// Solve the 3×3 system `m · β = rhs` by Cramer's rule.
///
/// Returns `None` when the determinant is exactly zero.
pub fn cramer_solve_3x3(m: &Mat<f64>, rhs: &Col<f64>) -> Option<Col<f64>> {
    let det = determinant_3x3(m);
    if det == 0.0 {
        return None;
    }

    Some(Col::from_fn(3, |j| {
        determinant_3x3(&replace_column(m, j, rhs)) / det
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinant_identity() {
        let m = Mat::from_fn(3, 3, |i, j| if i == j { 1.0 } else { 0.0 });
        assert_eq!(determinant_3x3(&m), 1.0);
    }

    #[test]
    fn test_determinant_singular() {
        // third row is the sum of the first two
        let mut m = Mat::zeros(3, 3);
        m[(0, 0)] = 1.0;
        m[(0, 1)] = 2.0;
        m[(0, 2)] = 3.0;
        m[(1, 0)] = 4.0;
        m[(1, 1)] = 5.0;
        m[(1, 2)] = 6.0;
        m[(2, 0)] = 5.0;
        m[(2, 1)] = 7.0;
        m[(2, 2)] = 9.0;
        assert_eq!(determinant_3x3(&m), 0.0);

        let rhs = Col::from_fn(3, |i| i as f64);
        assert!(cramer_solve_3x3(&m, &rhs).is_none());
    }

    #[test]
    fn test_cramer_solve() {
        // 2a + b - c = 8, -3a - b + 2c = -11, -2a + b + 2c = -3 → (2, 3, -1)
        let rows = [[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
        let m = Mat::from_fn(3, 3, |i, j| rows[i][j]);
        let rhs_values = [8.0, -11.0, -3.0];
        let rhs = Col::from_fn(3, |i| rhs_values[i]);

        let beta = cramer_solve_3x3(&m, &rhs).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-12);
        assert!((beta[1] - 3.0).abs() < 1e-12);
        assert!((beta[2] + 1.0).abs() < 1e-12);
    }
}
