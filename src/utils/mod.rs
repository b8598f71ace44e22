//! Numeric helpers shared by the trendline solvers.

mod least_squares;
mod matrix;

pub use least_squares::{simple_least_squares, SimpleFit};
pub use matrix::{cramer_solve_3x3, determinant_3x3};
