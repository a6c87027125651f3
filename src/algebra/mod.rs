//! Solvers for linear equations, 2×2 linear systems and quadratic
//! equations over the complex numbers.

pub mod linear;
pub mod quadratic;

pub use linear::{solve_linear, solve_system, LinearSolution, LinearSystem2x2, SystemSolution};
pub use quadratic::{solve_quadratic, QuadraticRoots};
