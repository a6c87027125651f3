//! Linear solvers: single-variable `ax + b = 0` and 2×2 systems via
//! Cramer's rule.

use std::fmt;

/// Outcome of solving `ax + b = 0`.
///
/// The degenerate cases are answers, not errors; callers branch on them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinearSolution {
    /// The unique root `x = -b/a`.
    Unique(f64),
    /// `a == 0` and `b != 0`: no x satisfies the equation.
    NoSolution,
    /// `a == 0` and `b == 0`: every x satisfies the equation.
    Infinite,
}

impl fmt::Display for LinearSolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearSolution::Unique(x) => write!(f, "x = {}", x),
            LinearSolution::NoSolution => write!(f, "no solution"),
            LinearSolution::Infinite => write!(f, "infinitely many solutions"),
        }
    }
}

/// Solve `ax + b = 0` for x.
pub fn solve_linear(a: f64, b: f64) -> LinearSolution {
    if a == 0.0 {
        if b == 0.0 {
            LinearSolution::Infinite
        } else {
            LinearSolution::NoSolution
        }
    } else {
        LinearSolution::Unique(-b / a)
    }
}

/// The system `a11·x + a12·y = b1`, `a21·x + a22·y = b2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearSystem2x2 {
    pub a11: f64,
    pub a12: f64,
    pub a21: f64,
    pub a22: f64,
    pub b1: f64,
    pub b2: f64,
}

impl LinearSystem2x2 {
    pub fn new(a11: f64, a12: f64, b1: f64, a21: f64, a22: f64, b2: f64) -> Self {
        LinearSystem2x2 {
            a11,
            a12,
            a21,
            a22,
            b1,
            b2,
        }
    }

    /// The coefficient determinant `a11·a22 - a12·a21`.
    #[inline]
    pub fn det(&self) -> f64 {
        self.a11 * self.a22 - self.a12 * self.a21
    }
}

/// Outcome of solving a [LinearSystem2x2].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SystemSolution {
    Unique { x: f64, y: f64 },
    /// The determinant is zero; the system is singular.
    NoUnique,
}

impl fmt::Display for SystemSolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SystemSolution::Unique { x, y } => write!(f, "x = {}, y = {}", x, y),
            SystemSolution::NoUnique => write!(f, "determinant is 0, no unique solution"),
        }
    }
}

/// Solve a 2×2 system by Cramer's rule.
pub fn solve_system(sys: &LinearSystem2x2) -> SystemSolution {
    let det = sys.det();
    if det == 0.0 {
        return SystemSolution::NoUnique;
    }
    SystemSolution::Unique {
        x: (sys.b1 * sys.a22 - sys.a12 * sys.b2) / det,
        y: (sys.a11 * sys.b2 - sys.b1 * sys.a21) / det,
    }
}
