//! Closed-form quadratic solver over the complex domain.
//!
//! The square root of the discriminant is always taken in ℂ, so a negative
//! discriminant yields a genuine conjugate pair instead of a NaN.

use crate::error::CalcError;
use num_complex::Complex64;
use std::fmt;

/// The discriminant and both roots of `ax² + bx + c = 0`.
///
/// Roots with a negative discriminant are complex conjugates; otherwise the
/// imaginary parts are exactly zero and the roots are presentationally real.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticRoots {
    pub discriminant: f64,
    pub root1: Complex64,
    pub root2: Complex64,
}

impl QuadraticRoots {
    /// Both roots are real (discriminant >= 0).
    #[inline]
    pub fn is_real(&self) -> bool {
        self.discriminant >= 0.0
    }

    /// The two roots coincide (discriminant == 0).
    #[inline]
    pub fn is_double_root(&self) -> bool {
        self.discriminant == 0.0
    }
}

fn fmt_root(f: &mut fmt::Formatter, root: &Complex64, real: bool) -> fmt::Result {
    if real {
        write!(f, "{}", root.re)
    } else {
        write!(f, "{}", root)
    }
}

impl fmt::Display for QuadraticRoots {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "discriminant = {}, x1 = ", self.discriminant)?;
        fmt_root(f, &self.root1, self.is_real())?;
        write!(f, ", x2 = ")?;
        fmt_root(f, &self.root2, self.is_real())
    }
}

/// Solve `ax² + bx + c = 0` by the closed formula `(-b ± √D) / 2a`.
///
/// Fails with [CalcError::NotQuadratic] when `a == 0`.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<QuadraticRoots, CalcError> {
    if a == 0.0 {
        return Err(CalcError::NotQuadratic);
    }
    let discriminant = b * b - 4.0 * a * c;
    let sqrt_d = Complex64::new(discriminant, 0.0).sqrt();
    let neg_b = Complex64::new(-b, 0.0);
    let two_a = 2.0 * a;
    Ok(QuadraticRoots {
        discriminant,
        root1: (neg_b - sqrt_d) / two_a,
        root2: (neg_b + sqrt_d) / two_a,
    })
}
