//! Arithmetic and geometric series: n-th term and partial sum formulas.

use crate::error::CalcError;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Arithmetic,
    Geometric,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SeriesKind::Arithmetic => write!(f, "arithmetic"),
            SeriesKind::Geometric => write!(f, "geometric"),
        }
    }
}

/// A series defined by its first term and its common difference (arithmetic)
/// or common ratio (geometric).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Series {
    pub kind: SeriesKind,
    pub first_term: f64,
    /// Common difference `d` or common ratio `r`, depending on the kind.
    pub step: f64,
}

impl Series {
    pub fn arithmetic(first_term: f64, difference: f64) -> Self {
        Series {
            kind: SeriesKind::Arithmetic,
            first_term,
            step: difference,
        }
    }

    pub fn geometric(first_term: f64, ratio: f64) -> Self {
        Series {
            kind: SeriesKind::Geometric,
            first_term,
            step: ratio,
        }
    }

    fn check_n(n: i64) -> Result<f64, CalcError> {
        if n < 1 {
            return Err(CalcError::InvalidInput(format!(
                "term index must be a positive integer, got {}",
                n
            )));
        }
        Ok(n as f64)
    }

    /// The n-th term: `a1 + (n-1)·d` or `a1·r^(n-1)`.
    pub fn nth_term(&self, n: i64) -> Result<f64, CalcError> {
        let n = Self::check_n(n)?;
        Ok(match self.kind {
            SeriesKind::Arithmetic => self.first_term + (n - 1.0) * self.step,
            SeriesKind::Geometric => self.first_term * self.step.powf(n - 1.0),
        })
    }

    /// The sum of the first n terms.
    ///
    /// Geometric sums use `a1·n` when the ratio is exactly 1, avoiding the
    /// 0/0 of the closed formula.
    pub fn sum(&self, n: i64) -> Result<f64, CalcError> {
        let n = Self::check_n(n)?;
        Ok(match self.kind {
            SeriesKind::Arithmetic => {
                (n / 2.0) * (2.0 * self.first_term + (n - 1.0) * self.step)
            }
            SeriesKind::Geometric => {
                if self.step == 1.0 {
                    self.first_term * n
                } else {
                    self.first_term * (1.0 - self.step.powf(n)) / (1.0 - self.step)
                }
            }
        })
    }
}
