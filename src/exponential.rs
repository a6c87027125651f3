//! Powers, n-th roots and logarithms with an arbitrary base.

use crate::error::CalcError;

/// `x` raised to `y`, with IEEE 754 semantics.
///
/// A negative base with a fractional exponent yields NaN; complex-valued
/// powers are deliberately out of scope here.
#[inline]
pub fn power(x: f64, y: f64) -> f64 {
    x.powf(y)
}

fn is_odd_integer(n: f64) -> bool {
    n.fract() == 0.0 && (n as i64) % 2 != 0
}

/// The `n`-th root of `x`.
///
/// A negative radicand is accepted only for odd integer root indices, where
/// the real root `-(|x|^(1/n))` is returned; any other negative case and a
/// zero index fail with [CalcError::Domain].
pub fn nth_root(x: f64, n: f64) -> Result<f64, CalcError> {
    if n == 0.0 {
        return Err(CalcError::Domain("zeroth root is undefined".to_string()));
    }
    if x < 0.0 {
        if is_odd_integer(n) {
            Ok(-(-x).powf(n.recip()))
        } else {
            Err(CalcError::Domain(format!(
                "root index {} of negative radicand {} is not real",
                n, x
            )))
        }
    } else {
        Ok(x.powf(n.recip()))
    }
}

/// Logarithm of `x`, natural when no base is given.
///
/// `x` and the base (when present) must both be strictly positive.
pub fn log(x: f64, base: Option<f64>) -> Result<f64, CalcError> {
    if !(x > 0.0) {
        return Err(CalcError::Domain(format!(
            "logarithm argument must be positive, got {}",
            x
        )));
    }
    match base {
        None => Ok(x.ln()),
        Some(b) if !(b > 0.0) => Err(CalcError::Domain(format!(
            "logarithm base must be positive, got {}",
            b
        ))),
        Some(b) => Ok(x.log(b)),
    }
}
