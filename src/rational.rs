//! Exact rational arithmetic over `num-rational`.
//!
//! Fractions are parsed from `p/q` or plain integer literals and are always
//! kept in reduced form with a positive denominator (the `Ratio` invariant).

use crate::error::CalcError;
use num_rational::Ratio;
use num_traits::{ToPrimitive, Zero};
use std::str::FromStr;

/// An exact fraction with machine-integer numerator and denominator.
pub type Fraction = Ratio<i64>;

fn malformed(input: &str) -> CalcError {
    CalcError::Parse(format!("`{}` is not a fraction literal", input))
}

/// Parse a fraction literal of the form `p/q` or a plain integer `p`.
///
/// A zero denominator is reported as [CalcError::DivisionByZero]; anything
/// else that fails to parse is a [CalcError::Parse].
pub fn parse_fraction(input: &str) -> Result<Fraction, CalcError> {
    let s = input.trim();
    match s.find('/') {
        Some(pos) => {
            let numer: i64 = s[..pos].trim().parse().map_err(|_| malformed(input))?;
            let denom: i64 = s[pos + 1..].trim().parse().map_err(|_| malformed(input))?;
            if denom == 0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(Ratio::new(numer, denom))
        }
        None => Ok(Ratio::from_integer(
            s.parse().map_err(|_| malformed(input))?,
        )),
    }
}

#[inline]
pub fn add(a: Fraction, b: Fraction) -> Fraction {
    a + b
}

#[inline]
pub fn sub(a: Fraction, b: Fraction) -> Fraction {
    a - b
}

#[inline]
pub fn mul(a: Fraction, b: Fraction) -> Fraction {
    a * b
}

/// Exact division, rejecting a zero divisor.
pub fn div(a: Fraction, b: Fraction) -> Result<Fraction, CalcError> {
    if b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// The four fraction operations selectable by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FractionOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl FractionOp {
    /// Apply the operation to two fractions.
    pub fn apply(self, a: Fraction, b: Fraction) -> Result<Fraction, CalcError> {
        match self {
            FractionOp::Add => Ok(add(a, b)),
            FractionOp::Sub => Ok(sub(a, b)),
            FractionOp::Mul => Ok(mul(a, b)),
            FractionOp::Div => div(a, b),
        }
    }
}

impl FromStr for FractionOp {
    type Err = CalcError;

    /// Parse an operator symbol, accepting both ASCII and the typographic
    /// multiplication/division signs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(FractionOp::Add),
            "-" => Ok(FractionOp::Sub),
            "*" | "×" => Ok(FractionOp::Mul),
            "/" | "÷" => Ok(FractionOp::Div),
            other => Err(CalcError::Parse(format!(
                "`{}` is not a fraction operator",
                other
            ))),
        }
    }
}

/// Decimal approximation of an exact fraction.
#[inline]
pub fn decimal(r: &Fraction) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

/// Render both the exact reduced fraction and its decimal approximation,
/// e.g. `19/12 ≈ 1.5833333333333333`.
pub fn format_with_decimal(r: &Fraction) -> String {
    format!("{} ≈ {}", r, decimal(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_test() {
        assert_eq!(parse_fraction("3/4").unwrap(), Ratio::new(3, 4));
        assert_eq!(parse_fraction(" 3 / 4 ").unwrap(), Ratio::new(3, 4));
        assert_eq!(parse_fraction("5").unwrap(), Ratio::from_integer(5));
        assert_eq!(parse_fraction("-3/4").unwrap(), Ratio::new(-3, 4));

        // reduced on construction, denominator kept positive
        assert_eq!(parse_fraction("4/8").unwrap(), Ratio::new(1, 2));
        assert_eq!(parse_fraction("3/-4").unwrap(), Ratio::new(-3, 4));

        assert!(matches!(parse_fraction("1/0"), Err(CalcError::DivisionByZero)));
        assert!(matches!(parse_fraction(""), Err(CalcError::Parse(_))));
        assert!(matches!(parse_fraction("a/b"), Err(CalcError::Parse(_))));
        assert!(matches!(parse_fraction("1/2/3"), Err(CalcError::Parse(_))));
        assert!(matches!(parse_fraction("1.5"), Err(CalcError::Parse(_))));
    }

    #[test]
    fn arithmetic_test() {
        let a = Ratio::new(3, 4);
        let b = Ratio::new(5, 6);
        assert_eq!(add(a, b), Ratio::new(19, 12));
        assert_eq!(sub(a, b), Ratio::new(-1, 12));
        assert_eq!(mul(a, b), Ratio::new(5, 8));
        assert_eq!(div(a, b).unwrap(), Ratio::new(9, 10));

        assert!(matches!(
            div(a, Ratio::from_integer(0)),
            Err(CalcError::DivisionByZero)
        ));
    }

    #[test]
    fn op_dispatch_test() {
        let a = Ratio::new(1, 2);
        let b = Ratio::new(1, 3);
        assert_eq!("+".parse::<FractionOp>().unwrap().apply(a, b).unwrap(), Ratio::new(5, 6));
        assert_eq!("×".parse::<FractionOp>().unwrap(), FractionOp::Mul);
        assert_eq!("÷".parse::<FractionOp>().unwrap(), FractionOp::Div);
        assert!(matches!("%".parse::<FractionOp>(), Err(CalcError::Parse(_))));
    }

    #[test]
    fn round_trip_test() {
        // divide(multiply(a, b), b) == a for nonzero b
        for n in -5i64..=5 {
            for d in 1i64..=5 {
                let b = Ratio::new(n, d);
                if b.is_zero() {
                    continue;
                }
                let a = Ratio::new(7, 3);
                assert_eq!(div(mul(a, b), b).unwrap(), a);
            }
        }
    }

    #[test]
    fn render_test() {
        assert_eq!(format_with_decimal(&Ratio::new(1, 2)), "1/2 ≈ 0.5");
        assert_eq!(format_with_decimal(&Ratio::from_integer(3)), "3 ≈ 3");
        assert_eq!(decimal(&Ratio::new(1, 4)), 0.25);
    }
}
