//! Primality testing, prime listing, trial-division factorization and
//! Euclidean GCD/LCM, generic over the `num-integer` machine integers.

use crate::error::CalcError;
use num_integer::{Integer, Roots};
use num_traits::{NumRef, One, RefNum, Signed, Zero};
use std::fmt;

/// A helper trait to define valid types that the number theory kernels work on
pub trait NumTheoryBase: Integer + NumRef + Clone + Roots + Signed {}
impl<T: Integer + NumRef + Clone + Roots + Signed> NumTheoryBase for T {}

/// Deterministic primality test by trial division.
///
/// Returns false below 2, true for 2, false for larger even numbers, and
/// otherwise divides by odd candidates up to `⌊√n⌋`.
pub fn is_prime<T: NumTheoryBase>(n: &T) -> bool
where
    for<'r> &'r T: RefNum<T>,
{
    let two = T::one() + T::one();
    if *n < two {
        return false;
    }
    if n.is_even() {
        return *n == two;
    }
    let limit = n.sqrt();
    let mut p = &two + T::one();
    while p <= limit {
        if (n % &p).is_zero() {
            return false;
        }
        p = &p + &two;
    }
    true
}

/// List every prime in `[2, n]` in increasing order.
pub fn primes_up_to<T: NumTheoryBase>(n: &T) -> Result<Vec<T>, CalcError>
where
    for<'r> &'r T: RefNum<T>,
{
    let two = T::one() + T::one();
    if *n < two {
        return Err(CalcError::InvalidInput(
            "prime listing requires an integer >= 2".to_string(),
        ));
    }
    let mut primes = Vec::new();
    let mut i = two;
    while &i <= n {
        if is_prime(&i) {
            primes.push(i.clone());
        }
        i = &i + &T::one();
    }
    Ok(primes)
}

/// The prime factorization of an integer `n >= 2`.
///
/// Factors are stored as `(prime, exponent)` pairs with strictly increasing
/// primes, and multiply back to the factored value exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factorization<T> {
    value: T,
    factors: Vec<(T, u32)>,
}

impl<T> Factorization<T> {
    /// The integer that was factored.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The `(prime, exponent)` pairs in increasing prime order.
    #[inline]
    pub fn factors(&self) -> &[(T, u32)] {
        &self.factors
    }
}

impl<T: NumTheoryBase> Factorization<T>
where
    for<'r> &'r T: RefNum<T>,
{
    /// Multiply all `prime^exponent` terms back together.
    pub fn product(&self) -> T {
        let mut acc = T::one();
        for (p, e) in &self.factors {
            for _ in 0..*e {
                acc = &acc * p;
            }
        }
        acc
    }
}

impl<T: fmt::Display> fmt::Display for Factorization<T> {
    /// Format as a product of prime powers, e.g. `2^3 · 3^2 · 5` for 360.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (p, e)) in self.factors.iter().enumerate() {
            if i > 0 {
                write!(f, " · ")?;
            }
            if *e == 1 {
                write!(f, "{}", p)?;
            } else {
                write!(f, "{}^{}", p, e)?;
            }
        }
        Ok(())
    }
}

/// Factorize `n >= 2` by trial division.
///
/// Divides by increasing candidates `p` while `p² <=` the remaining value,
/// accumulating exponents; a remainder above 1 after the loop is itself prime
/// and becomes the final factor. Only primes can ever divide the remainder, so
/// no primality pre-check is needed.
pub fn factorize<T: NumTheoryBase>(n: &T) -> Result<Factorization<T>, CalcError>
where
    for<'r> &'r T: RefNum<T>,
{
    let two = T::one() + T::one();
    if *n < two {
        return Err(CalcError::InvalidInput(
            "factorization requires an integer >= 2".to_string(),
        ));
    }

    let mut remaining = n.clone();
    let mut factors = Vec::new();
    let mut p = two;
    while &p * &p <= remaining {
        let mut exp = 0u32;
        loop {
            let (q, r) = remaining.div_rem(&p);
            if !r.is_zero() {
                break;
            }
            remaining = q;
            exp += 1;
        }
        if exp > 0 {
            factors.push((p.clone(), exp));
        }
        p = &p + &T::one();
    }
    if remaining > T::one() {
        factors.push((remaining, 1));
    }

    Ok(Factorization {
        value: n.clone(),
        factors,
    })
}

/// Recursive Euclidean GCD with `gcd(a, 0) = |a|`. The result is always >= 0.
pub fn gcd<T: NumTheoryBase>(a: &T, b: &T) -> T
where
    for<'r> &'r T: RefNum<T>,
{
    if b.is_zero() {
        a.abs()
    } else {
        gcd(b, &(a % b))
    }
}

/// Least common multiple as `|a·b| / gcd(a, b)`.
///
/// Defined as 0 when either input is 0, which also guards the division.
pub fn lcm<T: NumTheoryBase>(a: &T, b: &T) -> T
where
    for<'r> &'r T: RefNum<T>,
{
    if a.is_zero() || b.is_zero() {
        return T::zero();
    }
    (a * b).abs() / gcd(a, b)
}

/// Fold [gcd] over a non-empty slice.
pub fn gcd_all<T: NumTheoryBase>(values: &[T]) -> Result<T, CalcError>
where
    for<'r> &'r T: RefNum<T>,
{
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| CalcError::InvalidInput("empty numeric list".to_string()))?;
    Ok(rest.iter().fold(first.clone(), |acc, v| gcd(&acc, v)))
}

/// Fold [lcm] over a non-empty slice.
pub fn lcm_all<T: NumTheoryBase>(values: &[T]) -> Result<T, CalcError>
where
    for<'r> &'r T: RefNum<T>,
{
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| CalcError::InvalidInput("empty numeric list".to_string()))?;
    Ok(rest.iter().fold(first.clone(), |acc, v| lcm(&acc, v)))
}

/// Parse a comma-separated list of integers, silently dropping tokens that
/// are not valid integers.
pub fn parse_number_list(input: &str) -> Vec<i64> {
    input
        .split(',')
        .filter_map(|tok| tok.trim().parse::<i64>().ok())
        .collect()
}

/// GCD of a comma-separated list, e.g. `"12,18,30"` -> 6.
pub fn gcd_list(input: &str) -> Result<i64, CalcError> {
    gcd_all(&parse_number_list(input))
}

/// LCM of a comma-separated list, e.g. `"12,18,30"` -> 180.
pub fn lcm_list(input: &str) -> Result<i64, CalcError> {
    lcm_all(&parse_number_list(input))
}
