//! The error taxonomy shared by every calculator kernel.
//!
//! Every public fallible operation returns `Result<_, CalcError>`. Solver
//! outcomes that are legitimate answers rather than failures (no solution,
//! infinitely many solutions, singular system) are variants of the solver
//! result enums instead, so callers branch on them explicitly.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The input string cannot be parsed into the required type.
    #[error("parse error: {0}")]
    Parse(String),
    /// The input parses but violates a domain precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The input is mathematically undefined for the operation.
    #[error("domain error: {0}")]
    Domain(String),
    /// Division by a zero-valued divisor in rational arithmetic.
    #[error("division by zero")]
    DivisionByZero,
    /// The leading coefficient of a quadratic equation is zero.
    #[error("leading coefficient is zero, the equation is not quadratic")]
    NotQuadratic,
    /// The expression backend failed to evaluate, carrying its message.
    #[error("evaluation error: {0}")]
    Eval(String),
}
