//! A collection of stateless numeric calculator kernels.
//!
//! Each calculator is a pure function (or small value type) that takes
//! already-parsed arguments and returns either a result value or a tagged
//! [CalcError]. Input collection and result presentation belong to the
//! embedding application; the kernels here never perform I/O and share no
//! state between invocations.
//!
//! ```
//! use calcpad::number_theory::{factorize, gcd_list};
//!
//! assert_eq!(format!("{}", factorize(&360i64).unwrap()), "2^3 · 3^2 · 5");
//! assert_eq!(gcd_list("12,18,30").unwrap(), 6);
//! ```

pub mod algebra;
pub mod error;
pub mod eval;
pub mod exponential;
pub mod number_theory;
pub mod rational;
pub mod sequence;

pub use algebra::{
    solve_linear, solve_quadratic, solve_system, LinearSolution, LinearSystem2x2, QuadraticRoots,
    SystemSolution,
};
pub use error::CalcError;
pub use eval::{Evaluate, ExprEvaluator};
pub use number_theory::Factorization;
pub use rational::{Fraction, FractionOp};
pub use sequence::{Series, SeriesKind};
