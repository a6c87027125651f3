//! Free-form expression evaluation behind an injectable capability trait.
//!
//! The calculators only depend on [Evaluate], so tests (or embedders) can
//! substitute a minimal evaluator. The default backend delegates to the
//! `evalexpr` crate, rewriting the supported function names into its
//! `math::` namespace and providing the `pi` and `e` constants.

use crate::error::CalcError;
use dyn_clone::DynClone;
use evalexpr::{ContextWithMutableVariables, HashMapContext, Value};

/// Evaluate a free-form arithmetic expression to a number.
///
/// Supported surface: `+ - * / ^`, `sin cos tan sqrt log ln exp`, and the
/// constants `pi` and `e`. Parse failures map to [CalcError::Parse] and
/// evaluation failures to [CalcError::Eval], both carrying the backend's
/// message.
pub trait Evaluate: DynClone {
    fn evaluate(&self, expr: &str) -> Result<f64, CalcError>;
}

dyn_clone::clone_trait_object!(Evaluate);

/// The default `evalexpr`-backed evaluator. Stateless and cheap to clone.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExprEvaluator;

impl ExprEvaluator {
    pub fn new() -> Self {
        ExprEvaluator
    }
}

fn flush_token(out: &mut String, token: &str) {
    match token {
        // evalexpr keeps its math builtins under a namespace
        "sin" | "cos" | "tan" | "sqrt" | "exp" => {
            out.push_str("math::");
            out.push_str(token);
        }
        // both spellings mean the natural logarithm
        "ln" | "log" => out.push_str("math::ln"),
        _ => out.push_str(token),
    }
}

/// Rewrite bare function identifiers into `evalexpr`'s `math::` namespace,
/// leaving every other token (including `pi` and `e`) untouched.
fn rewrite_functions(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len() + 16);
    let mut token = String::new();
    for ch in expr.chars() {
        if ch.is_ascii_alphabetic() || ch == '_' || (ch.is_ascii_digit() && !token.is_empty()) {
            token.push(ch);
        } else {
            flush_token(&mut out, &token);
            token.clear();
            out.push(ch);
        }
    }
    flush_token(&mut out, &token);
    out
}

fn constants() -> Result<HashMapContext, CalcError> {
    let mut context = HashMapContext::new();
    context
        .set_value("pi".to_string(), Value::Float(std::f64::consts::PI))
        .map_err(|e| CalcError::Eval(e.to_string()))?;
    context
        .set_value("e".to_string(), Value::Float(std::f64::consts::E))
        .map_err(|e| CalcError::Eval(e.to_string()))?;
    Ok(context)
}

impl Evaluate for ExprEvaluator {
    fn evaluate(&self, expr: &str) -> Result<f64, CalcError> {
        let prepared = rewrite_functions(expr);
        let node = evalexpr::build_operator_tree(&prepared)
            .map_err(|e| CalcError::Parse(e.to_string()))?;
        match node.eval_with_context(&constants()?) {
            Ok(Value::Float(v)) => Ok(v),
            Ok(Value::Int(v)) => Ok(v as f64),
            Ok(other) => Err(CalcError::Eval(format!(
                "expression evaluated to a non-numeric value: {:?}",
                other
            ))),
            Err(e) => Err(CalcError::Eval(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rewrite_test() {
        assert_eq!(rewrite_functions("sin(x)+exp(2)"), "math::sin(x)+math::exp(2)");
        assert_eq!(rewrite_functions("log(10) - ln(2)"), "math::ln(10) - math::ln(2)");
        assert_eq!(rewrite_functions("2*pi + e"), "2*pi + e");
        // only whole identifiers are rewritten
        assert_eq!(rewrite_functions("single + lnx"), "single + lnx");
    }

    #[test]
    fn arithmetic_test() {
        let eval = ExprEvaluator::new();
        assert_eq!(eval.evaluate("2+3*4").unwrap(), 14.0);
        assert_eq!(eval.evaluate("(2+3)*4").unwrap(), 20.0);
        assert_eq!(eval.evaluate("2^10").unwrap(), 1024.0);
        assert_eq!(eval.evaluate("2+3*sqrt(4)").unwrap(), 8.0);
    }

    #[test]
    fn functions_and_constants_test() {
        let eval = ExprEvaluator::new();
        assert_relative_eq!(eval.evaluate("sin(0)").unwrap(), 0.0);
        assert_relative_eq!(eval.evaluate("cos(0)").unwrap(), 1.0);
        assert_relative_eq!(eval.evaluate("ln(e)").unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval.evaluate("log(e)").unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            eval.evaluate("exp(1)").unwrap(),
            std::f64::consts::E,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            eval.evaluate("sin(pi/2)").unwrap(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn error_test() {
        let eval = ExprEvaluator::new();
        assert!(matches!(eval.evaluate("2+*3"), Err(CalcError::Parse(_))));
        assert!(matches!(
            eval.evaluate("nosuchvar + 1"),
            Err(CalcError::Eval(_))
        ));
    }

    #[test]
    fn boxed_clone_test() {
        let eval: Box<dyn Evaluate> = Box::new(ExprEvaluator::new());
        let copy = eval.clone();
        assert_eq!(copy.evaluate("1+1").unwrap(), 2.0);
    }
}
