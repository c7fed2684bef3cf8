//! The reduction engine.
//!
//! Only S-expressions reduce. Their children are evaluated left to right,
//! then the list itself is settled:
//!
//! 1. the first error child wins and becomes the result;
//! 2. `()` stays `()`;
//! 3. a single child collapses to that child;
//! 4. otherwise the head must be a symbol naming a builtin, which receives
//!    the remaining children as its arguments.
//!
//! Numbers, errors, symbols and Q-expressions are returned unchanged.

use tracing::{debug, warn};

use crate::atoms::{self, Builtin};
use crate::errors::EvalError;
use crate::list::{pop_at, take_at};
use crate::runtime::EvalOptions;
use crate::value::Value;

/// State of one top-level evaluation.
pub struct EvalContext {
    options: EvalOptions,
    depth: usize,
}

impl EvalContext {
    pub fn new(options: EvalOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Current nesting depth; zero outside any S-expression.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Reduces `value` to its canonical result.
    pub fn evaluate(&mut self, value: Value) -> Value {
        match value {
            Value::SExpr(children) => self.with_depth(|context| {
                let evaluated = children
                    .into_iter()
                    .map(|child| context.evaluate(child))
                    .collect();
                context.evaluate_sexpr(Value::SExpr(evaluated))
            }),
            other => other,
        }
    }

    /// Settles an S-expression whose children are already evaluated.
    pub fn evaluate_sexpr(&mut self, expr: Value) -> Value {
        self.reduce(expr).unwrap_or_else(Value::from)
    }

    fn reduce(&mut self, mut expr: Value) -> Result<Value, EvalError> {
        if let Some(index) = expr.children().iter().position(Value::is_error) {
            return Ok(take_at(expr, index)?);
        }

        match expr.len() {
            0 => return Ok(expr),
            1 => return Ok(take_at(expr, 0)?),
            _ => {}
        }

        let Value::Symbol(name) = pop_at(&mut expr, 0)? else {
            return Err(EvalError::NotSymbolHead);
        };

        let builtin = name.parse::<Builtin>().inspect_err(|_| {
            debug!(symbol = %name, "unknown function");
        })?;

        debug!(%builtin, args = expr.len(), depth = self.depth, "applying builtin");
        atoms::apply(builtin, expr, self)
    }

    fn with_depth(&mut self, f: impl FnOnce(&mut Self) -> Value) -> Value {
        if self.depth >= self.options.max_depth {
            warn!(limit = self.options.max_depth, "recursion depth limit reached");
            return Value::from(EvalError::RecursionLimit {
                limit: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new(EvalOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sym(s: &str) -> Value {
        Value::symbol(s)
    }

    fn num(n: i64) -> Value {
        Value::number(n)
    }

    #[test]
    fn leaves_and_quotes_are_inert() {
        let mut context = EvalContext::default();
        let quoted = Value::qexpr_of(vec![sym("+"), num(1), num(2)]);
        assert_eq!(context.evaluate(quoted.clone()), quoted);
        assert_eq!(context.evaluate(sym("head")), sym("head"));
        assert_eq!(context.evaluate(Value::error("x")), Value::error("x"));
    }

    #[test]
    fn nested_call_reduces_inside_out() {
        let mut context = EvalContext::default();
        let expr = Value::sexpr_of(vec![
            sym("+"),
            num(1),
            Value::sexpr_of(vec![sym("*"), num(2), num(3)]),
        ]);
        assert_eq!(context.evaluate(expr), num(7));
        assert_eq!(context.depth(), 0);
    }

    #[test]
    fn first_error_wins() {
        let mut context = EvalContext::default();
        let expr = Value::sexpr_of(vec![
            sym("+"),
            Value::sexpr_of(vec![sym("/"), num(1), num(0)]),
            Value::sexpr_of(vec![sym("nope"), num(1)]),
        ]);
        assert_eq!(context.evaluate(expr), Value::error("Division by zero"));
    }

    #[test]
    fn non_symbol_head() {
        let mut context = EvalContext::default();
        let expr = Value::sexpr_of(vec![num(1), num(2)]);
        assert_eq!(
            context.evaluate(expr),
            Value::error("S-expression doesn't start with symbol")
        );
    }

    #[test]
    fn recursion_limit_surfaces_as_error() {
        let mut context = EvalContext::new(EvalOptions { max_depth: 4 });
        let mut expr = num(1);
        for _ in 0..10 {
            expr = Value::sexpr_of(vec![expr]);
        }
        assert_eq!(
            context.evaluate(expr),
            Value::error("Recursion depth limit of 4 exceeded")
        );
        assert_eq!(context.depth(), 0);
    }

    #[test]
    fn limit_applies_to_eval_chains() {
        let mut context = EvalContext::new(EvalOptions { max_depth: 3 });
        let mut code = Value::qexpr_of(vec![sym("+"), num(1)]);
        for _ in 0..5 {
            code = Value::qexpr_of(vec![sym("eval"), code]);
        }
        let expr = Value::sexpr_of(vec![sym("eval"), code]);
        assert!(context.evaluate(expr).is_error());
    }
}
