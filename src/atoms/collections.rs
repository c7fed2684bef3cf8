//! Q-expression operations.
//!
//! Each builtin receives its arguments as an owned S-expression and moves
//! children out of it with the list operations.

use crate::errors::EvalError;
use crate::list::{self, pop_at, take_at};
use crate::runtime::eval::EvalContext;
use crate::value::Value;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Validates that the correct number of arguments were provided.
fn require_arity(args: &Value, expected: usize, func: &'static str) -> Result<(), EvalError> {
    if args.len() != expected {
        return Err(EvalError::ArgumentCount {
            func,
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

fn require_qexpr(arg: &Value, func: &'static str) -> Result<(), EvalError> {
    match arg {
        Value::QExpr(_) => Ok(()),
        other => Err(EvalError::ArgumentType {
            func,
            expected: "Q-Expression",
            actual: other.type_name(),
        }),
    }
}

/// Takes the one Q-expression argument out of `args`.
fn single_qexpr(args: Value, func: &'static str) -> Result<Value, EvalError> {
    require_arity(&args, 1, func)?;
    let arg = take_at(args, 0)?;
    require_qexpr(&arg, func)?;
    Ok(arg)
}

fn non_empty_qexpr(args: Value, func: &'static str) -> Result<Value, EvalError> {
    let arg = single_qexpr(args, func)?;
    if arg.is_empty() {
        return Err(EvalError::EmptyList { func });
    }
    Ok(arg)
}

// ============================================================================
// LIST OPERATIONS
// ============================================================================

/// First element of a list: (head {1 2 3}) ; => {1}
pub fn head(args: Value) -> Result<Value, EvalError> {
    let list = non_empty_qexpr(args, "head")?;
    let first = take_at(list, 0)?;
    Ok(Value::qexpr_of(vec![first]))
}

/// Everything but the first element: (tail {1 2 3}) ; => {2 3}
pub fn tail(args: Value) -> Result<Value, EvalError> {
    let mut list = non_empty_qexpr(args, "tail")?;
    pop_at(&mut list, 0)?;
    Ok(list)
}

/// Quotes its arguments: (list 1 2 3) ; => {1 2 3}
pub fn list(args: Value) -> Result<Value, EvalError> {
    Ok(args.into_qexpr())
}

/// Evaluates a Q-expression as code: (eval {+ 1 2}) ; => 3
pub fn eval(args: Value, context: &mut EvalContext) -> Result<Value, EvalError> {
    let code = single_qexpr(args, "eval")?;
    Ok(context.evaluate(code.into_sexpr()))
}

/// Concatenates Q-expressions: (join {1} {2 3}) ; => {1 2 3}
pub fn join(mut args: Value) -> Result<Value, EvalError> {
    for arg in args.children() {
        require_qexpr(arg, "join")?;
    }

    let mut joined = pop_at(&mut args, 0)?;
    while !args.is_empty() {
        joined = list::join(joined, pop_at(&mut args, 0)?)?;
    }
    Ok(joined)
}
