//! Evaluation runtime: options and the reduction engine.

use serde::{Deserialize, Serialize};

use crate::value::Value;

pub mod eval;

pub use eval::EvalContext;

/// Default nesting limit for evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Knobs for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalOptions {
    /// How many S-expressions may be under evaluation at once before the
    /// evaluator gives up with a recursion-limit error.
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluates `value` with default options.
///
/// ```rust
/// use choccy::runtime::evaluate;
/// use choccy::value::Value;
/// let call = Value::sexpr_of(vec![Value::symbol("-"), Value::number(5)]);
/// assert_eq!(evaluate(call), Value::number(-5));
/// ```
pub fn evaluate(value: Value) -> Value {
    EvalContext::new(EvalOptions::default()).evaluate(value)
}
