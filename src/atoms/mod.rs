//! # Choccy Builtins
//!
//! The fixed set of operations a symbol at the head of an S-expression can
//! name. Symbols are resolved once into a [`Builtin`] and dispatched with an
//! exhaustive match, so an unknown name can only come from the input.
//!
//! ## Module Structure
//!
//! - **`math`**: integer arithmetic (`+`, `-`, `*`, `/`, `%`, `^`)
//! - **`collections`**: Q-expression manipulation (`head`, `tail`, `list`, `eval`, `join`)

use std::fmt;
use std::str::FromStr;

use crate::errors::EvalError;
use crate::runtime::eval::EvalContext;
use crate::value::Value;

pub mod collections;
pub mod math;

pub use math::ArithOp;

// ============================================================================
// BUILTIN TABLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Head,
    Tail,
    List,
    Eval,
    Join,
    Arith(ArithOp),
}

impl Builtin {
    /// Every builtin, in the order the REPL lists them.
    pub const ALL: [Builtin; 11] = [
        Builtin::Head,
        Builtin::Tail,
        Builtin::List,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Arith(ArithOp::Add),
        Builtin::Arith(ArithOp::Sub),
        Builtin::Arith(ArithOp::Mul),
        Builtin::Arith(ArithOp::Div),
        Builtin::Arith(ArithOp::Rem),
        Builtin::Arith(ArithOp::Pow),
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::List => "list",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Arith(op) => op.symbol(),
        }
    }

    /// One-line usage summary.
    pub fn usage(self) -> &'static str {
        match self {
            Builtin::Head => "(head {a b ...}) => {a}",
            Builtin::Tail => "(tail {a b ...}) => {b ...}",
            Builtin::List => "(list a b ...) => {a b ...}",
            Builtin::Eval => "(eval {f a ...}) => (f a ...)",
            Builtin::Join => "(join {a} {b} ...) => {a b ...}",
            Builtin::Arith(ArithOp::Add) => "(+ a b ...) => sum",
            Builtin::Arith(ArithOp::Sub) => "(- a b ...) => difference, (- a) => negation",
            Builtin::Arith(ArithOp::Mul) => "(* a b ...) => product",
            Builtin::Arith(ArithOp::Div) => "(/ a b ...) => quotient",
            Builtin::Arith(ArithOp::Rem) => "(% a b ...) => remainder",
            Builtin::Arith(ArithOp::Pow) => "(^ a b ...) => power",
        }
    }
}

impl FromStr for Builtin {
    type Err = EvalError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "head" => Builtin::Head,
            "tail" => Builtin::Tail,
            "list" => Builtin::List,
            "eval" => Builtin::Eval,
            "join" => Builtin::Join,
            other => Builtin::Arith(other.parse()?),
        })
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Applies `builtin` to `args`, an S-expression holding the arguments.
///
/// Arguments are consumed on every path; a failed validation drops them
/// and reports the failure as an error.
pub fn apply(builtin: Builtin, args: Value, context: &mut EvalContext) -> Result<Value, EvalError> {
    match builtin {
        Builtin::Head => collections::head(args),
        Builtin::Tail => collections::tail(args),
        Builtin::List => collections::list(args),
        Builtin::Eval => collections::eval(args, context),
        Builtin::Join => collections::join(args),
        Builtin::Arith(op) => math::arithmetic(args, op),
    }
}
