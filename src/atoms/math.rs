//! # Integer Arithmetic
//!
//! `+ - * / % ^` fold their arguments left to right over `i64`.
//!
//! ## Overflow
//!
//! - `+`, `-`, `*`, `^` and unary `-` wrap (two's complement).
//! - `/` truncates toward zero; `i64::MIN / -1` wraps to `i64::MIN`.
//! - `%` takes the sign of the dividend; `i64::MIN % -1` is `0`.
//! - `^` with a negative exponent truncates the real result toward zero,
//!   so only `1` and `-1` survive it and `0` reports division by zero.

use std::str::FromStr;

use crate::errors::EvalError;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
            ArithOp::Pow => "^",
        }
    }

    /// Folds one operand into the accumulator.
    pub fn apply(self, acc: i64, operand: i64) -> Result<i64, EvalError> {
        match self {
            ArithOp::Add => Ok(acc.wrapping_add(operand)),
            ArithOp::Sub => Ok(acc.wrapping_sub(operand)),
            ArithOp::Mul => Ok(acc.wrapping_mul(operand)),
            ArithOp::Div if operand == 0 => Err(EvalError::DivisionByZero),
            ArithOp::Div => Ok(acc.wrapping_div(operand)),
            ArithOp::Rem if operand == 0 => Err(EvalError::DivisionByZero),
            ArithOp::Rem => Ok(acc.wrapping_rem(operand)),
            ArithOp::Pow => power(acc, operand),
        }
    }
}

impl FromStr for ArithOp {
    type Err = EvalError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "+" => Ok(ArithOp::Add),
            "-" => Ok(ArithOp::Sub),
            "*" => Ok(ArithOp::Mul),
            "/" => Ok(ArithOp::Div),
            "%" => Ok(ArithOp::Rem),
            "^" => Ok(ArithOp::Pow),
            _ => Err(EvalError::UnknownFunction),
        }
    }
}

/// Reduces `args` with `op`.
///
/// Usage: (+ <a> <b> ...)
///   - every argument must be a Number
///   - `(- <a>)` negates
///
/// Example:
///   (/ 7 2) ; => 3
pub fn arithmetic(args: Value, op: ArithOp) -> Result<Value, EvalError> {
    let operands = args
        .children()
        .iter()
        .map(|arg| arg.as_number().ok_or(EvalError::NonNumber))
        .collect::<Result<Vec<_>, _>>()?;

    let Some((&first, rest)) = operands.split_first() else {
        return Err(EvalError::ArgumentCount {
            func: op.symbol(),
            expected: 1,
            actual: 0,
        });
    };

    if op == ArithOp::Sub && rest.is_empty() {
        return Ok(Value::number(first.wrapping_neg()));
    }

    rest.iter()
        .try_fold(first, |acc, &operand| op.apply(acc, operand))
        .map(Value::number)
}

fn power(base: i64, exp: i64) -> Result<i64, EvalError> {
    if exp < 0 {
        return match base {
            0 => Err(EvalError::DivisionByZero),
            1 => Ok(1),
            -1 if exp % 2 == 0 => Ok(1),
            -1 => Ok(-1),
            _ => Ok(0),
        };
    }

    let mut result: i64 = 1;
    let mut base = base;
    let mut exp = exp as u64;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exp >>= 1;
    }
    Ok(result)
}
