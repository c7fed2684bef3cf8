//! Tree reader: syntax tree in, value tree out.
//!
//! Reading never fails. A malformed number literal becomes an
//! `Error("Invalid number")` at its position in the tree, and the evaluator
//! later finds it like any other error.

use tracing::trace;

use crate::errors::EvalError;
use crate::syntax::{SyntaxNode, ROOT_TAG};
use crate::value::Value;

/// Reads a syntax node into a value.
///
/// # Examples
///
/// ```rust
/// use choccy::reader::read;
/// use choccy::syntax::parse;
/// let tree = parse("<doc>", "{1 2}").unwrap();
/// assert_eq!(read(&tree).to_string(), "({1 2})");
/// ```
pub fn read(node: &SyntaxNode) -> Value {
    if node.tag.contains("number") {
        return read_number(&node.contents);
    }
    if node.tag.contains("symbol") {
        return Value::symbol(node.contents.as_str());
    }

    let children = || -> Vec<Value> { node.expressions().map(read).collect() };
    if node.tag.contains("q_exp") {
        Value::qexpr_of(children())
    } else if node.tag == ROOT_TAG || node.tag.contains("s_exp") {
        Value::sexpr_of(children())
    } else {
        trace!(tag = %node.tag, "unrecognised syntax node read as empty S-expression");
        Value::sexpr()
    }
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(err) => {
            trace!(literal = text, %err, "rejected number literal");
            Value::from(EvalError::InvalidNumber)
        }
    }
}
