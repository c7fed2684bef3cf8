//! The Choccy value model.
//!
//! A [`Value`] is a single node of an owned expression tree. Leaves are
//! numbers, errors and symbols; S-expressions and Q-expressions own an
//! ordered sequence of children. Every child has exactly one parent, so
//! releasing a value is simply dropping it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{EvalError, ListError};

/// Represents a value in the Choccy evaluator.
///
/// # Examples
///
/// ```rust
/// use choccy::value::Value;
/// let n = Value::number(42);
/// assert_eq!(n.type_name(), "Number");
/// let q = Value::qexpr_of(vec![Value::number(1), Value::number(2)]);
/// assert_eq!(q.to_string(), "{1 2}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Number(i64),
    Error(String),
    Symbol(String),
    SExpr(Vec<Value>),
    QExpr(Vec<Value>),
}

impl Value {
    // ------------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------------

    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    pub fn symbol(text: impl Into<String>) -> Self {
        Value::Symbol(text.into())
    }

    /// An empty S-expression.
    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// An empty Q-expression.
    pub fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    pub fn sexpr_of(children: Vec<Value>) -> Self {
        Value::SExpr(children)
    }

    pub fn qexpr_of(children: Vec<Value>) -> Self {
        Value::QExpr(children)
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    /// Returns the type name of the value as a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use choccy::value::Value;
    /// assert_eq!(Value::sexpr().type_name(), "S-Expression");
    /// assert_eq!(Value::symbol("+").type_name(), "Symbol");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Children of a list value. Leaves have none.
    pub fn children(&self) -> &[Value] {
        match self {
            Value::SExpr(children) | Value::QExpr(children) => children,
            _ => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> Result<&mut Vec<Value>, ListError> {
        match self {
            Value::SExpr(children) | Value::QExpr(children) => Ok(children),
            other => Err(ListError::NotAList {
                kind: other.type_name(),
            }),
        }
    }

    /// Number of children; zero for leaves.
    pub fn len(&self) -> usize {
        self.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    /// Moves `child` onto the end of this list's children.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use choccy::value::Value;
    /// let mut list = Value::sexpr();
    /// list.append(Value::symbol("+")).unwrap();
    /// list.append(Value::number(1)).unwrap();
    /// assert_eq!(list.to_string(), "(+ 1)");
    /// assert!(Value::number(1).append(Value::number(2)).is_err());
    /// ```
    pub fn append(&mut self, child: Value) -> Result<(), ListError> {
        self.children_mut()?.push(child);
        Ok(())
    }

    /// Reinterprets a list as a Q-expression, keeping its children.
    pub fn into_qexpr(self) -> Value {
        match self {
            Value::SExpr(children) => Value::QExpr(children),
            other => other,
        }
    }

    /// Reinterprets a list as an S-expression, keeping its children.
    pub fn into_sexpr(self) -> Value {
        match self {
            Value::QExpr(children) => Value::SExpr(children),
            other => other,
        }
    }

    // ------------------------------------------------------------------------
    // Display formatting helpers
    // ------------------------------------------------------------------------

    fn fmt_list(f: &mut fmt::Formatter<'_>, open: char, items: &[Value], close: char) -> fmt::Result {
        write!(f, "{}", open)?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "{}", close)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(message) => write!(f, "Error: {}", message),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::SExpr(items) => Value::fmt_list(f, '(', items, ')'),
            Value::QExpr(items) => Value::fmt_list(f, '{', items, '}'),
        }
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err.to_string())
    }
}

impl From<ListError> for Value {
    fn from(err: ListError) -> Self {
        Value::from(EvalError::from(err))
    }
}
