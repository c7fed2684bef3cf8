//! Choccy error types.
//!
//! Two worlds meet here. [`EvalError`] describes failures *inside* the
//! language; it is never thrown to the host but turned into a
//! [`Value::Error`](crate::value::Value::Error) whose message is the
//! variant's `Display`. [`SyntaxError`] is a host-level failure of the
//! front end and is reported through `miette`.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::sync::Arc;
use thiserror::Error;

// ============================================================================
// SOURCE CONTEXT
// ============================================================================

/// A named piece of source text, kept for diagnostics.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Convert to NamedSource for use with miette error reporting
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

// ============================================================================
// EVALUATION ERRORS
// ============================================================================

/// Every way a Choccy expression can fail to reduce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Invalid number")]
    InvalidNumber,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Non-number passed as operation argument")]
    NonNumber,

    #[error("S-expression doesn't start with symbol")]
    NotSymbolHead,

    #[error("Unknown function")]
    UnknownFunction,

    #[error("Function '{func}' passed {actual} arguments, expected {expected}")]
    ArgumentCount {
        func: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Function '{func}' passed {actual}, expected {expected}")]
    ArgumentType {
        func: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Function '{func}' passed {{}}")]
    EmptyList { func: &'static str },

    #[error("Recursion depth limit of {limit} exceeded")]
    RecursionLimit { limit: usize },

    #[error("Internal error: {0}")]
    Internal(#[from] ListError),
}

/// Precondition violations of the list operations.
///
/// Callers validate shapes before calling, so these only surface when an
/// engine invariant is broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("expected a list, found {kind}")]
    NotAList { kind: &'static str },

    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

// ============================================================================
// SYNTAX ERRORS
// ============================================================================

/// The front end rejected the input text.
#[derive(Debug, Error, Diagnostic)]
#[error("Parse error: {message}")]
#[diagnostic(code(choccy::parse))]
pub struct SyntaxError {
    pub message: String,
    #[source_code]
    pub src: Arc<NamedSource<String>>,
    #[label("here")]
    pub span: SourceSpan,
    #[help]
    pub help: Option<String>,
}

impl SyntaxError {
    pub fn new(source: &SourceContext, message: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            message: message.into(),
            src: source.to_named_source(),
            span,
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Prints a host-level error with full miette diagnostics.
pub fn print_error(error: impl Diagnostic + Send + Sync + 'static) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_language_contract() {
        assert_eq!(EvalError::InvalidNumber.to_string(), "Invalid number");
        assert_eq!(EvalError::UnknownFunction.to_string(), "Unknown function");
        assert_eq!(
            EvalError::NotSymbolHead.to_string(),
            "S-expression doesn't start with symbol"
        );
        assert_eq!(
            EvalError::EmptyList { func: "head" }.to_string(),
            "Function 'head' passed {}"
        );
        assert_eq!(
            EvalError::ArgumentType {
                func: "tail",
                expected: "Q-Expression",
                actual: "Number",
            }
            .to_string(),
            "Function 'tail' passed Number, expected Q-Expression"
        );
    }

    #[test]
    fn list_errors_wrap_as_internal() {
        let err = EvalError::from(ListError::IndexOutOfRange { index: 3, len: 1 });
        assert_eq!(
            err.to_string(),
            "Internal error: index 3 out of range for list of length 1"
        );
    }

    #[test]
    fn syntax_error_carries_code_and_help() {
        let source = SourceContext::new("<test>", "(+ 1");
        let err = SyntaxError::new(&source, "missing closing parenthesis", (4..4).into())
            .with_help("add a ')'");
        assert_eq!(err.to_string(), "Parse error: missing closing parenthesis");
        assert_eq!(err.code().map(|c| c.to_string()), Some("choccy::parse".to_string()));
        assert_eq!(err.help.as_deref(), Some("add a ')'"));
    }
}
