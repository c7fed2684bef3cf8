//! Choccy execution pipeline.
//!
//! Source text flows through three stages:
//!
//! ```text
//! parse  ->  SyntaxNode  ->  read  ->  Value  ->  evaluate  ->  Value
//! ```
//!
//! Parsing is the only stage that can fail at the host level. Everything
//! after it reports problems as `Error` values.

use tracing::instrument;

use crate::errors::SyntaxError;
use crate::reader::read;
use crate::runtime::{EvalContext, EvalOptions};
use crate::syntax::{self, SyntaxNode};
use crate::value::Value;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EvalOptions,
}

impl Engine {
    pub fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    /// Evaluates a whole line as one S-expression, as the REPL does.
    ///
    /// ```rust
    /// use choccy::engine::Engine;
    /// let engine = Engine::default();
    /// assert_eq!(engine.eval_line("<doc>", "+ 1 (* 2 3)").unwrap().to_string(), "7");
    /// ```
    #[instrument(level = "debug", skip(self, source))]
    pub fn eval_line(&self, source_name: &str, source: &str) -> Result<Value, SyntaxError> {
        let tree = syntax::parse(source_name, source)?;
        Ok(self.eval_tree(&tree))
    }

    /// Evaluates each top-level expression on its own, in order.
    ///
    /// ```rust
    /// use choccy::engine::Engine;
    /// let results = Engine::default().eval_program("<doc>", "(+ 1 2) {a b}").unwrap();
    /// let rendered: Vec<_> = results.iter().map(|v| v.to_string()).collect();
    /// assert_eq!(rendered, vec!["3", "{a b}"]);
    /// ```
    #[instrument(level = "debug", skip(self, source))]
    pub fn eval_program(&self, source_name: &str, source: &str) -> Result<Vec<Value>, SyntaxError> {
        let tree = syntax::parse(source_name, source)?;
        Ok(tree
            .expressions()
            .map(|node| self.eval_tree(node))
            .collect())
    }

    /// Reads and evaluates an already parsed syntax tree.
    pub fn eval_tree(&self, tree: &SyntaxNode) -> Value {
        EvalContext::new(self.options).evaluate(read(tree))
    }
}
