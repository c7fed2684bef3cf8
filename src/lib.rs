//! # Choccy
//!
//! A small Lisp-flavoured expression evaluator. Source text is parsed into
//! a [`syntax::SyntaxNode`] tree, read into a [`value::Value`] tree, and
//! reduced by the [`runtime`] against a fixed set of [`atoms`].
//!
//! ```rust
//! use choccy::engine::Engine;
//! let engine = Engine::default();
//! let value = engine.eval_line("<doc>", "eval (head {(+ 1 2) (+ 10 20)})").unwrap();
//! assert_eq!(value.to_string(), "3");
//! ```

pub use crate::errors::{EvalError, ListError, SyntaxError};
pub use crate::value::Value;

pub mod atoms;
pub mod cli;
pub mod engine;
pub mod errors;
pub mod list;
pub mod reader;
pub mod repl;
pub mod runtime;
pub mod syntax;
pub mod value;
