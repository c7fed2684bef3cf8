//! Defines the command-line arguments and subcommands for the Choccy CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use termcolor::ColorChoice;

use crate::runtime::DEFAULT_MAX_DEPTH;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "choccy",
    version,
    about = "A tiny Lisp with S-expressions, Q-expressions and integer arithmetic."
)]
pub struct ChoccyArgs {
    /// Maximum S-expression nesting depth during evaluation.
    #[arg(long, global = true, env = "CHOCCY_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// When to colour results.
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `CHOCCY_LOG` overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive REPL (the default).
    Repl,
    /// Evaluate one line and print the result.
    Eval {
        /// The expression, e.g. "+ 1 (* 2 3)".
        #[arg(required = true, allow_hyphen_values = true)]
        expr: String,
    },
    /// Evaluate every top-level expression of a file.
    Run {
        /// The path to the Choccy script file to run.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Print the syntax tree of an expression as JSON.
    Tree {
        #[arg(required = true, allow_hyphen_values = true)]
        expr: String,
        /// Print an indented outline instead of JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Evaluate a syntax tree given as a JSON file.
    ReadTree {
        #[arg(required = true)]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}
