//! The Choccy Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use std::{
    fs,
    io::{self, IsTerminal},
    path::Path,
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

use crate::cli::args::{ChoccyArgs, ColorMode, Command};
use crate::cli::output::Printer;
use crate::engine::Engine;
use crate::repl;
use crate::runtime::EvalOptions;
use crate::syntax::{self, SyntaxNode};

pub mod args;
pub mod output;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "CHOCCY_LOG";

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    let args = ChoccyArgs::parse();
    init_tracing(args.verbose, args.color);

    let engine = Engine::new(EvalOptions {
        max_depth: args.max_depth,
    });
    let printer = Printer::new(args.color.into());

    // Dispatch to the appropriate subcommand handler.
    let result = match args.command.unwrap_or(Command::Repl) {
        Command::Repl => repl::run_repl(engine, printer)
            .into_diagnostic()
            .map(|()| ExitCode::SUCCESS),
        Command::Eval { expr } => handle_eval(&engine, &printer, &expr),
        Command::Run { file } => handle_run(&engine, &printer, &file),
        Command::Tree { expr, pretty } => handle_tree(&printer, &expr, pretty),
        Command::ReadTree { file } => handle_read_tree(&engine, &printer, &file),
    };

    match result {
        Ok(code) => code,
        Err(report) => {
            eprintln!("{report:?}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr `tracing` subscriber. `CHOCCY_LOG` wins over `-v`.
fn init_tracing(verbose: u8, color: ColorMode) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(log_ansi(color, io::stderr().is_terminal()))
        .with_target(false)
        .try_init();
}

/// Whether log lines on stderr carry ANSI colour codes.
fn log_ansi(color: ColorMode, stderr_is_terminal: bool) -> bool {
    match color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => stderr_is_terminal,
    }
}

fn status(failed: bool) -> ExitCode {
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Handles the `eval` subcommand.
fn handle_eval(engine: &Engine, printer: &Printer, expr: &str) -> miette::Result<ExitCode> {
    let value = engine.eval_line("<eval>", expr)?;
    printer.print_value(&value).into_diagnostic()?;
    Ok(status(value.is_error()))
}

/// Handles the `run` subcommand.
fn handle_run(engine: &Engine, printer: &Printer, path: &Path) -> miette::Result<ExitCode> {
    let source = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    let results = engine.eval_program(&path.display().to_string(), &source)?;
    for value in &results {
        printer.print_value(value).into_diagnostic()?;
    }
    Ok(status(results.iter().any(|v| v.is_error())))
}

/// Handles the `tree` subcommand.
fn handle_tree(printer: &Printer, expr: &str, pretty: bool) -> miette::Result<ExitCode> {
    let tree = syntax::parse("<tree>", expr)?;
    let text = if pretty {
        tree.pretty()
    } else {
        serde_json::to_string_pretty(&tree).into_diagnostic()?
    };
    printer.print_plain(text.trim_end()).into_diagnostic()?;
    Ok(ExitCode::SUCCESS)
}

/// Handles the `read-tree` subcommand.
fn handle_read_tree(engine: &Engine, printer: &Printer, path: &Path) -> miette::Result<ExitCode> {
    let text = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let tree: SyntaxNode = serde_json::from_str(&text)
        .into_diagnostic()
        .wrap_err_with(|| format!("{} is not a valid syntax tree", path.display()))?;

    let value = engine.eval_tree(&tree);
    printer.print_value(&value).into_diagnostic()?;
    Ok(status(value.is_error()))
}
