//! Choccy REPL (Read-Eval-Print Loop)
//!
//! Each complete input is evaluated as one S-expression, so the outer
//! parentheses may be left off: `+ 1 2` prints `3`.

use std::io::{self, BufRead, Write};

use crate::atoms::Builtin;
use crate::cli::output::Printer;
use crate::engine::Engine;
use crate::errors::print_error;

const PROMPT: &str = "choccy> ";
const CONTINUATION_PROMPT: &str = "    ... ";

/// REPL state that persists across inputs
pub struct ReplState {
    engine: Engine,
    printer: Printer,
    line_number: usize,
}

impl ReplState {
    pub fn new(engine: Engine, printer: Printer) -> Self {
        Self {
            engine,
            printer,
            line_number: 1,
        }
    }

    /// Evaluate one complete input and print the result.
    pub fn eval_line(&mut self, input: &str) -> io::Result<()> {
        let source_name = format!("<repl:{}>", self.line_number);
        self.line_number += 1;

        match self.engine.eval_line(&source_name, input) {
            Ok(value) => self.printer.print_value(&value),
            Err(e) => {
                print_error(e);
                Ok(())
            }
        }
    }
}

/// Main REPL entry point
pub fn run_repl(engine: Engine, printer: Printer) -> io::Result<()> {
    println!("choccy v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit or Ctrl+D to exit");
    println!();

    let mut state = ReplState::new(engine, printer);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut input_buffer = String::new();

    loop {
        if input_buffer.is_empty() {
            print!("{}", PROMPT);
        } else {
            print!("{}", CONTINUATION_PROMPT);
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let line = line.trim();

        if input_buffer.is_empty() && line.starts_with(':') {
            match handle_repl_command(line) {
                ReplCommand::Continue => continue,
                ReplCommand::Quit => break,
            }
        }

        if !input_buffer.is_empty() {
            input_buffer.push('\n');
        }
        input_buffer.push_str(line);

        // An empty line forces evaluation so a stray '(' cannot trap the user.
        if is_complete_expression(&input_buffer) || line.is_empty() {
            if !input_buffer.trim().is_empty() {
                state.eval_line(&input_buffer)?;
            }
            input_buffer.clear();
        }
    }
    Ok(())
}

/// REPL command results
enum ReplCommand {
    Continue,
    Quit,
}

/// Handle special REPL commands that start with ':'
fn handle_repl_command(command: &str) -> ReplCommand {
    match command.to_ascii_lowercase().as_str() {
        ":help" | ":h" => {
            println!("Choccy REPL Commands:");
            println!("  :help, :h       Show this help");
            println!("  :builtins, :b   List builtin functions");
            println!("  :quit, :q       Exit the REPL");
            println!();
            println!("Enter an expression to evaluate it, e.g. `+ 1 (* 2 3)`.");
            println!("Quote data with braces: `head {{1 2 3}}`.");
            ReplCommand::Continue
        }
        ":builtins" | ":b" => {
            for builtin in Builtin::ALL {
                println!("  {:<6} {}", builtin.name(), builtin.usage());
            }
            ReplCommand::Continue
        }
        ":quit" | ":q" => ReplCommand::Quit,
        _ => {
            println!(
                "Unknown command: {}. Type :help for available commands.",
                command
            );
            ReplCommand::Continue
        }
    }
}

/// True once every '(' and '{' has been closed.
fn is_complete_expression(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }

    let mut depth: i64 = 0;
    let mut in_comment = false;
    for ch in trimmed.chars() {
        match ch {
            ';' => in_comment = true,
            '\n' => in_comment = false,
            '(' | '{' if !in_comment => depth += 1,
            ')' | '}' if !in_comment => depth -= 1,
            _ => {}
        }
    }

    // Over-closed input is "complete" so the parser can report it.
    depth <= 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete_expression() {
        assert!(is_complete_expression("42"));
        assert!(is_complete_expression("+ 1 2"));
        assert!(is_complete_expression("(eval {head {1 2}})"));
        assert!(is_complete_expression("(+ 1 2))"));
        assert!(is_complete_expression("(+ 1 2) ; (unclosed comment"));

        assert!(!is_complete_expression("(+ 1"));
        assert!(!is_complete_expression("{1 {2}"));
        assert!(!is_complete_expression(""));
    }
}
