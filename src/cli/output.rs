//! Handles all user-facing output for the CLI.
//!
//! Results go to stdout, one per line. Error values are printed in bold red
//! when colour is enabled.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::value::Value;

#[derive(Debug, Clone, Copy)]
pub struct Printer {
    choice: ColorChoice,
}

impl Printer {
    pub fn new(choice: ColorChoice) -> Self {
        Self { choice }
    }

    /// Prints a rendered value followed by a newline.
    pub fn print_value(&self, value: &Value) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.choice);
        write_value(&mut stdout, value)
    }

    /// Prints plain text with no colouring.
    pub fn print_plain(&self, text: &str) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.choice);
        writeln!(stdout, "{}", text)
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

fn write_value(out: &mut impl WriteColor, value: &Value) -> io::Result<()> {
    if value.is_error() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        writeln!(out, "{}", value)?;
        return out.reset();
    }
    writeln!(out, "{}", value)
}
