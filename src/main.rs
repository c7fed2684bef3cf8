use std::process::ExitCode;

fn main() -> ExitCode {
    choccy::cli::run()
}
