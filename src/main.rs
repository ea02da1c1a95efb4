//! Binary entrypoint for the `trajrank` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match trajrank::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
