mod platform;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = platform::cli::Cli::parse();
    match platform::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
