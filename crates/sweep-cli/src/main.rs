//! datasweep CLI.

use std::process::ExitCode;

use clap::Parser;
use sweep_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_clean, run_formats};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    match cli.command {
        Command::Clean(args) => match run_clean(&args) {
            Ok(Some(result)) => {
                print_summary(&result);
                ExitCode::SUCCESS
            }
            // The loader has already logged why
            Ok(None) => {
                eprintln!("error: could not load {}", args.input.display());
                ExitCode::FAILURE
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::FAILURE
            }
        },
        Command::Formats => {
            run_formats();
            ExitCode::SUCCESS
        }
    }
}
