mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = color_eyre::install() {
        eprintln!("{} {err}", "error:".red().bold());
        return ExitCode::FAILURE;
    }
    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("{} {err}", "error:".red().bold());
        return ExitCode::FAILURE;
    }

    match commands::execute(&cli) {
        Ok(output) => {
            print!("{output}");
            info!("All done.");
            ExitCode::SUCCESS
        }
        Err(report) => {
            if cli.debug {
                eprintln!("{report:?}");
            } else {
                eprintln!("{} {report}", "error:".red().bold());
            }
            ExitCode::FAILURE
        }
    }
}
