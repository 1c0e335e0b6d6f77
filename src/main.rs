use std::process::ExitCode;

use biostats::BioError;
use biostats::logging::{Verbosity, init_logging};
use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Store and argument failures carry their own code; anything else is 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<BioError>()
        .map_or(1, BioError::exit_code)
}
