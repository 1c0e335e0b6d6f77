//! Command-line interface wiring for the `biostats` binary.
//!
//! clap owns the ambient options; the operation flag and its operands are
//! collected verbatim and handed to [`biostats::parse_args`].

use std::path::PathBuf;

use anyhow::Result;
use biostats::store::DEFAULT_STORE;
use biostats::{BioReport, Outcome, execute, parse_args};
use clap::Parser;
use tracing::debug;

pub mod common;
pub mod utils;

use common::OutputFormatArg;
use utils::print_report;

/// Parsed CLI entrypoint for the `biostats` binary.
#[derive(Parser, Debug)]
#[command(
    name = "biostats",
    version,
    about = "Keep a roster of biometric records in a CSV file",
    after_help = "Operations:\n  \
        -c NAME SEX AGE HEIGHT WEIGHT   create a record\n  \
        -u NAME SEX AGE HEIGHT WEIGHT   replace an existing record\n  \
        -r NAME                         print a record\n  \
        -d NAME                         delete a record\n\n\
        Height is in inches, weight in pounds. Options must come before the operation.\n\
        -h and -V always print help and version, so they are not operation flags."
)]
pub struct Cli {
    /// Roster file to read and rewrite. It must already exist.
    #[arg(long, env = "BIOSTATS_FILE", default_value = DEFAULT_STORE)]
    pub file: PathBuf,

    /// How `-r` prints a record.
    #[arg(long, env = "BIOSTATS_FORMAT", default_value_t = OutputFormatArg::Text, value_enum)]
    pub format: OutputFormatArg,

    /// Increase log output (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Operation flag followed by its operands.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Execute the requested operation.
pub fn run(cli: Cli) -> Result<()> {
    let command = parse_args(&cli.args)?;
    debug!(?command, file = %cli.file.display(), "dispatching");
    if let Outcome::Found(record) = execute(&command, &cli.file)? {
        print_report(&BioReport::from(&record), cli.format)?;
    }
    Ok(())
}
