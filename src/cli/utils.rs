//! Output helpers for the command handlers.

use std::io::{self, Write};

use anyhow::{Context, Result};
use biostats::BioReport;

use crate::cli::common::OutputFormatArg;

/// Render a report in the requested format.
pub fn render_report(report: &BioReport, format: OutputFormatArg) -> Result<String> {
    match format {
        OutputFormatArg::Text => Ok(report.to_string()),
        OutputFormatArg::Json => {
            serde_json::to_string_pretty(report).context("failed to serialize record as JSON")
        }
    }
}

/// Write a rendered report to stdout.
pub fn print_report(report: &BioReport, format: OutputFormatArg) -> Result<()> {
    let rendered = render_report(report, format)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("failed to write to stdout")?;
    Ok(())
}
