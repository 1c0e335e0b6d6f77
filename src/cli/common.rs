//! Shared clap helper types.

use clap::ValueEnum;

/// Formats available when printing a record.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Labelled lines, one field per line.
    Text,
    /// A single JSON object.
    Json,
}
