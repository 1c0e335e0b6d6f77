//! Error taxonomy for roster operations.

use std::path::PathBuf;

use thiserror::Error;

/// Every failure a single invocation can end with.
#[derive(Debug, Error)]
pub enum BioError {
    #[error("missing arguments: {0}")]
    MissingArguments(&'static str),

    #[error("wrong option argument '{0}' (expected -c, -r, -u or -d)")]
    InvalidOption(String),

    #[error("no name specified")]
    MissingName,

    #[error("incorrect sex '{0}' (expected F or M)")]
    InvalidSex(String),

    #[error("age '{0}' is not a number or is under 18")]
    InvalidAge(String),

    #[error("height '{0}' is not a number")]
    InvalidHeight(String),

    #[error("weight '{0}' is not a number")]
    InvalidWeight(String),

    #[error("name '{0}' already exists")]
    AlreadyExists(String),

    #[error("name '{0}' does not exist")]
    NotFoundRecord(String),

    #[error("file {} does not exist", .0.display())]
    NotFoundFile(PathBuf),

    /// Two rows in the store resolve to the same case-insensitive name.
    #[error("{}: duplicate record for '{name}'", .path.display())]
    DuplicateRecord { path: PathBuf, name: String },

    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl BioError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// The command line itself was malformed.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::MissingArguments(_) | Self::InvalidOption(_) | Self::MissingName
        )
    }

    /// One of the record fields failed validation.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSex(_)
                | Self::InvalidAge(_)
                | Self::InvalidHeight(_)
                | Self::InvalidWeight(_)
        )
    }

    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        if self.is_usage_error() {
            return 2;
        }
        if self.is_validation_error() {
            return 3;
        }
        match self {
            Self::AlreadyExists(_) | Self::NotFoundRecord(_) => 4,
            _ => 5,
        }
    }
}
