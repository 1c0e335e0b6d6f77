//! Core library for the biometric roster: records, the CSV store, and the
//! create/read/update/delete operations over them.

mod dispatch;
mod error;
pub mod logging;
mod record;
mod report;
mod roster;
pub mod store;

pub use dispatch::{Command, Outcome, execute, parse_args};
pub use error::BioError;
pub use record::{BioRecord, MIN_AGE, RecordInput, Sex, canonical_name};
pub use report::{BioReport, CM_PER_INCH, KG_PER_POUND, inches_to_cm, pounds_to_kg};
pub use roster::Roster;
