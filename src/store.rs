//! Loading and persisting the roster file.
//!
//! The store is a comma-separated file with a `name,sex,age,height,weight`
//! header. It is read in full at the start of an invocation and rewritten in
//! full after a mutation. There is no locking: two invocations racing on the
//! same file will lose whichever update is written first.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::debug;

use crate::error::BioError;
use crate::record::BioRecord;
use crate::roster::Roster;

/// File name used when no other path is configured.
pub const DEFAULT_STORE: &str = "biostats.csv";

/// Read every row of the store into a roster.
pub fn load(path: &Path) -> Result<Roster, BioError> {
    let file = File::open(path).map_err(|err| open_error(path, err))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .quote(b'"')
        .trim(Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.deserialize::<BioRecord>() {
        records.push(result.map_err(|err| BioError::csv(path, err))?);
    }
    let roster = Roster::from_records(records).map_err(|err| match err {
        BioError::AlreadyExists(name) => BioError::DuplicateRecord {
            path: path.to_path_buf(),
            name,
        },
        other => other,
    })?;
    debug!(path = %path.display(), records = roster.len(), "loaded store");
    Ok(roster)
}

/// Overwrite an existing store with the roster's records.
///
/// The file must already exist; it is never created here.
pub fn persist(path: &Path, roster: &Roster) -> Result<(), BioError> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|err| open_error(path, err))?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .quote(b'"')
        .from_writer(file);

    // Written by hand so an empty roster still leaves a header behind.
    writer
        .write_record(BioRecord::HEADERS)
        .map_err(|err| BioError::csv(path, err))?;
    for record in roster {
        writer
            .serialize(record)
            .map_err(|err| BioError::csv(path, err))?;
    }
    writer.flush().map_err(|err| BioError::io(path, err))?;
    debug!(path = %path.display(), records = roster.len(), "persisted store");
    Ok(())
}

fn open_error(path: &Path, err: io::Error) -> BioError {
    if err.kind() == io::ErrorKind::NotFound {
        BioError::NotFoundFile(path.to_path_buf())
    } else {
        BioError::io(path, err)
    }
}
