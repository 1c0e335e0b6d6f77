//! Turns positional arguments into a [`Command`] and runs it against a store.

use std::path::Path;

use tracing::{info, warn};

use crate::error::BioError;
use crate::record::{BioRecord, RecordInput, canonical_name};
use crate::store;

/// One operation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(RecordInput),
    Read(String),
    Update(RecordInput),
    Delete(String),
}

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(BioRecord),
    Found(BioRecord),
    Updated(BioRecord),
    Deleted(BioRecord),
}

/// Parse `<flag> <name> [<sex> <age> <height> <weight>]`.
///
/// The flag is matched case-insensitively. Field values are not validated
/// here; that happens in [`execute`] once the store has been loaded.
pub fn parse_args<I, S>(args: I) -> Result<Command, BioError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    let Some(flag) = args.first() else {
        return Err(BioError::MissingArguments("option or name not specified"));
    };
    let flag = flag.to_lowercase();
    let takes_fields = match flag.as_str() {
        "-c" | "-u" => true,
        "-r" | "-d" => false,
        _ => return Err(BioError::InvalidOption(flag.clone())),
    };
    let name = args
        .get(1)
        .filter(|name| !name.trim().is_empty())
        .ok_or(BioError::MissingName)?
        .clone();

    let expected = if takes_fields { 6 } else { 2 };
    if args.len() > expected {
        warn!(ignored = ?&args[expected..], "ignoring surplus arguments");
    }

    if !takes_fields {
        return Ok(if flag == "-r" {
            Command::Read(name)
        } else {
            Command::Delete(name)
        });
    }

    let [sex, age, height, weight] = match &args[2..args.len().min(6)] {
        [sex, age, height, weight] => [sex, age, height, weight].map(String::clone),
        _ => {
            return Err(BioError::MissingArguments(
                "expected <name> <sex> <age> <height> <weight>",
            ));
        }
    };
    let input = RecordInput {
        name,
        sex,
        age,
        height,
        weight,
    };
    Ok(if flag == "-c" {
        Command::Create(input)
    } else {
        Command::Update(input)
    })
}

/// Load the store at `path`, apply `command`, and persist if it mutated.
pub fn execute(command: &Command, path: &Path) -> Result<Outcome, BioError> {
    let mut roster = store::load(path)?;
    match command {
        Command::Create(input) => {
            let record = BioRecord::from_input(input)?;
            roster.create(record.clone())?;
            store::persist(path, &roster)?;
            info!(name = %record.name, "created record");
            Ok(Outcome::Created(record))
        }
        Command::Update(input) => {
            let record = BioRecord::from_input(input)?;
            roster.update(record.clone())?;
            store::persist(path, &roster)?;
            info!(name = %record.name, "updated record");
            Ok(Outcome::Updated(record))
        }
        Command::Read(name) => {
            let record = roster.read(&canonical_name(name)?)?;
            Ok(Outcome::Found(record.clone()))
        }
        Command::Delete(name) => {
            let removed = roster.delete(&canonical_name(name)?)?;
            store::persist(path, &roster)?;
            info!(name = %removed.name, "deleted record");
            Ok(Outcome::Deleted(removed))
        }
    }
}
