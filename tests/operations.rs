//! End-to-end tests: argument parsing, store loading, the operation, and the
//! resulting file contents, run against throwaway store files.

use std::fs;
use std::path::{Path, PathBuf};

use biostats::{BioError, BioReport, Outcome, execute, parse_args, store};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const HEADER: &str = "name,sex,age,height,weight\n";

fn store_with(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("biostats.csv");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn run(args: &[&str], path: &Path) -> Result<Outcome, BioError> {
    let command = parse_args(args)?;
    execute(&command, path)
}

/// Create on an empty store writes a single canonical row.
#[test]
fn test_create_on_empty_store() {
    let (_dir, path) = store_with("");
    run(&["-c", "John", "M", "30", "70", "160"], &path).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{HEADER}John,M,30,70,160\n")
    );
}

/// Read reports sex in long form with metric conversions.
#[test]
fn test_read_prints_converted_units() {
    let (_dir, path) = store_with(&format!("{HEADER}John,M,30,70,160\n"));
    let Outcome::Found(record) = run(&["-r", "John"], &path).unwrap() else {
        panic!("read should find John");
    };
    let report = BioReport::from(&record);
    assert_eq!(report.sex, "MALE");
    assert_eq!(report.height_in, 70);
    assert_eq!(report.height_cm, 177.8);
    assert_eq!(report.weight_lb, 160);
    assert_eq!(report.weight_kg, 72.57);

    // Reading does not touch the file and gives the same answer twice.
    let again = run(&["-r", "john"], &path).unwrap();
    assert_eq!(again, Outcome::Found(record));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{HEADER}John,M,30,70,160\n")
    );
}

/// A second create with the same name fails and leaves the file alone.
#[test]
fn test_create_existing_name_fails() {
    let original = format!("{HEADER}John,M,30,70,160\n");
    let (_dir, path) = store_with(&original);
    let err = run(&["-c", "JOHN", "F", "25", "60", "120"], &path).unwrap_err();
    assert!(matches!(err, BioError::AlreadyExists(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

/// Delete removes the row; deleting again reports the missing record.
#[test]
fn test_delete_then_delete_again() {
    let (_dir, path) = store_with(&format!(
        "{HEADER}Ann,F,41,64,130\nJohn,M,30,70,160\nZed,M,22,75,190\n"
    ));
    let outcome = run(&["-d", "john"], &path).unwrap();
    assert!(matches!(outcome, Outcome::Deleted(r) if r.name == "John"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{HEADER}Ann,F,41,64,130\nZed,M,22,75,190\n")
    );

    let err = run(&["-d", "John"], &path).unwrap_err();
    assert!(matches!(err, BioError::NotFoundRecord(n) if n == "John"));
}

/// Under-age input is rejected before anything is written.
#[test]
fn test_underage_create_is_rejected() {
    let original = format!("{HEADER}John,M,30,70,160\n");
    let (_dir, path) = store_with(&original);
    let err = run(&["-c", "Alice", "F", "17", "60", "100"], &path).unwrap_err();
    assert!(matches!(err, BioError::InvalidAge(a) if a == "17"));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

/// Lowercase input is stored and found under its Title-case name.
#[test]
fn test_name_canonicalization() {
    let (_dir, path) = store_with(HEADER);
    run(&["-c", "john", "m", "30", "70", "160"], &path).unwrap();
    let roster = store::load(&path).unwrap();
    assert_eq!(roster.read("John").unwrap().name, "John");
    assert_eq!(roster.len(), 1);
}

/// Update replaces all fields and keeps the row in place.
#[test]
fn test_update_replaces_record() {
    let (_dir, path) = store_with(&format!("{HEADER}Ann,F,41,64,130\nJohn,M,30,70,160\n"));
    run(&["-u", "ann", "f", "42", "64", "128"], &path).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{HEADER}Ann,F,42,64,128\nJohn,M,30,70,160\n")
    );
}

/// Update of an unknown name fails and leaves the file alone.
#[test]
fn test_update_absent_name_fails() {
    let original = format!("{HEADER}Ann,F,41,64,130\n");
    let (_dir, path) = store_with(&original);
    let err = run(&["-u", "Bob", "M", "40", "70", "180"], &path).unwrap_err();
    assert!(matches!(err, BioError::NotFoundRecord(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

/// Without a store file every operation fails and no file appears.
#[test]
fn test_missing_store_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("biostats.csv");
    let err = run(&["-c", "John", "M", "30", "70", "160"], &path).unwrap_err();
    assert!(matches!(err, BioError::NotFoundFile(_)));
    assert_eq!(err.exit_code(), 5);
    assert!(!path.exists());
}

/// Bad field values surface in validation order with the validation exit code.
#[test]
fn test_invalid_fields() {
    let original = format!("{HEADER}Ann,F,41,64,130\n");
    let (_dir, path) = store_with(&original);
    let err = run(&["-c", "Bo", "X", "30", "70", "160"], &path).unwrap_err();
    assert!(matches!(err, BioError::InvalidSex(_)));
    assert_eq!(err.exit_code(), 3);

    let err = run(&["-c", "Bo", "M", "30", "tall", "160"], &path).unwrap_err();
    assert!(matches!(err, BioError::InvalidHeight(_)));

    let err = run(&["-u", "Ann", "F", "30", "70", "lots"], &path).unwrap_err();
    assert!(matches!(err, BioError::InvalidWeight(_)));
    assert_eq!(err.exit_code(), 3);

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

/// Whitespace around a name is dropped, so a padded name still collides with
/// the stored one and the file stays loadable.
#[test]
fn test_padded_name_matches_stored_name() {
    let original = format!("{HEADER}John,M,30,70,160\n");
    let (_dir, path) = store_with(&original);
    let err = run(&["-c", " john", "F", "25", "60", "120"], &path).unwrap_err();
    assert!(matches!(err, BioError::AlreadyExists(n) if n == "John"));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);

    run(&["-c", "  ann  ", "F", "25", "60", "120"], &path).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{HEADER}John,M,30,70,160\nAnn,F,25,60,120\n")
    );
    let roster = store::load(&path).unwrap();
    assert_eq!(roster.len(), 2);
    assert!(matches!(run(&["-r", " john "], &path).unwrap(), Outcome::Found(r) if r.name == "John"));
    assert!(matches!(run(&["-d", " ann"], &path).unwrap(), Outcome::Deleted(r) if r.name == "Ann"));
}

/// Height and weight are plain integers; negative values are stored as given.
#[test]
fn test_negative_measurements_are_stored() {
    let (_dir, path) = store_with(HEADER);
    run(&["-c", "Ann", "F", "30", "-5", "-10"], &path).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{HEADER}Ann,F,30,-5,-10\n")
    );
    let Outcome::Found(record) = run(&["-r", "ann"], &path).unwrap() else {
        panic!("read should find Ann");
    };
    let report = BioReport::from(&record);
    assert_eq!(report.height_cm, -12.7);
    assert_eq!(report.weight_kg, -4.54);
}
