use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BioError;

/// Youngest age accepted when creating or updating a record.
pub const MIN_AGE: u32 = 18;

/// Biological sex as stored in the roster file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sex {
    F,
    M,
}

impl Sex {
    /// Long form used when printing a record.
    pub fn label(self) -> &'static str {
        match self {
            Sex::F => "FEMALE",
            Sex::M => "MALE",
        }
    }
}

impl FromStr for Sex {
    type Err = BioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "F" => Ok(Sex::F),
            "M" => Ok(Sex::M),
            _ => Err(BioError::InvalidSex(s.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::F => write!(f, "F"),
            Sex::M => write!(f, "M"),
        }
    }
}

/// One row of the roster. Height is in inches, weight in pounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BioRecord {
    pub name: String,
    pub sex: Sex,
    pub age: u32,
    pub height: i32,
    pub weight: i32,
}

/// Unvalidated field values exactly as they were typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInput {
    pub name: String,
    pub sex: String,
    pub age: String,
    pub height: String,
    pub weight: String,
}

impl BioRecord {
    /// Column names of the store file, in order.
    pub const HEADERS: [&'static str; 5] = ["name", "sex", "age", "height", "weight"];

    /// Validate raw input and build a record with a canonical name.
    ///
    /// Fields are checked in a fixed order (sex, age, height, weight) and the
    /// first failure is reported.
    pub fn from_input(input: &RecordInput) -> Result<Self, BioError> {
        let sex: Sex = input.sex.parse()?;
        let age = input
            .age
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|age| *age >= MIN_AGE)
            .ok_or_else(|| BioError::InvalidAge(input.age.clone()))?;
        let height = input
            .height
            .trim()
            .parse::<i32>()
            .map_err(|_| BioError::InvalidHeight(input.height.clone()))?;
        let weight = input
            .weight
            .trim()
            .parse::<i32>()
            .map_err(|_| BioError::InvalidWeight(input.weight.clone()))?;
        let name = canonical_name(&input.name)?;
        Ok(Self {
            name,
            sex,
            age,
            height,
            weight,
        })
    }
}

/// Title-case a name: surrounding whitespace dropped, first character
/// uppercased, the rest lowercased.
pub fn canonical_name(raw: &str) -> Result<String, BioError> {
    let mut chars = raw.trim().chars();
    let first = chars.next().ok_or(BioError::MissingName)?;
    let mut name: String = first.to_uppercase().collect();
    name.push_str(&chars.as_str().to_lowercase());
    Ok(name)
}

/// Key used for case-insensitive name comparison.
pub(crate) fn name_key(name: &str) -> String {
    name.to_uppercase()
}
