//! Human-facing view of a record with metric conversions.

use std::fmt;

use serde::Serialize;

use crate::record::BioRecord;

pub const CM_PER_INCH: f64 = 2.54;
pub const KG_PER_POUND: f64 = 0.453_592_37;

pub fn inches_to_cm(inches: i32) -> f64 {
    f64::from(inches) * CM_PER_INCH
}

pub fn pounds_to_kg(pounds: i32) -> f64 {
    f64::from(pounds) * KG_PER_POUND
}

/// Display-ready copy of a record. Building one never touches the record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BioReport {
    pub name: String,
    pub sex: &'static str,
    pub age: u32,
    pub height_in: i32,
    pub height_cm: f64,
    pub weight_lb: i32,
    pub weight_kg: f64,
}

impl From<&BioRecord> for BioReport {
    fn from(record: &BioRecord) -> Self {
        Self {
            name: record.name.clone(),
            sex: record.sex.label(),
            age: record.age,
            height_in: record.height,
            height_cm: round2(inches_to_cm(record.height)),
            weight_lb: record.weight,
            weight_kg: round2(pounds_to_kg(record.weight)),
        }
    }
}

impl fmt::Display for BioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Sex: {}", self.sex)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(
            f,
            "Height (inches): {} (centimeters): {}",
            self.height_in, self.height_cm
        )?;
        write!(
            f,
            "Weight (pounds): {} (kilos): {}",
            self.weight_lb, self.weight_kg
        )
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
