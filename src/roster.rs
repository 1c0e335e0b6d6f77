use std::collections::HashMap;

use crate::error::BioError;
use crate::record::{BioRecord, canonical_name, name_key};

/// Ordered, case-insensitively keyed collection of records.
///
/// Iteration follows insertion order, which is also the order rows are
/// written back to the store. Every mutating operation validates first, so a
/// failed call leaves the roster untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    records: Vec<BioRecord>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from records in file order, rejecting name collisions.
    pub fn from_records<I>(records: I) -> Result<Self, BioError>
    where
        I: IntoIterator<Item = BioRecord>,
    {
        let mut roster = Self::new();
        for record in records {
            roster.create(record)?;
        }
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BioRecord> {
        self.records.iter()
    }

    pub fn get(&self, name: &str) -> Option<&BioRecord> {
        self.index.get(&name_key(name)).map(|&idx| &self.records[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name_key(name))
    }

    /// Append a new record; fails if the name is already taken.
    pub fn create(&mut self, record: BioRecord) -> Result<(), BioError> {
        let key = name_key(&record.name);
        if self.index.contains_key(&key) {
            return Err(BioError::AlreadyExists(record.name));
        }
        self.index.insert(key, self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn read(&self, name: &str) -> Result<&BioRecord, BioError> {
        self.get(name)
            .ok_or_else(|| BioError::NotFoundRecord(display_name(name)))
    }

    /// Replace every field of an existing record, keeping its position.
    pub fn update(&mut self, record: BioRecord) -> Result<(), BioError> {
        let idx = *self
            .index
            .get(&name_key(&record.name))
            .ok_or_else(|| BioError::NotFoundRecord(record.name.clone()))?;
        self.records[idx] = record;
        Ok(())
    }

    /// Remove a record and return it.
    pub fn delete(&mut self, name: &str) -> Result<BioRecord, BioError> {
        let idx = self
            .index
            .remove(&name_key(name))
            .ok_or_else(|| BioError::NotFoundRecord(display_name(name)))?;
        let removed = self.records.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Ok(removed)
    }
}

fn display_name(name: &str) -> String {
    canonical_name(name).unwrap_or_default()
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a BioRecord;
    type IntoIter = std::slice::Iter<'a, BioRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
