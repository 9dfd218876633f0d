//! Read-only reference table with postal code and city indices.

use std::collections::HashMap;

use atelier_core::{AtelierError, Result};
use log::debug;

use crate::postal::postal_key;
use crate::record::{LocationRecord, ResolvedLocation};
use crate::resolver::resolve;

/// Reference rows in their original order, plus lookup indices.
///
/// When several rows share a postal code or city, the earliest row wins.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    records: Vec<LocationRecord>,
    by_postal: HashMap<String, usize>,
    by_city: HashMap<String, usize>,
}

fn city_key(city: &str) -> String {
    city.trim().to_uppercase()
}

impl LocationTable {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        let mut by_postal = HashMap::with_capacity(records.len());
        let mut by_city = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            by_postal.entry(postal_key(&record.postal_code)).or_insert(i);
            by_city.entry(city_key(&record.city)).or_insert(i);
        }
        debug!(
            "location table: {} rows, {} postal codes, {} cities",
            records.len(),
            by_postal.len(),
            by_city.len()
        );
        Self {
            records,
            by_postal,
            by_city,
        }
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row whose postal code matches `code`, ignoring spaces and case.
    pub fn find_postal(&self, code: &str) -> Option<&LocationRecord> {
        self.by_postal
            .get(&postal_key(code))
            .map(|&i| &self.records[i])
    }

    /// First row whose city equals `name`, ignoring case but not accents.
    pub fn find_city(&self, name: &str) -> Option<&LocationRecord> {
        self.by_city.get(&city_key(name)).map(|&i| &self.records[i])
    }

    pub fn resolve(&self, identifier: &str) -> Option<ResolvedLocation> {
        resolve(identifier, self)
    }

    /// Like [`LocationTable::resolve`], but a miss is a `NotFound` error.
    pub fn require(&self, identifier: &str) -> Result<ResolvedLocation> {
        self.resolve(identifier)
            .ok_or_else(|| AtelierError::NotFound(identifier.trim().to_string()))
    }
}

impl From<Vec<LocationRecord>> for LocationTable {
    fn from(records: Vec<LocationRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<LocationRecord> for LocationTable {
    fn from_iter<I: IntoIterator<Item = LocationRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
