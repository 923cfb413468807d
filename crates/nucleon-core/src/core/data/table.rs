use super::builtin::NUCLEAR_DATA;
use super::{DataError, NuclideRecord};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CsvRecord {
    name: String,
    a: u32,
    z: u32,
    mass: f64,
}

/// Name-keyed repository of measured nuclides.
#[derive(Debug, Clone, Default)]
pub struct NuclideTable {
    records: BTreeMap<String, NuclideRecord>,
}

impl NuclideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the compiled-in measurements.
    pub fn builtin() -> Result<Self, DataError> {
        let mut table = Self::new();
        for (name, &(a, z, mass)) in NUCLEAR_DATA.entries() {
            table.insert(NuclideRecord::new(name, a, z, mass)?);
        }
        Ok(table)
    }

    /// Inserts a record, replacing any existing record with the same name.
    pub fn insert(&mut self, record: NuclideRecord) -> Option<NuclideRecord> {
        self.records.insert(record.name.clone(), record)
    }

    /// Reads `name,a,z,mass` rows (with header) and inserts them. Returns the row count.
    pub fn extend_from_csv(&mut self, path: &Path) -> Result<usize, DataError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| DataError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut count = 0;
        for result in reader.deserialize::<CsvRecord>() {
            let row = result.map_err(|e| DataError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            let record = NuclideRecord::new(row.name.trim(), row.a, row.z, row.mass)?;
            if self.insert(record).is_some() {
                debug!(name = row.name.trim(), "Replaced existing nuclide record.");
            }
            count += 1;
        }
        Ok(count)
    }

    pub fn get(&self, name: &str) -> Result<&NuclideRecord, DataError> {
        self.records.get(name).ok_or_else(|| DataError::NotFound {
            name: name.to_string(),
            available: self.names().collect::<Vec<_>>().join(", "),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
