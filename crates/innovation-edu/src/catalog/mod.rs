//! The read-only business-model catalog and archetype registry.
//!
//! Records and archetypes are loaded (or built in) once at process
//! start, validated and normalized in the process, and never mutated
//! afterwards. Everything downstream of this module can assume a
//! well-formed shape: non-empty ids and names, unique ids, lowercase
//! tag sets.

mod archetypes;
mod domain;
mod loader;
mod sample;

pub use archetypes::{Archetype, ArchetypeRegistry};
pub use domain::{BusinessModel, Difficulty, MaturityLevel, ModelId};
pub use loader::CatalogError;

use std::path::Path;

/// Validated, ordered collection of business-model records.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<BusinessModel>,
}

impl Catalog {
    /// Validate and normalize raw records into a catalog.
    ///
    /// Rejects records with an empty `id` or `name` and duplicate ids;
    /// lowercases and trims every tag. Original record order is kept,
    /// since the ranking fallback path surfaces records in catalog
    /// order.
    pub fn from_records(records: Vec<BusinessModel>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::BTreeSet::new();
        let mut normalized = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            if record.id.0.trim().is_empty() {
                return Err(CatalogError::MissingId { index });
            }
            if record.name.trim().is_empty() {
                return Err(CatalogError::MissingName {
                    id: record.id.0.clone(),
                });
            }
            if !seen.insert(record.id.0.clone()) {
                return Err(CatalogError::DuplicateId(record.id.0.clone()));
            }
            normalized.push(record.normalized());
        }

        Ok(Self {
            records: normalized,
        })
    }

    /// Load a catalog from a JSON array of records.
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        let records: Vec<BusinessModel> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Import a catalog from a CSV export (one record per row,
    /// `;`-separated list cells).
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        loader::records_from_csv(reader).and_then(Self::from_records)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(std::io::BufReader::new(file))
    }

    /// Built-in teaching catalog used by the demo command, tests, and
    /// as the server fallback when no data path is configured.
    pub fn sample() -> Self {
        Self::from_records(sample::sample_records()).expect("built-in catalog is well formed")
    }

    pub fn records(&self) -> &[BusinessModel] {
        &self.records
    }

    pub fn get(&self, id: &ModelId) -> Option<&BusinessModel> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
