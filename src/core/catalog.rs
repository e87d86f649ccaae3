//! The pair catalog: ordered exchange records as supplied upstream.

use crate::core::pair::PairRecord;
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::debug;

/// The ordered collection of all pair records from the exchange data source.
///
/// Records are held exactly as supplied: no deduplication, no sorting. The
/// catalog itself is read-only input; derived indexes are built from it in a
/// separate pass. An empty catalog is valid and simply supports nothing.
#[derive(Debug, Clone, Default)]
pub struct PairCatalog {
    records: Vec<PairRecord>,
}

impl PairCatalog {
    pub fn new(records: Vec<PairRecord>) -> Self {
        Self { records }
    }

    /// Loads a catalog from a JSON array asset on disk.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read catalog file: {}", path.as_ref().display()))?;

        let records: Vec<PairRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file: {}", path.as_ref().display()))?;
        debug!("Loaded catalog with {} pair records", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PairRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<PairRecord>> for PairCatalog {
    fn from(records: Vec<PairRecord>) -> Self {
        Self::new(records)
    }
}
