use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::{QueryExecutor, Record};
use crate::error::Result;
use crate::specification::Specification;

/// In-memory storage adapter.
///
/// Records are kept in insertion order, which is the "storage order" results
/// come back in. Rows are never mutated by queries, so a loaded repository can
/// be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct MemRepository<E> {
    records: Vec<E>,
}

impl<E> Default for MemRepository<E> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<E: Record> MemRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<E>) -> Self {
        Self { records }
    }

    /// Append a row. The same entity id may be stored more than once, which
    /// is how join fan-out looks to this adapter.
    pub fn insert(&mut self, record: E) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<E: Record + DeserializeOwned> MemRepository<E> {
    /// Load rows from a JSON array file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let records: Vec<E> = serde_json::from_str(&raw)?;
        debug!(path = %path.display(), rows = records.len(), "loaded fixture");
        Ok(Self::with_records(records))
    }
}

impl<E: Record + Clone> QueryExecutor<E> for MemRepository<E> {
    fn find_all(&self, spec: &Specification) -> Result<Vec<E>> {
        let mut seen = HashSet::new();
        let found: Vec<E> = self
            .records
            .iter()
            .filter(|record| spec.matches(*record))
            .filter(|record| !spec.is_distinct() || seen.insert(record.id()))
            .cloned()
            .collect();

        debug!(
            predicates = spec.predicates().len(),
            distinct = spec.is_distinct(),
            scanned = self.records.len(),
            matched = found.len(),
            "executed specification"
        );
        Ok(found)
    }
}
