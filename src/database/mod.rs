//! Insertion-ordered, append-only collection of diagnostic records
//!
//! Iteration order is insertion order, which the matcher relies on to break
//! score ties. Database files keep the key order of their `diagnostics`
//! object, and a key repeated inside that object is rejected.

mod file;

pub use file::{load_database, DatabaseFile};

use std::collections::HashSet;

use crate::error::DatabaseError;
use crate::models::DiagnosticRecord;

/// Records compiled into the binary
const BUILTIN_DATABASE: &str = include_str!("../../data/diagnostics.json");

#[derive(Debug, Clone, Default)]
pub struct Database {
    version: Option<String>,
    records: Vec<DiagnosticRecord>,
    keys: HashSet<String>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// The records shipped with the application
    pub fn builtin() -> Result<Self, DatabaseError> {
        Self::from_json_str(BUILTIN_DATABASE)
    }

    /// Parse a database document (see [`DatabaseFile`])
    pub fn from_json_str(content: &str) -> Result<Self, DatabaseError> {
        let file: DatabaseFile = serde_json::from_str(content)?;
        file.into_database()
    }

    pub(crate) fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    /// Append a record.
    ///
    /// Fails when the key is empty or already present, or when the record has
    /// no usable keyword. The database is unchanged on failure.
    pub fn insert(&mut self, record: DiagnosticRecord) -> Result<(), DatabaseError> {
        if record.key.trim().is_empty() {
            return Err(DatabaseError::EmptyKey);
        }
        if self.contains_key(&record.key) {
            return Err(DatabaseError::DuplicateKey(record.key));
        }
        if !record.is_matchable() {
            return Err(DatabaseError::NoKeywords(record.key));
        }

        self.keys.insert(record.key.clone());
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&DiagnosticRecord> {
        self.records.iter().find(|r| r.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiagnosticRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Total number of keywords across all records
    pub fn keyword_count(&self) -> usize {
        self.records.iter().map(|r| r.keywords.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Database {
    type Item = &'a DiagnosticRecord;
    type IntoIter = std::slice::Iter<'a, DiagnosticRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
