//! JSON database files.
//!
//! Layout:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "diagnostics": {
//!     "voyant_moteur": { "keywords": ["voyant moteur"], "titre": "...", "urgence": "moyenne" }
//!   }
//! }
//! ```
//!
//! Any other top-level field (such as `metadata`) is ignored.

use anyhow::{Context, Result};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

use super::Database;
use crate::error::DatabaseError;
use crate::models::DiagnosticRecord;

#[derive(Debug, Deserialize)]
pub struct DatabaseFile {
    #[serde(default)]
    pub version: Option<Value>,
    /// Entries in file order. Repeated keys are kept here and rejected on insert.
    #[serde(deserialize_with = "entries_in_file_order")]
    pub diagnostics: Vec<(String, Value)>,
}

fn entries_in_file_order<'de, D>(deserializer: D) -> Result<Vec<(String, Value)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, serde_json::Value)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object of diagnostics keyed by id")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, serde_json::Value>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

impl DatabaseFile {
    pub fn into_database(self) -> Result<Database, DatabaseError> {
        let version = self.version.map(|v| match v {
            Value::String(s) => s,
            other => other.to_string(),
        });

        let mut database = Database::new().with_version(version);
        for (key, body) in self.diagnostics {
            let mut record: DiagnosticRecord =
                serde_json::from_value(body).map_err(|source| DatabaseError::InvalidRecord {
                    key: key.clone(),
                    source,
                })?;
            record.key = key;
            database.insert(record)?;
        }

        Ok(database)
    }
}

/// Load a database file from disk
pub fn load_database(path: &Path) -> Result<Database> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read database {}", path.display()))?;

    let database = Database::from_json_str(&content)
        .with_context(|| format!("Failed to parse database {}", path.display()))?;

    info!(
        path = %path.display(),
        diagnostics = database.len(),
        version = database.version().unwrap_or("unknown"),
        "loaded diagnostic database"
    );

    Ok(database)
}
