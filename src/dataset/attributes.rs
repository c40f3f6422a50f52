//! Per-category attribute table.
//!
//! Attributes are sourced from a single JSON document mapping each category
//! name to an arbitrary payload. Payloads are opaque to this crate: they are
//! held as raw `serde_json::Value`s and passed through to samples unmodified.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::utils::error::{FantasticBeastsError, Result};

/// Read-only mapping from category name to its attribute payload.
#[derive(Debug, Clone)]
pub struct AttributeTable {
    entries: Map<String, Value>,
}

impl AttributeTable {
    /// Load the table from a JSON file.
    ///
    /// The top-level value must be an object keyed by category name. The
    /// payloads themselves are not validated against [`crate::CATEGORIES`];
    /// a key is only required once a sample of that category is retrieved.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|e| {
            FantasticBeastsError::Config(format!(
                "cannot read attribute file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let doc: Value = serde_json::from_str(&raw).map_err(|e| {
            FantasticBeastsError::Config(format!(
                "attribute file '{}' is not valid JSON: {}",
                path.display(),
                e
            ))
        })?;

        match doc {
            Value::Object(entries) => {
                debug!(
                    "Loaded {} attribute entries from '{}'",
                    entries.len(),
                    path.display()
                );
                Ok(Self { entries })
            }
            other => Err(FantasticBeastsError::Config(format!(
                "attribute file '{}' must hold a JSON object at the top level, found {}",
                path.display(),
                json_type_name(&other)
            ))),
        }
    }

    /// Look up the attribute payload for a category token.
    pub fn get(&self, category: &str) -> Result<&Value> {
        self.entries
            .get(category)
            .ok_or_else(|| FantasticBeastsError::UnknownCategory(category.to_string()))
    }

    /// Whether the table holds an entry for this category.
    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
