//! Dataset registry definitions
//!
//! The built-in registry is parsed once from `datasets.toml`; a user file in
//! the same format can replace it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use lazy_static::lazy_static;
use log::warn;

use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // Parse the embedded registry on first use
    static ref BUILTIN_REGISTRY: DatasetRegistry = {
        let content = include_str!("../../datasets.toml");
        DatasetRegistry::from_toml_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in dataset registry: {}", e);
            DatasetRegistry::default()
        })
    };
}

/// Built-in dataset registry
pub fn builtin_registry() -> &'static DatasetRegistry {
    &BUILTIN_REGISTRY
}

/// One downloadable dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetEntry {
    pub name: String,
    /// Source URL (`http(s)://` or `file://`)
    pub url: String,
    /// File name inside the cache directory
    pub file: String,
    /// Expected lowercase hex SHA-256 of the file
    pub sha256: Option<String>,
    pub description: String,
}

/// Datasets by name
#[derive(Debug, Clone, Default)]
pub struct DatasetRegistry {
    entries: BTreeMap<String, DatasetEntry>,
}

impl DatasetRegistry {
    /// Parse a registry from a TOML string
    pub fn from_toml_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| GeoError::ParseError(format!("Failed to parse TOML: {}", e)))?;

        let mut registry = DatasetRegistry::default();
        let Some(table) = toml_value.get("datasets").and_then(|v| v.as_table()) else {
            return Ok(registry);
        };

        for (name, value) in table {
            let field = |key: &str| value.get(key).and_then(|v| v.as_str()).map(str::to_string);

            let url = field("url")
                .ok_or_else(|| GeoError::ParseError(format!("dataset '{}' has no url", name)))?;
            let file = field("file")
                .ok_or_else(|| GeoError::ParseError(format!("dataset '{}' has no file", name)))?;
            if file.contains('/') || file.contains('\\') {
                return Err(GeoError::ParseError(format!("dataset '{}' file must be a bare file name", name)));
            }

            registry.entries.insert(name.clone(), DatasetEntry {
                name: name.clone(),
                url,
                file,
                sha256: field("sha256").map(|s| s.to_lowercase()),
                description: field("description").unwrap_or_default(),
            });
        }

        Ok(registry)
    }

    /// Load a registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GeoResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Get a dataset by name
    pub fn get(&self, name: &str) -> GeoResult<&DatasetEntry> {
        self.entries.get(name)
            .ok_or_else(|| GeoError::UnknownDataset(name.to_string()))
    }

    /// All datasets, sorted by name
    pub fn entries(&self) -> impl Iterator<Item = &DatasetEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
