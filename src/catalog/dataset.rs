//! Loading and writing the JSON movie catalog.
//!
//! Entries are kept as raw JSON values so untouched movies are written back
//! with their original keys, key order and any extra fields.

use super::movie::{is_placeholder, MovieRecord};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors that can occur while reading or writing a catalog file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog file {0:?} does not contain a JSON array")]
    NotAnArray(PathBuf),
}

/// An ordered list of catalog entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    entries: Vec<Value>,
}

impl Dataset {
    pub fn from_entries(entries: Vec<Value>) -> Self {
        Self { entries }
    }

    /// Read a catalog file. The file must hold a JSON array.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path)?;
        match serde_json::from_str(&content)? {
            Value::Array(entries) => Ok(Self { entries }),
            _ => Err(DatasetError::NotAnArray(path.to_path_buf())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.entries.get(index)
    }

    /// Indices of all placeholder entries, in catalog order.
    pub fn placeholder_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| is_placeholder(entry))
            .map(|(index, _)| index)
            .collect()
    }

    /// Replace the entry at `index` with `record`.
    ///
    /// Returns false, leaving the dataset untouched, if `index` is out of range.
    pub fn replace(&mut self, index: usize, record: &MovieRecord) -> Result<bool, DatasetError> {
        let Some(slot) = self.entries.get_mut(index) else {
            return Ok(false);
        };
        *slot = serde_json::to_value(record)?;
        Ok(true)
    }

    /// Pretty-printed JSON with two-space indentation. Non-ASCII text is
    /// written as-is, not escaped.
    pub fn to_pretty_json(&self) -> Result<String, DatasetError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Write the dataset to `path`, replacing any existing file.
    ///
    /// The content goes to a temporary file next to `path` which is then
    /// renamed over it, so readers never observe a half-written catalog.
    pub fn write_to(&self, path: &Path) -> Result<(), DatasetError> {
        let content = self.to_pretty_json()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(dir)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;

        // Keep the permissions of the file being replaced
        if let Ok(metadata) = fs::metadata(path) {
            temp_file
                .as_file()
                .set_permissions(metadata.permissions())?;
        }

        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
