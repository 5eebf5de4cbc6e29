//! Content loader
//!
//! Reads a profile document from disk and hands it to the validator.
//! The document is read once and never written back.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::errors::{SchemaError, SchemaResult, ValidationReport};
use super::types::Profile;
use super::validator::ProfileValidator;

/// Loads and validates one content document.
pub struct ProfileLoader {
    /// Path of the content document
    path: PathBuf,
    validator: ProfileValidator,
}

impl ProfileLoader {
    pub fn new(path: impl Into<PathBuf>, validator: ProfileValidator) -> Self {
        Self {
            path: path.into(),
            validator,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document as untyped JSON.
    ///
    /// I/O failures and JSON syntax errors are reported before any schema
    /// rule runs.
    pub fn read(&self) -> SchemaResult<Value> {
        let content = fs::read_to_string(&self.path).map_err(|e| SchemaError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| SchemaError::Malformed {
            path: self.path.display().to_string(),
            reason: format!("invalid JSON: {}", e),
        })
    }

    /// Reads and validates the document.
    pub fn load(&self) -> SchemaResult<Profile> {
        let document = self.read()?;
        self.validator.validate(&document)
    }

    /// Reads and validates the document, keeping the report even when the
    /// document is valid so warnings can be surfaced.
    pub fn inspect(&self) -> SchemaResult<(Option<Profile>, ValidationReport)> {
        let document = self.read()?;
        Ok(self.validator.check(&document))
    }
}
