//! Plugin index loading and record types.
//!
//! The index is a JSON array of plugin records as published by the
//! registry. Deserialization is the schema check: `name` is required,
//! everything else is optional metadata with defaults, and unknown fields
//! are ignored since registries publish more than the renderer consumes.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a plugin index.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Index not found at {0}")]
    IndexNotFound(PathBuf),

    #[error("Failed to read index: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse index: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A plugin author as published in the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A single plugin record from the registry index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plugin {
    /// Unique plugin name. The only required field.
    pub name: String,
    /// One-line summary shown under the name.
    #[serde(default)]
    pub summary: String,
    /// Long-form plain-text description, windowed before display.
    #[serde(default)]
    pub description_text: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub version: Option<String>,
    /// ISO date (e.g. "2021-04-13") of the latest release.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub python_version: Option<String>,
    /// Trove-style classifier strings (e.g. "Operating System :: POSIX :: Linux").
    #[serde(default)]
    pub operating_system: Vec<String>,
    /// Category labels grouped by dimension (e.g. "Workflow step").
    #[serde(default)]
    pub category: BTreeMap<String, Vec<String>>,
}

/// A loaded plugin index.
#[derive(Debug, Clone)]
pub struct Registry {
    pub plugins: Vec<Plugin>,
}

impl Registry {
    /// Load a plugin index from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::IndexNotFound` if the file doesn't exist.
    /// Returns `RegistryError::ReadError` if the file cannot be read.
    /// Returns `RegistryError::ParseError` if the JSON doesn't match the
    /// record schema.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        if !path.exists() {
            return Err(RegistryError::IndexNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let plugins: Vec<Plugin> = serde_json::from_str(&contents)?;

        Ok(Self { plugins })
    }

    #[must_use]
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }
}
