//! Persisted lookup from logical deployment unit to derived identifier.
//!
//! Out-of-band tooling reads this file to address a deployed unit without
//! recomputing names.

use std::collections::BTreeMap;
use std::path::Path;

use deploykit_common::error::{DeployError, Result};
use serde::{Deserialize, Serialize};

use crate::engine::NameEngine;

/// Flat mapping of logical unit name to identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackLookup {
    entries: BTreeMap<String, String>,
}

impl StackLookup {
    /// Builds the lookup for the given logical units.
    #[must_use]
    pub fn build<S: AsRef<str>>(names: &NameEngine, units: &[S]) -> Self {
        let entries = units
            .iter()
            .map(|unit| {
                let unit = unit.as_ref();
                (unit.to_string(), names.identifier(unit))
            })
            .collect();
        Self { entries }
    }

    /// Identifier recorded for `unit`, if any.
    #[must_use]
    pub fn get(&self, unit: &str) -> Option<&str> {
        self.entries.get(unit).map(String::as_str)
    }

    /// Number of recorded units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no unit is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(unit, identifier)` pairs in unit order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Writes the lookup as a pretty-printed JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| DeployError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::info!(path = %path.display(), units = self.len(), "wrote stack lookup");
        Ok(())
    }

    /// Reads a previously written lookup file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DeployError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}
