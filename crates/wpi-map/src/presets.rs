//! Persistent store of named column mappings.
//!
//! Presets live in a single JSON document under the store directory, so an
//! operator can reapply a saved mapping to a recurring source format. A
//! malformed document reads as an empty list rather than an error; the next
//! save rewrites it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use wpi_model::ColumnMapping;

use crate::error::{PresetError, Result};

/// File name of the preset list inside the store directory.
const PRESETS_FILE: &str = "presets.json";

/// A saved, reusable column mapping. Created on explicit save and never
/// mutated; duplicate names coexist under distinct ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingPreset {
    pub id: String,
    pub name: String,
    pub mapping: ColumnMapping,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// File-backed preset store.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    /// Opens a store rooted at the given directory, creating it if needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|source| PresetError::CreateDir {
            path: base_dir.clone(),
            source,
        })?;
        Ok(Self {
            path: base_dir.join(PRESETS_FILE),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a new preset under a fresh id. Existing presets with the same
    /// name are left untouched.
    pub fn save(&self, name: &str, mapping: &ColumnMapping) -> Result<MappingPreset> {
        let mut presets = self.list()?;
        let created_at = Utc::now().to_rfc3339();
        let preset = MappingPreset {
            id: fresh_id(name, &created_at, presets.len()),
            name: name.to_string(),
            mapping: mapping.clone(),
            created_at,
        };
        presets.push(preset.clone());
        self.write(&presets)?;
        Ok(preset)
    }

    /// All presets in save order. A missing or unparseable file reads as an
    /// empty list.
    pub fn list(&self) -> Result<Vec<MappingPreset>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|source| PresetError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&contents).unwrap_or_default())
    }

    /// Looks up a preset by id.
    pub fn find(&self, id: &str) -> Result<Option<MappingPreset>> {
        Ok(self.list()?.into_iter().find(|preset| preset.id == id))
    }

    /// The most recently saved preset with the given name.
    pub fn find_by_name(&self, name: &str) -> Result<Option<MappingPreset>> {
        Ok(self
            .list()?
            .into_iter()
            .rev()
            .find(|preset| preset.name == name))
    }

    /// Removes a preset by id. Returns false when no such preset exists.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut presets = self.list()?;
        let before = presets.len();
        presets.retain(|preset| preset.id != id);
        if presets.len() == before {
            return Ok(false);
        }
        self.write(&presets)?;
        Ok(true)
    }

    fn write(&self, presets: &[MappingPreset]) -> Result<()> {
        let json = serde_json::to_string_pretty(presets)?;
        fs::write(&self.path, json).map_err(|source| PresetError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Derives a stable opaque id from the name, timestamp and list position.
fn fresh_id(name: &str, created_at: &str, position: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update([0u8]);
    hasher.update(created_at.as_bytes());
    hasher.update([0u8]);
    hasher.update(position.to_le_bytes());
    hex::encode(&hasher.finalize()[..8])
}
