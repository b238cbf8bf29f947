//! Palette persistence.
//!
//! The palette is stored as a JSON document next to the other resources:
//!
//! ```json
//! {
//!   "$schema": "./colors.schema.json",
//!   "colors": [{ "hex_color": "#ff0000", "name": "Red" }]
//! }
//! ```
//!
//! Keys are never written; they are re-derived when the palette is loaded.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{PALETTE_FILE_NAME, PALETTE_SCHEMA_REF};
use crate::models::StoredColor;

/// Backing store for the palette.
pub trait PaletteStore {
    /// Reads the stored palette.
    ///
    /// Returns `Ok(None)` if nothing has been stored yet. An unreadable or
    /// malformed store is an error, never an empty palette.
    fn load_palette(&self) -> Result<Option<Vec<StoredColor>>>;

    /// Replaces the stored palette with `colors`, in order.
    fn save_palette(&mut self, colors: &[StoredColor]) -> Result<()>;
}

/// On-disk document shape of `colors.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorsDocument {
    /// JSON schema reference for editors
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Palette colors in display order
    pub colors: Vec<StoredColor>,
}

/// Stores the palette in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store for `colors.json` inside a resource directory.
    #[must_use]
    pub fn in_resource_dir(dir: &Path) -> Self {
        Self::new(dir.join(PALETTE_FILE_NAME))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PaletteStore for JsonFileStore {
    fn load_palette(&self) -> Result<Option<Vec<StoredColor>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).context(format!(
            "Failed to read palette file: {}",
            self.path.display()
        ))?;

        let document: ColorsDocument = serde_json::from_str(&content).context(format!(
            "Failed to parse palette file: {}",
            self.path.display()
        ))?;

        info!(
            count = document.colors.len(),
            "Loaded palette from {}",
            self.path.display()
        );
        Ok(Some(document.colors))
    }

    /// Writes the whole palette using temp file + rename, creating the
    /// resource directory if needed.
    fn save_palette(&mut self, colors: &[StoredColor]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).context(format!(
                    "Failed to create resource directory: {}",
                    dir.display()
                ))?;
            }
        }

        let document = ColorsDocument {
            schema: Some(PALETTE_SCHEMA_REF.to_string()),
            colors: colors.to_vec(),
        };
        let content =
            serde_json::to_string_pretty(&document).context("Failed to serialize palette")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp palette file: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp palette file to: {}",
            self.path.display()
        ))?;

        info!(count = colors.len(), "Saved palette to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn stored(hex: &str, name: Option<&str>) -> StoredColor {
        StoredColor {
            hex_color: hex.to_string(),
            name: name.map(String::from),
        }
    }

    #[test]
    fn test_missing_file_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::in_resource_dir(&temp_dir.path().join("resources"));
        assert_eq!(store.load_palette().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("colors.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.load_palette().unwrap_err();
        assert!(err.to_string().contains("Failed to parse palette file"));
    }

    #[test]
    fn test_save_creates_directory_and_roundtrips() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("resources");
        let mut store = JsonFileStore::in_resource_dir(&dir);

        let colors = vec![stored("#ff0000", Some("Red")), stored("#00ff00", None)];
        store.save_palette(&colors).unwrap();

        assert!(dir.join("colors.json").exists());
        assert!(!dir.join("colors.json.tmp").exists());
        assert_eq!(store.load_palette().unwrap(), Some(colors));
    }

    #[test]
    fn test_saved_document_shape() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp_dir.path().join("colors.json"));
        store
            .save_palette(&[stored("#abcdef", None), stored("#123456", Some("Deep"))])
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["$schema"], "./colors.schema.json");
        assert_eq!(value["colors"][0]["hex_color"], "#abcdef");
        assert!(value["colors"][0].get("name").is_none());
        assert_eq!(value["colors"][1]["name"], "Deep");
        assert!(value["colors"][1].get("key").is_none());
    }

    #[test]
    fn test_document_without_schema_loads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("colors.json");
        fs::write(&path, r##"{"colors":[{"hex_color":"#010101"}]}"##).unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(
            store.load_palette().unwrap(),
            Some(vec![stored("#010101", None)])
        );
    }
}
