//! Keeps the persisted palette in step with the in-memory model.
//!
//! The controller reads the model, never mutates it. A failed write is reported
//! to the caller while the in-memory palette stays as it is.

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::store::PaletteStore;
use crate::models::{PaletteEntry, PaletteModel, StoredColor};

/// Result of the startup load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedPalette {
    /// A palette was found in the store
    Stored(PaletteModel),
    /// The store holds nothing yet
    Absent,
}

/// Bridges palette mutations to a `PaletteStore`.
#[derive(Debug)]
pub struct SyncController<S> {
    store: S,
    writes: usize,
}

impl<S: PaletteStore> SyncController<S> {
    /// Wraps a store.
    pub const fn new(store: S) -> Self {
        Self { store, writes: 0 }
    }

    /// Loads the palette, re-deriving every key.
    ///
    /// Entries repeating an earlier key are dropped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreadable, malformed, or contains an
    /// invalid hex color. Nothing is discarded silently.
    pub fn load(&self) -> Result<LoadedPalette> {
        let Some(colors) = self.store.load_palette()? else {
            info!("No stored palette found");
            return Ok(LoadedPalette::Absent);
        };

        let total = colors.len();
        let entries = colors
            .into_iter()
            .enumerate()
            .map(|(index, stored)| {
                PaletteEntry::try_from(stored)
                    .with_context(|| format!("Stored palette entry {index} is invalid"))
            })
            .collect::<Result<Vec<_>>>()?;

        let model = PaletteModel::from_entries(entries);
        if model.len() < total {
            warn!(
                dropped = total - model.len(),
                "Stored palette contained duplicate keys"
            );
        }
        Ok(LoadedPalette::Stored(model))
    }

    /// Writes the full palette to the store.
    ///
    /// # Errors
    ///
    /// Returns the store's write error. The model is not rolled back.
    pub fn persist(&mut self, model: &PaletteModel) -> Result<()> {
        let colors: Vec<StoredColor> = model
            .snapshot()
            .iter()
            .map(PaletteEntry::to_stored)
            .collect();
        self.writes += 1;
        self.store.save_palette(&colors).inspect_err(|err| {
            warn!("Failed to save palette: {err:#}");
        })
    }

    /// Number of write attempts made so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
