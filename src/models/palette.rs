//! The ordered, user-curated palette.
//!
//! `PaletteModel` is the only place the entry sequence is mutated. Keys are
//! unique: merge-insert is the sole way to add an entry and it refuses
//! duplicates.

use super::PaletteEntry;

/// Where a merge-insert places a new entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before all existing entries
    Front,
    /// After all existing entries
    End,
}

/// Ordered collection of palette entries with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteModel {
    entries: Vec<PaletteEntry>,
}

impl PaletteModel {
    /// Creates an empty palette.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a palette from entries in order, dropping later duplicates by key.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = PaletteEntry>) -> Self {
        let mut model = Self::new();
        for entry in entries {
            model.merge_insert(entry, InsertPosition::End);
        }
        model
    }

    /// Returns true if an entry with this key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    /// Current index of the entry with this key.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key() == key)
    }

    /// Looks up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.key() == key)
    }

    /// The last entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PaletteEntry> {
        self.entries.last()
    }

    /// Inserts `entry` at `position` unless its key is already present.
    ///
    /// Returns true if the palette changed.
    pub fn merge_insert(&mut self, entry: PaletteEntry, position: InsertPosition) -> bool {
        if self.contains(entry.key()) {
            return false;
        }
        match position {
            InsertPosition::Front => self.entries.insert(0, entry),
            InsertPosition::End => self.entries.push(entry),
        }
        true
    }

    /// Removes the entry with this key. Returns the removed entry, if any.
    pub fn remove(&mut self, key: &str) -> Option<PaletteEntry> {
        let index = self.index_of(key)?;
        Some(self.entries.remove(index))
    }

    /// Moves the entry keyed `source_key` to the position of `destination_key`.
    ///
    /// The source is taken out first, then reinserted at the destination's
    /// original index, which places it after the destination when moving
    /// forward and before it when moving backward. All other entries keep their
    /// relative order. If either key is unknown nothing happens.
    ///
    /// Returns `(from, to)` indices when the move was performed.
    pub fn move_to_index(
        &mut self,
        source_key: &str,
        destination_key: &str,
    ) -> Option<(usize, usize)> {
        let from = self.index_of(source_key)?;
        let to = self.index_of(destination_key)?;

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Some((from, to))
    }

    /// Read-only view of the entries in display order.
    #[must_use]
    pub fn snapshot(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
