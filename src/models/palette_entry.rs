//! Palette entries and their derived identity keys.

use serde::{Deserialize, Serialize};

use super::HexColor;

/// Separator between hex and name in a derived key.
pub const KEY_SEPARATOR: char = '_';

/// Derives the identity key for a color: the hex alone, or `hex_name` when a
/// non-empty name is present.
///
/// # Examples
///
/// ```
/// use swatchbook::models::{derive_key, HexColor};
///
/// let red = HexColor::parse("#ff0000").unwrap();
/// assert_eq!(derive_key(&red, None), "#ff0000");
/// assert_eq!(derive_key(&red, Some("Red")), "#ff0000_Red");
/// ```
#[must_use]
pub fn derive_key(hex: &HexColor, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("{hex}{KEY_SEPARATOR}{name}"),
        _ => hex.to_string(),
    }
}

/// A single color in the palette.
///
/// The key is computed once when the entry is created and never recomputed,
/// so fields are read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    key: String,
    hex: HexColor,
    name: Option<String>,
}

impl PaletteEntry {
    /// Creates an entry, normalizing an empty name to no name.
    #[must_use]
    pub fn new(hex: HexColor, name: Option<String>) -> Self {
        let name = name.filter(|n| !n.is_empty());
        let key = derive_key(&hex, name.as_deref());
        Self { key, hex, name }
    }

    /// The derived identity key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The entry's color.
    #[must_use]
    pub const fn hex(&self) -> &HexColor {
        &self.hex
    }

    /// The display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Converts to the on-disk record (no key).
    #[must_use]
    pub fn to_stored(&self) -> StoredColor {
        StoredColor {
            hex_color: self.hex.to_string(),
            name: self.name.clone(),
        }
    }
}

/// A color record as persisted: hex string plus optional name, never a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredColor {
    /// Hex color string, `#rrggbb`
    pub hex_color: String,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TryFrom<StoredColor> for PaletteEntry {
    type Error = anyhow::Error;

    fn try_from(stored: StoredColor) -> anyhow::Result<Self> {
        let hex = HexColor::parse(&stored.hex_color)?;
        Ok(Self::new(hex, stored.name))
    }
}
