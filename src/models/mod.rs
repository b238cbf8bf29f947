//! Data models for colors and the palette.
//!
//! This module contains the color-space types (RGB, hex, HSL) and the palette
//! structures built on them. Models are independent of I/O and event handling.

pub mod hex;
pub mod hsl;
pub mod palette;
pub mod palette_entry;
pub mod rgb;

// Re-export all model types
pub use hex::HexColor;
pub use hsl::HslColor;
pub use palette::{InsertPosition, PaletteModel};
pub use palette_entry::{derive_key, PaletteEntry, StoredColor};
pub use rgb::RgbColor;
