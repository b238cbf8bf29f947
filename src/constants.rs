//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and on-disk file names.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Swatchbook";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "SWATCHBOOK_CONFIG_DIR";

/// File name of the stored palette inside the resource directory.
pub const PALETTE_FILE_NAME: &str = "colors.json";

/// Schema reference written into every stored palette.
pub const PALETTE_SCHEMA_REF: &str = "./colors.schema.json";
