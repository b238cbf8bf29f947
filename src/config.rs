//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, CONFIG_DIR_ENV, PALETTE_FILE_NAME};

/// Modifier key presses the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKey {
    /// Control pressed alone
    Control,
    /// Shift pressed alone
    Shift,
    /// Alt pressed alone
    Alt,
    /// Alt and Shift pressed together
    AltShift,
}

/// Sampling actions bound to hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleAction {
    /// Sample the color under the pointer
    SampleUnderPointer,
    /// Sample again at the last stored position
    Resample,
}

/// Which modifier keys trigger sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HotkeyScheme {
    /// Control samples under the pointer, Shift re-samples
    #[default]
    CtrlShift,
    /// Alt samples under the pointer, Alt+Shift re-samples
    Alt,
}

impl HotkeyScheme {
    /// Maps a key press to its sampling action under this scheme.
    #[must_use]
    pub const fn action_for(self, key: ModifierKey) -> Option<SampleAction> {
        match (self, key) {
            (Self::CtrlShift, ModifierKey::Control) | (Self::Alt, ModifierKey::Alt) => {
                Some(SampleAction::SampleUnderPointer)
            }
            (Self::CtrlShift, ModifierKey::Shift) | (Self::Alt, ModifierKey::AltShift) => {
                Some(SampleAction::Resample)
            }
            _ => None,
        }
    }
}

/// What to do when no stored palette exists at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MissingStorePolicy {
    /// Start with an empty palette; the resource folder is created on first save
    #[default]
    CreateEmpty,
    /// Refuse to start
    Fail,
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory holding `colors.json` (defaults to `<config dir>/resources`)
    #[serde(default)]
    pub resource_dir: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Hotkey scheme for sampling
    #[serde(default)]
    pub hotkeys: HotkeyScheme,
    /// Behavior when the palette file does not exist
    #[serde(default)]
    pub missing_store: MissingStorePolicy,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Swatchbook/config.toml`
/// - macOS: `~/Library/Application Support/Swatchbook/config.toml`
/// - Windows: `%APPDATA%\Swatchbook\config.toml`
///
/// The directory can be overridden with `SWATCHBOOK_CONFIG_DIR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Uses `SWATCHBOOK_CONFIG_DIR` if set, otherwise the platform directory:
    /// - Linux: `~/.config/Swatchbook/`
    /// - macOS: `~/Library/Application Support/Swatchbook/`
    /// - Windows: `%APPDATA%\Swatchbook\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory holding the palette file.
    pub fn resource_dir(&self) -> Result<PathBuf> {
        match &self.paths.resource_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("resources")),
        }
    }

    /// Full path to the palette file.
    pub fn palette_path(&self) -> Result<PathBuf> {
        Ok(self.resource_dir()?.join(PALETTE_FILE_NAME))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file, defaulting if it is absent.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// The resource directory, if set and present, must be a directory.
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.paths.resource_dir {
            if dir.exists() && !dir.is_dir() {
                anyhow::bail!("Resource path is not a directory: {}", dir.display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.resource_dir, None);
        assert_eq!(config.ui.hotkeys, HotkeyScheme::CtrlShift);
        assert_eq!(config.ui.missing_store, MissingStorePolicy::CreateEmpty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hotkey_schemes() {
        let ctrl = HotkeyScheme::CtrlShift;
        assert_eq!(
            ctrl.action_for(ModifierKey::Control),
            Some(SampleAction::SampleUnderPointer)
        );
        assert_eq!(ctrl.action_for(ModifierKey::Shift), Some(SampleAction::Resample));
        assert_eq!(ctrl.action_for(ModifierKey::Alt), None);

        let alt = HotkeyScheme::Alt;
        assert_eq!(
            alt.action_for(ModifierKey::Alt),
            Some(SampleAction::SampleUnderPointer)
        );
        assert_eq!(alt.action_for(ModifierKey::AltShift), Some(SampleAction::Resample));
        assert_eq!(alt.action_for(ModifierKey::Control), None);
        assert_eq!(alt.action_for(ModifierKey::Shift), None);
    }

    #[test]
    fn test_palette_path_uses_resource_dir() {
        let mut config = Config::new();
        config.paths.resource_dir = Some(PathBuf::from("/tmp/swatches"));
        assert_eq!(
            config.palette_path().unwrap(),
            PathBuf::from("/tmp/swatches/colors.json")
        );
    }

    #[test]
    fn test_validate_rejects_file_as_resource_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not_a_dir");
        fs::write(&file, "").unwrap();

        let mut config = Config::new();
        config.paths.resource_dir = Some(file);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.paths.resource_dir = Some(temp_dir.path().join("res"));
        config.ui.hotkeys = HotkeyScheme::Alt;
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[ui]\nhotkeys = \"Alt\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.ui.hotkeys, HotkeyScheme::Alt);
        assert_eq!(loaded.ui.missing_store, MissingStorePolicy::CreateEmpty);
        assert_eq!(loaded.paths.resource_dir, None);
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[ui\nhotkeys = ").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }
}
