//! Shared test fixtures for session and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::rc::Rc;
use swatchbook::models::{RgbColor, StoredColor};
use swatchbook::services::{ColorCapture, PaletteStore, ScreenPos, ScreenSampler};
use tempfile::TempDir;

/// In-memory palette store with switchable failure modes.
///
/// Clones share their contents, so a test can keep a handle while the session
/// owns the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryStoreState>>,
}

#[derive(Debug, Default)]
struct MemoryStoreState {
    stored: Option<Vec<StoredColor>>,
    corrupt: bool,
    fail_writes: bool,
    saves: usize,
}

impl MemoryStore {
    /// A store holding `colors`.
    pub fn with_colors(colors: Vec<StoredColor>) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().stored = Some(colors);
        store
    }

    /// A store whose reads fail.
    pub fn corrupt() -> Self {
        let store = Self::default();
        store.inner.borrow_mut().corrupt = true;
        store
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    pub fn stored(&self) -> Option<Vec<StoredColor>> {
        self.inner.borrow().stored.clone()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.inner.borrow().saves
    }
}

impl PaletteStore for MemoryStore {
    fn load_palette(&self) -> Result<Option<Vec<StoredColor>>> {
        let state = self.inner.borrow();
        if state.corrupt {
            anyhow::bail!("palette store is corrupt");
        }
        Ok(state.stored.clone())
    }

    fn save_palette(&mut self, colors: &[StoredColor]) -> Result<()> {
        let mut state = self.inner.borrow_mut();
        if state.fail_writes {
            anyhow::bail!("disk full");
        }
        state.stored = Some(colors.to_vec());
        state.saves += 1;
        Ok(())
    }
}

/// Sampler returning a fixed pointer and color, recording sampled positions.
#[derive(Debug, Default)]
pub struct FakeSampler {
    pub pointer: Option<ScreenPos>,
    pub center: Option<RgbColor>,
    pub neighborhood: Vec<RgbColor>,
    sampled: RefCell<Vec<ScreenPos>>,
    pointer_calls: Cell<usize>,
}

impl FakeSampler {
    /// Sampler whose pointer sits at `pointer` over `center`.
    pub fn new(pointer: ScreenPos, center: RgbColor) -> Self {
        Self {
            pointer: Some(pointer),
            center: Some(center),
            neighborhood: vec![center, RgbColor::new(10, 20, 30), RgbColor::new(40, 50, 60)],
            ..Self::default()
        }
    }

    /// Positions passed to `sample`, in call order.
    pub fn sampled(&self) -> Vec<ScreenPos> {
        self.sampled.borrow().clone()
    }

    pub fn pointer_calls(&self) -> usize {
        self.pointer_calls.get()
    }
}

impl ScreenSampler for FakeSampler {
    fn locate_pointer(&self) -> Result<ScreenPos> {
        self.pointer_calls.set(self.pointer_calls.get() + 1);
        self.pointer
            .ok_or_else(|| anyhow::anyhow!("pointer not available"))
    }

    fn sample(&self, pos: ScreenPos) -> Result<ColorCapture> {
        self.sampled.borrow_mut().push(pos);
        let center = self
            .center
            .ok_or_else(|| anyhow::anyhow!("capture failed"))?;
        Ok(ColorCapture {
            center,
            neighborhood: self.neighborhood.clone(),
        })
    }
}

/// Builds a stored color record.
pub fn stored(hex: &str, name: Option<&str>) -> StoredColor {
    StoredColor {
        hex_color: hex.to_string(),
        name: name.map(String::from),
    }
}

/// Creates a temp directory with a `colors.json` holding `colors`.
///
/// # Returns
/// The temp dir guard and the palette file path.
pub fn temp_palette(colors: &[StoredColor]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("colors.json");
    let document = serde_json::json!({
        "$schema": "./colors.schema.json",
        "colors": colors,
    });
    fs::write(
        &path,
        serde_json::to_string_pretty(&document).expect("Failed to serialize palette"),
    )
    .expect("Failed to write palette");
    (temp_dir, path)
}

/// Reads back the colors of a palette file.
pub fn read_palette(path: &Path) -> Vec<StoredColor> {
    let content = fs::read_to_string(path).expect("Failed to read palette");
    let document: serde_json::Value =
        serde_json::from_str(&content).expect("Palette file is not JSON");
    serde_json::from_value(document["colors"].clone()).expect("Palette colors are malformed")
}

/// Path to the swatchbook binary
pub fn swatchbook_bin() -> String {
    std::env::var("CARGO_BIN_EXE_swatchbook")
        .unwrap_or_else(|_| "target/release/swatchbook".to_string())
}

/// Creates a Command with an isolated config directory and palette file.
pub fn isolated_command(config_dir: &Path, palette: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(swatchbook_bin());
    cmd.env("SWATCHBOOK_CONFIG_DIR", config_dir);
    cmd.arg("--palette").arg(palette);
    cmd.args(args);
    cmd
}
