//! The staging color: what the user is editing before it joins the palette.
//!
//! All raw inputs (hex text, RGB fields, HSL fields, screen samples) funnel into
//! one canonical hex value. Every derived field is recomputed from that hex and
//! the in-progress name in a single pass, so no derived value ever feeds back
//! into another.

use anyhow::Result;
use tracing::{debug, warn};

use super::sampler::{ColorCapture, ScreenPos, ScreenSampler};
use crate::models::{HexColor, HslColor, PaletteEntry, RgbColor};

/// Whether an input changed the staged color or name.
///
/// The remembered sampling position mirrors the X/Y fields and is not part of
/// the outcome: sampling records it even when the capture fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Input was valid and the staging color was updated
    Applied,
    /// Input was rejected or the request failed; color and name are retained
    Unchanged,
}

impl InputOutcome {
    /// Returns true for `Applied`.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Owns the staging entry and every representation derived from it.
#[derive(Debug, Clone)]
pub struct StagingController {
    hex: HexColor,
    name: Option<String>,
    position: ScreenPos,
    neighborhood: Vec<HexColor>,
    rgb: RgbColor,
    hsl: HslColor,
    entry: PaletteEntry,
}

impl StagingController {
    /// Creates a controller staging black with no name.
    #[must_use]
    pub fn new() -> Self {
        Self::with_color(RgbColor::default())
    }

    /// Creates a controller staging `color` with no name.
    #[must_use]
    pub fn with_color(color: RgbColor) -> Self {
        let hex = color.to_hex();
        let mut controller = Self {
            entry: PaletteEntry::new(hex.clone(), None),
            hex,
            name: None,
            position: ScreenPos::default(),
            neighborhood: Vec::new(),
            rgb: color,
            hsl: color.to_hsl(),
        };
        controller.recompute();
        controller
    }

    /// Sets the color from hex text. Malformed text is rejected.
    pub fn set_from_hex(&mut self, input: &str) -> InputOutcome {
        match HexColor::parse(input) {
            Ok(hex) => self.set_hex(hex),
            Err(err) => Self::reject("hex", &err),
        }
    }

    /// Sets the color from RGB fields. Missing or out-of-range channels are rejected.
    pub fn set_from_rgb(
        &mut self,
        r: Option<i64>,
        g: Option<i64>,
        b: Option<i64>,
    ) -> InputOutcome {
        let parsed = Self::require_all(r, g, b, "RGB")
            .and_then(|(r, g, b)| RgbColor::try_from_channels(r, g, b));
        match parsed {
            Ok(rgb) => self.set_rgb(rgb),
            Err(err) => Self::reject("RGB", &err),
        }
    }

    /// Sets the color from HSL fields. Missing or out-of-range components are rejected.
    pub fn set_from_hsl(
        &mut self,
        h: Option<i64>,
        s: Option<i64>,
        l: Option<i64>,
    ) -> InputOutcome {
        let parsed = Self::require_all(h, s, l, "HSL")
            .and_then(|(h, s, l)| HslColor::try_from_components(h, s, l));
        match parsed {
            Ok(hsl) => self.set_rgb(hsl.to_rgb()),
            Err(err) => Self::reject("HSL", &err),
        }
    }

    /// Sets the color directly from an RGB value.
    pub fn set_rgb(&mut self, rgb: RgbColor) -> InputOutcome {
        self.set_hex(rgb.to_hex())
    }

    /// Replaces the in-progress name. The color is untouched.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name.filter(|n| !n.is_empty());
        self.recompute();
    }

    /// Remembers the screen position used for re-sampling.
    pub fn set_position(&mut self, pos: ScreenPos) {
        self.position = pos;
    }

    /// Applies a finished sampling request.
    ///
    /// Responses are applied in arrival order, so a late response for an older
    /// request overwrites a newer one.
    pub fn apply_capture(&mut self, capture: Result<ColorCapture>) -> InputOutcome {
        match capture {
            Ok(capture) => {
                self.neighborhood = capture.neighborhood.iter().map(RgbColor::to_hex).collect();
                self.set_rgb(capture.center)
            }
            Err(err) => {
                warn!("Color sampling failed: {err:#}");
                InputOutcome::Unchanged
            }
        }
    }

    /// Samples the screen at `pos` and stages the color found there.
    ///
    /// `pos` is remembered for `resample` whether or not the capture succeeds;
    /// the outcome only reports the color.
    pub fn set_from_sampled_position(
        &mut self,
        sampler: &impl ScreenSampler,
        pos: ScreenPos,
    ) -> InputOutcome {
        self.position = pos;
        self.apply_capture(sampler.sample(pos))
    }

    /// Samples at the pointer's current location.
    ///
    /// The position is remembered even if the sample itself fails.
    pub fn sample_under_pointer(&mut self, sampler: &impl ScreenSampler) -> InputOutcome {
        match sampler.locate_pointer() {
            Ok(pos) => self.set_from_sampled_position(sampler, pos),
            Err(err) => {
                warn!("Locating pointer failed: {err:#}");
                InputOutcome::Unchanged
            }
        }
    }

    /// Samples again at the remembered position.
    pub fn resample(&mut self, sampler: &impl ScreenSampler) -> InputOutcome {
        self.set_from_sampled_position(sampler, self.position)
    }

    /// Stages one of the swatches from the last sampled neighborhood.
    pub fn pick_neighbor(&mut self, index: usize) -> InputOutcome {
        match self.neighborhood.get(index).cloned() {
            Some(hex) => self.set_hex(hex),
            None => {
                debug!(index, "Neighborhood swatch out of range");
                InputOutcome::Unchanged
            }
        }
    }

    /// Loads an existing palette entry's color and name for re-editing.
    pub fn load_entry(&mut self, entry: &PaletteEntry) {
        self.hex = entry.hex().clone();
        self.name = entry.name().map(String::from);
        self.recompute();
    }

    /// The staging entry offered to the palette on commit.
    #[must_use]
    pub const fn current_entry(&self) -> &PaletteEntry {
        &self.entry
    }

    /// Canonical hex of the staged color.
    #[must_use]
    pub const fn hex(&self) -> &HexColor {
        &self.hex
    }

    /// RGB of the staged color.
    #[must_use]
    pub const fn rgb(&self) -> RgbColor {
        self.rgb
    }

    /// HSL of the staged color.
    #[must_use]
    pub const fn hsl(&self) -> HslColor {
        self.hsl
    }

    /// The in-progress name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Position used by `resample`.
    #[must_use]
    pub const fn position(&self) -> ScreenPos {
        self.position
    }

    /// Hex swatches around the last sampled point.
    #[must_use]
    pub fn neighborhood(&self) -> &[HexColor] {
        &self.neighborhood
    }

    fn set_hex(&mut self, hex: HexColor) -> InputOutcome {
        self.hex = hex;
        self.recompute();
        InputOutcome::Applied
    }

    fn recompute(&mut self) {
        self.rgb = self.hex.to_rgb();
        self.hsl = self.rgb.to_hsl();
        self.entry = PaletteEntry::new(self.hex.clone(), self.name.clone());
    }

    fn require_all(
        a: Option<i64>,
        b: Option<i64>,
        c: Option<i64>,
        what: &str,
    ) -> Result<(i64, i64, i64)> {
        match (a, b, c) {
            (Some(a), Some(b), Some(c)) => Ok((a, b, c)),
            _ => anyhow::bail!("{what} input is incomplete"),
        }
    }

    fn reject(what: &str, err: &anyhow::Error) -> InputOutcome {
        debug!("Rejected {what} input: {err:#}");
        InputOutcome::Unchanged
    }
}

impl Default for StagingController {
    fn default() -> Self {
        Self::new()
    }
}
