//! HSL colors with integer degrees and percentages.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// Upper bound for hue in degrees (inclusive; 360 wraps to red).
pub const HUE_MAX: u16 = 360;
/// Upper bound for saturation and lightness in percent.
pub const PERCENT_MAX: u8 = 100;

/// HSL color: hue 0-360, saturation and lightness 0-100.
///
/// This is a lossy display representation. Converting HSL -> RGB -> HSL always
/// keeps lightness. Hue and saturation come back within one unit only for
/// saturation >= 40% and lightness 30-70%; outside that they can drift much
/// further, and at lightness 0 or 100 (black, white) or saturation 0 (gray)
/// they collapse to 0. RGB -> HSL -> RGB lands within 5 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HslColor {
    h: u16,
    s: u8,
    l: u8,
}

impl HslColor {
    /// Creates an HSL color, validating the ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if hue exceeds 360 or saturation/lightness exceed 100.
    pub fn new(h: u16, s: u8, l: u8) -> Result<Self> {
        if h > HUE_MAX {
            anyhow::bail!("Hue {h} is out of range (expected 0-{HUE_MAX})");
        }
        if s > PERCENT_MAX {
            anyhow::bail!("Saturation {s} is out of range (expected 0-{PERCENT_MAX})");
        }
        if l > PERCENT_MAX {
            anyhow::bail!("Lightness {l} is out of range (expected 0-{PERCENT_MAX})");
        }
        Ok(Self { h, s, l })
    }

    /// Builds an HSL color from unchecked integer components.
    ///
    /// # Errors
    ///
    /// Returns an error for negative or out-of-range components. Nothing is clamped.
    pub fn try_from_components(h: i64, s: i64, l: i64) -> Result<Self> {
        let h = u16::try_from(h).map_err(|_| anyhow::anyhow!("Hue {h} is out of range"))?;
        let s = u8::try_from(s).map_err(|_| anyhow::anyhow!("Saturation {s} is out of range"))?;
        let l = u8::try_from(l).map_err(|_| anyhow::anyhow!("Lightness {l} is out of range"))?;
        Self::new(h, s, l)
    }

    /// Internal constructor for values already known to be in range.
    pub(crate) const fn from_parts_unchecked(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Hue in degrees.
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.h
    }

    /// Saturation in percent.
    #[must_use]
    pub const fn saturation(&self) -> u8 {
        self.s
    }

    /// Lightness in percent.
    #[must_use]
    pub const fn lightness(&self) -> u8 {
        self.l
    }

    /// Returns `(h, s, l)`.
    #[must_use]
    pub const fn parts(&self) -> (u16, u8, u8) {
        (self.h, self.s, self.l)
    }

    /// Converts to RGB using the chroma / intermediate / match decomposition
    /// over six 60-degree hue sectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::models::{HslColor, RgbColor};
    ///
    /// let green = HslColor::new(120, 100, 50).unwrap().to_rgb();
    /// assert_eq!(green, RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_rgb(&self) -> RgbColor {
        let h = f64::from(self.h);
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        RgbColor::new(channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl From<RgbColor> for HslColor {
    fn from(rgb: RgbColor) -> Self {
        rgb.to_hsl()
    }
}
