//! RGB color handling with hex parsing and HSL conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithm)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{HexColor, HslColor};

/// RGB color value.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// This is the interchange form for sampled and manually entered colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from unchecked integer channels (e.g. typed into an input field).
    ///
    /// # Errors
    ///
    /// Returns an error if any channel is outside 0-255. Values are never clamped.
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        let channel = |value: i64, name: &str| {
            u8::try_from(value).with_context(|| {
                format!("{name} channel {value} is out of range (expected 0-255)")
            })
        };

        Ok(Self::new(
            channel(r, "Red")?,
            channel(g, "Green")?,
            channel(b, "Blue")?,
        ))
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Accepts exactly six hex digits with an optional leading `#`, in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = HexColor::digits(hex)?;

        let r = u8::from_str_radix(&digits[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to its canonical hex form `#rrggbb` (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex().as_str(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> HexColor {
        HexColor::from_rgb(*self)
    }

    /// Converts the color to HSL with integer degrees and percentages.
    ///
    /// Hue is taken from whichever channel holds the maximum. Achromatic colors
    /// (all channels equal) have hue 0 and saturation 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::models::{HslColor, RgbColor};
    ///
    /// let hsl = RgbColor::new(255, 0, 0).to_hsl();
    /// assert_eq!(hsl, HslColor::new(0, 100, 50).unwrap());
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> HslColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };

            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };

            (h / 6.0, s)
        };

        HslColor::from_parts_unchecked(
            (h * 360.0).round() as u16,
            (s * 100.0).round() as u8,
            (l * 100.0).round() as u8,
        )
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Default for RgbColor {
    /// Default color is black (#000000), the picker's initial input.
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("#aBcDeF").unwrap();
        assert_eq!(color, RgbColor::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("##ffffff").is_err());
        assert!(RgbColor::from_hex(" #ffffff").is_err());
        assert!(RgbColor::from_hex("#12345g").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex().as_str(), "#ff0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex().as_str(), "#0080ff");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex().as_str(), "#000000");
        assert_eq!(RgbColor::new(1, 2, 3).to_hex().as_str(), "#010203");
    }

    #[test]
    fn test_hex_roundtrip_is_exact() {
        // Every channel value must survive hex encoding on every channel position
        for v in 0..=255u8 {
            for color in [
                RgbColor::new(v, 0, 0),
                RgbColor::new(0, v, 0),
                RgbColor::new(0, 0, v),
                RgbColor::new(v, 255 - v, v / 2),
            ] {
                let parsed = RgbColor::from_hex(color.to_hex().as_str()).unwrap();
                assert_eq!(color, parsed);
            }
        }
    }

    #[test]
    fn test_try_from_channels() {
        assert_eq!(
            RgbColor::try_from_channels(10, 20, 30).unwrap(),
            RgbColor::new(10, 20, 30)
        );
        assert!(RgbColor::try_from_channels(256, 0, 0).is_err());
        assert!(RgbColor::try_from_channels(0, -1, 0).is_err());
        assert!(RgbColor::try_from_channels(0, 0, 1000).is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(RgbColor::default(), RgbColor::new(0, 0, 0));
    }

    // HSL conversion tests

    #[test]
    fn test_rgb_to_hsl_primary_colors() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hsl().parts(), (0, 100, 50));
        assert_eq!(RgbColor::new(0, 255, 0).to_hsl().parts(), (120, 100, 50));
        assert_eq!(RgbColor::new(0, 0, 255).to_hsl().parts(), (240, 100, 50));
        assert_eq!(RgbColor::new(255, 255, 0).to_hsl().parts(), (60, 100, 50));
        assert_eq!(RgbColor::new(0, 255, 255).to_hsl().parts(), (180, 100, 50));
        assert_eq!(RgbColor::new(255, 0, 255).to_hsl().parts(), (300, 100, 50));
    }

    #[test]
    fn test_rgb_to_hsl_grayscale() {
        assert_eq!(RgbColor::new(0, 0, 0).to_hsl().parts(), (0, 0, 0));
        assert_eq!(RgbColor::new(255, 255, 255).to_hsl().parts(), (0, 0, 100));
        assert_eq!(RgbColor::new(128, 128, 128).to_hsl().parts(), (0, 0, 50));
    }

    #[test]
    fn test_rgb_to_hsl_mixed() {
        assert_eq!(RgbColor::new(0x33, 0x66, 0x99).to_hsl().parts(), (210, 50, 40));
        assert_eq!(RgbColor::new(200, 100, 50).to_hsl().parts(), (20, 60, 49));
    }

    #[test]
    fn test_rgb_to_hsl_hue_can_round_up_to_360() {
        // Hue just below 360 degrees rounds to the upper bound
        assert_eq!(RgbColor::new(255, 0, 1).to_hsl().parts(), (360, 100, 50));
    }
}
