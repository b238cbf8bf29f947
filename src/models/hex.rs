//! Canonical `#rrggbb` hex color strings.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::RgbColor;

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").expect("hex pattern is valid"));

/// A validated hex color in canonical form: `#` followed by six lowercase hex digits.
///
/// Every `RgbColor` maps to exactly one `HexColor` and back. A `HexColor` can only
/// be obtained through parsing or conversion, so holding one means it is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parses and normalizes a hex string.
    ///
    /// Accepts `rrggbb` or `#rrggbb` in any letter case and returns the
    /// lowercase, `#`-prefixed form.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatchbook::models::HexColor;
    ///
    /// assert_eq!(HexColor::parse("FF8800").unwrap().as_str(), "#ff8800");
    /// assert!(HexColor::parse("#ff88").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly six hex digits after an optional `#`.
    pub fn parse(input: &str) -> Result<Self> {
        let digits = Self::digits(input)?;
        Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    /// Validates `input` and returns its six hex digits without the `#`.
    pub(crate) fn digits(input: &str) -> Result<&str> {
        if !HEX_PATTERN.is_match(input) {
            anyhow::bail!("Invalid hex color format '{input}'. Expected #RRGGBB");
        }
        Ok(input.strip_prefix('#').unwrap_or(input))
    }

    /// Formats an RGB value as `#rrggbb`.
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b))
    }

    /// Converts back to RGB channels.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        RgbColor::new(channel(1..3), channel(3..5), channel(5..7))
    }

    /// Returns the canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::from_rgb(RgbColor::default())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for HexColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl From<RgbColor> for HexColor {
    fn from(rgb: RgbColor) -> Self {
        Self::from_rgb(rgb)
    }
}
