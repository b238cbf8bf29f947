//! Screen color sampling seam.
//!
//! Pixel capture is platform specific and lives outside this crate; the picker
//! only needs a pointer location and a color capture around a point.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::RgbColor;

/// A screen coordinate in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScreenPos {
    /// Horizontal position
    pub x: i32,
    /// Vertical position
    pub y: i32,
}

impl ScreenPos {
    /// Creates a new screen position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Result of sampling one point: its color plus the surrounding block, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCapture {
    /// Color directly under the sampled point
    pub center: RgbColor,
    /// Colors of the neighborhood around the point
    pub neighborhood: Vec<RgbColor>,
}

/// Source of on-screen colors.
pub trait ScreenSampler {
    /// Returns the current pointer position.
    fn locate_pointer(&self) -> Result<ScreenPos>;

    /// Samples the color at `pos` and its neighborhood.
    fn sample(&self, pos: ScreenPos) -> Result<ColorCapture>;
}

/// Sampler for environments without screen access; every request fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSampler;

impl ScreenSampler for UnavailableSampler {
    fn locate_pointer(&self) -> Result<ScreenPos> {
        anyhow::bail!("Screen sampling is not available in this environment")
    }

    fn sample(&self, pos: ScreenPos) -> Result<ColorCapture> {
        anyhow::bail!(
            "Screen sampling is not available in this environment (requested {}, {})",
            pos.x,
            pos.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_sampler_always_fails() {
        let sampler = UnavailableSampler;
        assert!(sampler.locate_pointer().is_err());
        let err = sampler.sample(ScreenPos::new(3, 4)).unwrap_err();
        assert!(err.to_string().contains("(requested 3, 4)"));
    }
}
