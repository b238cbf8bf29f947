//! Color conversion CLI command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::services::{InputOutcome, StagingController};

/// Convert a color between representations
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Color as `#RRGGBB`, `rgb:R,G,B` or `hsl:H,S,L`
    #[arg(value_name = "COLOR", allow_hyphen_values = true)]
    color: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable conversion result
#[derive(Serialize, Debug)]
struct ConvertOutput {
    hex: String,
    rgb: [u8; 3],
    hsl: (u16, u8, u8),
}

/// Splits `a,b,c` into three optional integers; blank fields become `None`.
fn parse_triple(values: &str) -> Result<[Option<i64>; 3]> {
    let fields: Vec<&str> = values.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        anyhow::bail!("Expected three comma-separated values, got '{values}'");
    }

    let mut parsed = [None; 3];
    for (slot, field) in parsed.iter_mut().zip(fields) {
        if !field.is_empty() {
            *slot = Some(
                field
                    .parse::<i64>()
                    .with_context(|| format!("Invalid number '{field}'"))?,
            );
        }
    }
    Ok(parsed)
}

impl ConvertArgs {
    /// Execute convert command
    pub fn execute(&self) -> Result<()> {
        let mut staging = StagingController::new();
        let input = self.color.trim();

        let outcome = if let Some(values) = input.strip_prefix("rgb:") {
            let [r, g, b] = parse_triple(values)?;
            staging.set_from_rgb(r, g, b)
        } else if let Some(values) = input.strip_prefix("hsl:") {
            let [h, s, l] = parse_triple(values)?;
            staging.set_from_hsl(h, s, l)
        } else {
            staging.set_from_hex(input)
        };

        if outcome == InputOutcome::Unchanged {
            anyhow::bail!("Invalid color '{}'", self.color);
        }

        let rgb = staging.rgb();
        let hsl = staging.hsl();
        if self.json {
            let output = ConvertOutput {
                hex: staging.hex().to_string(),
                rgb: [rgb.r, rgb.g, rgb.b],
                hsl: hsl.parts(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("hex: {}", staging.hex());
            println!("rgb: {}, {}, {}", rgb.r, rgb.g, rgb.b);
            println!("hsl: {}, {}, {}", hsl.hue(), hsl.saturation(), hsl.lightness());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("1,2,3").unwrap(), [Some(1), Some(2), Some(3)]);
        assert_eq!(parse_triple(" 1 , ,3").unwrap(), [Some(1), None, Some(3)]);
        assert!(parse_triple("1,2").is_err());
        assert!(parse_triple("1,x,3").is_err());
    }
}
