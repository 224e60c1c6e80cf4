//! Hex color parsing for slide fills.
//!
//! Colors arrive from the UI as hex strings and are handed to the
//! renderer as normalized RGB channels in the 0.0..=1.0 range.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// An RGB color with channels normalized to 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Parse a `#RRGGBB` or `RRGGBB` hex string.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let clean = hex.strip_prefix('#').unwrap_or(hex);

        if clean.len() != 6 || !clean.is_ascii() {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<f64> {
            u8::from_str_radix(&clean[range], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| Error::InvalidColor(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// A darker shade of this color, used as the fallback secondary
    /// color when the request leaves it blank.
    pub fn darker(&self) -> Self {
        Self {
            r: (self.r - 0.2).max(0.0),
            g: (self.g - 0.2).max(0.0),
            b: (self.b - 0.2).max(0.0),
        }
    }
}
