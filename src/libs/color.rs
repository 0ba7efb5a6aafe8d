//! Hex color parsing and tinting for card backgrounds.
//!
//! Priority colors arrive as CSS hex strings (`#d9534f`, or the shorthand
//! `#d54`). Cards get a pale version of the priority color as their
//! background, produced by blending each channel toward white.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Blend factor toward white used for card backgrounds.
pub const CARD_BACKGROUND_LIGHTEN: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color '{0}' must have 3 or 6 hex digits")]
    InvalidLength(String),
    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `#rgb`; the leading `#` is optional.
    pub fn from_hex(color: &str) -> Result<Self, ColorError> {
        let hex = color.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ColorError::InvalidDigit(color.to_string()));
        }

        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(ColorError::InvalidLength(color.to_string())),
        };
        if !expanded.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(color.to_string()));
        }

        let channel = |index: usize| {
            u8::from_str_radix(&expanded[index..index + 2], 16).map_err(|_| ColorError::InvalidDigit(color.to_string()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Moves each channel `amount` of the way toward white
    /// (`c + (255 - c) * amount`, rounded). `amount` is clamped to `0.0..=1.0`.
    pub fn lighten(self, amount: f64) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let blend = |channel: u8| {
            let channel = f64::from(channel);
            (channel + (255.0 - channel) * amount).round() as u8
        };
        Self::new(blend(self.r), blend(self.g), blend(self.b))
    }

    /// CSS functional notation, e.g. `rgb(247, 221, 220)`.
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Lightens a hex color and returns it in CSS `rgb()` notation.
pub fn lighten_color(color: &str, amount: f64) -> Result<String, ColorError> {
    Ok(Rgb::from_hex(color)?.lighten(amount).to_css_rgb())
}
