//! Colormap output types.
//!
//! Generators produce a [`Colormap`]: an ordered list of 8-bit sRGB
//! entries plus a count of how many entries had to be clipped to the sRGB
//! cube. Serializes as hex strings `"#rrggbb"` for human-readable formats;
//! hex is lossless here since entries are already 8-bit.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{luv_to_srgb, Luv, Srgb};
use crate::constants::WhitePoint;
use crate::error::ColormapError;

/// One 8-bit sRGB colormap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantizes a floating-point sRGB color, rounding to nearest.
    ///
    /// Channels are clamped to [0, 1] before scaling, so out-of-range
    /// inputs saturate instead of wrapping.
    pub fn from_srgb(c: Srgb) -> Self {
        Self {
            r: (c.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (c.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (c.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    /// Quantizes a LUV color, rounding to nearest.
    pub fn from_luv(c: Luv, wp: &WhitePoint) -> Self {
        Self::from_srgb(luv_to_srgb(c, wp))
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ColormapError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb8, ColormapError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(ColormapError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| ColormapError::InvalidColor(e.to_string()))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| ColormapError::InvalidColor(e.to_string()))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| ColormapError::InvalidColor(e.to_string()))?;
        Ok(Rgb8 { r, g, b })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb8::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// An ordered colormap plus its clip count.
///
/// `clipped` counts entries (not channels) that fell outside the sRGB cube
/// and were clamped to its surface during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colormap {
    entries: Vec<Rgb8>,
    clipped: usize,
}

impl Colormap {
    pub fn new(entries: Vec<Rgb8>, clipped: usize) -> Self {
        Self { entries, clipped }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Rgb8] {
        &self.entries
    }

    /// Number of entries that were clipped to the sRGB cube.
    pub fn clipped(&self) -> usize {
        self.clipped
    }

    pub fn get(&self, i: usize) -> Option<Rgb8> {
        self.entries.get(i).copied()
    }

    /// Flattens the entries into interleaved r, g, b bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.entries.len() * 3);
        for e in &self.entries {
            out.push(e.r);
            out.push(e.g);
            out.push(e.b);
        }
        out
    }
}
