//! Single-hue sequential colormaps.
//!
//! Lightness ramps monotonically from near-white down to near-black while
//! hue stays fixed and chroma follows the Bezier profile through the most
//! saturated in-gamut color. Entry 0 is the lightest.

use lutforge_core::colormap::{Colormap, Rgb8};
use lutforge_core::constants::ColorScience;
use lutforge_core::error::ColormapError;
use lutforge_core::generator::{check_entry_count, Generator};
use lutforge_core::params::param_f64;
use lutforge_core::profile::ProfilePoints;
use serde_json::{json, Value};

use crate::{angle_param, unit_param};

/// Default profile hue in radians (red).
pub const DEFAULT_HUE: f64 = 0.0;
/// Default lightness contrast.
pub const DEFAULT_CONTRAST: f64 = 0.88;
/// Default saturation pull toward the gamut boundary.
pub const DEFAULT_SATURATION: f64 = 0.6;
/// Default brightness of the light end.
pub const DEFAULT_BRIGHTNESS: f64 = 0.75;
/// Default warmth pull toward yellow at the light end.
pub const DEFAULT_WARMTH: f64 = 0.15;

/// Recommended contrast for discrete maps with few entries.
///
/// Small maps need less contrast to stay distinguishable; the value ramps
/// up to the continuous default of 0.88 at n = 9.
pub fn default_contrast_for_small_n(n: usize) -> f64 {
    (0.34 + 0.06 * n as f64).min(0.88)
}

/// Parameters for the sequential method.
///
/// Use [`Default`] for the reference tool's red ramp.
#[derive(Debug, Clone, Copy)]
pub struct SequentialParams {
    /// Profile hue in radians, wrapped to [0, 2π).
    pub hue: f64,
    /// Lightness contrast in [0, 1]; higher means a darker dark end.
    pub contrast: f64,
    /// Saturation in [0, 1]; pulls the ramp toward the gamut boundary.
    pub saturation: f64,
    /// Brightness in [0, 1]; lightness of the light end.
    pub brightness: f64,
    /// Warmth in [0, 1]; pulls the light end toward yellow.
    pub warmth: f64,
}

impl Default for SequentialParams {
    fn default() -> Self {
        Self {
            hue: DEFAULT_HUE,
            contrast: DEFAULT_CONTRAST,
            saturation: DEFAULT_SATURATION,
            brightness: DEFAULT_BRIGHTNESS,
            warmth: DEFAULT_WARMTH,
        }
    }
}

impl SequentialParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            hue: param_f64(params, "hue", DEFAULT_HUE),
            contrast: param_f64(params, "contrast", DEFAULT_CONTRAST),
            saturation: param_f64(params, "saturation", DEFAULT_SATURATION),
            brightness: param_f64(params, "brightness", DEFAULT_BRIGHTNESS),
            warmth: param_f64(params, "warmth", DEFAULT_WARMTH),
        }
    }

    /// Validates and normalizes: rejects non-finite values, clamps the
    /// unit-range scalars, wraps the hue.
    fn normalized(self) -> Result<Self, ColormapError> {
        Ok(Self {
            hue: angle_param("hue", self.hue)?,
            contrast: unit_param("contrast", self.contrast)?,
            saturation: unit_param("saturation", self.saturation)?,
            brightness: unit_param("brightness", self.brightness)?,
            warmth: unit_param("warmth", self.warmth)?,
        })
    }
}

/// Sequential colormap generator.
///
/// The Bezier profile is built once at construction; each `generate` call
/// only samples it, so generating maps of different lengths from the same
/// generator is cheap.
#[derive(Debug)]
pub struct BrewerSequential {
    params: SequentialParams,
    profile: ProfilePoints,
}

impl BrewerSequential {
    /// Creates a sequential generator after validating the parameters.
    pub fn new(params: SequentialParams) -> Result<Self, ColormapError> {
        let params = params.normalized()?;
        let profile = ProfilePoints::build(
            params.hue,
            params.saturation,
            params.warmth,
            ColorScience::d65(),
        );
        Ok(Self { params, profile })
    }

    /// Creates a sequential generator from a JSON params object.
    pub fn from_json(json_params: &Value) -> Result<Self, ColormapError> {
        Self::new(SequentialParams::from_json(json_params))
    }
}

impl Generator for BrewerSequential {
    fn generate(&self, n: usize) -> Result<Colormap, ColormapError> {
        check_entry_count(n)?;
        let wp = &ColorScience::d65().white;
        let entries = (0..n)
            .map(|i| {
                let t = (n - 1 - i) as f64 / (n - 1) as f64;
                let c = self
                    .profile
                    .sample(t, self.params.contrast, self.params.brightness);
                Rgb8::from_luv(c, wp)
            })
            .collect();
        Ok(Colormap::new(entries, 0))
    }

    fn params(&self) -> Value {
        json!({
            "hue": self.params.hue,
            "contrast": self.params.contrast,
            "saturation": self.params.saturation,
            "brightness": self.params.brightness,
            "warmth": self.params.warmth,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "hue": {
                "type": "number",
                "default": DEFAULT_HUE,
                "min": 0.0,
                "max": std::f64::consts::TAU,
                "description": "Profile hue in radians"
            },
            "contrast": {
                "type": "number",
                "default": DEFAULT_CONTRAST,
                "min": 0.0,
                "max": 1.0,
                "description": "Lightness contrast between the ends"
            },
            "saturation": {
                "type": "number",
                "default": DEFAULT_SATURATION,
                "min": 0.0,
                "max": 1.0,
                "description": "Saturation pull toward the gamut boundary"
            },
            "brightness": {
                "type": "number",
                "default": DEFAULT_BRIGHTNESS,
                "min": 0.0,
                "max": 1.0,
                "description": "Lightness of the light end"
            },
            "warmth": {
                "type": "number",
                "default": DEFAULT_WARMTH,
                "min": 0.0,
                "max": 1.0,
                "description": "Pull of the light end toward yellow"
            }
        })
    }
}
