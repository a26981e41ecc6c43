//! Diverging colormaps.
//!
//! Two sequential ramps at hues `hue` and `hue + divergence` meet at a
//! light midpoint: dark first hue at entry 0, light middle, dark second
//! hue at the end. Odd-length discrete maps get an explicit neutral
//! middle entry; long odd maps average the two ramps instead, since an
//! extra neutral color stands out in a continuous gradient.

use lutforge_core::color::{lch_chroma, lch_to_luv, luv_saturation, Lch, Luv, TAU};
use lutforge_core::colormap::{Colormap, Rgb8};
use lutforge_core::constants::ColorScience;
use lutforge_core::error::ColormapError;
use lutforge_core::gamut::max_saturation_at;
use lutforge_core::generator::{check_entry_count, Generator};
use lutforge_core::params::param_f64;
use lutforge_core::profile::ProfilePoints;
use serde_json::{json, Value};

use crate::sequential::{
    DEFAULT_BRIGHTNESS, DEFAULT_CONTRAST, DEFAULT_HUE, DEFAULT_SATURATION, DEFAULT_WARMTH,
};
use crate::{angle_param, unit_param};

/// Default angular distance between the two arms (240 degrees).
pub const DEFAULT_DIVERGENCE: f64 = 4.0 * std::f64::consts::PI / 3.0;

/// Largest odd map length that still gets an explicit neutral middle.
const DISCRETE_NEUTRAL_MAX_N: usize = 9;

/// Parameters for the diverging method.
#[derive(Debug, Clone, Copy)]
pub struct DivergingParams {
    /// Hue of the first arm in radians, wrapped to [0, 2π).
    pub hue: f64,
    /// Angular distance to the second arm's hue, wrapped to [0, 2π).
    pub divergence: f64,
    /// Lightness contrast in [0, 1].
    pub contrast: f64,
    /// Saturation in [0, 1].
    pub saturation: f64,
    /// Brightness in [0, 1].
    pub brightness: f64,
    /// Warmth in [0, 1]; also scales the neutral middle's saturation.
    pub warmth: f64,
}

impl Default for DivergingParams {
    fn default() -> Self {
        Self {
            hue: DEFAULT_HUE,
            divergence: DEFAULT_DIVERGENCE,
            contrast: DEFAULT_CONTRAST,
            saturation: DEFAULT_SATURATION,
            brightness: DEFAULT_BRIGHTNESS,
            warmth: DEFAULT_WARMTH,
        }
    }
}

impl DivergingParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            hue: param_f64(params, "hue", DEFAULT_HUE),
            divergence: param_f64(params, "divergence", DEFAULT_DIVERGENCE),
            contrast: param_f64(params, "contrast", DEFAULT_CONTRAST),
            saturation: param_f64(params, "saturation", DEFAULT_SATURATION),
            brightness: param_f64(params, "brightness", DEFAULT_BRIGHTNESS),
            warmth: param_f64(params, "warmth", DEFAULT_WARMTH),
        }
    }

    fn normalized(self) -> Result<Self, ColormapError> {
        Ok(Self {
            hue: angle_param("hue", self.hue)?,
            divergence: angle_param("divergence", self.divergence)?,
            contrast: unit_param("contrast", self.contrast)?,
            saturation: unit_param("saturation", self.saturation)?,
            brightness: unit_param("brightness", self.brightness)?,
            warmth: unit_param("warmth", self.warmth)?,
        })
    }
}

/// Diverging colormap generator.
///
/// Holds one Bezier profile per arm; both are built at construction.
#[derive(Debug)]
pub struct BrewerDiverging {
    params: DivergingParams,
    profile0: ProfilePoints,
    profile1: ProfilePoints,
}

impl BrewerDiverging {
    /// Creates a diverging generator after validating the parameters.
    pub fn new(params: DivergingParams) -> Result<Self, ColormapError> {
        let params = params.normalized()?;
        let cs = ColorScience::d65();
        let hue1 = (params.hue + params.divergence).rem_euclid(TAU);
        let profile0 = ProfilePoints::build(params.hue, params.saturation, params.warmth, cs);
        let profile1 = ProfilePoints::build(hue1, params.saturation, params.warmth, cs);
        Ok(Self {
            params,
            profile0,
            profile1,
        })
    }

    /// Creates a diverging generator from a JSON params object.
    pub fn from_json(json_params: &Value) -> Result<Self, ColormapError> {
        Self::new(DivergingParams::from_json(json_params))
    }

    /// Explicit neutral middle for short odd maps: bright-point hue,
    /// lightness averaged from the two arms' light ends, saturation the
    /// warmth-scaled average of theirs (capped by the gamut).
    fn discrete_neutral(&self, c0: Luv, c1: Luv, cs: &ColorScience) -> Luv {
        let sn = 0.5 * (luv_saturation(c0) + luv_saturation(c1)) * self.params.warmth;
        let l = 0.5 * (c0.l + c1.l);
        let chroma = lch_chroma(l, max_saturation_at(l, cs.bright_hue, cs).min(sn));
        lch_to_luv(Lch {
            l,
            c: chroma,
            h: cs.bright_hue,
        })
    }
}

impl Generator for BrewerDiverging {
    fn generate(&self, n: usize) -> Result<Colormap, ColormapError> {
        check_entry_count(n)?;
        let cs = ColorScience::d65();
        let contrast = self.params.contrast;
        let brightness = self.params.brightness;

        let mut entries = Vec::with_capacity(n);
        for i in 0..n {
            let c = if n % 2 == 1 && i == n / 2 {
                let c0 = self.profile0.sample(1.0, contrast, brightness);
                let c1 = self.profile1.sample(1.0, contrast, brightness);
                if n <= DISCRETE_NEUTRAL_MAX_N {
                    self.discrete_neutral(c0, c1, cs)
                } else {
                    c0.add(c1).scale(0.5)
                }
            } else {
                let t = i as f64 / (n - 1) as f64;
                if i < n / 2 {
                    self.profile0.sample(2.0 * t, contrast, brightness)
                } else {
                    self.profile1.sample(2.0 * (1.0 - t), contrast, brightness)
                }
            };
            entries.push(Rgb8::from_luv(c, &cs.white));
        }
        Ok(Colormap::new(entries, 0))
    }

    fn params(&self) -> Value {
        json!({
            "hue": self.params.hue,
            "divergence": self.params.divergence,
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
                "max": TAU,
                "description": "Hue of the first arm in radians"
            },
            "divergence": {
                "type": "number",
                "default": DEFAULT_DIVERGENCE,
                "min": 0.0,
                "max": TAU,
                "description": "Angular distance to the second arm's hue"
            },
            "contrast": {
                "type": "number",
                "default": DEFAULT_CONTRAST,
                "min": 0.0,
                "max": 1.0,
                "description": "Lightness contrast between ends and middle"
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
                "description": "Lightness of the middle"
            },
            "warmth": {
                "type": "number",
                "default": DEFAULT_WARMTH,
                "min": 0.0,
                "max": 1.0,
                "description": "Pull toward yellow; scales the neutral middle's saturation"
            }
        })
    }
}
