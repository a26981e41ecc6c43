#![deny(unsafe_code)]
//! Cubehelix colormap generator.
//!
//! Green's cubehelix scheme: a gray ramp from black to white with a helix
//! of deviations wound around it in RGB space. Because the underlying
//! gray level rises monotonically, the maps stay readable when printed in
//! grayscale. Large saturation or rotation values can push the helix out
//! of the RGB cube; out-of-range channels are clamped and each affected
//! entry counts once toward the map's clip count.

use lutforge_core::color::TAU;
use lutforge_core::colormap::{Colormap, Rgb8};
use lutforge_core::error::ColormapError;
use lutforge_core::generator::{check_entry_count, Generator};
use lutforge_core::params::param_f64;
use serde_json::{json, Value};

/// Default start hue in [0, 3) turns of the helix parameterization.
pub const DEFAULT_HUE: f64 = 0.0;
/// Default number of helix rotations over the map (negative winds backwards).
pub const DEFAULT_ROTATIONS: f64 = -1.5;
/// Default deviation amplitude from the gray ramp.
pub const DEFAULT_SATURATION: f64 = 1.0;
/// Default gamma applied to the gray ramp.
pub const DEFAULT_GAMMA: f64 = 1.0;

/// Upper bound accepted for gamma.
const GAMMA_MAX: f64 = 64.0;

/// Fixed sinusoidal basis of the helix deviation, from Green (2011).
const R_COS: f64 = -0.14861;
const R_SIN: f64 = 1.78277;
const G_COS: f64 = -0.29227;
const G_SIN: f64 = -0.90649;
const B_COS: f64 = 1.97294;

/// Parameters for the cubehelix method.
#[derive(Debug, Clone, Copy)]
pub struct CubeHelixParams {
    /// Start hue; the helix angle begins at `2π·(hue/3 + 1)`.
    pub hue: f64,
    /// Helix rotations over the full map; sign sets the winding direction.
    pub rotations: f64,
    /// Deviation amplitude; values above ~1 can clip against the cube.
    pub saturation: f64,
    /// Gamma applied to the gray ramp; must be finite and positive.
    pub gamma: f64,
}

impl Default for CubeHelixParams {
    fn default() -> Self {
        Self {
            hue: DEFAULT_HUE,
            rotations: DEFAULT_ROTATIONS,
            saturation: DEFAULT_SATURATION,
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl CubeHelixParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            hue: param_f64(params, "hue", DEFAULT_HUE),
            rotations: param_f64(params, "rotations", DEFAULT_ROTATIONS),
            saturation: param_f64(params, "saturation", DEFAULT_SATURATION),
            gamma: param_f64(params, "gamma", DEFAULT_GAMMA),
        }
    }

    /// Validates the parameters: everything must be finite, saturation
    /// non-negative, and gamma in (0, 64].
    fn validated(self) -> Result<Self, ColormapError> {
        for (name, value) in [
            ("hue", self.hue),
            ("rotations", self.rotations),
            ("saturation", self.saturation),
            ("gamma", self.gamma),
        ] {
            if !value.is_finite() {
                return Err(ColormapError::NonFiniteParam {
                    name: name.into(),
                    value,
                });
            }
        }
        if self.gamma <= 0.0 || self.gamma > GAMMA_MAX {
            return Err(ColormapError::ParamOutOfRange {
                name: "gamma".into(),
                value: self.gamma,
                min: 0.0,
                max: GAMMA_MAX,
            });
        }
        Ok(Self {
            saturation: self.saturation.max(0.0),
            ..self
        })
    }
}

/// Cubehelix colormap generator.
#[derive(Debug)]
pub struct CubeHelix {
    params: CubeHelixParams,
}

impl CubeHelix {
    /// Creates a cubehelix generator after validating the parameters.
    pub fn new(params: CubeHelixParams) -> Result<Self, ColormapError> {
        Ok(Self {
            params: params.validated()?,
        })
    }

    /// Creates a cubehelix generator from a JSON params object.
    pub fn from_json(json_params: &Value) -> Result<Self, ColormapError> {
        Self::new(CubeHelixParams::from_json(json_params))
    }
}

/// Clamps one channel to [0, 1], recording whether it was out of range.
fn clip_channel(v: f64, clipped: &mut bool) -> f64 {
    if v < 0.0 {
        *clipped = true;
        0.0
    } else if v > 1.0 {
        *clipped = true;
        1.0
    } else {
        v
    }
}

impl Generator for CubeHelix {
    fn generate(&self, n: usize) -> Result<Colormap, ColormapError> {
        check_entry_count(n)?;
        let mut entries = Vec::with_capacity(n);
        let mut clippings = 0;

        for i in 0..n {
            let fract = i as f64 / (n - 1) as f64;
            // The helix angle uses the raw position; gamma shapes only
            // the gray ramp and the amplitude envelope.
            let angle = TAU * (self.params.hue / 3.0 + 1.0 + self.params.rotations * fract);
            let fract = fract.powf(self.params.gamma);
            let amp = self.params.saturation * fract * (1.0 - fract) / 2.0;
            let (s, c) = angle.sin_cos();

            let r = fract + amp * (R_COS * c + R_SIN * s);
            let g = fract + amp * (G_COS * c + G_SIN * s);
            let b = fract + amp * (B_COS * c);

            let mut clipped = false;
            let r = clip_channel(r, &mut clipped);
            let g = clip_channel(g, &mut clipped);
            let b = clip_channel(b, &mut clipped);
            if clipped {
                clippings += 1;
            }

            // Truncating quantization, matching the published scheme's
            // reference implementation.
            entries.push(Rgb8::new(
                (r * 255.0) as u8,
                (g * 255.0) as u8,
                (b * 255.0) as u8,
            ));
        }
        Ok(Colormap::new(entries, clippings))
    }

    fn params(&self) -> Value {
        json!({
            "hue": self.params.hue,
            "rotations": self.params.rotations,
            "saturation": self.params.saturation,
            "gamma": self.params.gamma,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "hue": {
                "type": "number",
                "default": DEFAULT_HUE,
                "min": 0.0,
                "max": 3.0,
                "description": "Start hue of the helix"
            },
            "rotations": {
                "type": "number",
                "default": DEFAULT_ROTATIONS,
                "min": -10.0,
                "max": 10.0,
                "description": "Helix rotations over the map; negative winds backwards"
            },
            "saturation": {
                "type": "number",
                "default": DEFAULT_SATURATION,
                "min": 0.0,
                "max": 2.0,
                "description": "Deviation amplitude from the gray ramp"
            },
            "gamma": {
                "type": "number",
                "default": DEFAULT_GAMMA,
                "min": 0.0,
                "max": GAMMA_MAX,
                "description": "Gamma applied to the gray ramp"
            }
        })
    }
}
