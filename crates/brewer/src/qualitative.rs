//! Qualitative colormaps for categorical data.
//!
//! Colors are spread evenly around a hue arc at near-constant lightness
//! and chroma. Lightness is not actually constant: it dips toward colors
//! far from yellow by an amount set by `contrast`, which keeps perceived
//! brightness even across hues.

use lutforge_core::color::{lch_chroma, lch_to_luv, Lch, TAU};
use lutforge_core::colormap::{Colormap, Rgb8};
use lutforge_core::constants::ColorScience;
use lutforge_core::error::ColormapError;
use lutforge_core::gamut::max_saturation_at;
use lutforge_core::generator::{check_entry_count, Generator};
use lutforge_core::params::param_f64;
use serde_json::{json, Value};

use crate::{angle_param, finite_param, unit_param};

const PI: f64 = std::f64::consts::PI;

/// Default starting hue in radians.
pub const DEFAULT_HUE: f64 = 0.0;
/// Default hue arc: a full turn, so n colors split the circle evenly.
pub const DEFAULT_DIVERGENCE: f64 = TAU;
/// Default lightness dip for hues far from yellow.
pub const DEFAULT_CONTRAST: f64 = 0.25;
/// Default saturation as a fraction of red's (the gamut maximum).
pub const DEFAULT_SATURATION: f64 = 0.5;
/// Default base lightness as a fraction of yellow's.
pub const DEFAULT_BRIGHTNESS: f64 = 0.8;

/// Minimum-arc angular distance between two hues.
fn hue_diff(h0: f64, h1: f64) -> f64 {
    let t = (h1 - h0).abs();
    if t < PI {
        t
    } else {
        TAU - t
    }
}

/// Parameters for the qualitative method.
#[derive(Debug, Clone, Copy)]
pub struct QualitativeParams {
    /// Starting hue in radians, wrapped to [0, 2π).
    pub hue: f64,
    /// Hue arc covered by the n colors, clamped to [0, 2π]. A full turn
    /// is meaningful here (and the default), so this is an arc length,
    /// not a wrapped angle.
    pub divergence: f64,
    /// Lightness dip in [0, 1] for hues far from yellow.
    pub contrast: f64,
    /// Saturation in [0, 1], as a fraction of the gamut maximum.
    pub saturation: f64,
    /// Base lightness in [0, 1], as a fraction of yellow's lightness.
    pub brightness: f64,
}

impl Default for QualitativeParams {
    fn default() -> Self {
        Self {
            hue: DEFAULT_HUE,
            divergence: DEFAULT_DIVERGENCE,
            contrast: DEFAULT_CONTRAST,
            saturation: DEFAULT_SATURATION,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl QualitativeParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            hue: param_f64(params, "hue", DEFAULT_HUE),
            divergence: param_f64(params, "divergence", DEFAULT_DIVERGENCE),
            contrast: param_f64(params, "contrast", DEFAULT_CONTRAST),
            saturation: param_f64(params, "saturation", DEFAULT_SATURATION),
            brightness: param_f64(params, "brightness", DEFAULT_BRIGHTNESS),
        }
    }

    fn normalized(self) -> Result<Self, ColormapError> {
        Ok(Self {
            hue: angle_param("hue", self.hue)?,
            divergence: finite_param("divergence", self.divergence)?.clamp(0.0, TAU),
            contrast: unit_param("contrast", self.contrast)?,
            saturation: unit_param("saturation", self.saturation)?,
            brightness: unit_param("brightness", self.brightness)?,
        })
    }
}

/// Qualitative colormap generator.
#[derive(Debug)]
pub struct BrewerQualitative {
    params: QualitativeParams,
}

impl BrewerQualitative {
    /// Creates a qualitative generator after validating the parameters.
    pub fn new(params: QualitativeParams) -> Result<Self, ColormapError> {
        Ok(Self {
            params: params.normalized()?,
        })
    }

    /// Creates a qualitative generator from a JSON params object.
    pub fn from_json(json_params: &Value) -> Result<Self, ColormapError> {
        Self::new(QualitativeParams::from_json(json_params))
    }
}

impl Generator for BrewerQualitative {
    fn generate(&self, n: usize) -> Result<Colormap, ColormapError> {
        check_entry_count(n)?;
        let cs = ColorScience::d65();

        let eps = self.params.hue / TAU;
        let arc = self.params.divergence / TAU;
        let l0 = self.params.brightness * cs.bright_point.l;
        let l1 = (1.0 - self.params.contrast) * l0;

        let mut entries = Vec::with_capacity(n);
        for i in 0..n {
            let t = i as f64 / (n - 1) as f64;
            let ch = (TAU * (eps + t * arc)) % TAU;
            let alpha = hue_diff(ch, cs.bright_hue) / PI;
            let cl = (1.0 - alpha) * l0 + alpha * l1;
            let sat = max_saturation_at(cl, ch, cs).min(self.params.saturation * cs.red_saturation);
            let c = lch_to_luv(Lch {
                l: cl,
                c: lch_chroma(cl, sat),
                h: ch,
            });
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
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "hue": {
                "type": "number",
                "default": DEFAULT_HUE,
                "min": 0.0,
                "max": TAU,
                "description": "Starting hue in radians"
            },
            "divergence": {
                "type": "number",
                "default": DEFAULT_DIVERGENCE,
                "min": 0.0,
                "max": TAU,
                "description": "Hue arc covered by the colors"
            },
            "contrast": {
                "type": "number",
                "default": DEFAULT_CONTRAST,
                "min": 0.0,
                "max": 1.0,
                "description": "Lightness dip for hues far from yellow"
            },
            "saturation": {
                "type": "number",
                "default": DEFAULT_SATURATION,
                "min": 0.0,
                "max": 1.0,
                "description": "Saturation as a fraction of the gamut maximum"
            },
            "brightness": {
                "type": "number",
                "default": DEFAULT_BRIGHTNESS,
                "min": 0.0,
                "max": 1.0,
                "description": "Base lightness as a fraction of yellow's"
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutforge_core::color::{linear_to_xyz, srgb_to_linear, xyz_to_luv, Srgb};
    use serde_json::json;

    fn qual(params: QualitativeParams) -> BrewerQualitative {
        BrewerQualitative::new(params).unwrap()
    }

    // ---- Hue distance ----

    #[test]
    fn hue_diff_takes_the_short_arc() {
        assert!((hue_diff(0.1, 0.4) - 0.3).abs() < 1e-12);
        assert!((hue_diff(0.1, TAU - 0.1) - 0.2).abs() < 1e-12);
        assert!((hue_diff(0.0, PI) - PI).abs() < 1e-12);
    }

    // ---- Generation ----

    #[test]
    fn generate_returns_requested_length() {
        let g = qual(QualitativeParams::default());
        for n in [2, 8, 12] {
            assert_eq!(g.generate(n).unwrap().len(), n);
        }
    }

    #[test]
    fn generate_rejects_fewer_than_two_entries() {
        let g = qual(QualitativeParams::default());
        assert!(g.generate(1).is_err());
    }

    #[test]
    fn full_circle_arc_repeats_the_first_color_at_the_end() {
        // divergence = 2π puts the last entry at the starting hue again.
        let map = qual(QualitativeParams::default()).generate(8).unwrap();
        assert_eq!(map.get(0), map.get(7));
    }

    #[test]
    fn entries_are_pairwise_distinct_inside_the_arc() {
        let map = qual(QualitativeParams::default()).generate(8).unwrap();
        for i in 0..7 {
            for j in (i + 1)..7 {
                assert_ne!(map.get(i), map.get(j), "entries {i} and {j} collide");
            }
        }
    }

    #[test]
    fn zero_saturation_yields_grays() {
        let g = qual(QualitativeParams {
            saturation: 0.0,
            ..Default::default()
        });
        let map = g.generate(6).unwrap();
        for (i, e) in map.entries().iter().enumerate() {
            let spread = e.r.max(e.g).max(e.b) - e.r.min(e.g).min(e.b);
            assert!(spread <= 1, "entry {i} not gray: {e:?}");
        }
    }

    #[test]
    fn lightness_dips_away_from_yellow() {
        // Perceptual lightness must fall as the hue distance from yellow
        // grows, so compare entries in LUV rather than by sRGB bytes
        // (saturated blues have large byte sums at low lightness).
        let g = qual(QualitativeParams::default());
        let map = g.generate(12).unwrap();
        let cs = ColorScience::d65();
        let luv_l = |i: usize| {
            let e = map.get(i).unwrap();
            let srgb = Srgb {
                r: e.r as f64 / 255.0,
                g: e.g as f64 / 255.0,
                b: e.b as f64 / 255.0,
            };
            xyz_to_luv(linear_to_xyz(srgb_to_linear(srgb)), &cs.white).l
        };
        let dist = |i: usize| {
            let h = (TAU * (i as f64 / 11.0)) % TAU;
            hue_diff(h, cs.bright_hue)
        };
        let nearest = (0..12)
            .min_by(|&a, &b| dist(a).partial_cmp(&dist(b)).unwrap())
            .unwrap();
        let farthest = (0..12)
            .max_by(|&a, &b| dist(a).partial_cmp(&dist(b)).unwrap())
            .unwrap();
        assert!(
            luv_l(nearest) > luv_l(farthest),
            "near-yellow entry {nearest} (L {:.2}) not lighter than far entry {farthest} (L {:.2})",
            luv_l(nearest),
            luv_l(farthest)
        );
    }

    // ---- JSON ----

    #[test]
    fn from_json_falls_back_to_defaults() {
        let g = BrewerQualitative::from_json(&json!({})).unwrap();
        let p = g.params();
        assert_eq!(p["contrast"], DEFAULT_CONTRAST);
        assert_eq!(p["brightness"], DEFAULT_BRIGHTNESS);
    }

    #[test]
    fn params_round_trip_through_json() {
        let g = qual(QualitativeParams {
            hue: 1.0,
            divergence: 3.5,
            ..Default::default()
        });
        let again = BrewerQualitative::from_json(&g.params()).unwrap();
        assert_eq!(g.params(), again.params());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_finite_params_generate_valid_maps(
                hue in -10.0_f64..=10.0,
                divergence in -10.0_f64..=10.0,
                contrast in 0.0_f64..=1.0,
                saturation in 0.0_f64..=1.0,
                brightness in 0.0_f64..=1.0,
            ) {
                let g = BrewerQualitative::new(QualitativeParams {
                    hue, divergence, contrast, saturation, brightness,
                }).unwrap();
                let map = g.generate(9).unwrap();
                prop_assert_eq!(map.len(), 9);
            }
        }
    }
}
