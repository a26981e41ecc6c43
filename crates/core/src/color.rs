//! Color types and conversion functions for the lutforge engine.
//!
//! Provides five color types (`Srgb`, `LinearRgb`, `Xyz`, `Luv`, `Lch`) and
//! pure conversion functions between adjacent pairs in the chain
//! sRGB ↔ linear RGB ↔ XYZ ↔ LUV ↔ LCH. All conversions are pure functions
//! (no methods with side effects). Uses `f64` throughout for precision.
//!
//! Conventions: sRGB and linear RGB components are in [0, 1]; XYZ, LUV and
//! LCH values are unnormalized (Y and L in roughly [0, 100]); hue angles are
//! radians in [0, 2π). The white point is threaded in explicitly via
//! [`WhitePoint`] so tests can substitute a different illuminant.

use crate::constants::WhitePoint;

/// Full turn in radians; hue angles live in [0, TAU).
pub const TAU: f64 = 2.0 * std::f64::consts::PI;

/// Lightness floor used when dividing chroma by lightness.
pub const SATURATION_EPSILON: f64 = 1e-8;

/// sRGB color (gamma-encoded) with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded), proportional to light intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// CIE XYZ tristimulus, unnormalized (Y in roughly [0, 100]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE 1976 L*u*v* color. Supports exact linear combination via
/// [`Luv::add`], [`Luv::scale`], and [`Luv::mix`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    pub l: f64,
    pub u: f64,
    pub v: f64,
}

/// Cylindrical form of LUV: lightness, chroma (≥ 0), hue in [0, 2π).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Srgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Luv {
    pub const fn new(l: f64, u: f64, v: f64) -> Self {
        Self { l, u, v }
    }

    /// Componentwise sum. Exact linear combination, not a perceptual blend;
    /// intermediate results may be non-physical colors, which is expected.
    #[must_use]
    pub fn add(self, other: Luv) -> Luv {
        Luv::new(self.l + other.l, self.u + other.u, self.v + other.v)
    }

    /// Componentwise scaling by `k`.
    #[must_use]
    pub fn scale(self, k: f64) -> Luv {
        Luv::new(k * self.l, k * self.u, k * self.v)
    }

    /// Linear blend: `(1 − alpha)·self + alpha·other`.
    #[must_use]
    pub fn mix(self, other: Luv, alpha: f64) -> Luv {
        self.scale(1.0 - alpha).add(other.scale(alpha))
    }
}

/// The u′ perspective divide of CIE 1976 UCS.
///
/// The denominator `x + 15y + 3z` vanishes only for XYZ (0, 0, 0); that
/// case returns 0 instead of dividing.
pub fn u_prime(c: Xyz) -> f64 {
    let denom = c.x + 15.0 * c.y + 3.0 * c.z;
    if denom.abs() < 1e-12 {
        0.0
    } else {
        4.0 * c.x / denom
    }
}

/// The v′ perspective divide of CIE 1976 UCS. Same guard as [`u_prime`].
pub fn v_prime(c: Xyz) -> f64 {
    let denom = c.x + 15.0 * c.y + 3.0 * c.z;
    if denom.abs() < 1e-12 {
        0.0
    } else {
        9.0 * c.y / denom
    }
}

/// Applies inverse sRGB gamma to a single component (IEC 61966-2-1).
pub(crate) fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB gamma to a single linear component (IEC 61966-2-1).
pub(crate) fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Converts linear RGB to sRGB by applying sRGB gamma.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_component_to_srgb(c.r),
        g: linear_component_to_srgb(c.g),
        b: linear_component_to_srgb(c.b),
    }
}

/// Row-major sRGB-primaries/D65 RGB→XYZ matrix (before the ×100 scale).
pub(crate) const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// Converts linear RGB to XYZ (sRGB primaries, D65 white, Y scaled to 100).
pub fn linear_to_xyz(c: LinearRgb) -> Xyz {
    Xyz {
        x: (RGB_TO_XYZ[0][0] * c.r + RGB_TO_XYZ[0][1] * c.g + RGB_TO_XYZ[0][2] * c.b) * 100.0,
        y: (RGB_TO_XYZ[1][0] * c.r + RGB_TO_XYZ[1][1] * c.g + RGB_TO_XYZ[1][2] * c.b) * 100.0,
        z: (RGB_TO_XYZ[2][0] * c.r + RGB_TO_XYZ[2][1] * c.g + RGB_TO_XYZ[2][2] * c.b) * 100.0,
    }
}

/// Converts XYZ to linear RGB, clamping each channel to [0, 1].
///
/// Out-of-gamut colors are clamped rather than wrapped; callers that track
/// clipping as a quality signal detect it before quantization.
pub fn xyz_to_linear(c: Xyz) -> LinearRgb {
    LinearRgb {
        r: ((3.2406255 * c.x - 1.5372080 * c.y - 0.4986286 * c.z) / 100.0).clamp(0.0, 1.0),
        g: ((-0.9689307 * c.x + 1.8757561 * c.y + 0.0415175 * c.z) / 100.0).clamp(0.0, 1.0),
        b: ((0.0557101 * c.x - 0.2040211 * c.y + 1.0569959 * c.z) / 100.0).clamp(0.0, 1.0),
    }
}

/// Converts XYZ to LUV relative to the given white point.
///
/// Uses the linear near-black segment below (6/29)³ to avoid the singular
/// derivative of the cube-root branch at Y = 0.
pub fn xyz_to_luv(c: Xyz, wp: &WhitePoint) -> Luv {
    let y_ratio = c.y / wp.xyz.y;
    let cutoff = (6.0 / 29.0) * (6.0 / 29.0) * (6.0 / 29.0);
    let l = if y_ratio <= cutoff {
        (29.0 / 3.0) * (29.0 / 3.0) * (29.0 / 3.0) * y_ratio
    } else {
        116.0 * y_ratio.cbrt() - 16.0
    };
    Luv {
        l,
        u: 13.0 * l * (u_prime(c) - wp.u_prime),
        v: 13.0 * l * (v_prime(c) - wp.v_prime),
    }
}

/// Converts LUV to XYZ relative to the given white point.
///
/// Lightness below [`SATURATION_EPSILON`] maps to XYZ (0, 0, 0); the
/// closed-form inverse divides by `13·l` and would otherwise produce NaN.
pub fn luv_to_xyz(c: Luv, wp: &WhitePoint) -> Xyz {
    if c.l < SATURATION_EPSILON {
        return Xyz::new(0.0, 0.0, 0.0);
    }
    let up = c.u / (13.0 * c.l) + wp.u_prime;
    let vp = c.v / (13.0 * c.l) + wp.v_prime;
    if vp.abs() < 1e-12 {
        return Xyz::new(0.0, 0.0, 0.0);
    }
    let y = if c.l <= 8.0 {
        wp.xyz.y * c.l * (3.0 / 29.0) * (3.0 / 29.0) * (3.0 / 29.0)
    } else {
        let tmp = (c.l + 16.0) / 116.0;
        wp.xyz.y * tmp * tmp * tmp
    };
    Xyz {
        x: y * (9.0 * up) / (4.0 * vp),
        y,
        z: y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp),
    }
}

/// Converts LUV to its cylindrical LCH form.
///
/// Hue is `atan2(v, u)` normalized into [0, 2π). For tiny negative inputs
/// `rem_euclid` can return the modulus itself, so that case folds to 0.
pub fn luv_to_lch(c: Luv) -> Lch {
    let chroma = c.u.hypot(c.v);
    let mut h = c.v.atan2(c.u).rem_euclid(TAU);
    if h >= TAU {
        h = 0.0;
    }
    Lch { l: c.l, c: chroma, h }
}

/// Converts LCH to LUV.
pub fn lch_to_luv(c: Lch) -> Luv {
    Luv {
        l: c.l,
        u: c.c * c.h.cos(),
        v: c.c * c.h.sin(),
    }
}

/// Saturation of an LCH color: chroma over lightness, with the lightness
/// floored at [`SATURATION_EPSILON`] to avoid blow-up near black.
pub fn lch_saturation(l: f64, chroma: f64) -> f64 {
    chroma / l.max(SATURATION_EPSILON)
}

/// Chroma of an LCH color with the given lightness and saturation.
pub fn lch_chroma(l: f64, saturation: f64) -> f64 {
    saturation * l
}

/// Saturation of a LUV color.
pub fn luv_saturation(c: Luv) -> f64 {
    lch_saturation(c.l, c.u.hypot(c.v))
}

/// Convenience: the LCH hue of an sRGB color, via the full conversion chain.
pub fn srgb_to_lch_hue(c: Srgb, wp: &WhitePoint) -> f64 {
    luv_to_lch(xyz_to_luv(linear_to_xyz(srgb_to_linear(c)), wp)).h
}

/// Convenience: LUV to sRGB via LUV → XYZ → linear → sRGB, clamped in the
/// XYZ → linear step.
pub fn luv_to_srgb(c: Luv, wp: &WhitePoint) -> Srgb {
    linear_to_srgb(xyz_to_linear(luv_to_xyz(c, wp)))
}
