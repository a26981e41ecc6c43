//! Memoized color-science constants.
//!
//! The reference points every generator needs — the white point's u′/v′
//! chromaticity, the six sRGB-corner hues, the bright point (pure yellow)
//! and red's saturation — are pure functions of the illuminant. They are
//! computed once, eagerly, inside a [`std::sync::OnceLock`] so concurrent
//! first access is safe, and never mutated afterwards. Tests can build a
//! [`ColorScience`] for a different white point directly.

use std::sync::OnceLock;

use crate::color::{
    linear_to_xyz, luv_saturation, luv_to_lch, srgb_to_lch_hue, srgb_to_linear, u_prime, v_prime,
    xyz_to_luv, Luv, Srgb, Xyz,
};

/// D65 standard illuminant tristimulus.
pub const D65_XYZ: Xyz = Xyz::new(95.047, 100.0, 108.883);

/// An illuminant's tristimulus plus its precomputed u′/v′ chromaticity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    pub xyz: Xyz,
    pub u_prime: f64,
    pub v_prime: f64,
}

impl WhitePoint {
    /// Builds a white point from its tristimulus.
    pub fn new(xyz: Xyz) -> Self {
        Self {
            xyz,
            u_prime: u_prime(xyz),
            v_prime: v_prime(xyz),
        }
    }

    /// The shared D65 white point, computed on first access.
    pub fn d65() -> &'static WhitePoint {
        static D65: OnceLock<WhitePoint> = OnceLock::new();
        D65.get_or_init(|| WhitePoint::new(D65_XYZ))
    }
}

/// Derived reference colors for gamut and profile computations.
///
/// `sector_hues` holds the LCH hues of the six saturated sRGB cube corners
/// in traversal order red, yellow, green, cyan, blue, magenta. The bright
/// point is pure yellow; it doubles as the "yellow" reference the
/// qualitative generator interpolates lightness against. `red_saturation`
/// is the largest saturation any sRGB color reaches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScience {
    pub white: WhitePoint,
    pub sector_hues: [f64; 6],
    pub bright_point: Luv,
    pub bright_hue: f64,
    pub bright_saturation: f64,
    pub red_saturation: f64,
}

impl ColorScience {
    /// Computes all reference values for the given white point.
    pub fn new(white: WhitePoint) -> Self {
        let sector_hues = [
            srgb_to_lch_hue(Srgb::new(1.0, 0.0, 0.0), &white),
            srgb_to_lch_hue(Srgb::new(1.0, 1.0, 0.0), &white),
            srgb_to_lch_hue(Srgb::new(0.0, 1.0, 0.0), &white),
            srgb_to_lch_hue(Srgb::new(0.0, 1.0, 1.0), &white),
            srgb_to_lch_hue(Srgb::new(0.0, 0.0, 1.0), &white),
            srgb_to_lch_hue(Srgb::new(1.0, 0.0, 1.0), &white),
        ];

        let bright_point = xyz_to_luv(
            linear_to_xyz(srgb_to_linear(Srgb::new(1.0, 1.0, 0.0))),
            &white,
        );
        let bright_lch = luv_to_lch(bright_point);

        let red = xyz_to_luv(
            linear_to_xyz(srgb_to_linear(Srgb::new(1.0, 0.0, 0.0))),
            &white,
        );

        Self {
            white,
            sector_hues,
            bright_point,
            bright_hue: bright_lch.h,
            bright_saturation: crate::color::lch_saturation(bright_lch.l, bright_lch.c),
            red_saturation: luv_saturation(red),
        }
    }

    /// The shared D65 instance, computed on first access.
    pub fn d65() -> &'static ColorScience {
        static D65: OnceLock<ColorScience> = OnceLock::new();
        D65.get_or_init(|| ColorScience::new(*WhitePoint::d65()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::TAU;

    #[test]
    fn d65_chromaticity_matches_reference_values() {
        let wp = WhitePoint::d65();
        assert!((wp.u_prime - 0.197840).abs() < 1e-5, "u': {}", wp.u_prime);
        assert!((wp.v_prime - 0.468336).abs() < 1e-5, "v': {}", wp.v_prime);
    }

    #[test]
    fn sector_hues_are_strictly_increasing() {
        let cs = ColorScience::d65();
        for pair in cs.sector_hues.windows(2) {
            assert!(
                pair[0] < pair[1],
                "sector hues out of order: {} >= {}",
                pair[0],
                pair[1]
            );
        }
        assert!(cs.sector_hues[0] > 0.0);
        assert!(cs.sector_hues[5] < TAU);
    }

    #[test]
    fn bright_point_is_yellow() {
        let cs = ColorScience::d65();
        assert!(
            (cs.bright_point.l - 97.138).abs() < 1e-2,
            "bright L: {}",
            cs.bright_point.l
        );
        assert!(
            (cs.bright_hue - 1.49879).abs() < 1e-4,
            "bright hue: {}",
            cs.bright_hue
        );
        // Bright hue equals the yellow corner hue by construction.
        assert!((cs.bright_hue - cs.sector_hues[1]).abs() < 1e-12);
    }

    #[test]
    fn red_saturation_is_the_gamut_maximum() {
        let cs = ColorScience::d65();
        assert!(
            (cs.red_saturation - 3.3640).abs() < 1e-3,
            "red saturation: {}",
            cs.red_saturation
        );
        assert!(cs.red_saturation > cs.bright_saturation);
    }

    #[test]
    fn shared_instance_is_stable_across_calls() {
        let a = ColorScience::d65() as *const ColorScience;
        let b = ColorScience::d65() as *const ColorScience;
        assert_eq!(a, b);
    }

    #[test]
    fn custom_white_point_changes_references() {
        // Equal-energy illuminant: different chromaticity, different refs.
        let e = WhitePoint::new(Xyz::new(100.0, 100.0, 100.0));
        let cs = ColorScience::new(e);
        assert!((cs.white.u_prime - WhitePoint::d65().u_prime).abs() > 1e-4);
        assert!(cs.bright_point.l > 0.0);
        assert!(cs.red_saturation > 0.0);
    }
}
