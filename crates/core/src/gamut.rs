//! Gamut boundary solver for the sRGB cube.
//!
//! For a given LCH hue, the most saturated representable color lies on the
//! surface of the sRGB cube, on one of six faces selected by the hue's
//! angular sector between the saturated corner hues (red, yellow, green,
//! cyan, blue, magenta). On that face two channels are pinned to 0 and 1,
//! which makes the hue-matching condition linear in the remaining channel —
//! the solve is exact, no iteration.

use crate::color::{
    linear_component_to_srgb, linear_to_xyz, luv_saturation, srgb_to_linear, xyz_to_luv, Luv, Srgb,
    RGB_TO_XYZ, TAU,
};
use crate::constants::ColorScience;

/// One of the six angular sectors of the sRGB gamut, bounded by the hues
/// of the saturated cube corners.
///
/// Each sector pins two channels and solves for the third: `zero` is held
/// at 0, `one` at 1, `free` is the unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamutSector {
    /// Wrap-around sector below red's hue / at or above magenta's.
    MagentaToRed,
    RedToYellow,
    YellowToGreen,
    GreenToCyan,
    CyanToBlue,
    BlueToMagenta,
}

impl GamutSector {
    /// Buckets a hue (normalized to [0, 2π) internally) into its sector.
    pub fn from_hue(hue: f64, cs: &ColorScience) -> Self {
        let hue = hue.rem_euclid(TAU);
        let h = &cs.sector_hues;
        if hue < h[0] {
            GamutSector::MagentaToRed
        } else if hue < h[1] {
            GamutSector::RedToYellow
        } else if hue < h[2] {
            GamutSector::YellowToGreen
        } else if hue < h[3] {
            GamutSector::GreenToCyan
        } else if hue < h[4] {
            GamutSector::CyanToBlue
        } else if hue < h[5] {
            GamutSector::BlueToMagenta
        } else {
            GamutSector::MagentaToRed
        }
    }

    /// Channel roles for this sector as (free, zero, one) indices into
    /// an [r, g, b] array.
    pub fn channel_roles(self) -> (usize, usize, usize) {
        match self {
            GamutSector::MagentaToRed => (2, 1, 0),
            GamutSector::RedToYellow => (1, 2, 0),
            GamutSector::YellowToGreen => (0, 2, 1),
            GamutSector::GreenToCyan => (2, 0, 1),
            GamutSector::CyanToBlue => (1, 0, 2),
            GamutSector::BlueToMagenta => (0, 1, 2),
        }
    }
}

/// Finds the most saturated sRGB-representable color with the given LCH
/// hue, returned in LUV.
///
/// The result lies exactly on the cube surface: one channel 0, one channel
/// 1, and the third solved from the linear hue-matching equation.
pub fn most_saturated_in_gamut(hue: f64, cs: &ColorScience) -> Luv {
    let hue = hue.rem_euclid(TAU);
    let (i, j, k) = GamutSector::from_hue(hue, cs).channel_roles();

    // Hue match in the u'/v' plane: the direction orthogonal to the target
    // hue must have zero projection.
    let alpha = -hue.sin();
    let beta = hue.cos();
    let t = alpha * cs.white.u_prime + beta * cs.white.v_prime;

    let m = &RGB_TO_XYZ;
    let q0 = t * (m[0][k] + 15.0 * m[1][k] + 3.0 * m[2][k])
        - (4.0 * alpha * m[0][k] + 9.0 * beta * m[1][k]);
    let q1 = t * (m[0][i] + 15.0 * m[1][i] + 3.0 * m[2][i])
        - (4.0 * alpha * m[0][i] + 9.0 * beta * m[1][i]);

    let ratio = -q0 / q1;
    let free = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut srgb = [0.0_f64; 3];
    srgb[j] = 0.0;
    srgb[k] = 1.0;
    srgb[i] = linear_component_to_srgb(free);

    let c = Srgb::new(srgb[0], srgb[1], srgb[2]);
    xyz_to_luv(linear_to_xyz(srgb_to_linear(c)), &cs.white)
}

/// Largest saturation achievable at the given lightness and hue.
///
/// Interpolates linearly in saturation between the gamut boundary point at
/// that hue and pure black or pure white (whichever side of the boundary
/// point's lightness applies). A 2-segment linear model of the true gamut
/// boundary; the family generators' visual calibration depends on this
/// exact approximation, so it must not be refined.
pub fn max_saturation_at(lightness: f64, hue: f64, cs: &ColorScience) -> f64 {
    let pmid = most_saturated_in_gamut(hue, cs);
    let mut pend = Luv::new(0.0, 0.0, 0.0);
    if lightness > pmid.l {
        pend.l = 100.0;
    }
    let alpha = (pend.l - lightness) / (pend.l - pmid.l);
    let pmid_s = luv_saturation(pmid);
    let pend_s = luv_saturation(pend);
    alpha * (pmid_s - pend_s) + pend_s
}
