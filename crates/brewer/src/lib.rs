#![deny(unsafe_code)]
//! Perceptually uniform multi-hue colormap generators.
//!
//! Three methods built on the same LUV machinery: [`BrewerSequential`]
//! ramps lightness monotonically through a single-hue Bezier profile,
//! [`BrewerDiverging`] joins two mirrored sequential ramps at a neutral
//! midpoint, and [`BrewerQualitative`] places categorical colors at
//! near-constant lightness around the hue circle.
//!
//! All three validate their parameters up front: non-finite values are
//! rejected, unit-range scalars are clamped, and angles are wrapped to
//! [0, 2π).

use lutforge_core::color::TAU;
use lutforge_core::ColormapError;

pub mod diverging;
pub mod qualitative;
pub mod sequential;

pub use diverging::{BrewerDiverging, DivergingParams};
pub use qualitative::{BrewerQualitative, QualitativeParams};
pub use sequential::{default_contrast_for_small_n, BrewerSequential, SequentialParams};

/// Rejects NaN and infinities with a typed error.
pub(crate) fn finite_param(name: &str, value: f64) -> Result<f64, ColormapError> {
    if !value.is_finite() {
        return Err(ColormapError::NonFiniteParam {
            name: name.into(),
            value,
        });
    }
    Ok(value)
}

/// Finite check plus clamp to the unit interval.
pub(crate) fn unit_param(name: &str, value: f64) -> Result<f64, ColormapError> {
    Ok(finite_param(name, value)?.clamp(0.0, 1.0))
}

/// Finite check plus wrap to [0, 2π).
///
/// `rem_euclid` can return the modulus itself for tiny negative inputs,
/// so that case is folded back to zero.
pub(crate) fn angle_param(name: &str, value: f64) -> Result<f64, ColormapError> {
    let wrapped = finite_param(name, value)?.rem_euclid(TAU);
    Ok(if wrapped >= TAU { 0.0 } else { wrapped })
}
