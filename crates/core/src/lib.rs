#![deny(unsafe_code)]
//! Core types and color math for the lutforge colormap system.
//!
//! Provides the `Generator` trait, the sRGB/linear/XYZ/LUV/LCH conversion
//! chain (`Srgb`, `LinearRgb`, `Xyz`, `Luv`, `Lch`), the sRGB gamut
//! boundary solver, Bezier lightness/chroma profiles, the `Colormap`
//! output type, memoized D65 reference constants, and parameter helpers.

pub mod color;
pub mod colormap;
pub mod constants;
pub mod error;
pub mod gamut;
pub mod generator;
pub mod params;
pub mod profile;

pub use color::{Lch, LinearRgb, Luv, Srgb, Xyz};
pub use colormap::{Colormap, Rgb8};
pub use constants::{ColorScience, WhitePoint};
pub use error::ColormapError;
pub use generator::Generator;
pub use profile::ProfilePoints;
