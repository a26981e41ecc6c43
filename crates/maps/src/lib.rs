#![deny(unsafe_code)]
//! Method registry: maps method names to colormap generator implementations.
//!
//! This crate sits between `lutforge-core` (which defines the `Generator`
//! trait) and the individual method crates (`lutforge-brewer`,
//! `lutforge-cubehelix`). Callers that pick a method at runtime depend on
//! this crate to avoid duplicating dispatch logic.

use lutforge_brewer::{BrewerDiverging, BrewerQualitative, BrewerSequential};
use lutforge_core::colormap::Colormap;
use lutforge_core::error::ColormapError;
use lutforge_core::Generator;
use lutforge_cubehelix::CubeHelix;
use serde_json::Value;

/// All available method names.
const METHOD_NAMES: &[&str] = &["sequential", "diverging", "qualitative", "cubehelix"];

/// Enumeration of all available colormap methods.
///
/// Wraps each generator implementation and delegates `Generator` trait
/// methods. Use [`MethodKind::from_name`] for string-based construction.
pub enum MethodKind {
    /// Single-hue lightness ramp.
    Sequential(BrewerSequential),
    /// Two mirrored ramps meeting at a neutral midpoint.
    Diverging(BrewerDiverging),
    /// Categorical colors at near-constant lightness.
    Qualitative(BrewerQualitative),
    /// Gray ramp with a helix of deviations wound around it.
    CubeHelix(CubeHelix),
}

impl MethodKind {
    /// Constructs a method by name.
    ///
    /// Returns `ColormapError::UnknownMethod` if the name is not recognized;
    /// parameter validation errors from the chosen method pass through.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, ColormapError> {
        match name {
            "sequential" => Ok(MethodKind::Sequential(BrewerSequential::from_json(params)?)),
            "diverging" => Ok(MethodKind::Diverging(BrewerDiverging::from_json(params)?)),
            "qualitative" => Ok(MethodKind::Qualitative(BrewerQualitative::from_json(
                params,
            )?)),
            "cubehelix" => Ok(MethodKind::CubeHelix(CubeHelix::from_json(params)?)),
            _ => Err(ColormapError::UnknownMethod(name.to_string())),
        }
    }

    /// Returns a slice of all recognized method names.
    pub fn list_methods() -> &'static [&'static str] {
        METHOD_NAMES
    }
}

impl Generator for MethodKind {
    fn generate(&self, n: usize) -> Result<Colormap, ColormapError> {
        match self {
            MethodKind::Sequential(g) => g.generate(n),
            MethodKind::Diverging(g) => g.generate(n),
            MethodKind::Qualitative(g) => g.generate(n),
            MethodKind::CubeHelix(g) => g.generate(n),
        }
    }

    fn params(&self) -> Value {
        match self {
            MethodKind::Sequential(g) => g.params(),
            MethodKind::Diverging(g) => g.params(),
            MethodKind::Qualitative(g) => g.params(),
            MethodKind::CubeHelix(g) => g.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            MethodKind::Sequential(g) => g.param_schema(),
            MethodKind::Diverging(g) => g.param_schema(),
            MethodKind::Qualitative(g) => g.param_schema(),
            MethodKind::CubeHelix(g) => g.param_schema(),
        }
    }
}
