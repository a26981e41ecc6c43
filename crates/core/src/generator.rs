//! The core `Generator` trait that every colormap method implements.
//!
//! The trait is object-safe so methods can be used as `dyn Generator` for
//! runtime switching between generation algorithms.

use crate::colormap::Colormap;
use crate::error::ColormapError;
use serde_json::Value;

/// Core trait for colormap generators.
///
/// Each generator holds validated parameters and produces a [`Colormap`]
/// of any requested length on demand. Generation is a pure function of the
/// parameters, so a generator can be shared and called repeatedly.
///
/// This trait is **object-safe**: you can use `Box<dyn Generator>` or
/// `&dyn Generator` for runtime polymorphism.
pub trait Generator {
    /// Generates a colormap with `n` entries.
    ///
    /// Returns `ColormapError::TooFewEntries` when `n < 2`; two entries is
    /// the smallest map with distinct endpoints.
    fn generate(&self, n: usize) -> Result<Colormap, ColormapError>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}

/// Smallest entry count a generator accepts.
pub const MIN_ENTRIES: usize = 2;

/// Shared entry-count check used by every generator.
pub fn check_entry_count(n: usize) -> Result<(), ColormapError> {
    if n < MIN_ENTRIES {
        return Err(ColormapError::TooFewEntries { n, min: MIN_ENTRIES });
    }
    Ok(())
}
