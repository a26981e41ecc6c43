//! Error types for the lutforge core.

use thiserror::Error;

/// Errors produced by colormap generation.
#[derive(Debug, Error)]
pub enum ColormapError {
    /// The requested entry count was below the minimum of 2.
    #[error("too few entries: {n} requested, minimum is {min}")]
    TooFewEntries { n: usize, min: usize },

    /// A parameter was NaN or infinite.
    #[error("parameter '{name}' is not finite: {value}")]
    NonFiniteParam { name: String, value: f64 },

    /// A parameter was outside its accepted range.
    #[error("parameter '{name}' out of range: {value} not in [{min}, {max}]")]
    ParamOutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A generation method name did not match any registered method.
    #[error("unknown method: {0}")]
    UnknownMethod(String),
}
