//! Error types for backdrop core.

use thiserror::Error;

/// Errors produced while resolving or rendering a decoration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BackdropError {
    /// A shape, color-variant or position key was not present in its table.
    #[error("unknown {table} key '{key}' (expected one of: {})", .expected.join(", "))]
    UnknownKey {
        table: &'static str,
        key: String,
        expected: Vec<&'static str>,
    },

    /// A numeric setting fell outside its valid range.
    #[error("{name} must be within [{min}, {max}], got {value}")]
    InvalidRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A tile dimension was not a positive finite number.
    #[error("{name} must be a positive number, got '{value}'")]
    InvalidDimension { name: &'static str, value: String },

    /// An explicit gradient color would break out of its CSS declaration.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A configuration object had the wrong shape (e.g. not a JSON object).
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
