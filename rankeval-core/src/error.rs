//! Error types for the rankeval-core crate.

use thiserror::Error;

/// Top-level error type for metric computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    #[error("Shape mismatch: paired sequences have lengths {left} and {right}")]
    ShapeMismatch { left: usize, right: usize },

    #[error("Empty input: at least one item is required")]
    EmptyInput,

    #[error("Invalid label {value} at index {index}: labels must be 0 or 1")]
    InvalidLabel { index: usize, value: u8 },

    #[error("Invalid score at index {index}: scores must not be NaN")]
    InvalidScore { index: usize },

    #[error("Undefined metric: {0}")]
    UndefinedMetric(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Insufficient points: need at least 2 to compute an area, got {points}")]
    InsufficientPoints { points: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MetricError {
    pub fn shape_mismatch(left: usize, right: usize) -> Self {
        Self::ShapeMismatch { left, right }
    }

    pub fn undefined(msg: impl Into<String>) -> Self {
        Self::UndefinedMetric(msg.into())
    }

    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<figment::Error> for MetricError {
    fn from(err: figment::Error) -> Self {
        Self::config(err.to_string())
    }
}
