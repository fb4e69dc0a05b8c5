use thiserror::Error;

/// Errors produced while constructing shape values.
#[derive(Debug, Error, PartialEq)]
pub enum TypeError {
    #[error("{shape} coordinates must be finite numbers")]
    NonFiniteCoordinate { shape: &'static str },

    #[error("{shape}: {field} must be a positive number, got {value}")]
    NonPositiveDimension {
        shape: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("vertices do not form a rectangle: {reason}")]
    NotARectangle { reason: &'static str },
}
