//! Contains the error type that can be emitted

/// The error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A dimension was zero, negative, infinite or NaN
    #[error("{name} must be a finite positive number, got {value}")]
    InvalidDimension {
        /// which dimension was rejected
        name: &'static str,
        /// the rejected value
        value: f64,
    },
    /// A rectangle with unequal sides was converted to a square
    #[error("not a square: width {width} != length {length}")]
    NotSquare {
        /// the rectangle's width
        width: f64,
        /// the rectangle's length
        length: f64,
    },
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        tracing::debug!(dimension = name, value, "rejected dimension");
        Err(Error::InvalidDimension { name, value })
    }
}
