// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Latitude or longitude outside the global range (or not finite).
    /// Values are reported in the unit they were supplied in.
    #[error("Coordinates out of bounds: latitude {latitude}, longitude {longitude}")]
    InvalidBound { latitude: f64, longitude: f64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value that should always exist could not be produced. Reaching this
    /// is a bug in the crate, not a caller error.
    #[error("Missing value: {0}")]
    NilValue(String),
}

impl GeoError {
    pub(crate) fn invalid_bound(latitude: f64, longitude: f64) -> Self {
        GeoError::InvalidBound {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeoError::invalid_bound(91.0, 0.0);
        assert_eq!(
            err.to_string(),
            "Coordinates out of bounds: latitude 91, longitude 0"
        );

        let err = GeoError::InvalidArgument("distance must not be negative".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: distance must not be negative"
        );
    }
}
