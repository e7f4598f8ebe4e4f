//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors raised at the crate boundary (ingest and configuration).
///
/// The distance, ranking and viewport calculations themselves never fail.
#[derive(Debug, Error)]
pub enum GeoError {
    /// A backend record could not be turned into a located entity
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Planner configuration is unreadable or out of range
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Error code for integration with the web client's error reporting.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid backend record
    InvalidRecord = 10001,
    /// Invalid planner configuration
    Config = 10002,
    /// JSON parsing error
    JsonParsing = 10003,
    /// TOML parsing error
    TomlParsing = 10004,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidRecord(_) => GeoErrorCode::InvalidRecord,
            GeoError::Config(_) => GeoErrorCode::Config,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
            GeoError::TomlError(_) => GeoErrorCode::TomlParsing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GeoError::InvalidRecord("x".into()).code() as u32, 10001);
        assert_eq!(GeoError::Config("x".into()).code(), GeoErrorCode::Config);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(GeoError::from(json_err).code(), GeoErrorCode::JsonParsing);
    }

    #[test]
    fn test_error_display() {
        let err = GeoError::InvalidRecord("missing id".into());
        assert_eq!(err.to_string(), "Invalid record: missing id");
    }
}
