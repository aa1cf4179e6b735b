//! Error types for orbitscope.
//!
//! Every fallible operation returns `Result<T, OrbitError>` instead of
//! panicking. Non-finite calculator input is rejected up front rather than
//! propagated as NaN through the formulas.

use thiserror::Error;

/// Result type alias for orbitscope operations.
pub type OrbitResult<T> = Result<T, OrbitError>;

/// Unified error type for all orbitscope operations.
#[derive(Debug, Error)]
pub enum OrbitError {
    // ===== Calculator Errors =====
    /// An orbital parameter was not a finite number.
    #[error("invalid input: {field} must be a finite number, got {value}")]
    InvalidInput {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    // ===== Animation Errors =====
    /// The repeating task stopped delivering ticks.
    #[error("timer stalled: no tick after {missed} consecutive waits")]
    TimerStalled {
        /// Consecutive empty waits before giving up.
        missed: u32,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OrbitError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid-input error for a named parameter.
    #[must_use]
    pub const fn invalid_input(field: &'static str, value: f64) -> Self {
        Self::InvalidInput { field, value }
    }

    /// Check if this error was caused by user-supplied orbital parameters.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_detection() {
        let err = OrbitError::invalid_input("altitude_km", f64::NAN);
        assert!(err.is_invalid_input());

        let config = OrbitError::config("bad tick interval");
        assert!(!config.is_invalid_input());
    }

    #[test]
    fn test_invalid_input_display() {
        let err = OrbitError::invalid_input("eccentricity", f64::INFINITY);
        let msg = err.to_string();
        assert!(msg.contains("eccentricity"));
        assert!(msg.contains("finite"));
        assert!(msg.contains("inf"));
    }

    #[test]
    fn test_error_config() {
        let err = OrbitError::config("invalid parameter");
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("invalid parameter"));
    }

    #[test]
    fn test_error_yaml_from() {
        let parse: Result<u32, _> = serde_yaml::from_str("[not, a, number");
        let err = OrbitError::from(parse.unwrap_err());
        assert!(err.to_string().contains("YAML parsing error"));
    }

    #[test]
    fn test_error_io_from() {
        let err = OrbitError::from(std::io::Error::other("file not found"));
        assert!(!err.is_invalid_input());
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_error_debug() {
        let err = OrbitError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
