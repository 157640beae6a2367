//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Malformed JSON configuration
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Decode failure
    #[error(transparent)]
    DecodeError(#[from] deeplink_core::DecodeError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use deeplink_core::DecodeError;

    #[test]
    fn test_config_error() {
        let error = SdkError::ConfigError("empty configuration".to_string());
        assert_eq!(error.to_string(), "Configuration error: empty configuration");
    }

    #[test]
    fn test_decode_error_is_transparent() {
        let error: SdkError = DecodeError::MissingParams.into();
        assert_eq!(error.to_string(), "Missing params");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: SdkError = json_error.into();
        assert!(error.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = SdkError::DecodeError(DecodeError::MissingParams);
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("DecodeError"));
    }
}
