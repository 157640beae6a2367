//! Builder pattern for the request decoder

use crate::config::DecoderConfig;
use crate::error::Result;
use deeplink_parser::{MissingPathMessage, RequestDecoder};

/// Builder for `RequestDecoder`
///
/// # Example
///
/// ```rust
/// use deeplink_sdk::{DecoderBuilder, MissingPathMessage};
///
/// let decoder = DecoderBuilder::new()
///     .missing_path_message(MissingPathMessage::Short)
///     .log_rejections(false)
///     .build();
///
/// let err = decoder.decode("visma-identity").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid uri: visma-identity");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecoderBuilder {
    config: DecoderConfig,
}

impl DecoderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: DecoderConfig::new(),
        }
    }

    /// Start from a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new().with_config(DecoderConfig::from_json(json)?))
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the missing-path message style
    pub fn missing_path_message(mut self, style: MissingPathMessage) -> Self {
        self.config.missing_path_message = style;
        self
    }

    /// Enable or disable rejection logging
    pub fn log_rejections(mut self, enable: bool) -> Self {
        self.config.log_rejections = enable;
        self
    }

    /// Build the decoder
    pub fn build(self) -> RequestDecoder {
        tracing::info!(
            missing_path_message = ?self.config.missing_path_message,
            log_rejections = self.config.log_rejections,
            "Building request decoder"
        );
        self.config.to_decoder()
    }
}
