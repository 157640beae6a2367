//! Configuration types for the decoder

use crate::error::{Result, SdkError};
use deeplink_parser::{MissingPathMessage, RequestDecoder};
use serde::{Deserialize, Serialize};

/// Decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Text used for URIs without a path
    pub missing_path_message: MissingPathMessage,

    /// Log rejected URIs at warn level
    pub log_rejections: bool,
}

impl DecoderConfig {
    /// Create a new decoder configuration
    pub fn new() -> Self {
        Self {
            missing_path_message: MissingPathMessage::Canonical,
            log_rejections: true,
        }
    }

    /// Load a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Err(SdkError::ConfigError("empty configuration".to_string()));
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Set the missing-path message style
    pub fn with_missing_path_message(mut self, style: MissingPathMessage) -> Self {
        self.missing_path_message = style;
        self
    }

    /// Enable or disable rejection logging
    pub fn with_log_rejections(mut self, enable: bool) -> Self {
        self.log_rejections = enable;
        self
    }

    /// Build a decoder from this configuration
    pub fn to_decoder(self) -> RequestDecoder {
        RequestDecoder::new()
            .with_missing_path_message(self.missing_path_message)
            .with_log_rejections(self.log_rejections)
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}
