//! Request decoder
//!
//! Runs the whole pipeline: structural parse, scheme check, path check,
//! parameter rules. The first failure is returned; nothing partial escapes.

use crate::gate::{check_path, check_scheme};
use crate::uri::UriParser;
use deeplink_core::{DecodeError, ParamValidator, Request, Result};
use serde::{Deserialize, Serialize};

/// Text used when a URI has no path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPathMessage {
    /// `Invalid URI (missing path): <uri>`
    #[default]
    Canonical,
    /// `Invalid uri: <uri>`
    Short,
}

impl MissingPathMessage {
    /// Build the missing-path error for `uri` in this style
    pub fn error(&self, uri: &str) -> DecodeError {
        let uri = uri.to_string();
        match self {
            MissingPathMessage::Canonical => DecodeError::MissingPath { uri },
            MissingPathMessage::Short => DecodeError::InvalidUri { uri },
        }
    }
}

/// Deep-link request decoder
#[derive(Debug, Clone, Copy)]
pub struct RequestDecoder {
    missing_path_message: MissingPathMessage,
    log_rejections: bool,
    validator: ParamValidator,
}

impl RequestDecoder {
    /// Create a decoder with the canonical messages and rejection logging on
    pub fn new() -> Self {
        Self {
            missing_path_message: MissingPathMessage::Canonical,
            log_rejections: true,
            validator: ParamValidator::new(),
        }
    }

    /// Choose the missing-path message style
    pub fn with_missing_path_message(mut self, style: MissingPathMessage) -> Self {
        self.missing_path_message = style;
        self
    }

    /// Log rejected URIs at warn level
    pub fn with_log_rejections(mut self, enable: bool) -> Self {
        self.log_rejections = enable;
        self
    }

    pub fn missing_path_message(&self) -> MissingPathMessage {
        self.missing_path_message
    }

    pub fn log_rejections(&self) -> bool {
        self.log_rejections
    }

    /// Decode `uri` into a validated request
    pub fn decode(&self, uri: &str) -> Result<Request> {
        self.run(uri).map_err(|err| {
            if self.log_rejections {
                log::warn!("Rejected deep link ({}): {}", err.kind(), err);
            }
            err
        })
    }

    fn run(&self, uri: &str) -> Result<Request> {
        let parsed = UriParser::parse(uri).map_err(|err| match err {
            DecodeError::MissingPath { .. } => self.missing_path_message.error(uri),
            other => other,
        })?;
        log::debug!(
            "Parsed deep link: scheme='{}' path='{}'",
            parsed.scheme,
            parsed.path
        );

        check_scheme(&parsed.scheme)?;
        let path = check_path(&parsed.path)?;

        let request = self.validator.validate(path, parsed.raw_params.as_ref())?;
        log::debug!(
            "Decoded {} request with {} params",
            request.path(),
            request.params().len()
        );
        Ok(request)
    }
}

impl Default for RequestDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deeplink_core::{ErrorKind, RequestPath};

    #[test]
    fn test_decode_login() {
        let request = RequestDecoder::new()
            .decode("visma-identity://login?source=severa")
            .unwrap();
        assert_eq!(request.path(), RequestPath::Login);
        assert_eq!(request.params().get_str("source"), Some("severa"));
    }

    #[test]
    fn test_scheme_checked_before_path() {
        let err = RequestDecoder::new()
            .decode("invalid://invalid?source=x")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScheme);
    }

    #[test]
    fn test_path_checked_before_params() {
        let err = RequestDecoder::new()
            .decode("visma-identity://invalid")
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid path: invalid");
    }

    #[test]
    fn test_missing_path_canonical() {
        let err = RequestDecoder::new().decode("visma-identity").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid URI (missing path): visma-identity"
        );
    }

    #[test]
    fn test_missing_path_short() {
        let decoder = RequestDecoder::new().with_missing_path_message(MissingPathMessage::Short);
        let err = decoder.decode("visma-identity://").unwrap_err();
        assert_eq!(err.to_string(), "Invalid uri: visma-identity://");
        assert_eq!(err.kind(), ErrorKind::MissingPath);
    }

    #[test]
    fn test_style_only_affects_missing_path() {
        let decoder = RequestDecoder::new().with_missing_path_message(MissingPathMessage::Short);
        let err = decoder.decode("visma-identity://login").unwrap_err();
        assert_eq!(err, DecodeError::MissingParams);
    }

    #[test]
    fn test_builder_setters() {
        let decoder = RequestDecoder::default()
            .with_log_rejections(false)
            .with_missing_path_message(MissingPathMessage::Short);
        assert!(!decoder.log_rejections());
        assert_eq!(decoder.missing_path_message(), MissingPathMessage::Short);
    }

    #[test]
    fn test_missing_path_message_serde() {
        let style: MissingPathMessage = serde_json::from_str(r#""short""#).unwrap();
        assert_eq!(style, MissingPathMessage::Short);
        assert_eq!(MissingPathMessage::default(), MissingPathMessage::Canonical);
    }
}
