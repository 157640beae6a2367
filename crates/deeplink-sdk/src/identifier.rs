//! Value-object entry point
//!
//! `RequestIdentifier` is the object form of [`crate::decode`]: constructing
//! one runs the same decoder and fails the same way.

use deeplink_core::{DecodeError, Params, Request, RequestPath, Result};
use deeplink_parser::RequestDecoder;
use serde::Serialize;
use std::str::FromStr;

/// A deep-link request identified from a URI
///
/// # Example
///
/// ```rust
/// use deeplink_sdk::{RequestIdentifier, RequestPath};
///
/// let identifier = RequestIdentifier::new("visma-identity://login?source=app").unwrap();
/// assert_eq!(identifier.path(), RequestPath::Login);
/// assert_eq!(identifier.params().get_str("source"), Some("app"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestIdentifier {
    request: Request,
}

impl RequestIdentifier {
    /// Identify the request in `uri` with the default decoder
    pub fn new(uri: &str) -> Result<Self> {
        Self::with_decoder(uri, &RequestDecoder::new())
    }

    /// Identify the request in `uri` with a configured decoder
    pub fn with_decoder(uri: &str, decoder: &RequestDecoder) -> Result<Self> {
        tracing::debug!(uri, "Identifying deep-link request");
        let request = decoder.decode(uri)?;
        Ok(Self { request })
    }

    pub fn path(&self) -> RequestPath {
        self.request.path()
    }

    pub fn params(&self) -> &Params {
        self.request.params()
    }

    /// Underlying validated request
    pub fn as_request(&self) -> &Request {
        &self.request
    }

    pub fn into_request(self) -> Request {
        self.request
    }
}

impl FromStr for RequestIdentifier {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for RequestIdentifier {
    type Error = DecodeError;

    fn try_from(uri: &str) -> Result<Self> {
        Self::new(uri)
    }
}

impl From<RequestIdentifier> for Request {
    fn from(identifier: RequestIdentifier) -> Self {
        identifier.request
    }
}
