//! Deep-link SDK
//!
//! High-level API for decoding deep-link requests from the native app.
//!
//! Two entry points share one decoder:
//!
//! ```rust
//! use deeplink_sdk::{decode, RequestIdentifier, RequestPath};
//!
//! let request = decode("visma-identity://login?source=severa").unwrap();
//! assert_eq!(request.path(), RequestPath::Login);
//!
//! let identifier = RequestIdentifier::new("visma-identity://login?source=severa").unwrap();
//! assert_eq!(identifier.params().get_str("source"), Some("severa"));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod identifier;

// Re-export main types
pub use builder::DecoderBuilder;
pub use config::DecoderConfig;
pub use error::{Result, SdkError};
pub use identifier::RequestIdentifier;

// Re-export commonly used types from dependencies
pub use deeplink_core::{
    DecodeError, ErrorKind, ParamValue, Params, RawParams, Request, RequestPath,
};
pub use deeplink_parser::{MissingPathMessage, RequestDecoder};

/// Decode a deep-link URI with the default decoder
pub fn decode(uri: &str) -> deeplink_core::Result<Request> {
    tracing::debug!(uri, "Decoding deep link");
    RequestDecoder::new().decode(uri)
}

/// Whether `uri` decodes to a valid request
pub fn is_valid(uri: &str) -> bool {
    RequestDecoder::new()
        .with_log_rejections(false)
        .decode(uri)
        .is_ok()
}
