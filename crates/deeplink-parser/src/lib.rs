//! Deep-link Parser - URI to request decoder
//!
//! This crate splits deep-link URIs into their parts, checks the scheme and
//! path whitelists, and runs the parameter rules from deeplink-core.

pub mod decoder;
pub mod gate;
pub mod query;
pub mod uri;

// Re-export main parser types
pub use decoder::{MissingPathMessage, RequestDecoder};
pub use deeplink_core::{DecodeError, ErrorKind, Result};
pub use gate::{check_path, check_scheme, validate_path, validate_scheme};
pub use query::QueryParser;
pub use uri::{ParsedUri, UriParser, UriParts};
