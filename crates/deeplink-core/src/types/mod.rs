//! Type system for deep-link requests
//!
//! This module contains:
//! - The scheme whitelist
//! - The closed set of request paths
//! - Raw and validated parameter maps
//! - The validated request

pub mod params;
pub mod path;
pub mod request;
pub mod scheme;

pub use params::{ParamValue, Params, RawParams};
pub use path::RequestPath;
pub use request::Request;
pub use scheme::{is_allowed_scheme, ALLOWED_SCHEMES, VISMA_IDENTITY_SCHEME};
