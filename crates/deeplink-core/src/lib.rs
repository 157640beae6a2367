//! Deep-link Core - Core types and definitions for deep-link request decoding
//!
//! This crate provides the fundamental types shared by the parser and the SDK:
//! - Request paths, raw and validated parameter maps
//! - The per-path rule table and the parameter validator
//! - The decode error taxonomy

pub mod error;
pub mod rules;
pub mod types;

// Re-export commonly used types
pub use error::{DecodeError, ErrorKind, Result};
pub use rules::{fields_for, parse_positive_integer, FieldRule, FieldSpec, ParamValidator, RULE_TABLE};
pub use types::{
    is_allowed_scheme, ParamValue, Params, RawParams, Request, RequestPath, ALLOWED_SCHEMES,
};
