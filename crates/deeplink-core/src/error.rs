//! Error types for deep-link decoding

use crate::types::RawParams;
use std::fmt;
use thiserror::Error;

/// Decode error
///
/// Every failure aborts the decode; no partial request is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No `://` separator, or nothing after it
    #[error("Invalid URI (missing path): {uri}")]
    MissingPath { uri: String },

    /// Same failure as `MissingPath`, rendered with the short legacy text
    #[error("Invalid uri: {uri}")]
    InvalidUri { uri: String },

    /// Scheme is not whitelisted
    #[error("Invalid scheme: {scheme}")]
    InvalidScheme { scheme: String },

    /// Path is not whitelisted
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// The URI carries no query parameters at all
    #[error("Missing params")]
    MissingParams,

    /// A required field is missing or fails its rule.
    ///
    /// Carries the raw params exactly as received.
    #[error("Invalid params: {}", .params.to_json())]
    InvalidParams { params: RawParams },

    /// Path has no entry in the rule table
    #[error("Unexpected object: {path}")]
    UnexpectedPath { path: String },
}

impl DecodeError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::MissingPath { .. } | DecodeError::InvalidUri { .. } => {
                ErrorKind::MissingPath
            }
            DecodeError::InvalidScheme { .. } => ErrorKind::InvalidScheme,
            DecodeError::InvalidPath { .. } => ErrorKind::InvalidPath,
            DecodeError::MissingParams => ErrorKind::MissingParams,
            DecodeError::InvalidParams { .. } => ErrorKind::InvalidParams,
            DecodeError::UnexpectedPath { .. } => ErrorKind::UnexpectedPath,
        }
    }
}

/// Error classification shared by every entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingPath,
    InvalidScheme,
    InvalidPath,
    MissingParams,
    InvalidParams,
    UnexpectedPath,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingPath => "missing_path",
            ErrorKind::InvalidScheme => "invalid_scheme",
            ErrorKind::InvalidPath => "invalid_path",
            ErrorKind::MissingParams => "missing_params",
            ErrorKind::InvalidParams => "invalid_params",
            ErrorKind::UnexpectedPath => "unexpected_path",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
