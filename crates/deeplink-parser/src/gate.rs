//! Scheme and path gatekeeper
//!
//! Rejects anything outside the whitelists before parameters are looked at.

use deeplink_core::{is_allowed_scheme, DecodeError, RequestPath, Result};

/// Whether `scheme` is whitelisted
pub fn validate_scheme(scheme: &str) -> bool {
    is_allowed_scheme(scheme)
}

/// Whether `path` names a known request variant
pub fn validate_path(path: &str) -> bool {
    path.parse::<RequestPath>().is_ok()
}

/// Fail with `InvalidScheme` unless `scheme` is whitelisted
pub fn check_scheme(scheme: &str) -> Result<()> {
    if validate_scheme(scheme) {
        Ok(())
    } else {
        Err(DecodeError::InvalidScheme {
            scheme: scheme.to_string(),
        })
    }
}

/// Resolve `path` to a request variant, failing with `InvalidPath`
pub fn check_path(path: &str) -> Result<RequestPath> {
    path.parse()
}
