//! Scheme whitelist

/// Scheme used by identity deep links from the native app
pub const VISMA_IDENTITY_SCHEME: &str = "visma-identity";

/// Every scheme the decoder accepts
pub const ALLOWED_SCHEMES: &[&str] = &[VISMA_IDENTITY_SCHEME];

/// Whether `scheme` is exactly one of [`ALLOWED_SCHEMES`] (case-sensitive)
pub fn is_allowed_scheme(scheme: &str) -> bool {
    ALLOWED_SCHEMES.contains(&scheme)
}
