//! Validated deep-link request

use super::params::Params;
use super::path::RequestPath;
use serde::Serialize;

/// A fully validated request
///
/// Only [`crate::rules::ParamValidator`] builds these, so a `Request` always
/// has a whitelisted path and params that pass every rule for that path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    path: RequestPath,
    params: Params,
}

impl Request {
    pub(crate) fn new(path: RequestPath, params: Params) -> Self {
        Self { path, params }
    }

    pub fn path(&self) -> RequestPath {
        self.path
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Split into path and params
    pub fn into_parts(self) -> (RequestPath, Params) {
        (self.path, self.params)
    }
}
