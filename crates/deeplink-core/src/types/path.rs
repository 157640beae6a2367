//! Request paths
//!
//! The path is the segment after `://` and selects the request variant.

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of request variants a deep link can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPath {
    /// `login`: start a sign-in from the given source
    Login,
    /// `confirm`: confirm a payment
    Confirm,
    /// `sign`: sign a document
    Sign,
}

impl RequestPath {
    /// Every variant, in whitelist order
    pub const ALL: [RequestPath; 3] = [RequestPath::Login, RequestPath::Confirm, RequestPath::Sign];

    /// Wire name of the path
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestPath::Login => "login",
            RequestPath::Confirm => "confirm",
            RequestPath::Sign => "sign",
        }
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestPath {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestPath::ALL
            .into_iter()
            .find(|path| path.as_str() == s)
            .ok_or_else(|| DecodeError::InvalidPath {
                path: s.to_string(),
            })
    }
}
