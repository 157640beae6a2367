//! URI structural parser
//!
//! Splits a deep-link URI into scheme, path and query without interpreting
//! any of them.

use crate::query::QueryParser;
use deeplink_core::{DecodeError, RawParams, Result};

/// Separator between scheme and path
pub const SCHEME_SEPARATOR: &str = "://";

/// Borrowed parts of a URI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriParts<'a> {
    /// Text before the first `://`
    pub scheme: &'a str,
    /// Text between `://` and the first `?`
    pub path: &'a str,
    /// Text after the first `?`, if any
    pub query: Option<&'a str>,
}

/// Owned result of a structural parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUri {
    pub scheme: String,
    pub path: String,
    /// `None` when the URI has no `?`
    pub raw_params: Option<RawParams>,
}

/// URI structural parser
pub struct UriParser;

impl UriParser {
    /// Split `uri` into its parts.
    ///
    /// Fails with `MissingPath` when there is no `://` or nothing follows it.
    pub fn split(uri: &str) -> Result<UriParts<'_>> {
        let (scheme, rest) = match uri.split_once(SCHEME_SEPARATOR) {
            Some((scheme, rest)) if !rest.is_empty() => (scheme, rest),
            _ => {
                return Err(DecodeError::MissingPath {
                    uri: uri.to_string(),
                })
            }
        };

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        Ok(UriParts {
            scheme,
            path,
            query,
        })
    }

    /// Split `uri` and parse its query string into raw params
    pub fn parse(uri: &str) -> Result<ParsedUri> {
        let parts = Self::split(uri)?;

        Ok(ParsedUri {
            scheme: parts.scheme.to_string(),
            path: parts.path.to_string(),
            raw_params: parts.query.map(QueryParser::parse),
        })
    }
}
