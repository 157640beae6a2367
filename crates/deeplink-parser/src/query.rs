//! Query string parser
//!
//! Splits `key=value&key2=value2` into raw params without any decoding.

use deeplink_core::RawParams;

/// Query string parser
pub struct QueryParser;

impl QueryParser {
    /// Parse a query string into raw params.
    ///
    /// Tokens are split on `&`, then on the first `=`. A token without `=`
    /// maps its key to an empty string. Later duplicates overwrite earlier
    /// values.
    pub fn parse(query: &str) -> RawParams {
        query
            .split('&')
            .map(|token| token.split_once('=').unwrap_or((token, "")))
            .collect()
    }
}
