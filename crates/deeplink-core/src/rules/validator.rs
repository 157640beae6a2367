//! Parameter validation against the rule table

use super::table::{lookup, FieldSpec, RULE_TABLE};
use crate::error::{DecodeError, Result};
use crate::types::{Params, RawParams, Request, RequestPath};

/// Validates raw params for a path and builds the resulting `Request`
#[derive(Debug, Clone, Copy)]
pub struct ParamValidator {
    table: &'static [(RequestPath, &'static [FieldSpec])],
}

impl ParamValidator {
    /// Create a validator over the built-in rule table
    pub fn new() -> Self {
        Self { table: RULE_TABLE }
    }

    #[cfg(test)]
    fn with_table(table: &'static [(RequestPath, &'static [FieldSpec])]) -> Self {
        Self { table }
    }

    /// Validate `raw` for `path`.
    ///
    /// Absent or empty params fail with `MissingParams` before any rule is
    /// consulted. A missing or rejected field fails with `InvalidParams`
    /// carrying the raw params unchanged.
    pub fn validate(&self, path: RequestPath, raw: Option<&RawParams>) -> Result<Request> {
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(DecodeError::MissingParams),
        };

        let fields = lookup(self.table, path).ok_or_else(|| DecodeError::UnexpectedPath {
            path: path.to_string(),
        })?;

        let mut params = Params::from(raw);
        for spec in fields {
            let value = raw
                .get(spec.name)
                .and_then(|value| spec.rule.coerce(value))
                .ok_or_else(|| {
                    log::debug!(
                        "Field '{}' of {} request failed rule {}",
                        spec.name,
                        path,
                        spec.rule
                    );
                    DecodeError::InvalidParams {
                        params: raw.clone(),
                    }
                })?;
            params.insert(spec.name, value);
        }

        Ok(Request::new(path, params))
    }
}

impl Default for ParamValidator {
    fn default() -> Self {
        Self::new()
    }
}
