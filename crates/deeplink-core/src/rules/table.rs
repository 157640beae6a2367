//! Per-path rule table
//!
//! Every field listed for a path is required.

use super::field::FieldRule;
use crate::types::RequestPath;

/// A required field and the rule its raw value must pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: FieldRule,
}

impl FieldSpec {
    pub const fn new(name: &'static str, rule: FieldRule) -> Self {
        Self { name, rule }
    }
}

const LOGIN_FIELDS: &[FieldSpec] = &[FieldSpec::new("source", FieldRule::NonEmpty)];

const CONFIRM_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("source", FieldRule::NonEmpty),
    FieldSpec::new("paymentnumber", FieldRule::PositiveInteger),
];

const SIGN_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("source", FieldRule::NonEmpty),
    FieldSpec::new("documentid", FieldRule::NonEmpty),
];

/// Rules for every request path
pub const RULE_TABLE: &[(RequestPath, &[FieldSpec])] = &[
    (RequestPath::Login, LOGIN_FIELDS),
    (RequestPath::Confirm, CONFIRM_FIELDS),
    (RequestPath::Sign, SIGN_FIELDS),
];

/// Fields required for `path`, `None` if the table has no entry
pub fn fields_for(path: RequestPath) -> Option<&'static [FieldSpec]> {
    lookup(RULE_TABLE, path)
}

pub(crate) fn lookup(
    table: &'static [(RequestPath, &'static [FieldSpec])],
    path: RequestPath,
) -> Option<&'static [FieldSpec]> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == path)
        .map(|(_, fields)| *fields)
}
