//! Parameter rules
//!
//! This module contains:
//! - Field rules (predicate plus coercion)
//! - The per-path rule table
//! - The parameter validator that turns raw params into a `Request`

pub mod field;
pub mod table;
pub mod validator;

pub use field::{parse_positive_integer, FieldRule};
pub use table::{fields_for, FieldSpec, RULE_TABLE};
pub use validator::ParamValidator;
