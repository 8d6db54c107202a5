//! Section domain module.
//!
//! A section is one shelving unit's configuration. This module holds the
//! record itself, the fixed field table the wizard walks through, and the
//! parsing rules for raw input.

mod field;
mod model;
mod value;

pub use field::{FIELD_COUNT, FIELDS, FieldDescriptor, FieldDomain, FieldKey};
pub use model::Section;
pub use value::{FieldValue, ValidationError, parse_bool, parse_non_negative, parse_value};
