//! Parsing raw user input into typed field values.

use thiserror::Error;

use super::field::FieldDomain;

/// A parsed, domain-checked field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Integer(u32),
    Boolean(bool),
}

/// Why a raw input was rejected. Always recoverable by re-prompting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected a whole number of zero or more, got '{0}'")]
    NotAnInteger(String),

    #[error("expected yes or no, got '{0}'")]
    NotABoolean(String),

    #[error("field expects a {expected:?} value")]
    WrongDomain { expected: FieldDomain },

    #[error("expected a number from {min} to {max}, got {got}")]
    OutOfRange { min: usize, max: usize, got: usize },
}

const TRUE_WORDS: [&str; 6] = ["да", "д", "yes", "y", "1", "true"];
const FALSE_WORDS: [&str; 6] = ["нет", "н", "no", "n", "0", "false"];

/// Parses a yes/no answer. Case-insensitive, surrounding whitespace ignored.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let t = raw.trim().to_lowercase();
    if TRUE_WORDS.contains(&t.as_str()) {
        Some(true)
    } else if FALSE_WORDS.contains(&t.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Parses a base-10 integer that is zero or greater.
pub fn parse_non_negative(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Parses `raw` according to `domain`.
pub fn parse_value(domain: FieldDomain, raw: &str) -> Result<FieldValue, ValidationError> {
    match domain {
        FieldDomain::Integer => parse_non_negative(raw)
            .map(FieldValue::Integer)
            .ok_or_else(|| ValidationError::NotAnInteger(raw.trim().to_string())),
        FieldDomain::Boolean => parse_bool(raw)
            .map(FieldValue::Boolean)
            .ok_or_else(|| ValidationError::NotABoolean(raw.trim().to_string())),
    }
}
