//! Domain model for customers and their addresses.
//!
//! # Responsibility
//! - Define the persisted row shapes returned to callers.
//! - Define write inputs and their field-level validation.
//!
//! # Invariants
//! - Ids are assigned by storage and never reused.
//! - Every text field of a write input is non-empty after trimming.

pub mod address;
pub mod customer;

use serde::{Deserialize, Deserializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field-level rejection raised before a write reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field was absent, empty, or whitespace-only.
    MissingField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// Decodes a text column value from a JSON string or number.
///
/// `null` decodes to an empty string so validation reports the field as missing.
pub(crate) fn text_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        None => String::new(),
        Some(TextOrNumber::Text(value)) => value,
        Some(TextOrNumber::Integer(value)) => value.to_string(),
        Some(TextOrNumber::Float(value)) => value.to_string(),
    })
}
