//! Customer domain model.
//!
//! # Invariants
//! - `phone_number` is unique across all customers (enforced by storage).
//! - Update overwrites all three mutable fields at once.

use super::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Storage-assigned customer identity.
pub type CustomerId = i64;

/// Persisted customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// Create/update payload for a customer.
///
/// Absent or `null` JSON fields decode to empty strings and are rejected by
/// [`CustomerInput::validate`]. Numbers are stored in their text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInput {
    #[serde(default, deserialize_with = "crate::model::text_field")]
    pub first_name: String,
    #[serde(default, deserialize_with = "crate::model::text_field")]
    pub last_name: String,
    #[serde(default, deserialize_with = "crate::model::text_field")]
    pub phone_number: String,
}

impl CustomerInput {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Checks required fields in declaration order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("first_name", &self.first_name)?;
        require_text("last_name", &self.last_name)?;
        require_text("phone_number", &self.phone_number)?;
        Ok(())
    }
}
