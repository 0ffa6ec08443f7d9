//! Address domain model.
//!
//! # Invariants
//! - `customer_id` is fixed at creation; updates never move an address.
//! - Whether `customer_id` must exist depends on `DbOptions::enforce_foreign_keys`.

use super::customer::CustomerId;
use super::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Storage-assigned address identity.
pub type AddressId = i64;

/// Persisted address row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub customer_id: CustomerId,
    pub address_details: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
}

/// Create/update payload for an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInput {
    #[serde(default, deserialize_with = "crate::model::text_field")]
    pub address_details: String,
    #[serde(default, deserialize_with = "crate::model::text_field")]
    pub city: String,
    #[serde(default, deserialize_with = "crate::model::text_field")]
    pub state: String,
    #[serde(default, deserialize_with = "crate::model::text_field")]
    pub pin_code: String,
}

impl AddressInput {
    pub fn new(
        address_details: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        pin_code: impl Into<String>,
    ) -> Self {
        Self {
            address_details: address_details.into(),
            city: city.into(),
            state: state.into(),
            pin_code: pin_code.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("address_details", &self.address_details)?;
        require_text("city", &self.city)?;
        require_text("state", &self.state)?;
        require_text("pin_code", &self.pin_code)?;
        Ok(())
    }
}
