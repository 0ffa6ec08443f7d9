//! Core use-case services.
//!
//! # Responsibility
//! - Expose one entry point per customer/address endpoint.
//! - Keep the HTTP layer decoupled from storage details.

pub mod address_service;
pub mod customer_service;

/// Acknowledgment for update/delete use-cases.
///
/// A zero `rows_affected` means the target id did not exist; callers treat
/// it as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteAck {
    pub rows_affected: usize,
}

impl WriteAck {
    pub fn matched(&self) -> bool {
        self.rows_affected > 0
    }
}
