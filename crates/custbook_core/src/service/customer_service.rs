//! Customer use-case service.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use super::WriteAck;
use crate::model::customer::{Customer, CustomerId, CustomerInput};
use crate::repo::customer_repo::CustomerRepository;
use crate::repo::RepoResult;
use log::info;

/// Use-case service wrapper for customer CRUD operations.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts a customer and returns its generated id.
    pub fn create_customer(&self, input: &CustomerInput) -> RepoResult<CustomerId> {
        let id = self.repo.create_customer(input)?;
        info!("event=customer_create module=service status=ok customer_id={id}");
        Ok(id)
    }

    pub fn list_customers(&self) -> RepoResult<Vec<Customer>> {
        self.repo.list_customers()
    }

    /// Returns `None` when no row matches; absence is not an error.
    pub fn get_customer(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        self.repo.get_customer(id)
    }

    /// Overwrites first name, last name and phone number unconditionally.
    pub fn update_customer(&self, id: CustomerId, input: &CustomerInput) -> RepoResult<WriteAck> {
        let rows_affected = self.repo.update_customer(id, input)?;
        Ok(WriteAck { rows_affected })
    }

    /// Removes the customer row only; linked addresses are left in place.
    pub fn delete_customer(&self, id: CustomerId) -> RepoResult<WriteAck> {
        let rows_affected = self.repo.delete_customer(id)?;
        info!(
            "event=customer_delete module=service status=ok customer_id={id} rows_affected={rows_affected}"
        );
        Ok(WriteAck { rows_affected })
    }
}
