//! Address use-case service.

use super::WriteAck;
use crate::model::address::{Address, AddressId, AddressInput};
use crate::model::customer::CustomerId;
use crate::repo::address_repo::AddressRepository;
use crate::repo::RepoResult;
use log::info;

/// Use-case service wrapper for address CRUD operations.
pub struct AddressService<R: AddressRepository> {
    repo: R,
}

impl<R: AddressRepository> AddressService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds an address under `customer_id` without checking that the
    /// customer exists.
    pub fn add_address(
        &self,
        customer_id: CustomerId,
        input: &AddressInput,
    ) -> RepoResult<AddressId> {
        let id = self.repo.create_address(customer_id, input)?;
        info!(
            "event=address_create module=service status=ok customer_id={customer_id} address_id={id}"
        );
        Ok(id)
    }

    pub fn list_addresses(&self, customer_id: CustomerId) -> RepoResult<Vec<Address>> {
        self.repo.list_addresses_for_customer(customer_id)
    }

    pub fn update_address(&self, id: AddressId, input: &AddressInput) -> RepoResult<WriteAck> {
        let rows_affected = self.repo.update_address(id, input)?;
        Ok(WriteAck { rows_affected })
    }

    pub fn delete_address(&self, id: AddressId) -> RepoResult<WriteAck> {
        let rows_affected = self.repo.delete_address(id)?;
        info!(
            "event=address_delete module=service status=ok address_id={id} rows_affected={rows_affected}"
        );
        Ok(WriteAck { rows_affected })
    }
}
