//! Core domain logic for custbook.
//! This crate owns the customer/address schema and every statement run against it.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{DbError, DbOptions, DbResult, Store};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address::{Address, AddressId, AddressInput};
pub use model::customer::{Customer, CustomerId, CustomerInput};
pub use model::ValidationError;
pub use repo::address_repo::{AddressRepository, SqliteAddressRepository};
pub use repo::customer_repo::{CustomerRepository, SqliteCustomerRepository};
pub use repo::{ensure_schema_ready, RepoError, RepoResult};
pub use service::address_service::AddressService;
pub use service::customer_service::CustomerService;
pub use service::WriteAck;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
