//! Shared handler state.

use crate::error::ApiResult;
use custbook_core::{
    ensure_schema_ready, AddressService, CustomerService, RepoResult, SqliteAddressRepository,
    SqliteCustomerRepository, Store,
};
use rusqlite::Connection;
use std::sync::Arc;

/// State handed to every handler. Cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Store>,
}

impl AppState {
    /// Wraps `store` after checking its schema once. Per-request
    /// repositories skip the check.
    pub fn try_new(store: Store) -> RepoResult<Self> {
        store.with_conn(ensure_schema_ready)?;
        Ok(Self {
            store: Arc::new(store),
        })
    }

    /// Runs `f` against the store on the blocking thread pool.
    pub async fn run<T, F>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&Connection) -> RepoResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || store.with_conn(f)).await?;
        Ok(result?)
    }

    pub async fn with_customer_service<T, F>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&CustomerService<SqliteCustomerRepository<'_>>) -> RepoResult<T>
            + Send
            + 'static,
        T: Send + 'static,
    {
        self.run(move |conn| {
            let service = CustomerService::new(SqliteCustomerRepository::new(conn));
            f(&service)
        })
        .await
    }

    pub async fn with_address_service<T, F>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&AddressService<SqliteAddressRepository<'_>>) -> RepoResult<T>
            + Send
            + 'static,
        T: Send + 'static,
    {
        self.run(move |conn| {
            let service = AddressService::new(SqliteAddressRepository::new(conn));
            f(&service)
        })
        .await
    }
}
