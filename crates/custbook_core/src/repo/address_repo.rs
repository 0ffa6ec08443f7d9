//! Address repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map each address endpoint to a single statement on `addresses`.
//!
//! # Invariants
//! - Creation does not look the owning customer up; only the engine's
//!   foreign-key setting can reject an orphan.
//! - Update/delete are keyed by the address id alone.

use super::{ensure_table_ready, RepoResult};
use crate::model::address::{Address, AddressId, AddressInput};
use crate::model::customer::CustomerId;
use log::debug;
use rusqlite::{params, Connection, Row};

pub(crate) const ADDRESS_COLUMNS: &[&str] = &[
    "id",
    "customer_id",
    "address_details",
    "city",
    "state",
    "pin_code",
];

/// Repository interface for address CRUD operations.
pub trait AddressRepository {
    fn create_address(&self, customer_id: CustomerId, input: &AddressInput)
        -> RepoResult<AddressId>;
    fn list_addresses_for_customer(&self, customer_id: CustomerId) -> RepoResult<Vec<Address>>;
    fn update_address(&self, id: AddressId, input: &AddressInput) -> RepoResult<usize>;
    fn delete_address(&self, id: AddressId) -> RepoResult<usize>;
}

/// SQLite-backed address repository.
pub struct SqliteAddressRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAddressRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "addresses", ADDRESS_COLUMNS)?;
        Ok(Self { conn })
    }

    /// Constructs a repository without re-checking the schema.
    ///
    /// Only for connections already accepted by [`ensure_schema_ready`].
    ///
    /// [`ensure_schema_ready`]: crate::repo::ensure_schema_ready
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AddressRepository for SqliteAddressRepository<'_> {
    fn create_address(
        &self,
        customer_id: CustomerId,
        input: &AddressInput,
    ) -> RepoResult<AddressId> {
        input.validate()?;

        self.conn.execute(
            "INSERT INTO addresses (customer_id, address_details, city, state, pin_code)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                customer_id,
                input.address_details,
                input.city,
                input.state,
                input.pin_code,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_addresses_for_customer(&self, customer_id: CustomerId) -> RepoResult<Vec<Address>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                id,
                customer_id,
                address_details,
                city,
                state,
                pin_code
             FROM addresses
             WHERE customer_id = ?1;",
        )?;
        let addresses = stmt
            .query_map([customer_id], parse_address_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(addresses)
    }

    fn update_address(&self, id: AddressId, input: &AddressInput) -> RepoResult<usize> {
        input.validate()?;

        let changed = self.conn.execute(
            "UPDATE addresses
             SET
                address_details = ?1,
                city = ?2,
                state = ?3,
                pin_code = ?4
             WHERE id = ?5;",
            params![
                input.address_details,
                input.city,
                input.state,
                input.pin_code,
                id,
            ],
        )?;

        if changed == 0 {
            debug!("event=address_update module=repo status=ok rows_affected=0 address_id={id}");
        }
        Ok(changed)
    }

    fn delete_address(&self, id: AddressId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM addresses WHERE id = ?1;", [id])?;

        if changed == 0 {
            debug!("event=address_delete module=repo status=ok rows_affected=0 address_id={id}");
        }
        Ok(changed)
    }
}

fn parse_address_row(row: &Row<'_>) -> rusqlite::Result<Address> {
    Ok(Address {
        id: row.get("id")?,
        customer_id: row.get("customer_id")?,
        address_details: row.get("address_details")?,
        city: row.get("city")?,
        state: row.get("state")?,
        pin_code: row.get("pin_code")?,
    })
}
