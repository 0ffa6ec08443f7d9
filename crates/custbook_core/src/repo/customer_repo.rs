//! Customer repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map each customer endpoint to a single statement on `customers`.
//!
//! # Invariants
//! - Uniqueness of `phone_number` is left to the storage engine; its message
//!   surfaces unchanged through `RepoError::Db`.
//! - Update/delete of an unknown id succeed with zero rows affected.

use super::{ensure_table_ready, RepoResult};
use crate::model::customer::{Customer, CustomerId, CustomerInput};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(crate) const CUSTOMER_COLUMNS: &[&str] = &["id", "first_name", "last_name", "phone_number"];

const CUSTOMER_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    phone_number
FROM customers";

/// Repository interface for customer CRUD operations.
pub trait CustomerRepository {
    fn create_customer(&self, input: &CustomerInput) -> RepoResult<CustomerId>;
    fn list_customers(&self) -> RepoResult<Vec<Customer>>;
    fn get_customer(&self, id: CustomerId) -> RepoResult<Option<Customer>>;
    /// Returns the number of rows changed (0 or 1).
    fn update_customer(&self, id: CustomerId, input: &CustomerInput) -> RepoResult<usize>;
    /// Returns the number of rows removed (0 or 1).
    fn delete_customer(&self, id: CustomerId) -> RepoResult<usize>;
}

/// SQLite-backed customer repository.
pub struct SqliteCustomerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCustomerRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "customers", CUSTOMER_COLUMNS)?;
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

impl CustomerRepository for SqliteCustomerRepository<'_> {
    fn create_customer(&self, input: &CustomerInput) -> RepoResult<CustomerId> {
        input.validate()?;

        self.conn.execute(
            "INSERT INTO customers (first_name, last_name, phone_number)
             VALUES (?1, ?2, ?3);",
            params![input.first_name, input.last_name, input.phone_number],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_customers(&self) -> RepoResult<Vec<Customer>> {
        let mut stmt = self.conn.prepare(&format!("{CUSTOMER_SELECT_SQL};"))?;
        let customers = stmt
            .query_map([], parse_customer_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(customers)
    }

    fn get_customer(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        let customer = self
            .conn
            .query_row(
                &format!("{CUSTOMER_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_customer_row,
            )
            .optional()?;
        Ok(customer)
    }

    fn update_customer(&self, id: CustomerId, input: &CustomerInput) -> RepoResult<usize> {
        input.validate()?;

        let changed = self.conn.execute(
            "UPDATE customers
             SET
                first_name = ?1,
                last_name = ?2,
                phone_number = ?3
             WHERE id = ?4;",
            params![input.first_name, input.last_name, input.phone_number, id],
        )?;

        if changed == 0 {
            debug!("event=customer_update module=repo status=ok rows_affected=0 customer_id={id}");
        }
        Ok(changed)
    }

    fn delete_customer(&self, id: CustomerId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM customers WHERE id = ?1;", [id])?;

        if changed == 0 {
            debug!("event=customer_delete module=repo status=ok rows_affected=0 customer_id={id}");
        }
        Ok(changed)
    }
}

fn parse_customer_row(row: &Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        phone_number: row.get("phone_number")?,
    })
}
