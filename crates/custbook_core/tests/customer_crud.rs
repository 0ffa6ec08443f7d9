use custbook_core::db::migrations::latest_version;
use custbook_core::db::{open_db_in_memory, DbOptions};
use custbook_core::{
    CustomerInput, CustomerRepository, CustomerService, RepoError, SqliteCustomerRepository,
    ValidationError,
};
use rusqlite::Connection;
use std::collections::HashSet;

fn open() -> Connection {
    open_db_in_memory(&DbOptions::default()).unwrap()
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    let id = repo
        .create_customer(&CustomerInput::new("Ann", "Lee", "555-1"))
        .unwrap();
    assert_eq!(id, 1);

    let loaded = repo.get_customer(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.first_name, "Ann");
    assert_eq!(loaded.last_name, "Lee");
    assert_eq!(loaded.phone_number, "555-1");
}

#[test]
fn generated_ids_are_positive_and_distinct() {
    let conn = open();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    let mut seen = HashSet::new();
    for n in 0..5 {
        let id = repo
            .create_customer(&CustomerInput::new("Ann", "Lee", format!("555-{n}")))
            .unwrap();
        assert!(id > 0);
        assert!(seen.insert(id), "id {id} issued twice");
    }
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    let first = repo
        .create_customer(&CustomerInput::new("Ann", "Lee", "555-1"))
        .unwrap();
    repo.delete_customer(first).unwrap();

    let second = repo
        .create_customer(&CustomerInput::new("Bo", "Kim", "555-2"))
        .unwrap();
    assert!(second > first);
}

#[test]
fn duplicate_phone_number_is_rejected_and_creates_no_row() {
    let conn = open();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    repo.create_customer(&CustomerInput::new("Ann", "Lee", "555-1"))
        .unwrap();
    let err = repo
        .create_customer(&CustomerInput::new("Other", "Person", "555-1"))
        .unwrap_err();

    assert!(matches!(err, RepoError::Db(_)));
    assert!(err.to_string().contains("UNIQUE constraint failed"));
    assert_eq!(repo.list_customers().unwrap().len(), 1);
}

#[test]
fn missing_field_is_rejected_before_insert() {
    let conn = open();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    let err = repo
        .create_customer(&CustomerInput::new("Ann", "", "555-1"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::MissingField("last_name"))
    ));
    assert!(repo.list_customers().unwrap().is_empty());
}

#[test]
fn get_unknown_id_returns_none() {
    let conn = open();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    assert!(repo.get_customer(42).unwrap().is_none());
}

#[test]
fn update_overwrites_all_mutable_fields() {
    let conn = open();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    let id = repo
        .create_customer(&CustomerInput::new("Ann", "Lee", "555-1"))
        .unwrap();
    let changed = repo
        .update_customer(id, &CustomerInput::new("Anna", "Li", "555-9"))
        .unwrap();
    assert_eq!(changed, 1);

    let loaded = repo.get_customer(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.first_name, "Anna");
    assert_eq!(loaded.last_name, "Li");
    assert_eq!(loaded.phone_number, "555-9");
}

#[test]
fn update_into_taken_phone_number_fails() {
    let conn = open();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    repo.create_customer(&CustomerInput::new("Ann", "Lee", "555-1"))
        .unwrap();
    let second = repo
        .create_customer(&CustomerInput::new("Bo", "Kim", "555-2"))
        .unwrap();

    let err = repo
        .update_customer(second, &CustomerInput::new("Bo", "Kim", "555-1"))
        .unwrap_err();
    assert!(err.to_string().contains("customers.phone_number"));
}

#[test]
fn update_and_delete_of_unknown_id_affect_zero_rows() {
    let conn = open();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    let changed = repo
        .update_customer(999, &CustomerInput::new("Ann", "Lee", "555-1"))
        .unwrap();
    assert_eq!(changed, 0);
    assert_eq!(repo.delete_customer(999).unwrap(), 0);
}

#[test]
fn delete_removes_customer_from_list() {
    let conn = open();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    let keep = repo
        .create_customer(&CustomerInput::new("Ann", "Lee", "555-1"))
        .unwrap();
    let gone = repo
        .create_customer(&CustomerInput::new("Bo", "Kim", "555-2"))
        .unwrap();

    assert_eq!(repo.delete_customer(gone).unwrap(), 1);

    let ids: Vec<_> = repo
        .list_customers()
        .unwrap()
        .into_iter()
        .map(|customer| customer.id)
        .collect();
    assert_eq!(ids, vec![keep]);
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open();
    let service = CustomerService::new(SqliteCustomerRepository::try_new(&conn).unwrap());

    let id = service
        .create_customer(&CustomerInput::new("Ann", "Lee", "555-1"))
        .unwrap();
    assert_eq!(service.get_customer(id).unwrap().unwrap().first_name, "Ann");

    let ack = service
        .update_customer(id, &CustomerInput::new("Ann", "Lee", "555-2"))
        .unwrap();
    assert!(ack.matched());

    let ack = service.delete_customer(id).unwrap();
    assert_eq!(ack.rows_affected, 1);
    assert!(!service.delete_customer(id).unwrap().matched());
    assert!(service.list_customers().unwrap().is_empty());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteCustomerRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_customers_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteCustomerRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("customers"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteCustomerRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "customers",
            column: "phone_number"
        })
    ));
}
