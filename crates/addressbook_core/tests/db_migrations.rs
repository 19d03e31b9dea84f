use addressbook_core::db::migrations::latest_version;
use addressbook_core::db::{open_db, open_db_in_memory, DbError, CONTACT_TABLES};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in CONTACT_TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn opened_connections_enforce_foreign_keys() {
    let dir = tempfile::tempdir().unwrap();
    for conn in [
        open_db_in_memory().unwrap(),
        open_db(dir.path().join("fk.db")).unwrap(),
    ] {
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}

#[test]
fn stamped_but_empty_database_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stamped.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(
        matches!(err, DbError::MissingContactTable("contacts")),
        "unexpected error: {err}"
    );
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "contacts");
}

#[test]
fn upgrading_from_first_version_keeps_existing_contacts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("v1.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(include_str!("../src/db/migrations/0001_contacts.sql"))
        .unwrap();
    conn.execute_batch("PRAGMA user_version = 1;").unwrap();
    conn.execute(
        "INSERT INTO contacts (position, name, phone, phone_private, email, email_private, address, address_private)
         VALUES (0, 'Amy Buck', '91119111', 0, 'ab@gmail.com', 0, '1 Clementi Road', 1);",
        [],
    )
    .unwrap();
    drop(conn);

    let upgraded = open_db(&path).unwrap();
    assert_eq!(schema_version(&upgraded), latest_version());
    assert_table_exists(&upgraded, "contact_tags");
    let count: i64 = upgraded
        .query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn deleting_contact_cascades_to_its_tags() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO contacts (position, name, phone, phone_private, email, email_private, address, address_private)
         VALUES (0, 'Dan Doe', '1234556', 1, 'ss@tt.com', 1, 'NUS', 1);",
        [],
    )
    .unwrap();
    let contact_id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO contact_tags (contact_id, position, tag_name) VALUES (?1, 0, 'Test');",
        [contact_id],
    )
    .unwrap();

    conn.execute("DELETE FROM contacts WHERE id = ?1;", [contact_id])
        .unwrap();

    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM contact_tags;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
