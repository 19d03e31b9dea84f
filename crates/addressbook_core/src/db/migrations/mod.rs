//! Contact schema migrations.
//!
//! Each step is applied inside one transaction together with its
//! `PRAGMA user_version` bump. Steps only add schema, so contacts saved by
//! an older binary survive an upgrade.

use crate::db::{table_exists, DbError, DbResult, CONTACT_TABLES};
use log::{debug, info};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "contacts",
        sql: include_str!("0001_contacts.sql"),
    },
    Migration {
        version: 2,
        name: "contact_tags",
        sql: include_str!("0002_contact_tags.sql"),
    },
];

/// Returns the latest schema version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings `conn` to the latest contact schema.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the file was written by a
///   newer binary; nothing is changed.
/// - `DbError::MissingContactTable` when the schema is still incomplete
///   after every step ran.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current = current_user_version(conn)?;
    let latest = latest_version();

    if current > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }

    let pending: Vec<&Migration> = MIGRATIONS
        .iter()
        .filter(|migration| migration.version > current)
        .collect();
    if !pending.is_empty() {
        let tx = conn.transaction()?;
        for migration in &pending {
            tx.execute_batch(migration.sql)?;
            tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
            debug!(
                "event=db_migrate module=db status=ok version={} name={}",
                migration.version, migration.name
            );
        }
        tx.commit()?;
        info!(
            "event=db_migrate module=db status=ok from_version={} to_version={} steps={}",
            current,
            latest,
            pending.len()
        );
    }

    verify_contact_tables(conn)
}

fn verify_contact_tables(conn: &Connection) -> DbResult<()> {
    for table in CONTACT_TABLES {
        if !table_exists(conn, table)? {
            return Err(DbError::MissingContactTable(table));
        }
    }
    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
