//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load the ordered contact collection with each record's tags.
//! - Replace the stored collection atomically after a mutating command.
//!
//! # Invariants
//! - `load_all` returns records in saved order; tags keep saved order.
//! - `replace_all` either stores every record or leaves the previous
//!   contents untouched.

use crate::db::{table_exists, DbError, CONTACT_TABLES};
use crate::model::person::{Address, ContactRecord, Email, Name, Phone};
use crate::model::tag::{Tag, TagSet};
use crate::model::validation::ValidationError;
use log::info;
use rusqlite::{params, Connection, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT
    id,
    name,
    phone,
    phone_private,
    email,
    email_private,
    address,
    address_private
FROM contacts
ORDER BY position ASC, id ASC;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A persisted value no longer passes model validation.
    Validation(ValidationError),
    MissingRequiredTable(&'static str),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "invalid persisted contact: {err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted contact data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::MissingRequiredTable(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Load/save contract for the contact collection.
pub trait ContactRepository {
    /// Loads every stored record in saved order.
    fn load_all(&self) -> RepoResult<Vec<ContactRecord>>;
    /// Replaces the stored collection with `records`, in order.
    fn replace_all(&mut self, records: &[ContactRecord]) -> RepoResult<()>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `RepoError::MissingRequiredTable` when the schema is not in place.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        for table in CONTACT_TABLES {
            if !table_exists(conn, table)? {
                return Err(RepoError::MissingRequiredTable(table));
            }
        }
        Ok(Self { conn })
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn load_all(&self) -> RepoResult<Vec<ContactRecord>> {
        let mut stmt = self.conn.prepare(CONTACT_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_contact_row(&*self.conn, row)?);
        }

        info!(
            "event=contacts_load module=repo status=ok count={}",
            records.len()
        );
        Ok(records)
    }

    fn replace_all(&mut self, records: &[ContactRecord]) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute("DELETE FROM contact_tags;", [])?;
        tx.execute("DELETE FROM contacts;", [])?;

        for (position, record) in records.iter().enumerate() {
            let position = i64::try_from(position).map_err(|_| {
                RepoError::InvalidData(format!("contact position {position} overflows i64"))
            })?;
            tx.execute(
                "INSERT INTO contacts (
                    position,
                    name,
                    phone,
                    phone_private,
                    email,
                    email_private,
                    address,
                    address_private
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
                params![
                    position,
                    record.name().as_str(),
                    record.phone().as_str(),
                    bool_to_int(record.phone().is_private()),
                    record.email().as_str(),
                    bool_to_int(record.email().is_private()),
                    record.address().as_str(),
                    bool_to_int(record.address().is_private()),
                ],
            )?;
            let contact_id = tx.last_insert_rowid();

            for (tag_position, tag) in record.tags().iter().enumerate() {
                tx.execute(
                    "INSERT INTO contact_tags (contact_id, position, tag_name)
                     VALUES (?1, ?2, ?3);",
                    params![contact_id, tag_position as i64, tag.name()],
                )?;
            }
        }

        tx.commit()?;
        info!(
            "event=contacts_save module=repo status=ok count={}",
            records.len()
        );
        Ok(())
    }
}

fn parse_contact_row(conn: &Connection, row: &Row<'_>) -> RepoResult<ContactRecord> {
    let contact_id: i64 = row.get("id")?;
    let name: String = row.get("name")?;
    let phone: String = row.get("phone")?;
    let email: String = row.get("email")?;
    let address: String = row.get("address")?;

    Ok(ContactRecord::new(
        Name::new(&name)?,
        Phone::new(&phone, int_to_bool(row.get("phone_private")?, "phone_private")?)?,
        Email::new(&email, int_to_bool(row.get("email_private")?, "email_private")?)?,
        Address::new(
            &address,
            int_to_bool(row.get("address_private")?, "address_private")?,
        )?,
        load_tags_for_contact(conn, contact_id)?,
    ))
}

fn load_tags_for_contact(conn: &Connection, contact_id: i64) -> RepoResult<TagSet> {
    let mut stmt = conn.prepare(
        "SELECT tag_name
         FROM contact_tags
         WHERE contact_id = ?1
         ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([contact_id])?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next()? {
        let value: String = row.get(0)?;
        tags.push(Tag::new(&value)?);
    }
    Ok(TagSet::from_tags(tags)?)
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}

fn int_to_bool(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in contacts.{column}"
        ))),
    }
}
