//! In-memory record store.
//!
//! # Responsibility
//! - Own the session's contact records and enforce record uniqueness.
//! - Offer a transactional replace primitive for immutable-record updates.
//!
//! # Invariants
//! - No two stored records are field-wise equal.
//! - A failed mutation leaves the store exactly as it was.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod record_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Uniqueness and lookup failures raised by `RecordStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The operation would leave two equal records in the store.
    DuplicateRecord,
    /// No field-wise-equal record exists in the store.
    RecordNotFound,
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateRecord => "duplicate_record",
            Self::RecordNotFound => "record_not_found",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateRecord => write!(f, "Operation would result in duplicate persons"),
            Self::RecordNotFound => write!(f, "Person could not be found in address book"),
        }
    }
}

impl Error for StoreError {}
