//! Command layer: validated use-cases over the record store.
//!
//! # Responsibility
//! - Validate raw arguments into domain values at construction time.
//! - Execute once against a `RecordStore` and the `DisplayIndex` passed in.
//! - Translate domain failures into fixed user-facing messages.
//!
//! # Invariants
//! - Construction failures never touch the store.
//! - Execution never panics and never aborts the session; every outcome is
//!   a `CommandResult`.
//! - A failed execution leaves the store unchanged.

use crate::display::{DisplayIndex, InvalidIndexError};
use crate::model::person::ContactRecord;
use crate::store::record_store::RecordStore;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod add;
pub mod add_tag;
pub mod exit;
pub mod find_tag;
pub mod help;
pub mod incorrect;
pub mod list;
pub mod messages;
pub mod parser;
mod tag_merge;
pub mod update_tag;

use messages::{
    MESSAGE_DUPLICATE_RECORD, MESSAGE_INVALID_RECORD_DISPLAYED_INDEX,
    MESSAGE_RECORD_NOT_IN_ADDRESS_BOOK,
};

/// Outcome of one command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Human-readable feedback for the caller.
    pub feedback: String,
    /// Records to show, when the command produces a listing. Rendered with
    /// 1-based numbering and used as the next `DisplayIndex`.
    pub relevant_records: Option<Vec<ContactRecord>>,
}

impl CommandResult {
    /// Result carrying only a message.
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            relevant_records: None,
        }
    }

    /// Result carrying a message and a record listing.
    pub fn with_records(feedback: impl Into<String>, records: Vec<ContactRecord>) -> Self {
        Self {
            feedback: feedback.into(),
            relevant_records: Some(records),
        }
    }
}

/// A validated, ready-to-run use-case.
pub trait Command {
    /// Command word, used for diagnostics.
    fn word(&self) -> &'static str;

    /// Runs the command once.
    ///
    /// `shown` is the snapshot positional arguments were typed against.
    fn execute(&self, store: &mut RecordStore, shown: &DisplayIndex) -> CommandResult;

    /// Returns `true` when the session should end after this command.
    fn is_exit(&self) -> bool {
        false
    }
}

/// Runtime failure of an index-targeted tag command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCommandError {
    InvalidIndex(InvalidIndexError),
    Store(StoreError),
}

impl TagCommandError {
    /// Fixed message template for this failure.
    pub fn feedback(&self) -> &'static str {
        match self {
            Self::InvalidIndex(_) => MESSAGE_INVALID_RECORD_DISPLAYED_INDEX,
            Self::Store(StoreError::RecordNotFound) => MESSAGE_RECORD_NOT_IN_ADDRESS_BOOK,
            Self::Store(StoreError::DuplicateRecord) => MESSAGE_DUPLICATE_RECORD,
        }
    }

    /// Short stable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidIndex(_) => "invalid_index",
            Self::Store(err) => err.code(),
        }
    }
}

impl Display for TagCommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TagCommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidIndex(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<InvalidIndexError> for TagCommandError {
    fn from(value: InvalidIndexError) -> Self {
        Self::InvalidIndex(value)
    }
}

impl From<StoreError> for TagCommandError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
