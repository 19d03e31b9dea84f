//! Positional addressing over the most recently shown records.
//!
//! # Responsibility
//! - Hold an ordered snapshot of records produced by a listing or search.
//! - Resolve 1-based indices typed by the user into snapshot entries.
//!
//! # Invariants
//! - The snapshot is read-only and never refreshed while a command runs.
//! - A resolved record may no longer be in the store; callers treat that
//!   as a domain condition.

use crate::model::person::ContactRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Offset between user-visible numbering and snapshot positions.
pub const DISPLAYED_INDEX_OFFSET: i64 = 1;

/// Index outside `1..=len` of the snapshot it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidIndexError {
    pub index: i64,
    pub len: usize,
}

impl Display for InvalidIndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "index {} is outside the displayed range 1..={}",
            self.index, self.len
        )
    }
}

impl Error for InvalidIndexError {}

/// Ordered snapshot of the records last shown to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayIndex {
    records: Vec<ContactRecord>,
}

impl DisplayIndex {
    pub fn new(records: Vec<ContactRecord>) -> Self {
        Self { records }
    }

    /// Snapshot with nothing shown.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolves a 1-based visible index.
    ///
    /// # Errors
    /// - `InvalidIndexError` when `visible_index` is non-positive or larger
    ///   than the snapshot.
    pub fn resolve(&self, visible_index: i64) -> Result<&ContactRecord, InvalidIndexError> {
        let invalid = InvalidIndexError {
            index: visible_index,
            len: self.records.len(),
        };
        let position = visible_index
            .checked_sub(DISPLAYED_INDEX_OFFSET)
            .and_then(|value| usize::try_from(value).ok())
            .ok_or(invalid)?;
        self.records.get(position).ok_or(invalid)
    }

    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<ContactRecord>> for DisplayIndex {
    fn from(records: Vec<ContactRecord>) -> Self {
        Self::new(records)
    }
}
