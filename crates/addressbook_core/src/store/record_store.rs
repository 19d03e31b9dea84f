//! Ordered, duplicate-free collection of contact records.
//!
//! # Invariants
//! - `ordered` and `members` always hold the same records.
//! - Insertion order is kept for listing only.
//! - `revision` increases by one on every successful mutation.

use crate::model::person::ContactRecord;
use crate::store::{StoreError, StoreResult};
use std::collections::HashSet;

/// Session-local store of every contact record.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    ordered: Vec<ContactRecord>,
    members: HashSet<ContactRecord>,
    revision: u64,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from a loaded collection, keeping its order.
    ///
    /// # Errors
    /// - `StoreError::DuplicateRecord` when the collection repeats a record.
    pub fn from_records(
        records: impl IntoIterator<Item = ContactRecord>,
    ) -> StoreResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        store.revision = 0;
        Ok(store)
    }

    /// Appends `record`, rejecting duplicates.
    pub fn add(&mut self, record: ContactRecord) -> StoreResult<()> {
        if self.members.contains(&record) {
            return Err(StoreError::DuplicateRecord);
        }
        self.members.insert(record.clone());
        self.ordered.push(record);
        self.revision += 1;
        Ok(())
    }

    /// Removes the record equal to `record`.
    pub fn remove(&mut self, record: &ContactRecord) -> StoreResult<()> {
        if !self.members.remove(record) {
            return Err(StoreError::RecordNotFound);
        }
        self.ordered.retain(|existing| existing != record);
        self.revision += 1;
        Ok(())
    }

    /// Replaces `old` with `updated` as one step.
    ///
    /// Observable order matches remove-then-add: `updated` is appended.
    ///
    /// # Errors
    /// - `StoreError::RecordNotFound` when `old` is not stored.
    /// - `StoreError::DuplicateRecord` when `updated` equals a different
    ///   stored record.
    ///
    /// Both checks run before any change, so a failed replace leaves the
    /// store untouched.
    pub fn replace(&mut self, old: &ContactRecord, updated: ContactRecord) -> StoreResult<()> {
        if !self.members.contains(old) {
            return Err(StoreError::RecordNotFound);
        }
        if &updated != old && self.members.contains(&updated) {
            return Err(StoreError::DuplicateRecord);
        }

        self.members.remove(old);
        self.ordered.retain(|existing| existing != old);
        self.members.insert(updated.clone());
        self.ordered.push(updated);
        self.revision += 1;
        Ok(())
    }

    pub fn contains(&self, record: &ContactRecord) -> bool {
        self.members.contains(record)
    }

    /// Read-only view in insertion order.
    pub fn records(&self) -> &[ContactRecord] {
        &self.ordered
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContactRecord> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Mutation counter; unchanged across failed operations.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Stores compare by their ordered record sequence.
impl PartialEq for RecordStore {
    fn eq(&self, other: &Self) -> bool {
        self.ordered == other.ordered
    }
}

impl Eq for RecordStore {}
