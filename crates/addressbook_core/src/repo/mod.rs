//! Repository layer: persistence of the contact collection.
//!
//! # Responsibility
//! - Define the load/save contract the session uses to seed and persist
//!   its `RecordStore`.
//! - Isolate SQLite query details from command orchestration.
//!
//! # Invariants
//! - Loaded rows are re-validated; invalid persisted data is rejected, not
//!   masked.
//! - Saving replaces the whole collection in one transaction.

pub mod contact_repo;
