//! Contact and tag domain model.
//!
//! # Responsibility
//! - Define validated value types shared by the store and the commands.
//!
//! # Invariants
//! - Every value is validated at construction; invalid input never yields
//!   a partially built value.
//! - Contact records are immutable; updates produce new records.

pub mod person;
pub mod tag;
pub mod validation;
