//! Session-level orchestration.
//!
//! # Responsibility
//! - Seed the record store from a repository and persist it after change.
//! - Carry the most recent `DisplayIndex` between commands explicitly.
//!
//! # Invariants
//! - One command runs to completion before the next one starts.

pub mod address_book_service;
