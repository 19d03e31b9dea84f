//! Validation errors raised while constructing model values.
//!
//! # Invariants
//! - Every variant keeps the raw input so callers can echo it back.
//! - `Display` renders the fixed user-facing constraint message.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";
pub const DUPLICATE_TAG: &str = "Operation would result in duplicate tags";
pub const EMPTY_TAG_SET: &str = "At least one tag must be provided";
pub const NAME_CONSTRAINTS: &str = "Person names should be spaces or alphabetic characters";
pub const PHONE_CONSTRAINTS: &str = "Person phone numbers should only contain numbers";
pub const EMAIL_CONSTRAINTS: &str =
    "Person emails should be 2 alphanumeric/period strings separated by '@'";
pub const ADDRESS_CONSTRAINTS: &str = "Person addresses can be in any format";

/// Construction-time failure for tags, tag sets and contact fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidTag(String),
    /// Two raw names collapse to the same tag.
    DuplicateTag(String),
    /// A tag command received no tag names at all.
    EmptyTagSet,
    InvalidName(String),
    InvalidPhone(String),
    InvalidEmail(String),
    InvalidAddress(String),
}

impl ValidationError {
    /// Returns the fixed constraint message for this failure kind.
    pub fn constraint_message(&self) -> &'static str {
        match self {
            Self::InvalidTag(_) => TAG_CONSTRAINTS,
            Self::DuplicateTag(_) => DUPLICATE_TAG,
            Self::EmptyTagSet => EMPTY_TAG_SET,
            Self::InvalidName(_) => NAME_CONSTRAINTS,
            Self::InvalidPhone(_) => PHONE_CONSTRAINTS,
            Self::InvalidEmail(_) => EMAIL_CONSTRAINTS,
            Self::InvalidAddress(_) => ADDRESS_CONSTRAINTS,
        }
    }

    /// Short stable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidTag(_) => "invalid_tag",
            Self::DuplicateTag(_) => "duplicate_tag",
            Self::EmptyTagSet => "empty_tag_set",
            Self::InvalidName(_) => "invalid_name",
            Self::InvalidPhone(_) => "invalid_phone",
            Self::InvalidEmail(_) => "invalid_email",
            Self::InvalidAddress(_) => "invalid_address",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.constraint_message())
    }
}

impl Error for ValidationError {}
