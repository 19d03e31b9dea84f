//! Contact record domain model.
//!
//! # Responsibility
//! - Define validated identity fields (name, phone, email, address).
//! - Aggregate identity fields and one `TagSet` into an immutable record.
//!
//! # Invariants
//! - Every field value is trimmed and validated at construction and on
//!   deserialization.
//! - The `is_private` flag affects rendering only; equality and hashing
//!   compare field values alone.
//! - Records are never mutated in place; `with_tags` builds a new record.

use crate::model::tag::TagSet;
use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.]+@[A-Za-z0-9_.]+$").expect("valid email regex"));
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+$").expect("valid address regex"));

const PRIVATE_PREFIX: &str = "(private) ";

/// Person name; letters and spaces only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    value: String,
}

impl Name {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !NAME_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidName(raw.to_string()));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Name::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> String {
        name.value
    }
}

/// Wire shape shared by the privacy-aware fields.
#[derive(Deserialize)]
struct RawPrivateField {
    value: String,
    #[serde(default)]
    is_private: bool,
}

/// Defines a validated field that carries a privacy flag.
macro_rules! private_field {
    ($(#[$doc:meta])* $ty:ident, $regex:ident, $variant:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        #[serde(try_from = "RawPrivateField")]
        pub struct $ty {
            value: String,
            is_private: bool,
        }

        impl $ty {
            pub fn new(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
                let trimmed = raw.trim();
                if !$regex.is_match(trimmed) {
                    return Err(ValidationError::$variant(raw.to_string()));
                }
                Ok(Self {
                    value: trimmed.to_string(),
                    is_private,
                })
            }

            pub fn as_str(&self) -> &str {
                &self.value
            }

            pub fn is_private(&self) -> bool {
                self.is_private
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.value.hash(state);
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl TryFrom<RawPrivateField> for $ty {
            type Error = ValidationError;

            fn try_from(raw: RawPrivateField) -> Result<Self, Self::Error> {
                $ty::new(&raw.value, raw.is_private)
            }
        }
    };
}

private_field!(
    /// Phone number; digits only.
    Phone,
    PHONE_RE,
    InvalidPhone
);
private_field!(
    /// Email address of the form `local@domain`.
    Email,
    EMAIL_RE,
    InvalidEmail
);
private_field!(
    /// Free-form single-line address.
    Address,
    ADDRESS_RE,
    InvalidAddress
);

/// Immutable contact record.
///
/// Two records are equal iff all five attributes are equal, with tags
/// compared as sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactRecord {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: TagSet,
}

impl ContactRecord {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: TagSet) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns a new record with identical identity fields and `tags`.
    pub fn with_tags(&self, tags: TagSet) -> Self {
        Self {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            tags,
        }
    }

    /// Renders the record with private fields omitted.
    pub fn as_text_hide_private(&self) -> String {
        let mut text = self.name.to_string();
        if !self.phone.is_private() {
            text.push_str(&format!(" Phone: {}", self.phone));
        }
        if !self.email.is_private() {
            text.push_str(&format!(" Email: {}", self.email));
        }
        if !self.address.is_private() {
            text.push_str(&format!(" Address: {}", self.address));
        }
        text.push_str(&format!(" Tags: {}", self.tags));
        text
    }
}

/// Renders every field, marking private ones.
impl Display for ContactRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Phone: {}{} Email: {}{} Address: {}{} Tags: {}",
            self.name,
            private_prefix(self.phone.is_private()),
            self.phone,
            private_prefix(self.email.is_private()),
            self.email,
            private_prefix(self.address.is_private()),
            self.address,
            self.tags
        )
    }
}

fn private_prefix(is_private: bool) -> &'static str {
    if is_private {
        PRIVATE_PREFIX
    } else {
        ""
    }
}
