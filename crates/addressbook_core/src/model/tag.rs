//! Tag and tag-set value types.
//!
//! # Responsibility
//! - Validate free-form labels attached to contact records.
//! - Provide a duplicate-free tag collection with add-only merge semantics.
//!
//! # Invariants
//! - Tag equality is exact, case-sensitive comparison of the trimmed name.
//! - A `TagSet` never holds two equal tags; constructing one from input
//!   that collapses to a duplicate is an error, never a silent dedupe.
//! - `TagSet` equality and hashing ignore insertion order; iteration and
//!   display follow insertion order.

use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag name regex"));

/// A single case-sensitive label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Validates and builds a tag from raw user input.
    ///
    /// Surrounding whitespace is trimmed; the remainder must be non-empty
    /// ASCII alphanumeric text.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !is_valid_tag_name(trimmed) {
            return Err(ValidationError::InvalidTag(raw.to_string()));
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Returns whether `value` is acceptable as a tag name as-is.
pub fn is_valid_tag_name(value: &str) -> bool {
    TAG_NAME_RE.is_match(value)
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

impl TryFrom<String> for Tag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Tag::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> String {
        tag.name
    }
}

/// Duplicate-free tag collection owned by one contact record.
///
/// Backed by an insertion-ordered `Vec` for stable display plus a `HashSet`
/// for constant-time membership checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagSet {
    ordered: Vec<Tag>,
    members: HashSet<Tag>,
}

impl TagSet {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tag set from already-validated tags.
    ///
    /// # Errors
    /// - `ValidationError::DuplicateTag` when two tags are equal.
    pub fn from_tags(tags: impl IntoIterator<Item = Tag>) -> Result<Self, ValidationError> {
        let mut set = Self::new();
        for tag in tags {
            set.insert(tag)?;
        }
        Ok(set)
    }

    /// Validates raw names and builds a tag set from them.
    ///
    /// # Errors
    /// - `ValidationError::InvalidTag` for the first invalid name.
    /// - `ValidationError::DuplicateTag` when two names collapse to the same
    ///   tag (for example `"a"` and `" a "`).
    pub fn from_names<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            set.insert(Tag::new(name.as_ref())?)?;
        }
        Ok(set)
    }

    /// Adds one tag, rejecting duplicates.
    pub fn insert(&mut self, tag: Tag) -> Result<(), ValidationError> {
        if self.members.contains(&tag) {
            return Err(ValidationError::DuplicateTag(tag.name));
        }
        self.members.insert(tag.clone());
        self.ordered.push(tag);
        Ok(())
    }

    /// Adds every tag of `other` not already present.
    ///
    /// Never removes tags. Merging is idempotent and the resulting
    /// membership does not depend on merge order.
    pub fn merge_from(&mut self, other: &TagSet) -> &mut Self {
        for tag in &other.ordered {
            if self.members.insert(tag.clone()) {
                self.ordered.push(tag.clone());
            }
        }
        self
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.members.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterates tags in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.ordered.iter()
    }

    /// Snapshot of the members for membership tests.
    pub fn to_set(&self) -> HashSet<Tag> {
        self.members.clone()
    }

    /// Returns `true` when no tag of this set appears in `other`.
    pub fn is_disjoint(&self, other: &HashSet<Tag>) -> bool {
        self.members.is_disjoint(other)
    }
}

impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for TagSet {}

impl Hash for TagSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut names: Vec<&str> = self.ordered.iter().map(Tag::name).collect();
        names.sort_unstable();
        names.hash(state);
    }
}

impl Display for TagSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for tag in &self.ordered {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}

impl TryFrom<Vec<Tag>> for TagSet {
    type Error = ValidationError;

    fn try_from(value: Vec<Tag>) -> Result<Self, Self::Error> {
        TagSet::from_tags(value)
    }
}

impl From<TagSet> for Vec<Tag> {
    fn from(set: TagSet) -> Vec<Tag> {
        set.ordered
    }
}
