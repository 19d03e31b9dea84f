//! `findtag` command: list records sharing at least one tag with the
//! keywords. Matching is exact and case-sensitive, and only tags are
//! inspected.

use crate::command::messages::records_listed_overview;
use crate::command::{Command, CommandResult};
use crate::display::DisplayIndex;
use crate::model::person::ContactRecord;
use crate::model::tag::Tag;
use crate::model::validation::ValidationError;
use crate::store::record_store::RecordStore;
use log::debug;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindTagCommand {
    keywords: Vec<String>,
    key_tags: HashSet<Tag>,
}

impl FindTagCommand {
    pub const COMMAND_WORD: &'static str = "findtag";
    pub const MESSAGE_USAGE: &'static str = "findtag: Finds all persons whose tags contain \
any of the specified keywords (case-sensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: findtag friends owesMoney";

    /// Validates every keyword as a tag name.
    ///
    /// Repeated keywords collapse silently.
    ///
    /// # Errors
    /// - `ValidationError::EmptyTagSet` when no keyword is given.
    /// - `ValidationError::InvalidTag` for the first malformed keyword.
    pub fn new<I, S>(keywords: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw_keywords = Vec::new();
        let mut key_tags = HashSet::new();
        for keyword in keywords {
            let tag = Tag::new(keyword.as_ref())?;
            if key_tags.insert(tag.clone()) {
                raw_keywords.push(tag.name().to_string());
            }
        }
        if key_tags.is_empty() {
            return Err(ValidationError::EmptyTagSet);
        }
        Ok(Self {
            keywords: raw_keywords,
            key_tags,
        })
    }

    /// Distinct keywords in first-seen order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn records_with_any_keyword_tag(&self, store: &RecordStore) -> Vec<ContactRecord> {
        store
            .iter()
            .filter(|record| !record.tags().is_disjoint(&self.key_tags))
            .cloned()
            .collect()
    }
}

impl Command for FindTagCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, store: &mut RecordStore, _shown: &DisplayIndex) -> CommandResult {
        let found = self.records_with_any_keyword_tag(store);
        debug!(
            "event=find_tag module=command status=ok keyword_count={} match_count={}",
            self.key_tags.len(),
            found.len()
        );
        CommandResult::with_records(records_listed_overview(found.len()), found)
    }
}
