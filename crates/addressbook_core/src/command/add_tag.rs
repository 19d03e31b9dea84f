//! `addtag` command: add tags to a displayed record.

use crate::command::tag_merge::{merge_tags_at, tag_set_from_args};
use crate::command::{Command, CommandResult};
use crate::display::DisplayIndex;
use crate::model::tag::TagSet;
use crate::model::validation::ValidationError;
use crate::store::record_store::RecordStore;

/// Adds one or more tags to the record at a 1-based displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTagCommand {
    target_visible_index: i64,
    tags_to_add: TagSet,
}

impl AddTagCommand {
    pub const COMMAND_WORD: &'static str = "addtag";
    pub const MESSAGE_USAGE: &'static str = "addtag: Adds one or more tags to the person \
identified by the index number used in the last person listing.\n\
Parameters: INDEX TAG [MORE_TAGS]...\n\
Example: addtag 1 friends";

    /// Validates tag names; fails before any store access.
    ///
    /// # Errors
    /// - `ValidationError::EmptyTagSet` when `tag_names` is empty.
    /// - `ValidationError::InvalidTag` / `DuplicateTag` from tag validation.
    pub fn new<I, S>(target_visible_index: i64, tag_names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            target_visible_index,
            tags_to_add: tag_set_from_args(tag_names)?,
        })
    }

    pub fn target_visible_index(&self) -> i64 {
        self.target_visible_index
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags_to_add
    }

    /// Success feedback for `updated`.
    pub fn success_message(updated: &impl std::fmt::Display) -> String {
        format!("Add tag to: {updated}")
    }
}

impl Command for AddTagCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, store: &mut RecordStore, shown: &DisplayIndex) -> CommandResult {
        match merge_tags_at(
            Self::COMMAND_WORD,
            store,
            shown,
            self.target_visible_index,
            &self.tags_to_add,
        ) {
            Ok(updated) => CommandResult::message(Self::success_message(&updated)),
            Err(err) => CommandResult::message(err.feedback()),
        }
    }
}
