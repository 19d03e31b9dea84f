//! `updatetag` command.
//!
//! Despite its name this command is additive: the given tags are merged
//! into the record's existing set and nothing is removed.

use crate::command::tag_merge::{merge_tags_at, tag_set_from_args};
use crate::command::{Command, CommandResult};
use crate::display::DisplayIndex;
use crate::model::tag::TagSet;
use crate::model::validation::ValidationError;
use crate::store::record_store::RecordStore;

/// Merges tags into the record at a 1-based displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTagCommand {
    target_visible_index: i64,
    tags_to_update: TagSet,
}

impl UpdateTagCommand {
    pub const COMMAND_WORD: &'static str = "updatetag";
    pub const MESSAGE_USAGE: &'static str = "updatetag: Updates the tags of the person \
identified by the index number used in the last person listing.\n\
Parameters: INDEX TAG [MORE_TAGS]...\n\
Example: updatetag 1 friends";

    /// Validates tag names; fails before any store access.
    pub fn new<I, S>(target_visible_index: i64, tag_names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            target_visible_index,
            tags_to_update: tag_set_from_args(tag_names)?,
        })
    }

    pub fn target_visible_index(&self) -> i64 {
        self.target_visible_index
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags_to_update
    }

    pub fn success_message(updated: &impl std::fmt::Display) -> String {
        format!("Updated Person: {updated}")
    }
}

impl Command for UpdateTagCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, store: &mut RecordStore, shown: &DisplayIndex) -> CommandResult {
        match merge_tags_at(
            Self::COMMAND_WORD,
            store,
            shown,
            self.target_visible_index,
            &self.tags_to_update,
        ) {
            Ok(updated) => CommandResult::message(Self::success_message(&updated)),
            Err(err) => CommandResult::message(err.feedback()),
        }
    }
}
