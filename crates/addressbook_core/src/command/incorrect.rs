//! Placeholder command for input that failed parsing or validation.

use crate::command::{Command, CommandResult};
use crate::display::DisplayIndex;
use crate::store::record_store::RecordStore;

/// Carries the failure message back to the caller; never touches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncorrectCommand {
    feedback: String,
}

impl IncorrectCommand {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

impl Command for IncorrectCommand {
    fn word(&self) -> &'static str {
        "incorrect"
    }

    fn execute(&self, _store: &mut RecordStore, _shown: &DisplayIndex) -> CommandResult {
        CommandResult::message(self.feedback.clone())
    }
}
