//! `exit` command.

use crate::command::{Command, CommandResult};
use crate::display::DisplayIndex;
use crate::store::record_store::RecordStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_USAGE: &'static str = "exit: Exits the program.\n\
Example: exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting Address Book as requested ...";
}

impl Command for ExitCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, _store: &mut RecordStore, _shown: &DisplayIndex) -> CommandResult {
        CommandResult::message(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT)
    }

    fn is_exit(&self) -> bool {
        true
    }
}
