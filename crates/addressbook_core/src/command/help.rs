//! `help` command: usage text for every command.

use crate::command::add::AddCommand;
use crate::command::add_tag::AddTagCommand;
use crate::command::exit::ExitCommand;
use crate::command::find_tag::FindTagCommand;
use crate::command::list::ListCommand;
use crate::command::update_tag::UpdateTagCommand;
use crate::command::{Command, CommandResult};
use crate::display::DisplayIndex;
use crate::store::record_store::RecordStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str = "help: Shows program usage instructions.\n\
Example: help";

    /// Every usage block, one per command, in a fixed order.
    pub fn all_usages() -> String {
        [
            AddCommand::MESSAGE_USAGE,
            ListCommand::MESSAGE_USAGE,
            AddTagCommand::MESSAGE_USAGE,
            UpdateTagCommand::MESSAGE_USAGE,
            FindTagCommand::MESSAGE_USAGE,
            HelpCommand::MESSAGE_USAGE,
            ExitCommand::MESSAGE_USAGE,
        ]
        .join("\n")
    }
}

impl Command for HelpCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, _store: &mut RecordStore, _shown: &DisplayIndex) -> CommandResult {
        CommandResult::message(Self::all_usages())
    }
}
