//! `list` command: show every record in store order.

use crate::command::messages::records_listed_overview;
use crate::command::{Command, CommandResult};
use crate::display::DisplayIndex;
use crate::store::record_store::RecordStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_USAGE: &'static str = "list: Displays all persons in the address book \
as a list with index numbers.\n\
Example: list";
}

impl Command for ListCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, store: &mut RecordStore, _shown: &DisplayIndex) -> CommandResult {
        let all = store.records().to_vec();
        CommandResult::with_records(records_listed_overview(all.len()), all)
    }
}
