//! `add` command: data entry for a new contact record.

use crate::command::messages::MESSAGE_DUPLICATE_RECORD;
use crate::command::{Command, CommandResult};
use crate::display::DisplayIndex;
use crate::model::person::{Address, ContactRecord, Email, Name, Phone};
use crate::model::tag::TagSet;
use crate::model::validation::ValidationError;
use crate::store::record_store::RecordStore;
use log::warn;

/// Raw arguments for `AddCommand::new`, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContactArgs {
    pub name: String,
    pub phone: String,
    pub is_phone_private: bool,
    pub email: String,
    pub is_email_private: bool,
    pub address: String,
    pub is_address_private: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: ContactRecord,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to the address book. \
Contact details can be marked private by prepending 'p' to the prefix.\n\
Parameters: NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\
Example: add John Doe p/98765432 e/johnd@gmail.com a/311, Clementi Ave 2, #02-25 t/friends";

    /// Validates every field and tag of the new record.
    pub fn new(args: &NewContactArgs) -> Result<Self, ValidationError> {
        let record = ContactRecord::new(
            Name::new(&args.name)?,
            Phone::new(&args.phone, args.is_phone_private)?,
            Email::new(&args.email, args.is_email_private)?,
            Address::new(&args.address, args.is_address_private)?,
            TagSet::from_names(&args.tags)?,
        );
        Ok(Self { to_add: record })
    }

    pub fn success_message(added: &ContactRecord) -> String {
        format!("New person added: {added}")
    }
}

impl Command for AddCommand {
    fn word(&self) -> &'static str {
        Self::COMMAND_WORD
    }

    fn execute(&self, store: &mut RecordStore, _shown: &DisplayIndex) -> CommandResult {
        match store.add(self.to_add.clone()) {
            Ok(()) => CommandResult::message(Self::success_message(&self.to_add)),
            Err(err) => {
                warn!(
                    "event=add_record module=command status=error error_code={}",
                    err.code()
                );
                CommandResult::message(MESSAGE_DUPLICATE_RECORD)
            }
        }
    }
}
