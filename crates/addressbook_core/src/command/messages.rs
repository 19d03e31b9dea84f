//! User-facing message templates shared across commands.

pub const MESSAGE_INVALID_RECORD_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_RECORD_NOT_IN_ADDRESS_BOOK: &str = "Person could not be found in address book";
pub const MESSAGE_DUPLICATE_RECORD: &str = "This person already exists in the address book";
pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";

/// Summary shown above a listing or search result.
pub fn records_listed_overview(count: usize) -> String {
    format!("{count} persons listed!")
}

/// Wraps a command's usage text in the invalid-format banner.
pub fn invalid_command_format(usage: &str) -> String {
    format!("{MESSAGE_INVALID_COMMAND_FORMAT}{usage}")
}
