//! Core domain logic for the tagged address book.
//! This crate is the single source of truth for record and tag invariants.

pub mod command;
pub mod db;
pub mod display;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use command::add::{AddCommand, NewContactArgs};
pub use command::add_tag::AddTagCommand;
pub use command::exit::ExitCommand;
pub use command::find_tag::FindTagCommand;
pub use command::help::HelpCommand;
pub use command::incorrect::IncorrectCommand;
pub use command::list::ListCommand;
pub use command::parser::parse_command;
pub use command::update_tag::UpdateTagCommand;
pub use command::{Command, CommandResult, TagCommandError};
pub use display::{DisplayIndex, InvalidIndexError, DISPLAYED_INDEX_OFFSET};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::person::{Address, ContactRecord, Email, Name, Phone};
pub use model::tag::{Tag, TagSet};
pub use model::validation::ValidationError;
pub use repo::contact_repo::{
    ContactRepository, RepoError, RepoResult, SqliteContactRepository,
};
pub use service::address_book_service::{AddressBookService, CommandOutcome, ServiceError};
pub use store::record_store::RecordStore;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
