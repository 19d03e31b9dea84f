//! Address book session service.
//!
//! # Responsibility
//! - Own the session's `RecordStore` and the last shown `DisplayIndex`.
//! - Parse and execute commands, then persist the store when it changed.
//!
//! # Invariants
//! - The display snapshot is replaced only by commands that return a
//!   record listing.
//! - Persistence runs only after a command changed the store revision.
//! - Domain failures stay inside `CommandResult`; only repository failures
//!   surface as `ServiceError`.

use crate::command::parser::parse_command;
use crate::command::{Command, CommandResult};
use crate::display::DisplayIndex;
use crate::repo::contact_repo::{ContactRepository, RepoError};
use crate::store::record_store::RecordStore;
use crate::store::StoreError;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session failure caused by the persistence collaborator.
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    /// Loaded data violates record uniqueness.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "stored address book is inconsistent: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Result of one session step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub result: CommandResult,
    /// `true` when the caller should end the session.
    pub is_exit: bool,
}

/// Address book session over a repository implementation.
pub struct AddressBookService<R: ContactRepository> {
    repo: R,
    store: RecordStore,
    last_shown: DisplayIndex,
}

impl<R: ContactRepository> AddressBookService<R> {
    /// Loads the stored collection and starts a session with nothing shown.
    ///
    /// # Errors
    /// - `ServiceError::Repo` when loading fails.
    /// - `ServiceError::Store` when the stored data repeats a record.
    pub fn open(repo: R) -> Result<Self, ServiceError> {
        let records = repo.load_all()?;
        let store = RecordStore::from_records(records).map_err(|err| {
            error!(
                "event=session_open module=service status=error error_code={}",
                err.code()
            );
            err
        })?;
        info!(
            "event=session_open module=service status=ok record_count={}",
            store.len()
        );
        Ok(Self {
            repo,
            store,
            last_shown: DisplayIndex::empty(),
        })
    }

    /// Parses and executes one line of user input.
    pub fn run(&mut self, input: &str) -> Result<CommandOutcome, ServiceError> {
        let command = parse_command(input);
        let result = self.execute(command.as_ref())?;
        Ok(CommandOutcome {
            result,
            is_exit: command.is_exit(),
        })
    }

    /// Executes an already-built command against the session state.
    pub fn execute(&mut self, command: &dyn Command) -> Result<CommandResult, ServiceError> {
        let revision_before = self.store.revision();
        let result = command.execute(&mut self.store, &self.last_shown);

        if let Some(records) = &result.relevant_records {
            self.last_shown = DisplayIndex::new(records.clone());
        }

        let changed = self.store.revision() != revision_before;
        if changed {
            if let Err(err) = self.repo.replace_all(self.store.records()) {
                error!(
                    "event=command_execute module=service status=error command={} error_code=save_failed error={}",
                    command.word(),
                    err
                );
                return Err(err.into());
            }
        }

        info!(
            "event=command_execute module=service status=ok command={} changed={} shown={}",
            command.word(),
            changed,
            self.last_shown.len()
        );
        Ok(result)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Snapshot that the next index-targeted command resolves against.
    pub fn last_shown(&self) -> &DisplayIndex {
        &self.last_shown
    }
}
