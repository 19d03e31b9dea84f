//! CLI configuration resolved from arguments and environment.
//!
//! # Responsibility
//! - Pick the database path, log directory and log level for one run.
//!
//! # Invariants
//! - The positional storage path overrides `ADDRESSBOOK_DB`.
//! - The resolved log directory is always absolute.

use addressbook_core::default_log_level;
use clap::Parser;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "ADDRESSBOOK_DB";
pub const ENV_LOG_DIR: &str = "ADDRESSBOOK_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "ADDRESSBOOK_LOG_LEVEL";
const DEFAULT_DB_FILE: &str = "addressbook.db";
const DEFAULT_LOG_DIR_NAME: &str = "addressbook-logs";

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "addressbook")]
#[command(about = "Tagged address book shell")]
#[command(version)]
pub struct CliConfig {
    /// SQLite storage file; created when missing.
    #[arg(value_name = "STORAGE_FILE_PATH", env = ENV_DB_PATH, default_value = DEFAULT_DB_FILE)]
    pub db_path: PathBuf,

    /// Directory for rolling log files. Relative paths fall back to the
    /// system temp directory.
    #[arg(long, env = ENV_LOG_DIR)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, env = ENV_LOG_LEVEL, default_value = default_log_level())]
    pub log_level: String,
}

impl CliConfig {
    /// Absolute log directory for `init_logging`.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .filter(|path| path.is_absolute())
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME))
    }
}
