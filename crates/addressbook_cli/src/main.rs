//! Interactive address book CLI.
//!
//! # Responsibility
//! - Wire configuration, logging and storage into one session.
//! - Render command results with 1-based numbering; the numbered list is
//!   what the next index-targeted command refers to.

mod config;

use addressbook_core::db::open_db;
use addressbook_core::{
    core_version, init_logging, AddressBookService, CommandResult, SqliteContactRepository,
    DISPLAYED_INDEX_OFFSET,
};
use clap::Parser;
use config::CliConfig;
use log::{error, info};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const PROMPT: &str = "Enter command: ";

fn main() -> ExitCode {
    let config = CliConfig::parse();

    if let Err(err) = init_logging(&config.log_level, &config.log_dir().to_string_lossy()) {
        eprintln!("warning: file logging disabled: {err}");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let mut conn = open_db(&config.db_path)?;
    let repo = SqliteContactRepository::try_new(&mut conn)?;
    let mut service = AddressBookService::open(repo)?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    println!("Address Book {} ready. Type `help` for usage.", core_version());
    println!("Using storage file: {}", config.db_path.display());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let outcome = service.run(input)?;
        render(&mut stdout, &outcome.result)?;
        if outcome.is_exit {
            break;
        }
    }

    Ok(())
}

fn render(out: &mut impl Write, result: &CommandResult) -> io::Result<()> {
    if let Some(records) = &result.relevant_records {
        for (position, record) in records.iter().enumerate() {
            let visible_index = position as i64 + DISPLAYED_INDEX_OFFSET;
            writeln!(out, "{visible_index}. {}", record.as_text_hide_private())?;
        }
    }
    writeln!(out, "{}", result.feedback)
}
