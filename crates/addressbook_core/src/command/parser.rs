//! Line-oriented command parser.
//!
//! # Responsibility
//! - Split one line of user input into a command word and arguments.
//! - Build the matching validated command, or an `IncorrectCommand`
//!   carrying the reason.
//!
//! # Invariants
//! - Parsing never fails with an error value; every input maps to a command.
//! - Exact repeated tag arguments collapse before validation, matching the
//!   set semantics of tag input.

use crate::command::add::{AddCommand, NewContactArgs};
use crate::command::add_tag::AddTagCommand;
use crate::command::exit::ExitCommand;
use crate::command::find_tag::FindTagCommand;
use crate::command::help::HelpCommand;
use crate::command::incorrect::IncorrectCommand;
use crate::command::list::ListCommand;
use crate::command::messages::invalid_command_format;
use crate::command::update_tag::UpdateTagCommand;
use crate::command::Command;
use crate::model::validation::ValidationError;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static BASIC_COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<word>\S+)(?:\s+(?P<arguments>.*?))?\s*$").expect("valid command regex")
});
static INDEXED_TAGS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<index>[+-]?[0-9]+),?\s+(?P<tags>.+)$").expect("valid indexed tags regex")
});
static ADD_ARGS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>[^/]+?)\s+(?P<phone_private>p?)p/(?P<phone>[^/]+?)\s+(?P<email_private>p?)e/(?P<email>[^/]+?)\s+(?P<address_private>p?)a/(?P<address>[^/]+?)(?P<tags>(?: t/[^/]+)*)$",
    )
    .expect("valid add arguments regex")
});

/// Parses one line of user input into a ready-to-run command.
pub fn parse_command(input: &str) -> Box<dyn Command> {
    let Some(captures) = BASIC_COMMAND_RE.captures(input) else {
        return Box::new(IncorrectCommand::new(invalid_command_format(
            HelpCommand::MESSAGE_USAGE,
        )));
    };
    let word = captures.name("word").map_or("", |m| m.as_str());
    let arguments = captures.name("arguments").map_or("", |m| m.as_str());

    match word {
        AddCommand::COMMAND_WORD => prepare_add(arguments),
        ListCommand::COMMAND_WORD => Box::new(ListCommand),
        AddTagCommand::COMMAND_WORD => prepare_indexed_tags(
            arguments,
            AddTagCommand::COMMAND_WORD,
            AddTagCommand::MESSAGE_USAGE,
            |index, tags| AddTagCommand::new(index, tags).map(boxed),
        ),
        UpdateTagCommand::COMMAND_WORD => prepare_indexed_tags(
            arguments,
            UpdateTagCommand::COMMAND_WORD,
            UpdateTagCommand::MESSAGE_USAGE,
            |index, tags| UpdateTagCommand::new(index, tags).map(boxed),
        ),
        FindTagCommand::COMMAND_WORD => prepare_find_tag(arguments),
        ExitCommand::COMMAND_WORD => Box::new(ExitCommand),
        HelpCommand::COMMAND_WORD => Box::new(HelpCommand),
        _ => Box::new(HelpCommand),
    }
}

fn boxed<C: Command + 'static>(command: C) -> Box<dyn Command> {
    Box::new(command)
}

fn prepare_add(arguments: &str) -> Box<dyn Command> {
    let Some(captures) = ADD_ARGS_RE.captures(arguments) else {
        return incorrect_format(AddCommand::MESSAGE_USAGE);
    };
    let group = |name: &str| captures.name(name).map_or("", |m| m.as_str());

    let args = NewContactArgs {
        name: group("name").to_string(),
        phone: group("phone").to_string(),
        is_phone_private: !group("phone_private").is_empty(),
        email: group("email").to_string(),
        is_email_private: !group("email_private").is_empty(),
        address: group("address").to_string(),
        is_address_private: !group("address_private").is_empty(),
        tags: split_tag_arguments(group("tags")),
    };
    finish(AddCommand::COMMAND_WORD, AddCommand::new(&args).map(boxed))
}

fn prepare_indexed_tags<F>(
    arguments: &str,
    word: &'static str,
    usage: &'static str,
    build: F,
) -> Box<dyn Command>
where
    F: FnOnce(i64, Vec<String>) -> Result<Box<dyn Command>, ValidationError>,
{
    let Some(captures) = INDEXED_TAGS_RE.captures(arguments) else {
        return incorrect_format(usage);
    };
    let Some(index) = captures
        .name("index")
        .and_then(|m| m.as_str().parse::<i64>().ok())
    else {
        return incorrect_format(usage);
    };
    let tags = distinct_words(captures.name("tags").map_or("", |m| m.as_str()));
    finish(word, build(index, tags))
}

fn prepare_find_tag(arguments: &str) -> Box<dyn Command> {
    let keywords = distinct_words(arguments);
    if keywords.is_empty() {
        return incorrect_format(FindTagCommand::MESSAGE_USAGE);
    }
    finish(
        FindTagCommand::COMMAND_WORD,
        FindTagCommand::new(keywords).map(boxed),
    )
}

fn finish(
    word: &'static str,
    built: Result<Box<dyn Command>, ValidationError>,
) -> Box<dyn Command> {
    built.unwrap_or_else(|err| validation_failure(word, err))
}

fn validation_failure(word: &'static str, err: ValidationError) -> Box<dyn Command> {
    debug!(
        "event=command_parse module=parser status=error command={} error_code={}",
        word,
        err.code()
    );
    Box::new(IncorrectCommand::new(err.to_string()))
}

fn incorrect_format(usage: &'static str) -> Box<dyn Command> {
    Box::new(IncorrectCommand::new(invalid_command_format(usage)))
}

/// Splits on whitespace, dropping exact repeats while keeping first-seen order.
fn distinct_words(text: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        if !words.iter().any(|existing| existing == word) {
            words.push(word.to_string());
        }
    }
    words
}

/// Extracts tag names from a ` t/a t/b` argument tail.
fn split_tag_arguments(tail: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for raw in tail.split(" t/").map(str::trim).filter(|raw| !raw.is_empty()) {
        if !tags.iter().any(|existing| existing == raw) {
            tags.push(raw.to_string());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::{distinct_words, split_tag_arguments};

    #[test]
    fn distinct_words_keeps_first_occurrence_order() {
        assert_eq!(distinct_words(" b a  b c "), vec!["b", "a", "c"]);
    }

    #[test]
    fn split_tag_arguments_handles_empty_and_repeated_tags() {
        assert!(split_tag_arguments("").is_empty());
        assert_eq!(
            split_tag_arguments(" t/friends t/owesMoney t/friends"),
            vec!["friends", "owesMoney"]
        );
    }
}
