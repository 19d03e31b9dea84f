mod common;

use addressbook_core::{Command, DisplayIndex, FindTagCommand, ValidationError};
use common::TypicalPersons;

fn find(keywords: &[&str]) -> (String, Vec<addressbook_core::ContactRecord>) {
    let typical = TypicalPersons::new();
    let mut store = typical.address_book();
    let before = store.clone();

    let result = FindTagCommand::new(keywords)
        .unwrap()
        .execute(&mut store, &DisplayIndex::empty());

    assert_eq!(store, before, "findtag must not mutate the store");
    (result.feedback, result.relevant_records.unwrap_or_default())
}

#[test]
fn exact_tag_matches_single_person() {
    let typical = TypicalPersons::new();
    let (feedback, found) = find(&["Test1"]);
    assert_eq!(feedback, "1 persons listed!");
    assert_eq!(found, vec![typical.amy]);
}

#[test]
fn matching_is_case_sensitive_and_whole_tag() {
    for keyword in ["test1", "est1", "Test"] {
        let (feedback, found) = find(&[keyword]);
        assert_eq!(feedback, "0 persons listed!", "keyword {keyword}");
        assert!(found.is_empty());
    }
}

#[test]
fn multiple_keywords_match_any_tag_in_store_order() {
    let typical = TypicalPersons::new();
    let (feedback, found) = find(&["Test5", "Test1", "Test2", "Test3"]);
    assert_eq!(feedback, "3 persons listed!");
    assert_eq!(found, typical.all());
}

#[test]
fn record_with_two_matching_tags_is_listed_once() {
    let typical = TypicalPersons::new();
    let (_, found) = find(&["Test3", "Test5"]);
    assert_eq!(found, vec![typical.candy]);
}

#[test]
fn repeated_keyword_still_matches() {
    let typical = TypicalPersons::new();
    let (feedback, found) = find(&["Test2", "Test2"]);
    assert_eq!(feedback, "1 persons listed!");
    assert_eq!(found, vec![typical.bill]);
}

#[test]
fn non_tag_fields_are_never_searched() {
    let (_, by_address) = find(&["Clementi"]);
    let (_, by_name) = find(&["Amy"]);
    assert!(by_address.is_empty());
    assert!(by_name.is_empty());
}

#[test]
fn empty_store_lists_nothing() {
    let mut store = addressbook_core::RecordStore::new();
    let result = FindTagCommand::new(["Test1"])
        .unwrap()
        .execute(&mut store, &DisplayIndex::empty());
    assert_eq!(result.feedback, "0 persons listed!");
    assert_eq!(result.relevant_records, Some(Vec::new()));
}

#[test]
fn construction_validates_keywords() {
    assert_eq!(
        FindTagCommand::new(["owes money"]).unwrap_err(),
        ValidationError::InvalidTag("owes money".to_string())
    );
    assert_eq!(
        FindTagCommand::new(Vec::<String>::new()).unwrap_err(),
        ValidationError::EmptyTagSet
    );
    let command = FindTagCommand::new(["b", "a", "b"]).unwrap();
    assert_eq!(command.keywords(), ["b".to_string(), "a".to_string()]);
}
