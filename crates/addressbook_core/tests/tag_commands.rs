mod common;

use addressbook_core::{
    AddTagCommand, Command, ContactRecord, DisplayIndex, RecordStore, TagSet, UpdateTagCommand,
    ValidationError, DISPLAYED_INDEX_OFFSET,
};
use common::{person, store_of, tags, DoeFamily};

const INVALID_INDEX: &str = "The person index provided is invalid";
const NOT_IN_BOOK: &str = "Person could not be found in address book";
const DUPLICATE: &str = "This person already exists in the address book";

#[derive(Clone, Copy)]
enum Kind {
    AddTag,
    UpdateTag,
}

const BOTH: [Kind; 2] = [Kind::AddTag, Kind::UpdateTag];

fn build(kind: Kind, index: i64, tag_names: &[&str]) -> Box<dyn Command> {
    match kind {
        Kind::AddTag => Box::new(AddTagCommand::new(index, tag_names).unwrap()),
        Kind::UpdateTag => Box::new(UpdateTagCommand::new(index, tag_names).unwrap()),
    }
}

fn success_message(kind: Kind, updated: &ContactRecord) -> String {
    match kind {
        Kind::AddTag => AddTagCommand::success_message(updated),
        Kind::UpdateTag => UpdateTagCommand::success_message(updated),
    }
}

/// Executes against a clone of `store` and checks the message and that the
/// store is unchanged.
fn assert_fails_without_mutation(
    kind: Kind,
    index: i64,
    store: &RecordStore,
    shown: &[ContactRecord],
    expected_message: &str,
) {
    let mut actual = store.clone();
    let result = build(kind, index, &["single"]).execute(&mut actual, &DisplayIndex::new(shown.to_vec()));

    assert_eq!(result.feedback, expected_message);
    assert_eq!(result.relevant_records, None);
    assert_eq!(actual.records(), store.records());
    assert_eq!(actual.revision(), store.revision());
}

/// Executes against a clone of `store` and compares with an explicit
/// remove-then-add on another clone.
fn assert_merge_successful(
    kind: Kind,
    index: i64,
    tag_names: &[&str],
    store: &RecordStore,
    shown: &[ContactRecord],
) {
    let position = usize::try_from(index - DISPLAYED_INDEX_OFFSET).unwrap();
    let target = &shown[position];
    let mut merged = target.tags().clone();
    merged.merge_from(&TagSet::from_names(tag_names).unwrap());
    let updated = target.with_tags(merged);

    let mut expected = store.clone();
    expected.remove(target).unwrap();
    expected.add(updated.clone()).unwrap();

    let mut actual = store.clone();
    let result = build(kind, index, tag_names).execute(&mut actual, &DisplayIndex::new(shown.to_vec()));

    assert_eq!(result.feedback, success_message(kind, &updated));
    assert_eq!(actual.records(), expected.records());
    assert_eq!(actual.len(), store.len());
}

#[test]
fn execute_empty_address_book_returns_person_not_found() {
    let family = DoeFamily::new();
    for kind in BOTH {
        assert_fails_without_mutation(kind, 1, &RecordStore::new(), &family.everyone(), NOT_IN_BOOK);
    }
}

#[test]
fn execute_no_person_displayed_returns_invalid_index() {
    let family = DoeFamily::new();
    for kind in BOTH {
        assert_fails_without_mutation(kind, 1, &family.address_book(), &[], INVALID_INDEX);
    }
}

#[test]
fn execute_target_not_in_address_book_returns_person_not_found() {
    let family = DoeFamily::new();
    let stranger = person("Not In Book", "63331444", "notin@book.com", "156D Grant Road", &[]);
    for kind in BOTH {
        assert_fails_without_mutation(kind, 1, &family.address_book(), &[stranger.clone()], NOT_IN_BOOK);
    }
}

#[test]
fn execute_out_of_range_index_returns_invalid_index() {
    let family = DoeFamily::new();
    let everyone = family.everyone();
    let too_large = everyone.len() as i64 + 1;
    for kind in BOTH {
        for index in [0, -1, too_large, i64::MAX, i64::MIN] {
            assert_fails_without_mutation(kind, index, &family.address_book(), &everyone, INVALID_INDEX);
        }
    }
}

#[test]
fn execute_valid_index_single_tag_updates_person() {
    let family = DoeFamily::new();
    let shown = family.surname_doe();
    let middle = shown.len() as i64 / 2 + 1;
    for kind in BOTH {
        for index in [1, shown.len() as i64, middle] {
            assert_merge_successful(kind, index, &["single"], &family.address_book(), &shown);
        }
    }
}

#[test]
fn execute_valid_index_multiple_tags_updates_person() {
    let family = DoeFamily::new();
    let shown = family.surname_doe();
    let many = ["testTag1", "testTag2", "testTag3", "testTag4", "testTag5"];
    for kind in BOTH {
        for index in [1, shown.len() as i64] {
            assert_merge_successful(kind, index, &many, &family.address_book(), &shown);
        }
    }
}

#[test]
fn add_tag_to_dan_replaces_dan_and_keeps_everyone_else() {
    let family = DoeFamily::new();
    let mut store = store_of(&[family.dan.clone(), family.sam.clone()]);
    let shown = DisplayIndex::new(vec![family.dan.clone()]);

    let result = AddTagCommand::new(1, ["friends"])
        .unwrap()
        .execute(&mut store, &shown);

    let updated_dan = family.dan.with_tags(tags(&["Test", "friends"]));
    assert_eq!(
        result.feedback,
        "Add tag to: Dan Doe Phone: (private) 1234556 Email: (private) ss@tt.com \
Address: (private) NUS Tags: [Test][friends]"
    );
    assert_eq!(store.len(), 2);
    assert!(store.contains(&updated_dan));
    assert!(!store.contains(&family.dan));
    assert!(store.contains(&family.sam));
}

#[test]
fn tag_merge_colliding_with_existing_record_keeps_original() {
    let plain = person("Amy Buck", "91119111", "ab@gmail.com", "1 Clementi Road", &[]);
    // Merging "single" into `plain` produces a record already stored.
    let tagged = plain.with_tags(tags(&["single"]));
    let store = store_of(&[plain.clone(), tagged]);
    for kind in BOTH {
        assert_fails_without_mutation(kind, 1, &store, &[plain.clone()], DUPLICATE);
    }
}

#[test]
fn merging_already_present_tags_still_succeeds() {
    let family = DoeFamily::new();
    assert_merge_successful(Kind::AddTag, 1, &["friend"], &family.address_book(), &[family.david.clone()]);
}

#[test]
fn update_tag_is_additive_not_a_replacement() {
    // The command is named "update" but merges; existing tags survive.
    let family = DoeFamily::new();
    let mut store = family.address_book();
    let shown = DisplayIndex::new(vec![family.david.clone()]);

    UpdateTagCommand::new(1, ["colleague"])
        .unwrap()
        .execute(&mut store, &shown);

    let updated = family.david.with_tags(tags(&["friend", "colleague"]));
    assert!(store.contains(&updated));
}

#[test]
fn construction_rejects_invalid_duplicate_or_missing_tags() {
    assert_eq!(
        AddTagCommand::new(1, ["not valid"]).unwrap_err(),
        ValidationError::InvalidTag("not valid".to_string())
    );
    assert_eq!(
        UpdateTagCommand::new(1, ["a", " a"]).unwrap_err(),
        ValidationError::DuplicateTag("a".to_string())
    );
    assert_eq!(
        AddTagCommand::new(1, Vec::<String>::new()).unwrap_err(),
        ValidationError::EmptyTagSet
    );
}

#[test]
fn resolved_record_is_snapshot_position_minus_offset() {
    let family = DoeFamily::new();
    let shown = DisplayIndex::new(family.everyone());
    for (position, record) in family.everyone().iter().enumerate() {
        let visible = position as i64 + DISPLAYED_INDEX_OFFSET;
        assert_eq!(shown.resolve(visible).unwrap(), record);
    }
}
