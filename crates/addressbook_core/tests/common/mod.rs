#![allow(dead_code)]

use addressbook_core::{Address, ContactRecord, Email, Name, Phone, RecordStore, TagSet};

pub fn person(name: &str, phone: &str, email: &str, address: &str, tags: &[&str]) -> ContactRecord {
    ContactRecord::new(
        Name::new(name).unwrap(),
        Phone::new(phone, false).unwrap(),
        Email::new(email, false).unwrap(),
        Address::new(address, false).unwrap(),
        TagSet::from_names(tags).unwrap(),
    )
}

pub fn private_person(name: &str, phone: &str, email: &str, address: &str, tags: &[&str]) -> ContactRecord {
    ContactRecord::new(
        Name::new(name).unwrap(),
        Phone::new(phone, true).unwrap(),
        Email::new(email, true).unwrap(),
        Address::new(address, true).unwrap(),
        TagSet::from_names(tags).unwrap(),
    )
}

pub fn store_of(records: &[ContactRecord]) -> RecordStore {
    RecordStore::from_records(records.iter().cloned()).unwrap()
}

pub fn tags(names: &[&str]) -> TagSet {
    TagSet::from_names(names).unwrap()
}

/// Fixture used by the tag-search scenarios.
pub struct TypicalPersons {
    pub amy: ContactRecord,
    pub bill: ContactRecord,
    pub candy: ContactRecord,
}

impl TypicalPersons {
    pub fn new() -> Self {
        Self {
            amy: person("Amy Buck", "91119111", "ab@gmail.com", "1 Clementi Road", &["Test1"]),
            bill: person("Bill Clint", "92229222", "bc@gmail.com", "2 Clementi Road", &["Test2"]),
            candy: person(
                "Candy Destiny",
                "93339333",
                "cd@gmail.com",
                "3 Clementi Road",
                &["Test3", "Test5"],
            ),
        }
    }

    pub fn all(&self) -> Vec<ContactRecord> {
        vec![self.amy.clone(), self.bill.clone(), self.candy.clone()]
    }

    pub fn address_book(&self) -> RecordStore {
        store_of(&self.all())
    }
}

/// Fixture used by the index-targeted tag command tests.
pub struct DoeFamily {
    pub calvin: ContactRecord,
    pub dan: ContactRecord,
    pub sam: ContactRecord,
    pub david: ContactRecord,
}

impl DoeFamily {
    pub fn new() -> Self {
        Self {
            calvin: person("Calvin Tan", "93844567", "john@doe.com", "395C Ben Road", &[]),
            dan: private_person("Dan Doe", "1234556", "ss@tt.com", "NUS", &["Test"]),
            sam: person("Sam Doe", "63345566", "sam@doe.com", "55G Abc Road", &[]),
            david: person(
                "David Grant",
                "61121122",
                "david@grant.com",
                "44H Define Road",
                &["friend"],
            ),
        }
    }

    pub fn address_book(&self) -> RecordStore {
        store_of(&[
            self.calvin.clone(),
            self.dan.clone(),
            self.david.clone(),
            self.sam.clone(),
        ])
    }

    pub fn everyone(&self) -> Vec<ContactRecord> {
        vec![
            self.calvin.clone(),
            self.dan.clone(),
            self.david.clone(),
            self.sam.clone(),
        ]
    }

    pub fn surname_doe(&self) -> Vec<ContactRecord> {
        vec![self.calvin.clone(), self.dan.clone(), self.sam.clone()]
    }
}
