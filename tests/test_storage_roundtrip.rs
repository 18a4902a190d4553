//! End-to-end tests for saving and loading the address book file.

use contact_assistant::{storage, AddressBook, ContactRecord};

fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> ContactRecord {
    let mut record = ContactRecord::new(name).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(date) = birthday {
        record.set_birthday(date).unwrap();
    }
    record
}

#[test]
fn test_empty_book_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    storage::save(&path, &AddressBook::new()).unwrap();
    let loaded = storage::load(&path).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_mixed_book_round_trips_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    let mut book = AddressBook::new();
    book.add_record(record("NoPhones", &[], Some("01.01.1990")));
    book.add_record(record("OnePhone", &["0501234567"], None));
    book.add_record(record(
        "TwoPhones",
        &["0667654321", "0501234567"],
        Some("29.02.2000"),
    ));

    storage::save(&path, &book).unwrap();
    let loaded = storage::load(&path).unwrap();

    // Names, phone order, and birthdays reconstruct exactly
    assert_eq!(loaded, book);
    let two = loaded.find("TwoPhones").unwrap();
    assert_eq!(two.phones[0].as_str(), "0667654321");
    assert_eq!(two.phones[1].as_str(), "0501234567");
    assert_eq!(two.birthday.unwrap().to_string(), "29.02.2000");
}

#[test]
fn test_duplicate_phones_survive_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    let mut book = AddressBook::new();
    book.add_record(record("Dup", &["0501234567", "0501234567"], None));

    storage::save(&path, &book).unwrap();
    let loaded = storage::load(&path).unwrap();
    assert_eq!(loaded.find("Dup").unwrap().phones.len(), 2);
}

#[test]
fn test_save_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    let mut book = AddressBook::new();
    book.add_record(record("John", &["0501234567"], None));
    storage::save(&path, &book).unwrap();

    book.delete("John");
    book.add_record(record("Anna", &["1234567890"], None));
    storage::save(&path, &book).unwrap();

    let loaded = storage::load(&path).unwrap();
    assert!(loaded.find("John").is_none());
    assert!(loaded.find("Anna").is_some());
    assert_eq!(loaded.len(), 1);
}

#[test]
fn test_missing_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let loaded = storage::load(&path).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_file_is_human_readable_versioned_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    let mut book = AddressBook::new();
    book.add_record(record("John", &["0501234567"], Some("24.08.1991")));
    storage::save(&path, &book).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["contacts"][0]["name"], "John");
    assert_eq!(json["contacts"][0]["phones"][0], "0501234567");
    assert_eq!(json["contacts"][0]["birthday"], "24.08.1991");
}
