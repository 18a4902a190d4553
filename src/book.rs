//! The address book collection and the upcoming-birthday report.

use crate::models::ContactRecord;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::{BTreeMap, HashMap};

/// Length of the congratulation window, in days including today.
const WINDOW_DAYS: i64 = 7;

/// The full collection of contact records, keyed by name.
///
/// The book owns its records exclusively. Keys are unique: adding a record
/// under an existing name silently replaces the previous record, with no
/// merging. Records are kept sorted by name, which makes listing and the
/// birthday report deterministic; no semantic meaning is attached to the
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same name.
    pub fn add_record(&mut self, record: ContactRecord) {
        self.records.insert(record.name.clone(), record);
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Exact-match lookup by name, mutable.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record with the given name.
    ///
    /// Returns whether a removal occurred.
    pub fn delete(&mut self, name: &str) -> bool {
        self.records.remove(name).is_some()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records, sorted by name.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    /// Compute which contacts should be congratulated in the week starting
    /// at `today`, grouped by the weekday of the congratulation date.
    ///
    /// For each record with a birthday, the birthday's month/day is taken
    /// in `today`'s year (or the next year if that occurrence already
    /// passed). An occurrence on Saturday or Sunday shifts forward to the
    /// following Monday. A record is included iff the shifted date falls
    /// within `today ..= today + 6`.
    ///
    /// Keys are full English weekday names ("Monday"); each group lists
    /// contact names in book iteration order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> HashMap<String, Vec<String>> {
        let window_end = today + Duration::days(WINDOW_DAYS - 1);
        let mut upcoming: HashMap<String, Vec<String>> = HashMap::new();

        for record in self.records.values() {
            let birthday = match &record.birthday {
                Some(birthday) => birthday.date(),
                None => continue,
            };

            let mut occurrence = occurrence_in_year(birthday, today.year());
            if occurrence < today {
                occurrence = occurrence_in_year(birthday, today.year() + 1);
            }

            let congratulation = match occurrence.weekday() {
                Weekday::Sat => occurrence + Duration::days(2),
                Weekday::Sun => occurrence + Duration::days(1),
                _ => occurrence,
            };

            if today <= congratulation && congratulation <= window_end {
                upcoming
                    .entry(congratulation.format("%A").to_string())
                    .or_default()
                    .push(record.name.clone());
            }
        }

        upcoming
    }
}

/// The birthday's occurrence in the given year.
///
/// A Feb 29 birthday clamps to Feb 28 when `year` is not a leap year.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .expect("Feb 28 exists in every year")
}
