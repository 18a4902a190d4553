//! Contact record model: one person's stored data.

use crate::domain::{Birthday, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// A record is created with a name only; phone numbers and the birthday
/// are attached afterwards through explicit operations. Phones keep their
/// insertion order and duplicates are permitted. At most one birthday is
/// stored; setting a new one replaces the previous value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// Contact name, the unique key within an address book
    pub name: String,

    /// Phone numbers in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<PhoneNumber>,

    /// Optional birthday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a new record with the given name and no other data.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or
    /// consists only of whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` is not a 10-digit
    /// string; nothing is appended in that case.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// Remove the first phone entry equal to `value`.
    ///
    /// Returns whether a removal occurred; no match is not an error.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == value) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone entry equal to `old_value` with `new_value`.
    ///
    /// Returns `Ok(false)` without mutating when `old_value` is not present.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new_value` fails
    /// validation; the replacement does not occur.
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> Result<bool, ValidationError> {
        let pos = match self.phones.iter().position(|p| p.as_str() == old_value) {
            Some(pos) => pos,
            None => return Ok(false),
        };
        self.phones[pos] = PhoneNumber::new(new_value)?;
        Ok(true)
    }

    /// Find the first phone entry equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Parse and set the birthday, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if `raw` is not a valid
    /// `DD.MM.YYYY` date; the existing value is kept.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
