//! Command handlers: thin glue between parsed commands and the book.
//!
//! Each handler translates its arguments into address book operations and
//! formats the result as a single line of text. All model errors are
//! caught here and rendered as user-facing messages; nothing below this
//! layer prints.

use crate::book::AddressBook;
use crate::command::Command;
use crate::error::{CommandError, CommandResult};
use crate::models::ContactRecord;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// Weekday rendering order for the birthdays report.
const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Execute a command against the book, rendering any error as its
/// single-line message.
pub fn execute(command: Command, args: &[String], book: &mut AddressBook) -> String {
    debug!(?command, ?args, "dispatching command");

    let result = match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(args, book),
        Command::Change => change_contact(args, book),
        Command::Phone => show_phone(args, book),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => Ok(birthdays_report(book, Local::now().date_naive())),
        Command::Exit => Ok("Good bye!".to_string()),
    };

    match result {
        Ok(message) => message,
        Err(err) => {
            warn!(?command, %err, "command failed");
            err.to_string()
        }
    }
}

/// `add <name> <phone>`: create the contact if needed, then attach the phone.
fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = match args {
        [name, phone, ..] => (name, phone),
        _ => return Err(CommandError::MissingArguments),
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            // Validate the phone before the record enters the book, so a
            // rejected phone leaves no half-created contact behind
            let mut record = ContactRecord::new(name.as_str())?;
            record.add_phone(phone)?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change <name> <old_phone> <new_phone>`: replace one phone in place.
fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, old_phone, new_phone) = match args {
        [name, old_phone, new_phone, ..] => (name, old_phone, new_phone),
        _ => return Err(CommandError::MissingArguments),
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;

    if record.edit_phone(old_phone, new_phone)? {
        Ok("Phone number updated.".to_string())
    } else {
        Ok("Old phone number not found.".to_string())
    }
}

/// `phone <name>`: semicolon-joined phone list.
fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::MissingArguments)?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;

    Ok(record
        .phones
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; "))
}

/// `all`: one line per record.
fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    book.records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`.
fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, date) = match args {
        [name, date, ..] => (name, date),
        _ => return Err(CommandError::MissingArguments),
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;

    record.set_birthday(date)?;
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>`.
fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = args.first().ok_or(CommandError::MissingArguments)?;

    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;

    match &record.birthday {
        Some(birthday) => Ok(format!("{}'s birthday: {}", record.name, birthday)),
        None => Ok(format!("No birthday recorded for {}.", record.name)),
    }
}

/// `birthdays`: weekday-grouped report for the week starting at `today`.
///
/// Groups render in Monday-to-Sunday order regardless of date order within
/// the window.
pub fn birthdays_report(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No birthdays in the next 7 days.".to_string();
    }

    WEEKDAYS
        .iter()
        .filter_map(|day| {
            upcoming
                .get(*day)
                .map(|names| format!("{}: {}", day, names.join(", ")))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
