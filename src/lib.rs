//! Contact Assistant - a command-line address book with birthday reminders.
//!
//! This library implements the core of an interactive assistant bot that
//! stores contacts (name, phone numbers, optional birthday), persists them
//! to a local JSON file between runs, and answers simple textual commands.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (phone numbers, birthdays)
//! - **models**: the contact record aggregate
//! - **book**: the address book collection and the upcoming-birthday report
//! - **storage**: versioned JSON persistence of the whole book
//! - **command**: input tokenization and the command vocabulary
//! - **handlers**: command execution against the book
//! - **repl**: the interactive prompt loop
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

// Re-export commonly used types
pub mod book;
pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repl;
pub mod storage;

pub use book::AddressBook;
pub use command::{parse_input, Command};
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::ContactRecord;
