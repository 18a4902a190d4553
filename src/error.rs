//! Error types for the Contact Assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a user command.
///
/// Every variant renders as the single-line message shown to the user;
/// the core model never prints anything itself.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command was given fewer arguments than it needs
    #[error("Enter all required arguments.")]
    MissingArguments,

    /// Lookup of a contact name that is not in the book
    #[error("Contact not found.")]
    ContactNotFound(String),

    /// A field value failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading or saving the address book file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("failed to access address book file: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but does not contain a valid book document
    #[error("address book file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The file was written by a newer format revision
    #[error("unsupported address book format version {found} (this build reads up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::MissingArguments;
        assert_eq!(err.to_string(), "Enter all required arguments.");

        let err = CommandError::ContactNotFound("John".to_string());
        assert_eq!(err.to_string(), "Contact not found.");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_PATH".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_PATH: Cannot be empty"
        );
    }

    #[test]
    fn test_validation_error_passes_through() {
        let err = CommandError::from(ValidationError::InvalidPhone("123".to_string()));
        assert_eq!(err.to_string(), "Phone number must have exactly 10 digits.");

        let err = CommandError::from(ValidationError::InvalidDate("x".to_string()));
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn test_storage_error_version() {
        let err = StorageError::UnsupportedVersion {
            found: 9,
            supported: 1,
        };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains('1'));
    }
}
