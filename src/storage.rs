//! Persistence of the address book as a versioned JSON file.
//!
//! The whole book is written in one shot and read back in one shot; there
//! is no incremental persistence. A missing file on load is not an error
//! and yields a fresh empty book.

use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::models::ContactRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Current revision of the on-disk document.
pub const FORMAT_VERSION: u32 = 1;

/// The on-disk shape of the address book.
#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    version: u32,
    contacts: Vec<ContactRecord>,
}

/// Load the address book from `path`.
///
/// A missing file yields an empty book. Any other failure (unreadable
/// file, malformed JSON, a document written by a newer revision) is a
/// `StorageError`.
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    if !path.exists() {
        info!("no address book at {}, starting empty", path.display());
        return Ok(AddressBook::new());
    }

    let json = fs::read_to_string(path)?;
    let file: BookFile = serde_json::from_str(&json)?;

    if file.version > FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: file.version,
            supported: FORMAT_VERSION,
        });
    }

    let mut book = AddressBook::new();
    for record in file.contacts {
        book.add_record(record);
    }

    info!(
        "loaded {} contacts from {}",
        book.len(),
        path.display()
    );
    Ok(book)
}

/// Save the whole address book to `path`.
///
/// The document is written to a temporary sibling file and renamed into
/// place, so an interrupted save never truncates the previous good file.
pub fn save(path: &Path, book: &AddressBook) -> StorageResult<()> {
    let file = BookFile {
        version: FORMAT_VERSION,
        contacts: book.records().cloned().collect(),
    };
    let json = serde_json::to_string_pretty(&file)?;

    atomic_write(path, json)?;
    debug!("saved {} contacts to {}", book.len(), path.display());
    Ok(())
}

/// Atomic write: write to a .tmp file then rename.
fn atomic_write(path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)
}
