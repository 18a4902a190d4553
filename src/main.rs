//! Contact Assistant - Main entry point
//!
//! Loads the address book from disk, runs the interactive command loop,
//! and saves the book back on exit.

use anyhow::{Context, Result};
use contact_assistant::{repl, storage, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can act as the filter
    // fallback; config errors go straight to stderr
    let config = Config::from_env().context("failed to load configuration")?;

    // Initialize logging (stderr only to avoid polluting the dialog on stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "starting contact assistant with book at {}",
        config.storage_path.display()
    );

    // Load once at startup; a missing file is a fresh empty book
    let mut book = match storage::load(&config.storage_path) {
        Ok(book) => book,
        Err(e) => {
            error!("failed to load address book: {}", e);
            return Err(e).with_context(|| {
                format!(
                    "could not read address book from {}",
                    config.storage_path.display()
                )
            });
        }
    };

    repl::run(&mut book)?;

    // Mandatory save; failure here is the one fatal I/O error
    if let Err(e) = storage::save(&config.storage_path, &book) {
        error!("failed to save address book: {}", e);
        return Err(e).with_context(|| {
            format!(
                "could not save address book to {}",
                config.storage_path.display()
            )
        });
    }

    info!("contact assistant shutdown complete");
    Ok(())
}
