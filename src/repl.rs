//! The interactive prompt loop.
//!
//! Reads commands from stdin and prints results to stdout. Logs go to
//! stderr only, so the dialog stays clean.

use crate::book::AddressBook;
use crate::command::{parse_input, Command};
use crate::handlers;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the prompt loop until the user exits or stdin closes.
///
/// Persistence is the caller's job: the loop only mutates the book and
/// returns, and the caller saves it afterwards on every exit path.
pub fn run(book: &mut AddressBook) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    writeln!(stdout, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(stdout, "Enter a command: ")?;
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF: treat like an exit so the book still gets saved
            debug!("stdin closed, leaving the command loop");
            writeln!(stdout)?;
            break;
        }

        let (command, args) = parse_input(&line);
        match command.parse::<Command>() {
            Ok(command) => {
                let output = handlers::execute(command, &args, book);
                writeln!(stdout, "{}", output)?;
                if command == Command::Exit {
                    break;
                }
            }
            Err(_) => {
                writeln!(stdout, "Invalid command.")?;
            }
        }
    }

    Ok(())
}
