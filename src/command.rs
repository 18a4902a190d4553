//! Input tokenization and the command vocabulary.

use std::str::FromStr;

/// Commands the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Greet the user
    Hello,
    /// `add <name> <phone>`
    Add,
    /// `change <name> <old_phone> <new_phone>`
    Change,
    /// `phone <name>`
    Phone,
    /// List every contact
    All,
    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday,
    /// `show-birthday <name>`
    ShowBirthday,
    /// Upcoming birthdays for the next 7 days
    Birthdays,
    /// Save and leave (`close` or `exit`)
    Exit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(format!("unknown command: {}", s)),
        }
    }
}

/// Split a raw input line into a lowercased command word and its arguments.
///
/// Arguments keep their original casing; an empty line yields an empty
/// command word.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    let args = parts.map(str::to_string).collect();
    (command, args)
}
