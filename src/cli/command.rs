use clap::Parser;

use crate::errors::AppError;

/// Takes no arguments; contacts live in `contacts.json` in the working directory.
#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {}

/// Menu entries, in the order they are shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ListContacts,
    CreateContact,
    Exit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim() {
            "1" => Ok(Command::ListContacts),
            "2" => Ok(Command::CreateContact),
            "3" => Ok(Command::Exit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_choices() -> Result<(), AppError> {
        assert_eq!(Command::parse("1")?, Command::ListContacts);
        assert_eq!(Command::parse(" 2 ")?, Command::CreateContact);
        assert_eq!(Command::parse("3")?, Command::Exit);
        Ok(())
    }

    #[test]
    fn rejects_unknown_choice() {
        let err = Command::parse("list").unwrap_err();

        assert!(matches!(err, AppError::ParseCommand(ref cmd) if cmd == "list"));
    }

    #[test]
    fn accepts_no_arguments() {
        assert!(Cli::try_parse_from(["contact-book"]).is_ok());
    }

    #[test]
    fn rejects_file_flag() {
        let parsed = Cli::try_parse_from(["contact-book", "--file", "/tmp/book.json"]);

        assert!(parsed.is_err());
    }
}
