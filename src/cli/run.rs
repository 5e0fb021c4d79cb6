use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{info, warn};

use crate::cli::command::{Cli, Command};
use crate::domain::Contact;
use crate::errors::AppError;
use crate::store::{ContactStore, STORAGE_PATH, Storage};

pub fn run_app() -> Result<(), AppError> {
    let _ = Cli::parse();

    let mut store = ContactStore::open(STORAGE_PATH)?;
    info!("using {STORAGE_PATH} with {} contacts", store.len());

    let stdin = io::stdin();
    run_menu(&mut store, stdin.lock(), io::stdout().lock())
}

/// Drive the menu until the user exits or input runs out.
///
/// Invalid choices are reported and the loop continues; storage errors are
/// returned to the caller.
pub fn run_menu<S, R, W>(
    store: &mut ContactStore<S>,
    mut input: R,
    mut output: W,
) -> Result<(), AppError>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    loop {
        show_menu(&mut output)?;

        let Some(choice) = get_input(&mut input)? else {
            writeln!(output)?;
            return Ok(());
        };

        match Command::parse(&choice) {
            Ok(Command::ListContacts) => list_contacts(store, &mut output)?,
            Ok(Command::CreateContact) => {
                if !create_contact(store, &mut input, &mut output)? {
                    writeln!(output)?;
                    return Ok(());
                }
            }
            Ok(Command::Exit) => {
                writeln!(output, "\nBye!")?;
                return Ok(());
            }
            Err(err) => {
                warn!("{err}");
                writeln!(output, "{err}, please try again.")?;
            }
        }
    }
}

fn show_menu<W: Write>(output: &mut W) -> Result<(), AppError> {
    writeln!(output, "\n")?;
    writeln!(output, "1. List Contacts")?;
    writeln!(output, "2. Create Contact")?;
    writeln!(output, "3. Exit")?;
    prompt(output, "> ")
}

fn list_contacts<S: Storage, W: Write>(
    store: &ContactStore<S>,
    output: &mut W,
) -> Result<(), AppError> {
    let contacts = store.list();

    if contacts.is_empty() {
        writeln!(output, "No contact in contact list!")?;
        return Ok(());
    }

    writeln!(output, "\nContacts:")?;
    for contact in &contacts {
        writeln!(output, "- {contact}")?;
    }
    Ok(())
}

/// Returns `false` when input ended before both fields were read.
fn create_contact<S, R, W>(
    store: &mut ContactStore<S>,
    input: &mut R,
    output: &mut W,
) -> Result<bool, AppError>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    prompt(output, "Enter contact name: ")?;
    let Some(name) = get_input(input)? else {
        return Ok(false);
    };

    prompt(output, "Enter contact number: ")?;
    let Some(phone) = get_input(input)? else {
        return Ok(false);
    };

    store.add(Contact::new(name, phone))?;

    writeln!(output, "Contact added successfully!")?;
    Ok(true)
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<(), AppError> {
    write!(output, "{text}")?;
    output.flush()?;
    Ok(())
}

/// One line without its line terminator, or `None` at end of input.
/// Bytes that are not UTF-8 are replaced rather than rejected.
fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
