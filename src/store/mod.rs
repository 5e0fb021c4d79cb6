pub mod json;
pub mod memory;

use std::path::Path;

use log::debug;

use crate::domain::Contact;
use crate::errors::AppError;

pub use json::JsonStorage;
pub use memory::MemStorage;

/// Default backing file, relative to the working directory.
pub const STORAGE_PATH: &str = "contacts.json";

/// A medium the full contact sequence is read from and written to.
pub trait Storage {
    /// Read every persisted contact, in stored order. A medium holding
    /// nothing yet yields an empty vec.
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    /// Replace whatever is persisted with `contacts`.
    fn save(&mut self, contacts: &[Contact]) -> Result<(), AppError>;
}

/// Ordered in-memory contacts mirrored to a [`Storage`] after every mutation.
pub struct ContactStore<S: Storage = JsonStorage> {
    mem: Vec<Contact>,
    storage: S,
}

impl ContactStore<JsonStorage> {
    /// Build a store over the JSON file at `path` and load its contents.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let mut store = ContactStore::new(JsonStorage::new(path));
        store.load()?;
        Ok(store)
    }
}

impl<S: Storage> ContactStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            mem: Vec::new(),
            storage,
        }
    }

    /// Append the persisted contacts to the in-memory sequence.
    ///
    /// Calling this twice appends the persisted contacts twice. On a parse
    /// error the in-memory sequence is left as it was.
    pub fn load(&mut self) -> Result<(), AppError> {
        let loaded = self.storage.load()?;
        debug!("loaded {} contacts", loaded.len());

        self.mem.extend(loaded);
        Ok(())
    }

    pub fn save(&mut self) -> Result<(), AppError> {
        self.storage.save(&self.mem)?;
        debug!("saved {} contacts", self.mem.len());
        Ok(())
    }

    /// Owned copy of the contacts in insertion order.
    pub fn list(&self) -> Vec<Contact> {
        self.mem.clone()
    }

    /// Append `contact` and persist the whole sequence before returning.
    ///
    /// If saving fails the contact stays in memory and the error is returned.
    pub fn add(&mut self, contact: Contact) -> Result<(), AppError> {
        self.mem.push(contact);
        self.save()
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }
}
