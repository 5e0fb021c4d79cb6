use super::*;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

/// Mirrors the contact sequence to a pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            debug!("{} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // A literal `null` reads as no contacts; an empty file is an error
        let contacts: Option<Vec<Contact>> = serde_json::from_str(&data)?;
        Ok(contacts.unwrap_or_default())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), AppError> {
        let json_contacts = serde_json::to_string_pretty(contacts)?;

        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(json_contacts.as_bytes())?;
        debug!("wrote {}", self.path.display());
        Ok(())
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
