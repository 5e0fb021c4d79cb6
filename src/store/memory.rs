use super::*;

/// Keeps the last saved sequence in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemStorage {
    pub data: Vec<Contact>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_contacts(data: Vec<Contact>) -> Self {
        Self { data }
    }
}

impl Storage for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<(), AppError> {
        self.data = contacts.to_vec();
        Ok(())
    }
}
