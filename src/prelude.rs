pub use crate::cli::run_app;
pub use crate::domain::Contact;
pub use crate::store::{ContactStore, MemStorage};
