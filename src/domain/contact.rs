use std::fmt;

use serde::{Deserialize, Serialize};

/// A name/phone pair. Neither field is validated; empty strings are allowed.
///
/// The on-disk field names are `Name` and `Phone`, matched case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Phone")]
    pub phone: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.phone)
    }
}
