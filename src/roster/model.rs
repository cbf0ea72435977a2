use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

fn age_is_zero(age: &u64) -> bool {
    *age == 0
}

/// A single roster entry. Every field is optional on the wire: absent
/// fields decode to their zero value, and zero values are omitted when
/// serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(default, skip_serializing_if = "age_is_zero")]
    pub age: u64,
}

impl Record {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: u64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }

    /// Decode a single record from a JSON object string.
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(RosterError::InvalidItem)
    }
}
