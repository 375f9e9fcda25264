//! Save record handed to the persistence sink.
//!
//! The record is a complete copy of the store at the moment it is taken. The
//! JSON shape (`{"signatureFields": [...]}`) is what downstream signing
//! workflows consume.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use serde::{Deserialize, Serialize};

use crate::doc::{PlacedItem, PlacementStore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    #[serde(rename = "signatureFields")]
    pub signature_fields: Vec<PlacedItem>,
}

impl SaveRecord {
    #[must_use]
    pub fn from_store(store: &PlacementStore) -> Self {
        Self { signature_fields: store.snapshot() }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialization fails.
    /// Non-finite coordinates do not fail; `serde_json` writes them as `null`.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
