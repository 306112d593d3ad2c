//! # Transaction Record
//!
//! The record shape shared by the store, the gateway, and ingestion.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat field map carried by a record.
///
/// Values are opaque pass-through data; the store never interprets them.
pub type Fields = Map<String, Value>;

/// A single transaction: a store-assigned integer id plus arbitrary flat
/// fields.
///
/// The `id` key never lives inside `fields`, so the flattened JSON form
/// carries exactly one `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    /// Build a record, discarding any client-supplied `id` field.
    pub fn new(id: u64, mut fields: Fields) -> Self {
        fields.remove("id");
        Self { id, fields }
    }

    /// Shallow merge: overlay every field present in the patch, leaving all
    /// other fields untouched. The record keeps its original `id` even when
    /// the patch carries one.
    pub fn merge(&mut self, patch: Fields) {
        for (key, value) in patch {
            if key == "id" {
                continue;
            }
            self.fields.insert(key, value);
        }
    }
}
